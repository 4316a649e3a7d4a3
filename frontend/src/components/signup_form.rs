use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::SignupConfig;
use crate::utils::signup::{SignupFlow, SignupSource, SignupStatus, MESSAGE_DISPLAY_MS};

/// One page's sign-up state. Every form handed the same session shares the
/// typed email, the status line and the in-flight submission.
#[derive(Clone, PartialEq)]
pub struct SignupSession {
    pub email: UseStateHandle<String>,
    pub status: UseStateHandle<SignupStatus>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_signup_session(source: SignupSource) -> SignupSession {
    let email = use_state(String::new);
    let status = use_state(SignupStatus::default);
    let flow = use_memo(|_| SignupFlow::browser(SignupConfig::from_build_env()), ());
    // Dropping the handle cancels a pending clear, including on unmount.
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    let submit = {
        let email = email.clone();
        let status = status.clone();
        let clear_timer = clear_timer.clone();
        Callback::from(move |_: ()| {
            let Some(pending) = Rc::clone(&flow).submit(email.as_str(), source) else {
                return;
            };
            clear_timer.borrow_mut().take();
            status.set(SignupStatus::Submitting);

            let email = email.clone();
            let status = status.clone();
            let clear_timer = clear_timer.clone();
            spawn_local(async move {
                let (settled, clear_email) = SignupStatus::settle(pending.await);
                if clear_email {
                    email.set(String::new());
                }
                status.set(settled);
                let timeout = Timeout::new(MESSAGE_DISPLAY_MS, move || {
                    status.set(SignupStatus::Idle);
                });
                *clear_timer.borrow_mut() = Some(timeout);
            });
        })
    };

    SignupSession {
        email,
        status,
        submit,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SignupFormProps {
    pub session: SignupSession,
    #[prop_or_else(|| AttrValue::from("Get notified when we launch"))]
    pub prompt: AttrValue,
    #[prop_or_else(|| AttrValue::from("Get Notified"))]
    pub button_label: AttrValue,
}

/// Email capture box bound to a page's [`SignupSession`].
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let SignupSession {
        email,
        status,
        submit,
    } = props.session.clone();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onkeypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let onclick = submit.reform(|_: MouseEvent| ());

    let submitting = status.is_submitting();
    let label = if submitting {
        AttrValue::from("Submitting...")
    } else {
        props.button_label.clone()
    };

    html! {
        <div class="signup-form">
            <p class="signup-prompt">{props.prompt.clone()}</p>
            <div class="signup-row">
                <input
                    type="email"
                    class="signup-input"
                    placeholder="youremail@domain.com"
                    value={(*email).clone()}
                    disabled={submitting}
                    {oninput}
                    {onkeypress}
                />
                <button
                    class="signup-button"
                    disabled={submitting || email.trim().is_empty()}
                    {onclick}
                >
                    {label}
                </button>
            </div>
            {
                if let Some(result) = status.result() {
                    html! {
                        <p class={classes!("signup-message", if result.success { "success" } else { "failure" })}>
                            {result.message.clone()}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
