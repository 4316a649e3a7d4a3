use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod effects;
mod pages;
mod utils;

use pages::{landing::Landing, mobile::Mobile, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/mobile")]
    Mobile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Mobile => html! { <Mobile /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    if config::get_signup_url().is_none() {
        log::warn!("GOOGLE_SCRIPT_URL was not set at build time, sign-ups are disabled");
    }
    yew::Renderer::<App>::new().render();
}
