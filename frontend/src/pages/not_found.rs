use crate::effects::paw_trail::PawTrailOverlay;
use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <PawTrailOverlay />
            <h1 class="mono">{"404"}</h1>
            <p class="muted mono">{"cat: no such file or directory"}</p>
            <Link<Route> to={Route::Home} classes="mono">{"cd ~"}</Link<Route>>
        </div>
    }
}
