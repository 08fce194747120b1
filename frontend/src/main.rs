use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod consent;
mod error;
mod store;
mod viewport;

mod animation {
    pub mod ease;
    pub mod hover;
    pub mod properties;
    pub mod section;
    pub mod step;
    pub mod text;
    pub mod timeline;
    pub mod trigger;
}
mod dom {
    pub mod frame;
    pub mod hooks;
    pub mod intersection;
    pub mod listener;
    pub mod resize;
    pub mod scroll;
    pub mod section;
    pub mod style;
}
mod components {
    pub mod button;
    pub mod comment_popup;
    pub mod cookie_banner;
    pub mod footer;
    pub mod navbar;
    pub mod split_text;
}
mod sections {
    pub mod cta;
    pub mod faq;
    pub mod features;
    pub mod hero;
    pub mod how_it_works;
    pub mod use_case;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use store::UiStoreProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <UiStoreProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </UiStoreProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
