use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod host;
mod catalog;
mod search;
mod trail;
mod data {
    pub mod gallery;
    pub mod services;
    pub mod destinations;
}
mod components {
    pub mod call_to_action;
    pub mod footer;
    pub mod header;
    pub mod layout;
    pub mod motion;
    pub mod pointer_trail;
    pub mod search_form;
    pub mod section_divider;
    pub mod watermarks;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod gallery;
    pub mod destinations;
}

use components::layout::Layout;
use pages::{
    home::Home,
    services::Services,
    gallery::Gallery,
    destinations::Destinations,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/gallery")]
    Gallery,
    #[at("/destinations")]
    Destinations,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::Destinations => {
            info!("Rendering Destinations page");
            html! { <Destinations /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="page-hero not-found">
                    <div class="container page-hero-content">
                        <h1>{"Lost your way?"}</h1>
                        <p>{"This page took a different flight."}</p>
                        <Link<Route> to={Route::Home} classes="button light">{"Back to Home"}</Link<Route>>
                    </div>
                </section>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
