use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact {
    pub mod error;
    pub mod form;
    pub mod zip;
    pub mod submit;
    pub mod session;
    pub mod component;
}
mod components {
    pub mod sticky_bar;
}
mod pages {
    pub mod landing;
    pub mod contact;
}

use pages::{
    landing::Landing,
    contact::{ContactPage, NotFound},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BUSINESS_NAME}
                </Link<Route>>
                <div class="nav-right">
                    <a href="/#features" class="nav-link">{"Why Us"}</a>
                    <a href="/#freight" class="nav-link">{"Freight"}</a>
                    <a href="/#testimonials" class="nav-link">{"Drivers"}</a>
                    <Link<Route> to={Route::Contact} classes="nav-cta">
                        {"Get Loaded"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
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
