use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::component::ContactFormView;
use crate::pages::landing::LANDING_CSS;
use crate::Route;

/// Bare form page for links shared by recruiters and in email signatures.
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <div class="landing-page contact-page">
            <style>{ LANDING_CSS }</style>
            <section class="contact-section">
                <ContactFormView heading="QuickHaulXpress Carrier Sign-Up" />
                <p class="back-link">
                    <Link<Route> to={Route::Home}>{"← Back to the homepage"}</Link<Route>>
                </p>
            </section>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="landing-page not-found">
            <style>{ LANDING_CSS }</style>
            <section>
                <h2>{"Page not found"}</h2>
                <p>
                    {"That lane doesn't exist. "}
                    <Link<Route> to={Route::Home}>{"Head back home"}</Link<Route>>
                </p>
            </section>
        </div>
    }
}
