use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::sticky_bar::StickyContactBar;
use crate::config;
use crate::contact::component::ContactFormView;
use crate::contact::form::{EquipmentPreset, EquipmentType};
use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: "🚚",
        title: "Loads That Pay",
        body: "We negotiate every rate con so you run fewer cheap miles and more profitable lanes.",
    },
    Feature {
        icon: "📋",
        title: "Paperwork Handled",
        body: "Broker setup packets, rate confirmations and invoicing to your factoring company, done for you.",
    },
    Feature {
        icon: "🕐",
        title: "24/7 Dispatch",
        body: "A real dispatcher answers when you're stuck at a shipper at 2am. No call centers.",
    },
    Feature {
        icon: "🏠",
        title: "Home Time On Your Terms",
        body: "Tell us when you want to be home and we plan the week backwards from there.",
    },
];

/// One pricing-style card per equipment type we dispatch.
pub struct FreightCard {
    pub equipment: EquipmentType,
    pub lanes: &'static str,
    pub fee: &'static str,
    pub perks: &'static [&'static str],
}

pub static FREIGHT_CARDS: [FreightCard; 4] = [
    FreightCard {
        equipment: EquipmentType::DryVan,
        lanes: "Regional and OTR, all 48 states",
        fee: "5%",
        perks: &["No forced dispatch", "Weekly settlement reports", "Broker credit checks"],
    },
    FreightCard {
        equipment: EquipmentType::Reefer,
        lanes: "Produce season lanes out of CA, TX and FL",
        fee: "6%",
        perks: &["Temperature-controlled loads", "Lumper and detention tracking", "Team-friendly runs"],
    },
    FreightCard {
        equipment: EquipmentType::Flatbed,
        lanes: "Steel, lumber and building materials",
        fee: "7%",
        perks: &["Tarp pay negotiated", "Oversize permit help", "Step deck loads too"],
    },
    FreightCard {
        equipment: EquipmentType::BoxTruck,
        lanes: "Local and regional, 26ft straight trucks",
        fee: "8%",
        perks: &["Amazon Relay and LTL partials", "Same-day loads", "New authorities welcome"],
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    detail: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "My gross went up almost $2k a week in the first month. They actually fight for the rate.",
        name: "Marcus H.",
        detail: "Flatbed owner-operator, Illinois",
    },
    Testimonial {
        quote: "New authority, no broker history, and they still had me loaded the first day.",
        name: "Dana O.",
        detail: "Reefer, Texas",
    },
    Testimonial {
        quote: "I finally get home every other weekend. Dispatcher picks up every single time.",
        name: "Luis R.",
        detail: "Dry van, Georgia",
    },
];

#[derive(Properties, PartialEq)]
struct FreightCardViewProps {
    index: usize,
    on_select: Callback<EquipmentType>,
}

#[function_component(FreightCardView)]
fn freight_card_view(props: &FreightCardViewProps) -> Html {
    let card = &FREIGHT_CARDS[props.index];
    let onclick = {
        let on_select = props.on_select.clone();
        let equipment = card.equipment;
        Callback::from(move |_: MouseEvent| on_select.emit(equipment))
    };

    html! {
        <div class="freight-card">
            <h3>{ card.equipment.label() }</h3>
            <p class="freight-lanes">{ card.lanes }</p>
            <div class="freight-fee">
                <span class="fee-amount">{ card.fee }</span>
                <span class="fee-unit">{" of gross"}</span>
            </div>
            <ul>
                { for card.perks.iter().map(|perk| html! { <li>{ "✓ " }{ *perk }</li> }) }
            </ul>
            <a href="#contact" class="freight-cta" {onclick}>{"Get loads"}</a>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let selected_equipment = use_state(|| None::<EquipmentPreset>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_select = {
        let selected_equipment = selected_equipment.clone();
        Callback::from(move |equipment: EquipmentType| {
            log::info!("Freight card selected: {}", equipment.label());
            selected_equipment.set(Some(EquipmentPreset::next(*selected_equipment, equipment)));
        })
    };

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Keep Your Truck Loaded. We Handle the Dispatch."}</h1>
                    <p class="hero-subtitle">
                        {"Dedicated dispatchers for owner-operators and small fleets. Better rates, less deadhead, zero paperwork headaches."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta">{"Get Started Today"}</a>
                        <a href={format!("tel:{}", config::BUSINESS_PHONE)} class="hero-call">
                            {"Call "}{config::BUSINESS_PHONE_DISPLAY}
                        </a>
                    </div>
                </div>
            </header>

            <section class="features" id="features">
                <h2>{"Why Carriers Choose Us"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-block">
                            <span class="feature-icon">{ feature.icon }</span>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="freight-types" id="freight">
                <h2>{"Freight We Dispatch"}</h2>
                <p class="section-subtitle">{"Flat percentage, no contracts, cancel any time."}</p>
                <div class="freight-grid">
                    { for (0..FREIGHT_CARDS.len()).map(|index| html! {
                        <FreightCardView {index} on_select={on_select.clone()} />
                    }) }
                </div>
            </section>

            <section class="testimonials" id="testimonials">
                <h2>{"Drivers Talk"}</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <blockquote class="testimonial">
                            <p>{ format!("\u{201c}{}\u{201d}", t.quote) }</p>
                            <footer>
                                <strong>{ t.name }</strong>
                                <span>{ t.detail }</span>
                            </footer>
                        </blockquote>
                    }) }
                </div>
            </section>

            <section class="contact-section" id="contact">
                <ContactFormView preset_equipment={*selected_equipment} />
            </section>

            <footer class="site-footer">
                <p>{ format!("© {} {}. All rights reserved.", chrono::Local::now().year(), config::BUSINESS_NAME) }</p>
                <p>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contact form"}</Link<Route>>
                    {" · "}
                    <a href={format!("mailto:{}", config::BUSINESS_EMAIL)} class="footer-link">{ config::BUSINESS_EMAIL }</a>
                </p>
            </footer>

            <StickyContactBar />
        </div>
    }
}

pub const LANDING_CSS: &str = r#"
.top-nav { background: #0a1428; padding: 0.9rem 1.5rem; }
.nav-content { max-width: 1100px; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; }
.nav-logo { color: #fff; font-weight: 800; text-decoration: none; }
.nav-right { display: flex; gap: 1.25rem; align-items: center; }
.nav-link { color: rgba(255, 255, 255, 0.85); text-decoration: none; }
.nav-cta { color: #f28c28; font-weight: 700; text-decoration: none; }
.landing-page { font-family: system-ui, sans-serif; color: #1c2430; padding-bottom: 4rem; }
.hero {
    min-height: 70vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: #fff;
    background: linear-gradient(rgba(10, 20, 40, 0.65), rgba(10, 20, 40, 0.65)), #1d3557;
    padding: 4rem 1.5rem;
}
.hero h1 { font-size: 2.6rem; max-width: 800px; margin: 0 auto 1rem; }
.hero-subtitle { font-size: 1.2rem; max-width: 640px; margin: 0 auto 2rem; opacity: 0.9; }
.hero-cta-group { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.hero-cta, .freight-cta, .submit-button {
    background: #f28c28;
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 0.9rem 1.8rem;
    font-weight: 700;
    text-decoration: none;
    cursor: pointer;
}
.hero-call { color: #fff; padding: 0.9rem 1.2rem; border: 2px solid #fff; border-radius: 8px; text-decoration: none; }
section { padding: 4rem 1.5rem; max-width: 1100px; margin: 0 auto; }
section h2 { text-align: center; font-size: 2rem; margin-bottom: 1rem; }
.section-subtitle { text-align: center; color: #5a6575; margin-bottom: 2rem; }
.feature-grid, .freight-grid, .testimonial-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
    gap: 1.5rem;
}
.feature-block, .freight-card, .testimonial {
    background: #f6f8fb;
    border-radius: 12px;
    padding: 1.5rem;
    margin: 0;
}
.feature-icon { font-size: 2rem; }
.freight-card { display: flex; flex-direction: column; gap: 0.5rem; border-top: 4px solid #f28c28; }
.freight-fee .fee-amount { font-size: 2.2rem; font-weight: 800; }
.freight-card ul { list-style: none; padding: 0; flex: 1; }
.freight-cta { text-align: center; }
.testimonial footer { display: flex; flex-direction: column; margin-top: 1rem; color: #5a6575; }
.contact-form-card { max-width: 760px; margin: 0 auto; background: #fff; border-radius: 12px; box-shadow: 0 8px 30px rgba(0, 0, 0, 0.08); padding: 2rem; }
.contact-form-card h2 { margin-top: 0; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.form-group { display: flex; flex-direction: column; margin-bottom: 1rem; }
.form-group input, .form-group select, .form-group textarea { padding: 0.6rem; border: 1px solid #c9d1dc; border-radius: 6px; font: inherit; }
.documents { border: 1px dashed #c9d1dc; border-radius: 8px; margin-bottom: 1rem; }
.required, .error, .error-message { color: #c0392b; }
.success-message { color: #1e8449; }
.zip-hint { margin-top: 0.25rem; color: #5a6575; }
.submit-button:disabled { opacity: 0.6; cursor: wait; }
.site-footer { text-align: center; color: #5a6575; padding: 2rem 1rem; }
.sticky-contact-bar {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    gap: 1.5rem;
    background: #0a1428;
    padding: 0.75rem;
    z-index: 10;
}
.sticky-link { color: #fff; text-decoration: none; font-weight: 600; }
.sticky-link.cta { color: #f28c28; }
@media (max-width: 640px) {
    .hero h1 { font-size: 1.9rem; }
    .form-row { grid-template-columns: 1fr; }
    .sticky-contact-bar { gap: 0.75rem; font-size: 0.85rem; }
}
"#;
