use yew::prelude::*;

use crate::config;

pub fn tel_link(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

pub fn sms_link(phone: &str, body: &str) -> String {
    format!("sms:{}?body={}", &tel_link(phone)[4..], urlencoding::encode(body))
}

pub fn mailto_link(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

#[function_component(StickyContactBar)]
pub fn sticky_contact_bar() -> Html {
    let call = tel_link(config::BUSINESS_PHONE);
    let text = sms_link(config::BUSINESS_PHONE, "Hi, I'm an owner-operator looking for dispatch.");
    let email = mailto_link(config::BUSINESS_EMAIL, "Dispatch inquiry");

    html! {
        <div class="sticky-contact-bar">
            <a href={call} class="sticky-link call">
                {"📞 "}{config::BUSINESS_PHONE_DISPLAY}
            </a>
            <a href={text} class="sticky-link text">{"💬 Text us"}</a>
            <a href={email} class="sticky-link email">{"✉️ Email"}</a>
            <a href="#contact" class="sticky-link cta">{"Get Loaded"}</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_link_keeps_digits_and_plus() {
        assert_eq!(tel_link("+1-469-555-0142"), "tel:+14695550142");
        assert_eq!(tel_link("(469) 555-0142"), "tel:4695550142");
    }

    #[test]
    fn sms_link_encodes_body() {
        assert_eq!(
            sms_link("+1 469 555 0142", "Need loads & a dispatcher"),
            "sms:+14695550142?body=Need%20loads%20%26%20a%20dispatcher"
        );
    }

    #[test]
    fn mailto_link_encodes_subject() {
        assert_eq!(
            mailto_link("dispatch@example.com", "Dispatch inquiry"),
            "mailto:dispatch@example.com?subject=Dispatch%20inquiry"
        );
    }
}
