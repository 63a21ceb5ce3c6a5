use log::{info, warn};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::error::ContactError;
use super::form::{DocumentSlot, EquipmentPreset, EquipmentType, RateBracket, TextField, Urgency};
use super::session::{ContactSession, SubmitStatus, ZipStatus};
use super::submit;
use super::zip;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub preset_equipment: Option<EquipmentPreset>,
    #[prop_or(AttrValue::from("Start Dispatching With Us"))]
    pub heading: AttrValue,
}

pub enum ContactFormMsg {
    SetText(TextField, String),
    ZipInput(String),
    ZipResolved(String, Result<String, ContactError>),
    SetFile(DocumentSlot, Option<File>),
    Submit,
    Submitted(Result<String, ContactError>),
}

pub struct ContactFormView {
    session: ContactSession<File>,
    file_refs: [NodeRef; 4],
}

impl Component for ContactFormView {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut session = ContactSession::new();
        session.apply_preset(ctx.props().preset_equipment, None);
        Self {
            session,
            file_refs: Default::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.session
            .apply_preset(ctx.props().preset_equipment, old_props.preset_equipment);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetText(field, value) => {
                self.session.form.set_text(field, value);
                true
            }
            ContactFormMsg::ZipInput(raw) => {
                if let Some(zip) = self.session.zip_changed(&raw) {
                    ctx.link().send_future(async move {
                        let result = zip::lookup(zip.clone()).await;
                        ContactFormMsg::ZipResolved(zip, result)
                    });
                }
                true
            }
            ContactFormMsg::ZipResolved(zip, result) => self.session.lookup_finished(&zip, result),
            ContactFormMsg::SetFile(slot, file) => {
                self.session.form.attach(slot, file);
                false
            }
            ContactFormMsg::Submit => match self.session.begin_submit() {
                Ok(parts) => {
                    ctx.link().send_future(async move {
                        let url = config::contact_submit_url();
                        ContactFormMsg::Submitted(submit::send(&url, parts).await)
                    });
                    true
                }
                Err(ContactError::AlreadySubmitting) => false,
                Err(err) => {
                    warn!("Contact form blocked: {}", err);
                    true
                }
            },
            ContactFormMsg::Submitted(result) => {
                if self.session.submit_finished(result) {
                    info!("Contact form submitted");
                    self.clear_file_inputs();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let sending = self.session.is_sending();

        html! {
            <div class="contact-form-card">
                <h2>{ ctx.props().heading.clone() }</h2>
                <p class="contact-form-intro">
                    {"Tell us about your truck and we'll call you back within one business day."}
                </p>
                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        { self.text_input(ctx, TextField::FullName, "text", "John Smith") }
                        { self.text_input(ctx, TextField::Phone, "tel", "(555) 123-4567") }
                    </div>
                    <div class="form-row">
                        { self.text_input(ctx, TextField::Email, "email", "you@company.com") }
                        { self.text_input(ctx, TextField::McNumber, "text", "MC-123456") }
                    </div>
                    <div class="form-row">
                        { self.select_input(ctx, TextField::EquipmentType, EquipmentType::ALL.iter().map(|e| (e.value(), e.label())).collect()) }
                        { self.zip_input(ctx) }
                    </div>
                    <div class="form-row">
                        { self.location_input(ctx) }
                        { self.select_input(ctx, TextField::CurrentRate, RateBracket::ALL.iter().map(|r| (r.value(), r.label())).collect()) }
                    </div>
                    <div class="form-row">
                        { self.select_input(ctx, TextField::Urgency, Urgency::ALL.iter().map(|u| (u.value(), u.label())).collect()) }
                    </div>
                    <div class="form-group">
                        <label for={TextField::Comments.name()}>{ TextField::Comments.label() }</label>
                        <textarea
                            id={TextField::Comments.name()}
                            name={TextField::Comments.name()}
                            rows="4"
                            placeholder="Preferred lanes, home time, anything we should know"
                            value={self.session.form.text(TextField::Comments).to_string()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                ContactFormMsg::SetText(TextField::Comments, input.value())
                            })}
                        />
                    </div>
                    <fieldset class="documents">
                        <legend>{"Carrier packet (optional)"}</legend>
                        { for DocumentSlot::ALL.iter().enumerate().map(|(i, slot)| self.file_input(ctx, *slot, &self.file_refs[i])) }
                    </fieldset>
                    <button type="submit" class="submit-button" disabled={sending}>
                        { if sending { "Sending..." } else { "Get Me Loaded" } }
                    </button>
                </form>
                { self.submit_notice() }
            </div>
        }
    }
}

impl ContactFormView {
    fn clear_file_inputs(&self) {
        for node in &self.file_refs {
            if let Some(input) = node.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: TextField, kind: &'static str, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::SetText(field, input.value())
        });
        html! {
            <div class="form-group">
                <label for={field.name()}>{ field.label() }{ required_mark(field) }</label>
                <input
                    type={kind}
                    id={field.name()}
                    name={field.name()}
                    {placeholder}
                    required={field.required()}
                    value={self.session.form.text(field).to_string()}
                    {oninput}
                />
            </div>
        }
    }

    fn select_input(&self, ctx: &Context<Self>, field: TextField, options: Vec<(&'static str, &'static str)>) -> Html {
        let current = self.session.form.text(field).to_string();
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactFormMsg::SetText(field, select.value())
        });
        html! {
            <div class="form-group">
                <label for={field.name()}>{ field.label() }{ required_mark(field) }</label>
                <select id={field.name()} name={field.name()} required={field.required()} {onchange}>
                    <option value="" selected={current.is_empty()}>{"Select..."}</option>
                    { for options.into_iter().map(|(value, label)| html! {
                        <option {value} selected={current == value}>{ label }</option>
                    }) }
                </select>
            </div>
        }
    }

    fn zip_input(&self, ctx: &Context<Self>) -> Html {
        let field = TextField::ZipCode;
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::ZipInput(input.value())
        });
        let hint = match &self.session.zip {
            ZipStatus::Looking(_) => html! { <small class="zip-hint">{"Looking up..."}</small> },
            ZipStatus::Failed(message) => html! { <small class="zip-hint error">{ message }</small> },
            ZipStatus::Idle | ZipStatus::Resolved(_) => html! {},
        };
        html! {
            <div class="form-group">
                <label for={field.name()}>{ field.label() }{ required_mark(field) }</label>
                <input
                    type="text"
                    inputmode="numeric"
                    maxlength="5"
                    id={field.name()}
                    name={field.name()}
                    placeholder="75201"
                    required={field.required()}
                    value={self.session.form.text(field).to_string()}
                    {oninput}
                />
                { hint }
            </div>
        }
    }

    fn location_input(&self, ctx: &Context<Self>) -> Html {
        let field = TextField::Location;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::SetText(field, input.value())
        });
        html! {
            <div class="form-group">
                <label for={field.name()}>{ field.label() }</label>
                <input
                    type="text"
                    id={field.name()}
                    name={field.name()}
                    placeholder="Filled in from your ZIP"
                    value={self.session.form.text(field).to_string()}
                    {oninput}
                />
            </div>
        }
    }

    fn file_input(&self, ctx: &Context<Self>, slot: DocumentSlot, node: &NodeRef) -> Html {
        let onchange = ctx.link().callback(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            ContactFormMsg::SetFile(slot, file)
        });
        html! {
            <div class="form-group file-upload">
                <label for={slot.name()}>{ slot.label() }</label>
                <input
                    type="file"
                    id={slot.name()}
                    name={slot.name()}
                    accept=".pdf,.jpg,.jpeg,.png"
                    ref={node.clone()}
                    {onchange}
                />
            </div>
        }
    }

    fn submit_notice(&self) -> Html {
        match &self.session.submit {
            SubmitStatus::Succeeded(message) => html! {
                <p class="success-message">{ message }</p>
            },
            SubmitStatus::Failed(message) => html! {
                <p class="error-message">{ message }</p>
            },
            SubmitStatus::Idle | SubmitStatus::Sending => html! {},
        }
    }
}

fn required_mark(field: TextField) -> Html {
    if field.required() {
        html! { <span class="required">{" *"}</span> }
    } else {
        html! {}
    }
}
