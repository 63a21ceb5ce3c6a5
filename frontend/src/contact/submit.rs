use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use web_sys::{File, FormData};

use super::error::ContactError;
use super::form::{FormPart, PartValue};

pub const DEFAULT_CONFIRMATION: &str =
    "Thank you! Your form has been submitted successfully. We'll reach out shortly.";
pub const GENERIC_FAILURE: &str = "Submission failed. Please try again.";

/// Body returned by the contact endpoint.
#[derive(Deserialize, Debug, Default)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Turns the endpoint's answer into the text shown under the form.
pub fn interpret_response(ok: bool, status_text: &str, body: &str) -> Result<String, ContactError> {
    let response: SubmitResponse = serde_json::from_str(body)
        .map_err(|e| ContactError::InvalidResponse(e.to_string()))?;

    // Missing flag falls back to the HTTP status
    let accepted = ok && response.success.unwrap_or(true);
    if accepted {
        return Ok(non_empty(response.message).unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string()));
    }

    let reason = non_empty(response.error)
        .or_else(|| non_empty(response.message))
        .or_else(|| {
            (!status_text.trim().is_empty()).then(|| format!("Submission failed: {}", status_text))
        })
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
    Err(ContactError::Rejected(reason))
}

fn build_form_data(parts: &[FormPart<File>]) -> Result<FormData, ContactError> {
    let data = FormData::new()?;
    for part in parts {
        match &part.value {
            PartValue::Text(text) => data.append_with_str(part.name, text)?,
            PartValue::File(file) => {
                data.append_with_blob_and_filename(part.name, file, &file.name())?
            }
        }
    }
    Ok(data)
}

/// Posts the form once as multipart data. No retry.
pub async fn send(url: &str, parts: Vec<FormPart<File>>) -> Result<String, ContactError> {
    let data = build_form_data(&parts)?;
    info!("Submitting contact form with {} parts", parts.len());

    let response = Request::post(url).body(data).send().await.map_err(|e| {
        error!("Contact submission failed to send: {}", e);
        ContactError::from(e)
    })?;

    let ok = response.ok();
    let status_text = response.status_text();
    let body = response.text().await?;
    if !ok {
        error!("Contact endpoint answered {} {}", response.status(), status_text);
    }

    interpret_response(ok, &status_text, &body)
}
