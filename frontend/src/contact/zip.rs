use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;

use super::error::ContactError;
use crate::config;

pub const ZIP_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZipQuery {
    Complete(String),
    Partial,
}

#[derive(Deserialize, Debug)]
struct ZipLookupResponse {
    #[serde(default)]
    places: Vec<Place>,
}

#[derive(Deserialize, Debug)]
struct Place {
    #[serde(rename = "place name")]
    place_name: String,
    #[serde(rename = "state abbreviation")]
    state_abbreviation: String,
}

/// Digits only, at most five of them.
pub fn sanitize_zip(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ZIP_LEN)
        .collect()
}

pub fn classify(zip: &str) -> ZipQuery {
    if zip.len() == ZIP_LEN && zip.chars().all(|c| c.is_ascii_digit()) {
        ZipQuery::Complete(zip.to_string())
    } else {
        ZipQuery::Partial
    }
}

pub fn lookup_url(base: &str, zip: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), urlencoding::encode(zip))
}

pub fn parse_lookup_response(status: u16, body: &str, zip: &str) -> Result<String, ContactError> {
    if status == 404 {
        return Err(ContactError::ZipNotFound(zip.to_string()));
    }
    if !(200..300).contains(&status) {
        return Err(ContactError::LookupFailed(format!("status {}", status)));
    }

    let parsed: ZipLookupResponse = serde_json::from_str(body)
        .map_err(|e| ContactError::InvalidResponse(e.to_string()))?;

    parsed
        .places
        .into_iter()
        .next()
        .map(|place| format!("{}, {}", place.place_name, place.state_abbreviation))
        .ok_or_else(|| ContactError::ZipNotFound(zip.to_string()))
}

pub async fn lookup(zip: String) -> Result<String, ContactError> {
    let url = lookup_url(config::ZIP_LOOKUP_BASE, &zip);
    info!("Looking up ZIP {}", zip);

    let response = Request::get(&url).send().await.map_err(|e| {
        warn!("ZIP lookup for {} failed to send: {}", zip, e);
        ContactError::from(e)
    })?;
    let status = response.status();
    let body = response.text().await?;

    parse_lookup_response(status, &body, &zip)
}
