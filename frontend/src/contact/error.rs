use wasm_bindgen::JsValue;

/// Everything that can go wrong between the contact form and its two remote
/// collaborators. The `Display` text is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactError {
    #[error("There was an error reaching our servers ({0}). Please try again.")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response from the server. Please try again.")]
    InvalidResponse(String),
    #[error("We couldn't find ZIP code {0}. Please double-check it.")]
    ZipNotFound(String),
    #[error("ZIP lookup is unavailable right now ({0}).")]
    LookupFailed(String),
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Your form is already being sent.")]
    AlreadySubmitting,
    #[error("Your browser refused to prepare the upload ({0}).")]
    Browser(String),
}

impl From<JsValue> for ContactError {
    fn from(value: JsValue) -> Self {
        let detail = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ContactError::Browser(detail)
    }
}

impl From<gloo_net::Error> for ContactError {
    fn from(err: gloo_net::Error) -> Self {
        ContactError::Network(err.to_string())
    }
}
