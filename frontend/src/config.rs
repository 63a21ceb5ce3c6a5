
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "https://api.quickhaulxpressllc.dpdns.org"  // Production URL
}

pub fn contact_submit_url() -> String {
    format!("{}/api/contact/submit", get_backend_url())
}

// Public US ZIP lookup, answers GET {base}/{zip}
pub const ZIP_LOOKUP_BASE: &str = "https://api.zippopotam.us/us";

pub const BUSINESS_NAME: &str = "QuickHaulXpress LLC";
pub const BUSINESS_PHONE: &str = "+1-469-555-0142";
pub const BUSINESS_PHONE_DISPLAY: &str = "(469) 555-0142";
pub const BUSINESS_EMAIL: &str = "dispatch@quickhaulxpressllc.com";
