use serde::{Deserialize, Serialize};

/// Marker left in deployment URLs that were never filled in.
pub const PLACEHOLDER: &str = "YOUR_DEPLOYMENT_ID";

const UNSET_URL: &str = "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec";

/// Spreadsheet web-app endpoints receiving the two forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormEndpoints {
    /// Receives the contact form as a JSON `POST`.
    pub contact_url: String,
    /// Receives the demo booking as a `GET` query string.
    pub booking_url: String,
}

impl Default for FormEndpoints {
    fn default() -> Self {
        Self {
            contact_url: UNSET_URL.to_string(),
            booking_url: UNSET_URL.to_string(),
        }
    }
}

pub fn is_configured_url(url: &str) -> bool {
    !url.trim().is_empty() && !url.contains(PLACEHOLDER)
}

impl FormEndpoints {
    pub fn is_contact_configured(&self) -> bool {
        is_configured_url(&self.contact_url)
    }

    pub fn is_booking_configured(&self) -> bool {
        is_configured_url(&self.booking_url)
    }

    pub fn is_configured(&self) -> bool {
        self.is_contact_configured() && self.is_booking_configured()
    }
}
