use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::error::Error;

pub const CONSENT_COOKIE: &str = "cookieConsent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStatus {
    Accepted,
    Declined,
}

impl ConsentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentStatus::Accepted => "accepted",
            ConsentStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(ConsentStatus::Accepted),
            "declined" => Ok(ConsentStatus::Declined),
            other => Err(Error::UnknownConsent(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsentSettings {
    /// Lifetime of an accepted consent. Declines are session cookies.
    pub max_age_secs: u64,
    pub banner_delay_ms: u32,
}

impl Default for ConsentSettings {
    fn default() -> Self {
        Self {
            max_age_secs: 31_536_000,
            banner_delay_ms: 3_000,
        }
    }
}

/// Finds the consent value in a `document.cookie` string. Missing and
/// unreadable values both come back as `None`.
pub fn read_consent(cookies: &str) -> Option<ConsentStatus> {
    let prefix = format!("{CONSENT_COOKIE}=");
    let raw = cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(prefix.as_str()))?;
    match raw.parse() {
        Ok(status) => Some(status),
        Err(err) => {
            warn!("ignoring consent cookie: {}", err);
            None
        }
    }
}

pub fn consent_cookie(status: ConsentStatus, settings: &ConsentSettings) -> String {
    match status {
        ConsentStatus::Accepted => format!(
            "{CONSENT_COOKIE}={status}; path=/; max-age={}",
            settings.max_age_secs
        ),
        ConsentStatus::Declined => format!("{CONSENT_COOKIE}={status}; path=/"),
    }
}

/// Only an explicit accept hides the banner for good.
pub fn should_show_banner(status: Option<ConsentStatus>) -> bool {
    status != Some(ConsentStatus::Accepted)
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

pub fn load_consent() -> Option<ConsentStatus> {
    let cookies = html_document()?.cookie().ok()?;
    read_consent(&cookies)
}

pub fn store_consent(status: ConsentStatus, settings: &ConsentSettings) {
    let Some(document) = html_document() else {
        warn!("no document, consent not stored");
        return;
    };
    if let Err(err) = document.set_cookie(&consent_cookie(status, settings)) {
        warn!("failed to store consent cookie: {:?}", err);
    }
}
