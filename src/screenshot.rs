//! Website screenshot lookup for experience cards.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use url::Url;

use crate::error::{PortfolioError, Result};

/// Returned alongside a 500 when the URL cannot be handled.
pub const DEFAULT_SCREENSHOT: &str = "/api/placeholder/screenshot/default";

const KNOWN_SCREENSHOTS: [(&str, &str); 6] = [
    ("techcorp.com", "/images/screenshots/techcorp-screenshot.png"),
    ("startupco.com", "/images/screenshots/startupco-screenshot.png"),
    ("microsoft.com", "/images/screenshots/microsoft-screenshot.png"),
    ("google.com", "/images/screenshots/google-screenshot.png"),
    ("apple.com", "/images/screenshots/apple-screenshot.png"),
    ("amazon.com", "/images/screenshots/amazon-screenshot.png"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    pub url: String,
    pub screenshot: String,
    pub timestamp: String,
}

/// Resolve the screenshot path for `url`.
pub fn lookup(url: &str) -> Result<Screenshot> {
    let parsed = Url::parse(url).map_err(|e| PortfolioError::InvalidUrl {
        url: url.to_string(),
        source: e,
    })?;
    // URLs without a host (mailto:, data:) are just unknown domains.
    let host = parsed.host_str().unwrap_or_default();

    Ok(Screenshot {
        url: url.to_string(),
        screenshot: screenshot_for_host(host),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Known hosts map to a stored image, anything else to a generated placeholder.
pub fn screenshot_for_host(host: &str) -> String {
    KNOWN_SCREENSHOTS
        .iter()
        .find(|(known, _)| *known == host)
        .map(|(_, path)| path.to_string())
        .unwrap_or_else(|| format!("/api/placeholder/screenshot/{}", urlencoding::encode(host)))
}
