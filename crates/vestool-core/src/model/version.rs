use serde::{Deserialize, Serialize};

use super::{de, positive_size};

/// One entry of an app's version history from `/api/versions/<app_id>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Dot-separated numeric version, e.g. `"2.10.1"`.
    #[serde(default, deserialize_with = "de::plain_string")]
    pub version_name: String,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub local_apk_url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub apk_url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub telegram_link: Option<String>,
    #[serde(default, deserialize_with = "de::opt_size_mb")]
    pub apk_size_mb: Option<f64>,
    /// Human-readable size text written by some crawlers (e.g. `"45.3 MB"`).
    #[serde(default, deserialize_with = "de::opt_string")]
    pub size_str: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub release_date: Option<String>,
    /// Crawler that produced the entry (e.g. `"uptodown"`).
    #[serde(default, deserialize_with = "de::opt_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
}

impl VersionRecord {
    pub fn new(version_name: impl Into<String>) -> Self {
        Self {
            version_name: version_name.into(),
            ..Self::default()
        }
    }

    /// Size in megabytes: `apk_size_mb`, else parsed from `size_str`.
    pub fn size_mb(&self) -> Option<f64> {
        self.apk_size_mb
            .or_else(|| self.size_str.as_deref().and_then(parse_size_str))
    }
}

/// Parses sizes like `"45.3 MB"`, `"1.2GB"` or `"800 kb"` into megabytes.
///
/// Scans for the first number directly followed (after optional spaces) by a
/// unit starting with `m`, `g` or `k`.
pub fn parse_size_str(text: &str) -> Option<f64> {
    let lower = text.to_lowercase();
    let bytes = lower.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !(bytes[i].is_ascii_digit() || bytes[i] == b'.') {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
            i += 1;
        }
        let number = &lower[start..i];
        let unit = lower[i..].trim_start().as_bytes().first().copied();
        let factor = match unit {
            Some(b'm') => 1.0,
            Some(b'g') => 1024.0,
            Some(b'k') => 1.0 / 1024.0,
            _ => continue,
        };
        if let Ok(value) = number.parse::<f64>() {
            return positive_size(value * factor);
        }
    }
    None
}
