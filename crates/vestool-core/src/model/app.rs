use serde::{Deserialize, Serialize};

use super::de;

/// One application listing from `/api/apps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Reverse-domain package name; primary key and classifier input.
    #[serde(default, deserialize_with = "de::plain_string")]
    pub app_id: String,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    /// Direct file URL, or a chat-platform post link.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub apk_url: Option<String>,
    /// Chat-platform post link, optionally suffixed with `#size=<mb>`.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub telegram_link: Option<String>,
    /// Path under the server's local APK storage directory.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub local_apk_url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_size_mb")]
    pub apk_size_mb: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub icon: Option<String>,
    /// Informational post about the app on the secondary channel.
    #[serde(default, deserialize_with = "de::opt_string")]
    pub channel2_link: Option<String>,
}

impl AppRecord {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            ..Self::default()
        }
    }

    /// Title for display; falls back to the package name.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.app_id)
    }
}
