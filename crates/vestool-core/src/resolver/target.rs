use serde::Serialize;

/// Outcome of download resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadTarget {
    /// Best URL, or `None` when the record has nothing downloadable.
    pub url: Option<String>,
    /// True when `url` yields the file itself (possibly via a proxy).
    pub is_direct: bool,
    pub size_mb: Option<f64>,
    /// Served from the catalog server's own storage.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_local: bool,
    /// Link the proxy URL was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_source_link: Option<String>,
}

impl DownloadTarget {
    pub(crate) fn local(url: String, size_mb: Option<f64>) -> Self {
        Self {
            url: Some(url),
            is_direct: true,
            size_mb,
            is_local: true,
            original_source_link: None,
        }
    }

    pub(crate) fn direct(url: String, size_mb: Option<f64>) -> Self {
        Self {
            url: Some(url),
            is_direct: true,
            size_mb,
            is_local: false,
            original_source_link: None,
        }
    }

    pub(crate) fn proxied(url: String, size_mb: Option<f64>, source: &str) -> Self {
        Self {
            url: Some(url),
            is_direct: true,
            size_mb,
            is_local: false,
            original_source_link: Some(source.to_string()),
        }
    }

    pub(crate) fn unavailable(size_mb: Option<f64>) -> Self {
        Self {
            url: None,
            is_direct: false,
            size_mb,
            is_local: false,
            original_source_link: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.url.is_some()
    }
}
