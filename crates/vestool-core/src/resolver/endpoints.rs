//! Where the catalog server serves files and proxies downloads.

use serde::{Deserialize, Serialize};

use crate::url_model::query_string;

/// Server paths the resolver rewrites links onto (`[endpoints]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadEndpoints {
    /// Origin prepended to every generated URL. Empty keeps URLs relative to
    /// the page or API that served the catalog.
    pub public_base: String,
    /// Server-side storage prefix found in `local_apk_url` values.
    pub storage_prefix: String,
    /// Path that serves files from the storage prefix.
    pub serve_path: String,
    /// Endpoint streaming chat-platform posts (`?link=...&name=...`).
    pub download_path: String,
    /// Endpoint proxying external version sources (`?url=...&name=...`).
    pub proxy_download_path: String,
}

impl Default for DownloadEndpoints {
    fn default() -> Self {
        Self {
            public_base: String::new(),
            storage_prefix: "/data/apks/".to_string(),
            serve_path: "/api/apk/".to_string(),
            download_path: "/api/download".to_string(),
            proxy_download_path: "/api/proxy-download".to_string(),
        }
    }
}

impl DownloadEndpoints {
    /// Same endpoints, with `public_base` set to `base` if it was empty.
    pub fn with_fallback_base(mut self, base: &str) -> Self {
        if self.public_base.is_empty() {
            self.public_base = base.to_string();
        }
        self
    }

    /// Rewrites the first occurrence of the storage prefix to the serving path.
    pub fn serve_local(&self, local_apk_url: &str) -> String {
        if self.storage_prefix.is_empty() {
            return local_apk_url.to_string();
        }
        let served = format!("{}{}", self.base(), self.serve_path);
        local_apk_url.replacen(&self.storage_prefix, &served, 1)
    }

    /// `<download_path>?link=<link>&name=<filename>`
    pub fn chat_download_url(&self, link: &str, filename: &str) -> String {
        format!(
            "{}{}?{}",
            self.base(),
            self.download_path,
            query_string(&[("link", link), ("name", filename)])
        )
    }

    /// `<proxy_download_path>?url=<url>&name=<filename>`
    pub fn proxy_download_url(&self, url: &str, filename: &str) -> String {
        format!(
            "{}{}?{}",
            self.base(),
            self.proxy_download_path,
            query_string(&[("url", url), ("name", filename)])
        )
    }

    fn base(&self) -> &str {
        self.public_base.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_local_rewrites_prefix() {
        let e = DownloadEndpoints::default();
        assert_eq!(e.serve_local("/data/apks/zalo.apk"), "/api/apk/zalo.apk");
        assert_eq!(
            e.clone()
                .with_fallback_base("http://vps:5000/")
                .serve_local("/data/apks/zalo.apk"),
            "http://vps:5000/api/apk/zalo.apk"
        );
    }

    #[test]
    fn serve_local_without_prefix_is_unchanged() {
        let e = DownloadEndpoints::default();
        assert_eq!(
            e.serve_local("https://t.me/vestool/9"),
            "https://t.me/vestool/9"
        );
    }

    #[test]
    fn fallback_base_does_not_override_configured_base() {
        let e = DownloadEndpoints {
            public_base: "https://vestool.example".to_string(),
            ..DownloadEndpoints::default()
        };
        let e = e.with_fallback_base("http://127.0.0.1:5000");
        assert_eq!(e.public_base, "https://vestool.example");
    }

    #[test]
    fn proxy_urls() {
        let e = DownloadEndpoints::default();
        assert_eq!(
            e.chat_download_url("https://t.me/x/1", "Zalo.apk"),
            "/api/download?link=https%3A%2F%2Ft.me%2Fx%2F1&name=Zalo.apk"
        );
        assert_eq!(
            e.proxy_download_url("https://en.uptodown.com/android/zalo", "Zalo_1.0.apk"),
            "/api/proxy-download?url=https%3A%2F%2Fen.uptodown.com%2Fandroid%2Fzalo&name=Zalo_1.0.apk"
        );
    }
}
