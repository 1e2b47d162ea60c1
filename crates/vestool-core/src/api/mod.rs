//! Catalog API client and on-disk catalog files.
//!
//! The server exposes `GET /api/apps` (array of apps) and
//! `GET /api/versions/<app_id>` (array, or `{"versions": [...]}`). Base URLs
//! are tried in order and the first that answers with usable JSON wins; there
//! is no backoff or per-base retry.

mod decode;
mod error;
mod file;
mod http;

pub use decode::{decode_apps, decode_versions};
pub use error::ApiError;
pub use file::{load_apps_file, load_versions_file, versions_file_name};

use crate::config::{HttpConfig, VestoolConfig};
use crate::model::{AppRecord, VersionRecord};

/// Data together with the base URL that served it.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub base: String,
    pub data: T,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    bases: Vec<String>,
    http: HttpConfig,
}

impl ApiClient {
    pub fn new(bases: Vec<String>, http: HttpConfig) -> Self {
        Self { bases, http }
    }

    pub fn from_config(cfg: &VestoolConfig) -> Self {
        Self::new(cfg.api_bases.clone(), cfg.http.clone())
    }

    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    pub fn fetch_apps(&self) -> Result<Fetched<Vec<AppRecord>>, ApiError> {
        self.first_success(&["api", "apps"], |bytes, origin| {
            decode::decode_apps(decode::parse_json(bytes, origin)?, origin)
        })
    }

    pub fn fetch_versions(&self, app_id: &str) -> Result<Fetched<Vec<VersionRecord>>, ApiError> {
        self.first_success(&["api", "versions", app_id], |bytes, origin| {
            Ok(decode::decode_versions(
                decode::parse_json(bytes, origin)?,
                origin,
            ))
        })
    }

    /// GETs `segments` under each base in turn; returns the first decoded result.
    fn first_success<T>(
        &self,
        segments: &[&str],
        parse: impl Fn(&[u8], &str) -> Result<T, ApiError>,
    ) -> Result<Fetched<T>, ApiError> {
        let mut last = None;
        for base in &self.bases {
            let attempt = endpoint_url(base, segments).and_then(|url| {
                tracing::debug!(%url, "GET");
                let body = http::get(&url, &self.http)?;
                parse(&body, &url)
            });
            match attempt {
                Ok(data) => {
                    return Ok(Fetched {
                        base: base.clone(),
                        data,
                    })
                }
                Err(e) => {
                    tracing::warn!(base = %base, "API base failed: {}", e);
                    last = Some(e);
                }
            }
        }
        match last {
            None => Err(ApiError::NoBases),
            Some(e) => Err(ApiError::AllBasesFailed {
                attempts: self.bases.len(),
                last: Box::new(e),
            }),
        }
    }
}

/// Appends path segments to a base URL, percent-encoding each segment.
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<String, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBase {
        base: base.to_string(),
        reason,
    };
    let mut url = url::Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}
