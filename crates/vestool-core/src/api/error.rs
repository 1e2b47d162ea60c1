//! Errors from fetching and decoding catalog data.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no API base URLs configured")]
    NoBases,

    #[error("invalid API base URL {base:?}: {reason}")]
    InvalidBase { base: String, reason: String },

    #[error("HTTP transfer failed: {0}")]
    Transfer(#[from] curl::Error),

    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },

    #[error("invalid JSON from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response shape from {origin}: {detail}")]
    Shape { origin: String, detail: &'static str },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("all {attempts} API bases failed; last error: {last}")]
    AllBasesFailed {
        attempts: usize,
        #[source]
        last: Box<ApiError>,
    },
}
