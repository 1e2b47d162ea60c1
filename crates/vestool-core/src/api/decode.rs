//! Turning API/store JSON into records.
//!
//! Bad entries are skipped with a warning rather than failing the listing.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;
use crate::model::{AppRecord, VersionRecord};

pub(super) fn parse_json(bytes: &[u8], origin: &str) -> Result<Value, ApiError> {
    serde_json::from_slice(bytes).map_err(|source| ApiError::Decode {
        origin: origin.to_string(),
        source,
    })
}

/// The app listing must be a JSON array.
pub fn decode_apps(value: Value, origin: &str) -> Result<Vec<AppRecord>, ApiError> {
    match value {
        Value::Array(items) => {
            let apps: Vec<AppRecord> = decode_items(items, origin)
                .into_iter()
                .filter(|a: &AppRecord| {
                    let keep = !a.app_id.is_empty();
                    if !keep {
                        tracing::warn!(origin, "skipping app record without app_id");
                    }
                    keep
                })
                .collect();
            Ok(apps)
        }
        _ => Err(ApiError::Shape {
            origin: origin.to_string(),
            detail: "expected a JSON array of apps",
        }),
    }
}

/// Versions come either as a bare array or as `{"versions": [...]}`.
/// Anything else means "no versions".
pub fn decode_versions(value: Value, origin: &str) -> Vec<VersionRecord> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("versions") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    decode_items(items, origin)
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>, origin: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(origin, index, "skipping malformed record: {}", e);
                None
            }
        })
        .collect()
}
