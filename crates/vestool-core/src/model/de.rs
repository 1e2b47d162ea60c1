//! Lenient field decoding for API records.
//!
//! The store writes `""` for missing links and `0` for unknown sizes, and
//! older crawls wrote numeric ids. All of these decode to something usable
//! instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::positive_size;

/// Optional text field: `null`, missing, or blank all become `None`.
/// Numbers are accepted and rendered as text.
pub(super) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_of))
}

/// Required text field that tolerates numbers and `null` (decoded as `""`).
pub(super) fn plain_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_of).unwrap_or_default())
}

/// Size in megabytes from a number or numeric string; unusable values are `None`.
pub(super) fn opt_size_mb<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let mb = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(mb.and_then(positive_size))
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
