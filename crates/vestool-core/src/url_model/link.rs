//! Chat-platform link recognition and the `#size=` suffix convention.

/// Marker separating a chat-platform link from its encoded size in megabytes.
pub const SIZE_SUFFIX: &str = "#size=";

const CHAT_PLATFORM_MARKERS: [&str; 2] = ["t.me/", "telegram."];

/// True when `url` points at a chat-platform post rather than a file.
pub fn is_chat_platform_link(url: &str) -> bool {
    CHAT_PLATFORM_MARKERS.iter().any(|m| url.contains(m))
}

/// Splits `link#size=12.5` into the bare link and the parsed size.
///
/// The size is `None` when the suffix is missing or is not a usable number.
/// Only the text between the first and a possible second marker is parsed.
pub fn split_size_suffix(link: &str) -> (&str, Option<f64>) {
    let mut parts = link.split(SIZE_SUFFIX);
    let bare = parts.next().unwrap_or(link);
    let size = parts
        .next()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .and_then(crate::model::positive_size);
    (bare, size)
}
