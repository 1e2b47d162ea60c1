//! Link classification, query encoding and APK filename derivation.
//!
//! Everything here is pure string work; nothing touches the network.

mod link;
mod sanitize;

pub use link::{is_chat_platform_link, split_size_suffix, SIZE_SUFFIX};
pub use sanitize::sanitize_filename_seed;

/// Filename seed used when an app has no title.
const DEFAULT_SEED: &str = "app";

/// Derives the download filename for an app: sanitized title plus `.apk`.
///
/// # Examples
///
/// - `apk_filename(Some("Liên Quân"))` → `"Li_n_Qu_n.apk"`
/// - `apk_filename(None)` → `"app.apk"`
pub fn apk_filename(title: Option<&str>) -> String {
    format!("{}.apk", sanitize_filename_seed(title.unwrap_or(DEFAULT_SEED)))
}

/// Filename for a specific version of an app: `<title>_<version>.apk`, sanitized.
pub fn versioned_apk_filename(title: Option<&str>, version_name: &str) -> String {
    let title = title.unwrap_or(DEFAULT_SEED);
    if version_name.is_empty() {
        return apk_filename(Some(title));
    }
    format!("{}.apk", sanitize_filename_seed(&format!("{title}_{version_name}")))
}

/// Builds an `application/x-www-form-urlencoded` query string from pairs.
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}
