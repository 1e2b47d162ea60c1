//! Download-URL resolution.
//!
//! Picks the single best download link for an app (or one of its versions)
//! from the candidate fields on the record. Resolution is a pure function of
//! the record and the configured [`DownloadEndpoints`]; it never fails.

mod endpoints;
mod target;

pub use endpoints::DownloadEndpoints;
pub use target::DownloadTarget;

use crate::model::{AppRecord, VersionRecord};
use crate::url_model::{
    apk_filename, is_chat_platform_link, split_size_suffix, versioned_apk_filename,
};

/// Resolves the best download for an app listing.
///
/// First match wins:
/// 1. `local_apk_url`, rewritten to the serving path.
/// 2. `apk_url` that is not a chat-platform link, verbatim.
/// 3. `telegram_link` through the chat download endpoint; a `#size=` suffix
///    overrides `apk_size_mb`.
/// 4. `apk_url` again: proxied if it is a chat-platform link, else verbatim.
/// 5. Nothing downloadable.
pub fn resolve_app(app: &AppRecord, endpoints: &DownloadEndpoints) -> DownloadTarget {
    if let Some(local) = app.local_apk_url.as_deref() {
        return DownloadTarget::local(endpoints.serve_local(local), app.apk_size_mb);
    }

    if let Some(apk_url) = app.apk_url.as_deref() {
        if !is_chat_platform_link(apk_url) {
            return DownloadTarget::direct(apk_url.to_string(), app.apk_size_mb);
        }
    }

    let filename = apk_filename(app.title.as_deref());

    if let Some(link) = app.telegram_link.as_deref() {
        let (link, size_override) = split_size_suffix(link);
        let url = endpoints.chat_download_url(link, &filename);
        return DownloadTarget::proxied(url, size_override.or(app.apk_size_mb), link);
    }

    if let Some(apk_url) = app.apk_url.as_deref() {
        if is_chat_platform_link(apk_url) {
            let url = endpoints.chat_download_url(apk_url, &filename);
            return DownloadTarget::proxied(url, app.apk_size_mb, apk_url);
        }
        return DownloadTarget::direct(apk_url.to_string(), app.apk_size_mb);
    }

    tracing::trace!(app_id = %app.app_id, "no download source");
    DownloadTarget::unavailable(app.apk_size_mb)
}

/// Resolves the download for one entry of an app's version history.
///
/// Version sources are store pages rather than files, so a non-chat
/// `apk_url` goes through the proxy endpoint instead of being returned as-is.
/// Order: local file, `telegram_link`, chat-platform `apk_url`, proxied `apk_url`.
pub fn resolve_version(
    app: &AppRecord,
    version: &VersionRecord,
    endpoints: &DownloadEndpoints,
) -> DownloadTarget {
    let size = version.size_mb();

    if let Some(local) = version.local_apk_url.as_deref() {
        return DownloadTarget::local(endpoints.serve_local(local), size);
    }

    let filename = versioned_apk_filename(app.title.as_deref(), &version.version_name);

    if let Some(link) = version.telegram_link.as_deref() {
        let (link, size_override) = split_size_suffix(link);
        let url = endpoints.chat_download_url(link, &filename);
        return DownloadTarget::proxied(url, size_override.or(size), link);
    }

    match version.apk_url.as_deref() {
        Some(apk_url) if is_chat_platform_link(apk_url) => {
            let url = endpoints.chat_download_url(apk_url, &filename);
            DownloadTarget::proxied(url, size, apk_url)
        }
        Some(apk_url) => {
            let url = endpoints.proxy_download_url(apk_url, &filename);
            DownloadTarget::proxied(url, size, apk_url)
        }
        None => DownloadTarget::unavailable(size),
    }
}

#[cfg(test)]
mod tests;
