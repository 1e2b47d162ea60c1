//! Plain-text and JSON output helpers.

use anyhow::Result;
use serde::Serialize;
use vestool_core::catalog::CatalogEntry;
use vestool_core::resolver::DownloadTarget;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_size(size_mb: Option<f64>) -> String {
    size_mb
        .map(|mb| format!("{mb:.1} MB"))
        .unwrap_or_else(|| "-".to_string())
}

/// Shortens to `width` characters, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// One-word summary of how a download will be served.
pub fn download_kind(target: &DownloadTarget) -> &'static str {
    match (&target.url, target.is_local, &target.original_source_link) {
        (None, _, _) => "none",
        (Some(_), true, _) => "local",
        (Some(_), false, Some(_)) => "proxy",
        (Some(_), false, None) => "direct",
    }
}

pub fn print_app_table<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) {
    let mut shown = 0usize;
    for (i, e) in entries.into_iter().enumerate() {
        if i == 0 {
            println!("{:<36} {:<10} {:<10} {}", "APP ID", "CATEGORY", "SIZE", "TITLE");
        }
        println!(
            "{:<36} {:<10} {:<10} {}",
            truncate(&e.app.app_id, 36),
            e.category.as_str(),
            format_size(e.app.apk_size_mb),
            e.app.display_title()
        );
        shown += 1;
    }
    if shown == 0 {
        println!("No apps found.");
    }
}
