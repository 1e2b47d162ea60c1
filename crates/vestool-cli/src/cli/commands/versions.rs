//! `vestool versions <app_id>` – version history, newest first.

use anyhow::Result;
use serde::Serialize;
use vestool_core::model::VersionRecord;
use vestool_core::resolver::DownloadTarget;

use crate::cli::render::{download_kind, format_size, print_json};
use crate::cli::session::Session;

#[derive(Serialize)]
struct VersionRow<'a> {
    #[serde(flatten)]
    version: &'a VersionRecord,
    download: DownloadTarget,
}

pub fn run_versions(session: &Session, app_id: &str, json: bool) -> Result<()> {
    let entry = session.entry(app_id)?;
    let history = session.versions(app_id)?;
    let rows: Vec<VersionRow<'_>> = history
        .resolved(&entry.app, &session.endpoints)
        .map(|(version, download)| VersionRow { version, download })
        .collect();

    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No versions recorded for {}.", app_id);
        return Ok(());
    }

    println!(
        "{:<14} {:<12} {:<10} {:<8} {}",
        "VERSION", "RELEASED", "SIZE", "KIND", "DOWNLOAD"
    );
    for row in &rows {
        println!(
            "{:<14} {:<12} {:<10} {:<8} {}",
            row.version.version_name,
            row.version.release_date.as_deref().unwrap_or("-"),
            format_size(row.download.size_mb),
            download_kind(&row.download),
            row.download.url.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
