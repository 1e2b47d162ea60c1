//! Catalog data straight from the server's data directory (`apps.json`,
//! `versions/<app_id>.json`), for offline browsing.

use std::fs;
use std::path::{Path, PathBuf};

use super::{decode, ApiError};
use crate::model::{AppRecord, VersionRecord};

pub fn load_apps_file(path: &Path) -> Result<Vec<AppRecord>, ApiError> {
    let origin = path.display().to_string();
    let bytes = read(path)?;
    decode::decode_apps(decode::parse_json(&bytes, &origin)?, &origin)
}

/// Reads `<dir>/<versions_file_name(app_id)>`. A missing file means no versions.
pub fn load_versions_file(dir: &Path, app_id: &str) -> Result<Vec<VersionRecord>, ApiError> {
    let path: PathBuf = dir.join(versions_file_name(app_id));
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no versions file");
        return Ok(Vec::new());
    }
    let origin = path.display().to_string();
    let bytes = read(&path)?;
    Ok(decode::decode_versions(
        decode::parse_json(&bytes, &origin)?,
        &origin,
    ))
}

/// `com.zing.zalo` → `com_zing_zalo.json`
pub fn versions_file_name(app_id: &str) -> String {
    format!("{}.json", app_id.replace(['.', '/'], "_"))
}

fn read(path: &Path) -> Result<Vec<u8>, ApiError> {
    fs::read(path).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })
}
