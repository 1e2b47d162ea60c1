//! `vestool resolve <app_id> [--version V]` – the resolved download as JSON.

use anyhow::{anyhow, Result};
use vestool_core::resolver::{resolve_app, resolve_version};

use crate::cli::render::print_json;
use crate::cli::session::Session;

pub fn run_resolve(session: &Session, app_id: &str, version: Option<&str>) -> Result<()> {
    let app = &session.entry(app_id)?.app;
    let target = match version {
        None => resolve_app(app, &session.endpoints),
        Some(name) => {
            let history = session.versions(app_id)?;
            let record = history
                .find(name)
                .ok_or_else(|| anyhow!("{app_id} has no version {name:?}"))?;
            resolve_version(app, record, &session.endpoints)
        }
    };
    tracing::debug!(app_id, url = ?target.url, "resolved");
    print_json(&target)
}
