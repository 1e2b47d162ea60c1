//! `vestool list` – apps newest first, optionally one category.

use anyhow::Result;
use vestool_core::catalog::CatalogEntry;
use vestool_core::classify::Category;

use crate::cli::render::{print_app_table, print_json};
use crate::cli::session::Session;

pub fn run_list(
    session: &Session,
    category: Option<Category>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut entries: Vec<&CatalogEntry> = match category {
        Some(c) => session.catalog.by_category(c),
        None => session.catalog.all().iter().collect(),
    };
    if let Some(n) = limit {
        entries.truncate(n);
    }

    if json {
        print_json(&entries)
    } else {
        print_app_table(entries);
        Ok(())
    }
}
