//! `vestool search <query>` – substring search over title, package name and description.

use anyhow::Result;
use vestool_core::catalog::CatalogEntry;
use vestool_core::classify::Category;

use crate::cli::render::{print_app_table, print_json};
use crate::cli::session::Session;

pub fn run_search(
    session: &Session,
    query: &str,
    category: Option<Category>,
    json: bool,
) -> Result<()> {
    let hits: Vec<&CatalogEntry> = session
        .catalog
        .search(query)
        .into_iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .collect();
    tracing::debug!(query, hits = hits.len(), "search");

    if json {
        print_json(&hits)
    } else {
        print_app_table(hits);
        Ok(())
    }
}
