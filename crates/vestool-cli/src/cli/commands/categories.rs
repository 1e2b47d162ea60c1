//! `vestool categories` – app count per category.

use anyhow::Result;
use serde_json::json;

use crate::cli::render::print_json;
use crate::cli::session::Session;

pub fn run_categories(session: &Session, json: bool) -> Result<()> {
    let counts = session.catalog.category_counts();
    if json {
        let map: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(c, n)| (c.as_str().to_string(), json!(n)))
            .collect();
        return print_json(&map);
    }

    println!("{:<10} {:<14} {}", "CATEGORY", "LABEL", "APPS");
    for (category, count) in counts {
        println!("{:<10} {:<14} {}", category.as_str(), category.label(), count);
    }
    Ok(())
}
