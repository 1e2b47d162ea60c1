//! `vestool classify <app_id> [--title T]` – offline classification.

use anyhow::Result;
use serde_json::json;
use vestool_core::classify::classify_parts;

use crate::cli::render::print_json;

pub fn run_classify(app_id: &str, title: Option<&str>, json: bool) -> Result<()> {
    let category = classify_parts(app_id, title);
    if json {
        return print_json(&json!({ "app_id": app_id, "category": category }));
    }
    println!("{}", category);
    Ok(())
}
