//! `vestool show <app_id>` – the detail page.

use anyhow::{anyhow, Result};

use crate::cli::render::{download_kind, format_size, print_json};
use crate::cli::session::Session;

pub fn run_show(session: &Session, app_id: &str, json: bool) -> Result<()> {
    let detail = session
        .catalog
        .detail(app_id, &session.endpoints)
        .ok_or_else(|| anyhow!("no app with id {app_id:?} in the catalog"))?;
    if json {
        return print_json(&detail);
    }

    let app = &detail.entry.app;
    let download = &detail.download;
    println!("{}", app.display_title());
    println!("  id:        {}", app.app_id);
    println!(
        "  category:  {} ({})",
        detail.entry.category,
        detail.entry.category.label()
    );
    println!("  updated:   {}", app.date.as_deref().unwrap_or("-"));
    println!("  size:      {}", format_size(download.size_mb));
    match &download.url {
        Some(url) => {
            println!("  download:  {} [{}]", url, download_kind(download));
            if let Some(source) = &download.original_source_link {
                println!("  source:    {}", source);
            }
        }
        None => println!("  download:  not available"),
    }
    if let Some(link) = &app.channel2_link {
        println!("  info post: {}", link);
    }
    if let Some(description) = &app.description {
        println!();
        println!("{}", description);
    }
    Ok(())
}
