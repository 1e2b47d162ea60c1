//! CLI for the VesTool catalog browser.

mod commands;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vestool_core::classify::Category;
use vestool_core::config;

use commands::{
    run_categories, run_classify, run_completions, run_list, run_man, run_resolve, run_search,
    run_show, run_versions,
};
use session::{CatalogSource, Session};

/// Top-level CLI for the VesTool catalog browser.
#[derive(Debug, Parser)]
#[command(name = "vestool")]
#[command(about = "VesTool: browse APK listings, version history and download links", long_about = None)]
pub struct Cli {
    /// Read apps from a local apps.json instead of the API.
    #[arg(long, global = true, value_name = "PATH")]
    pub apps_file: Option<PathBuf>,

    /// Directory holding per-app version files (defaults to `versions/` next to --apps-file).
    #[arg(long, global = true, value_name = "DIR")]
    pub versions_dir: Option<PathBuf>,

    /// API base URL; repeat to try several in order. Overrides `api_bases` in config.toml.
    #[arg(long = "api", global = true, value_name = "URL")]
    pub api: Vec<String>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List apps, newest first.
    List {
        /// Only apps in this category.
        #[arg(short, long)]
        category: Option<Category>,

        /// Show at most N apps.
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Search apps by title, package name or description.
    Search {
        query: String,

        /// Only apps in this category.
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show the detail page of an app, including its best download link.
    Show {
        /// Package name, e.g. com.zing.zalo.
        app_id: String,
    },

    /// Show an app's version history, newest first.
    Versions {
        /// Package name, e.g. com.zing.zalo.
        app_id: String,
    },

    /// Print the resolved download for an app (or one of its versions) as JSON.
    Resolve {
        /// Package name, e.g. com.zing.zalo.
        app_id: String,

        /// Resolve this version from the history instead of the listing.
        #[arg(long, value_name = "VERSION")]
        version: Option<String>,
    },

    /// Count apps per category.
    Categories,

    /// Classify a package name (and optional title) without fetching anything.
    Classify {
        app_id: String,

        #[arg(long)]
        title: Option<String>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let json = cli.json;

        match cli.command {
            CliCommand::Classify { ref app_id, ref title } => {
                return run_classify(app_id, title.as_deref(), json)
            }
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let source = CatalogSource::from_cli(&cli, &cfg);
        let session = Session::open(source, &cfg)?;

        match cli.command {
            CliCommand::List { category, limit } => run_list(&session, category, limit, json)?,
            CliCommand::Search { query, category } => run_search(&session, &query, category, json)?,
            CliCommand::Show { app_id } => run_show(&session, &app_id, json)?,
            CliCommand::Versions { app_id } => run_versions(&session, &app_id, json)?,
            CliCommand::Resolve { app_id, version } => {
                run_resolve(&session, &app_id, version.as_deref())?
            }
            CliCommand::Categories => run_categories(&session, json)?,
            CliCommand::Classify { .. } | CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
