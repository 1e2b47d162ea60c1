//! Where the catalog comes from, and the loaded catalog for one command.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use vestool_core::api::{load_apps_file, load_versions_file, ApiClient};
use vestool_core::catalog::{Catalog, CatalogEntry, VersionHistory};
use vestool_core::config::VestoolConfig;
use vestool_core::resolver::DownloadEndpoints;

use super::Cli;

#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// The server's data directory, read directly.
    Files {
        apps_file: PathBuf,
        versions_dir: PathBuf,
    },
    Api(ApiClient),
}

impl CatalogSource {
    /// `--apps-file` wins; otherwise the API, with `--api` replacing configured bases.
    pub fn from_cli(cli: &Cli, cfg: &VestoolConfig) -> Self {
        if let Some(apps_file) = &cli.apps_file {
            let versions_dir = cli.versions_dir.clone().unwrap_or_else(|| {
                apps_file
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join("versions")
            });
            return CatalogSource::Files {
                apps_file: apps_file.clone(),
                versions_dir,
            };
        }
        let bases = if cli.api.is_empty() {
            cfg.api_bases.clone()
        } else {
            cli.api.clone()
        };
        CatalogSource::Api(ApiClient::new(bases, cfg.http.clone()))
    }
}

pub struct Session {
    pub catalog: Catalog,
    /// Configured endpoints; when fetched over HTTP and no public base is set,
    /// the serving API base is used so printed links are absolute.
    pub endpoints: DownloadEndpoints,
    source: CatalogSource,
}

impl Session {
    pub fn open(source: CatalogSource, cfg: &VestoolConfig) -> Result<Self> {
        let (apps, served_by) = match &source {
            CatalogSource::Files { apps_file, .. } => {
                let apps = load_apps_file(apps_file)
                    .with_context(|| format!("loading {}", apps_file.display()))?;
                (apps, None)
            }
            CatalogSource::Api(client) => {
                let fetched = client.fetch_apps().context("fetching app catalog")?;
                (fetched.data, Some(fetched.base))
            }
        };

        let endpoints = match served_by {
            Some(base) => cfg.endpoints.clone().with_fallback_base(&base),
            None => cfg.endpoints.clone(),
        };
        tracing::info!(apps = apps.len(), "catalog loaded");

        Ok(Self {
            catalog: Catalog::new(apps),
            endpoints,
            source,
        })
    }

    pub fn entry(&self, app_id: &str) -> Result<&CatalogEntry> {
        self.catalog
            .get(app_id)
            .ok_or_else(|| anyhow!("no app with id {app_id:?} in the catalog"))
    }

    pub fn versions(&self, app_id: &str) -> Result<VersionHistory> {
        let versions = match &self.source {
            CatalogSource::Files { versions_dir, .. } => load_versions_file(versions_dir, app_id)
                .with_context(|| format!("loading versions of {app_id}"))?,
            CatalogSource::Api(client) => {
                client
                    .fetch_versions(app_id)
                    .with_context(|| format!("fetching versions of {app_id}"))?
                    .data
            }
        };
        Ok(VersionHistory::new(versions))
    }
}
