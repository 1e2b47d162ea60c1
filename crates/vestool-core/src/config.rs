use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::DownloadEndpoints;

/// HTTP client timeouts (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Whole-request timeout, including the response body.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/vestool/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestoolConfig {
    /// Catalog API origins, tried in order until one answers.
    pub api_bases: Vec<String>,
    #[serde(default)]
    pub endpoints: DownloadEndpoints,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for VestoolConfig {
    fn default() -> Self {
        Self {
            api_bases: vec!["http://localhost:5000".to_string()],
            endpoints: DownloadEndpoints::default(),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vestool")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VestoolConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VestoolConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<VestoolConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: VestoolConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

pub fn write_config(path: &Path, cfg: &VestoolConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
