use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::locate::DEFAULT_ASSET_BASE;

/// Site serving `/strip/<date>` pages.
pub const DEFAULT_PAGE_BASE: &str = "http://dilbert.com";

/// Global configuration loaded from `~/.config/dilbert/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DilbertConfig {
    /// Base URL of the strip site; pages live under `<page_base>/strip/`.
    pub page_base: String,
    /// Base URL the page's `data-image` attribute points at.
    pub asset_base: String,
    /// Where strips are saved. Missing = current working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Replace a strip that was already saved for the same date.
    #[serde(default)]
    pub overwrite: bool,
    /// Per-request timeout in seconds. Missing = libcurl defaults.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for DilbertConfig {
    fn default() -> Self {
        Self {
            page_base: DEFAULT_PAGE_BASE.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            output_dir: None,
            overwrite: false,
            timeout_secs: None,
        }
    }
}

impl DilbertConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// `output_dir`, or `cwd` when unset.
    pub fn output_dir_or(&self, cwd: &Path) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| cwd.to_path_buf())
    }

    /// Both base URLs must be absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        check_base_url("page_base", &self.page_base)?;
        check_base_url("asset_base", &self.asset_base)?;
        Ok(())
    }
}

fn check_base_url(key: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).with_context(|| format!("{key}: invalid URL {value:?}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{key}: unsupported scheme {other:?} in {value:?}"),
    }
}

/// `~/.config/dilbert/config.toml`. Nothing is created on disk here.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dilbert")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
///
/// The pipeline runs fine on defaults, so an unusable config location is
/// logged and the defaults are used.
pub fn load_or_init() -> Result<DilbertConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(e) => {
            tracing::warn!("no config location, using defaults: {:#}", e);
            Ok(DilbertConfig::default())
        }
    }
}

/// Like [`load_or_init`] for an explicit path. A missing file that cannot
/// be written falls back to defaults; an existing file that cannot be read
/// or parsed is an error.
pub fn load_or_init_at(path: &Path) -> Result<DilbertConfig> {
    if !path.exists() {
        let default_cfg = DilbertConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(e) => tracing::warn!("could not create default config, using defaults: {:#}", e),
        }
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DilbertConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &DilbertConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
