//! Configuration service implementation.
//!
//! Loads [`RootConfig`] from `~/.config/listclone/config.toml` (or an explicit
//! path) and applies environment overrides on top.

use std::fs;
use std::path::{Path, PathBuf};

use listclone_core::config::RootConfig;
use listclone_core::error::Result;
use tracing::{debug, info};

pub const ENV_SITE_URL: &str = "LISTCLONE_SITE_URL";
pub const ENV_ACCESS_TOKEN: &str = "LISTCLONE_ACCESS_TOKEN";

/// Configuration service that reads the TOML config file once per call.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Uses the default config path under the user's config directory.
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Uses an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Default location: `<config dir>/listclone/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("listclone").join("config.toml"))
    }

    /// Resolved config file path, if any can be determined.
    pub fn path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(Self::default_path)
    }

    /// Loads the configuration, falling back to defaults when no file exists,
    /// then applies `LISTCLONE_SITE_URL` / `LISTCLONE_ACCESS_TOKEN`.
    pub fn load(&self) -> Result<RootConfig> {
        let mut config = match self.path() {
            Some(path) => Self::load_file(&path)?,
            None => RootConfig::default(),
        };
        apply_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(path)?;

        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        let config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment wins over the file. Empty values are ignored.
fn apply_overrides(config: &mut RootConfig, lookup: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(site_url) = lookup(ENV_SITE_URL) {
        config.store.site_url = site_url;
    }
    if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
        config.store.access_token = Some(token);
    }
}
