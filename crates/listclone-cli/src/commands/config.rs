use std::path::Path;

use anyhow::{Context, Result};
use listclone_core::config::RootConfig;
use listclone_infrastructure::ConfigService;

pub fn load_config(path: Option<&Path>) -> Result<RootConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    service.load().context("Failed to load configuration")
}

/// Prints the effective configuration as TOML with the access token masked.
pub fn show_config(config: &RootConfig) -> Result<()> {
    let mut shown = config.clone();
    if shown.store.access_token.is_some() {
        shown.store.access_token = Some("********".to_string());
    }
    let rendered = toml::to_string_pretty(&shown).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}
