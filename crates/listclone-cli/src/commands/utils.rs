use std::sync::Arc;

use anyhow::{Context, Result};
use listclone_core::config::RootConfig;
use listclone_core::notification::{Notification, Notifier};
use listclone_core::record::SelectedRow;
use listclone_core::store::RemoteListStore;
use listclone_infrastructure::HttpListStore;

/// Parses `NAME=VALUE[,NAME=VALUE...]` into a selected row.
pub fn parse_row(raw: &str) -> std::result::Result<SelectedRow, String> {
    raw.split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", pair))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(format!("empty field name in '{}'", pair));
            }
            Ok((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Prints notifications the way a modal dialog would show them.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, notification: &Notification) {
        let label = match notification {
            Notification::Info(_) => "info",
            Notification::Success(_) => "success",
            Notification::Failure(_) => "failure",
        };
        println!("[{}] {}", label, notification);
    }
}

pub fn http_store(config: &RootConfig) -> Result<Arc<dyn RemoteListStore>> {
    let store = HttpListStore::new(&config.store).context("Failed to create list store client")?;
    Ok(Arc::new(store))
}
