use std::sync::Arc;

use anyhow::{bail, Context, Result};
use listclone_application::{ExecuteEvent, ListViewCommandSet, PageContext};
use listclone_core::command::CommandRegistry;
use listclone_core::config::RootConfig;
use listclone_core::record::SelectedRow;

use super::utils::{http_store, ConsoleNotifier};

pub async fn execute(
    config: RootConfig,
    command: String,
    list: String,
    site: Option<String>,
    rows: Vec<SelectedRow>,
) -> Result<()> {
    let site_url = site.unwrap_or_else(|| config.store.site_url.clone());
    if site_url.trim().is_empty() {
        bail!("No site URL. Pass --site, set LISTCLONE_SITE_URL, or add store.site_url to the config file");
    }

    let store = http_store(&config)?;
    let command_set = ListViewCommandSet::new(
        PageContext::new(site_url, list),
        config.properties,
        CommandRegistry::with_builtin_commands(),
        store,
        Arc::new(ConsoleNotifier),
    )
    .with_target_lists(config.target_lists);
    command_set.on_init();

    let event = ExecuteEvent {
        item_id: command,
        selected_rows: rows,
    };
    command_set
        .on_execute(&event)
        .await
        .with_context(|| format!("Command '{}' failed", event.item_id))?;
    Ok(())
}
