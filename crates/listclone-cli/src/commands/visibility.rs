use std::sync::Arc;

use anyhow::{Context, Result};
use listclone_application::{ListViewCommandSet, ListViewUpdatedEvent, PageContext};
use listclone_core::command::CommandRegistry;
use listclone_core::config::RootConfig;
use listclone_core::record::SelectedRow;

use super::utils::{http_store, ConsoleNotifier};

pub fn visibility(config: RootConfig, list: String, selected: usize) -> Result<()> {
    let store = http_store(&config)?;
    let mut command_set = ListViewCommandSet::new(
        PageContext::new(config.store.site_url.clone(), list),
        config.properties,
        CommandRegistry::with_builtin_commands(),
        store,
        Arc::new(ConsoleNotifier),
    )
    .with_target_lists(config.target_lists);
    command_set.on_init();

    let event = ListViewUpdatedEvent {
        selected_rows: vec![SelectedRow::new(); selected],
    };
    let map = command_set.on_list_view_updated(&event);

    let json = serde_json::to_string_pretty(&map).context("Failed to render visibility map")?;
    println!("{}", json);
    Ok(())
}
