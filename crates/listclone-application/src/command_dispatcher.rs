//! Maps an invoked command onto its action.

use std::sync::Arc;

use listclone_core::command::CommandId;
use listclone_core::endpoint::ListEndpoint;
use listclone_core::error::{ListCloneError, Result};
use listclone_core::notification::Notification;
use listclone_core::record::{Record, SelectedRow};
use listclone_core::store::RemoteListStore;
use tracing::{error, info};

use crate::record_cloner::RecordCloner;
use crate::record_fetcher::RecordFetcher;
use crate::schema_type_resolver::SchemaTypeResolver;

/// Stateless apart from the schema type token cached inside the cloner.
pub struct CommandDispatcher {
    fetcher: RecordFetcher,
    cloner: RecordCloner,
}

impl CommandDispatcher {
    pub fn new(store: Arc<dyn RemoteListStore>) -> Self {
        let resolver = Arc::new(SchemaTypeResolver::new(store.clone()));
        Self {
            fetcher: RecordFetcher::new(store.clone()),
            cloner: RecordCloner::new(store, resolver),
        }
    }

    /// Runs `command_id` against the current selection.
    ///
    /// Returns `Err` only for an unknown command, which is raised before any
    /// I/O. A failed copy becomes a [`Notification::Failure`].
    pub async fn execute(
        &self,
        command_id: &str,
        selection: &[SelectedRow],
        message_prefix: &str,
        list: &ListEndpoint,
    ) -> Result<Notification> {
        let command = CommandId::from_id(command_id)?;

        let notification = match command {
            CommandId::OneItemSelected => {
                let title = selection.first().map(SelectedRow::title).unwrap_or_default();
                Notification::Info(format!(
                    "{message_prefix} {command} command clicked; Title = {title}"
                ))
            }
            CommandId::TwoItemSelected => {
                let title = selection.last().map(SelectedRow::title).unwrap_or_default();
                Notification::Info(format!(
                    "{message_prefix} {command} command clicked; Title = {title}"
                ))
            }
            CommandId::AlwaysOn => Notification::Info(format!(
                "{message_prefix} {command} command clicked. Total selected: {}",
                selection.len()
            )),
            CommandId::ItemCopy => match self.copy_item(list, selection).await {
                Ok(created) => Notification::Success(format!(
                    "Item copied: {} (ID {})",
                    created.title, created.id
                )),
                Err(err) => {
                    error!(list = %list.list_title(), error = %err, "Copy failed");
                    Notification::copy_failed()
                }
            },
        };

        Ok(notification)
    }

    /// Fetches the first selected record, then clones it.
    pub async fn copy_item(&self, list: &ListEndpoint, selection: &[SelectedRow]) -> Result<Record> {
        let row = selection
            .first()
            .ok_or_else(|| ListCloneError::invalid_selection("no item selected"))?;
        let record_ref = row.record_ref()?;

        let source = self.fetcher.fetch_record(list, record_ref).await?;
        info!(list = %list.list_title(), id = source.id, "Fetched record to copy");
        self.cloner.clone_record(list, &source).await
    }
}
