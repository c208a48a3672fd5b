//! Fetches a single record by ID.

use std::sync::Arc;

use listclone_core::endpoint::ListEndpoint;
use listclone_core::error::Result;
use listclone_core::record::{Record, RecordRef};
use listclone_core::store::RemoteListStore;
use tracing::debug;

pub struct RecordFetcher {
    store: Arc<dyn RemoteListStore>,
}

impl RecordFetcher {
    pub fn new(store: Arc<dyn RemoteListStore>) -> Self {
        Self { store }
    }

    /// Issues one GET for the record's four modeled fields and decodes it.
    pub async fn fetch_record(&self, list: &ListEndpoint, record: RecordRef) -> Result<Record> {
        debug!(list = %list.list_title(), id = record.id, "Fetching record");
        let value = self.store.get_json(&list.record_request(record)).await?;
        Ok(serde_json::from_value(value)?)
    }
}
