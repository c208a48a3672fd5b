//! Creates a copy of a record in the same list.

use std::sync::Arc;

use listclone_core::endpoint::ListEndpoint;
use listclone_core::error::Result;
use listclone_core::record::{ClonePayload, Record};
use listclone_core::store::RemoteListStore;
use tracing::{debug, info};

use crate::schema_type_resolver::SchemaTypeResolver;

pub struct RecordCloner {
    store: Arc<dyn RemoteListStore>,
    resolver: Arc<SchemaTypeResolver>,
}

impl RecordCloner {
    pub fn new(store: Arc<dyn RemoteListStore>, resolver: Arc<SchemaTypeResolver>) -> Self {
        Self { store, resolver }
    }

    /// Resolves the schema type token, then POSTs a copy of `source` whose
    /// title carries the clone prefix. Returns the record the store created.
    ///
    /// Nothing is retried. Either the store created the record or it did not.
    pub async fn clone_record(&self, list: &ListEndpoint, source: &Record) -> Result<Record> {
        let token = self.resolver.resolve(list).await?;
        let payload = ClonePayload::from_source(&token, source);
        let body = serde_json::to_value(&payload)?;

        debug!(list = %list.list_title(), source_id = source.id, "Creating clone");
        let value = self.store.post_json(&list.create_request(), &body).await?;
        let created: Record = serde_json::from_value(value)?;

        info!(
            list = %list.list_title(),
            source_id = source.id,
            created_id = created.id,
            "Cloned record"
        );
        Ok(created)
    }
}
