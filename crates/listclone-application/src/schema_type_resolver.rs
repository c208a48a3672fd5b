//! Schema type token resolution.
//!
//! The store only accepts a create request that names the list's item entity
//! type. It is fetched once per command set and kept for the rest of the
//! session; switching lists does not invalidate it.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use listclone_core::endpoint::{ListEndpoint, ENTITY_TYPE_FIELD};
use listclone_core::error::{ListCloneError, Result};
use listclone_core::record::SchemaTypeToken;
use listclone_core::store::RemoteListStore;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct EntityTypeResponse {
    #[serde(rename = "ListItemEntityTypeFullName")]
    list_item_entity_type_full_name: String,
}

#[derive(Debug, Clone)]
struct Resolved {
    list_title: String,
    token: SchemaTypeToken,
}

type PendingResolve = Shared<BoxFuture<'static, Result<Resolved>>>;

enum Slot {
    Empty,
    Pending(PendingResolve),
    Ready(Resolved),
}

/// Resolves and memoizes the schema type token.
///
/// Every caller that arrives while a request is in flight awaits that same
/// request and sees its outcome, success or failure. A failure empties the
/// slot, so only a later call starts over.
pub struct SchemaTypeResolver {
    store: Arc<dyn RemoteListStore>,
    slot: Mutex<Slot>,
}

impl SchemaTypeResolver {
    pub fn new(store: Arc<dyn RemoteListStore>) -> Self {
        Self {
            store,
            slot: Mutex::new(Slot::Empty),
        }
    }

    /// Returns the cached token, resolving it against `list` on first use.
    pub async fn resolve(&self, list: &ListEndpoint) -> Result<SchemaTypeToken> {
        let pending = {
            let mut slot = self.slot.lock().await;
            match &*slot {
                Slot::Ready(resolved) => return Ok(Self::token_for(resolved, list)),
                Slot::Pending(pending) => pending.clone(),
                Slot::Empty => {
                    let pending = Self::fetch(self.store.clone(), list.clone())
                        .boxed()
                        .shared();
                    *slot = Slot::Pending(pending.clone());
                    pending
                }
            }
        };

        let outcome = pending.clone().await;

        let mut slot = self.slot.lock().await;
        // Only the caller that still sees its own request settles the slot.
        if matches!(&*slot, Slot::Pending(current) if current.ptr_eq(&pending)) {
            *slot = match &outcome {
                Ok(resolved) => Slot::Ready(resolved.clone()),
                Err(_) => Slot::Empty,
            };
        }
        drop(slot);

        outcome.map(|resolved| Self::token_for(&resolved, list))
    }

    /// The cached token, if resolution already succeeded.
    pub async fn cached(&self) -> Option<SchemaTypeToken> {
        match &*self.slot.lock().await {
            Slot::Ready(resolved) => Some(resolved.token.clone()),
            Slot::Empty | Slot::Pending(_) => None,
        }
    }

    fn token_for(resolved: &Resolved, list: &ListEndpoint) -> SchemaTypeToken {
        if resolved.list_title != list.list_title() {
            warn!(
                cached_for = %resolved.list_title,
                list = %list.list_title(),
                "Using schema type token cached for a different list"
            );
        }
        resolved.token.clone()
    }

    async fn fetch(store: Arc<dyn RemoteListStore>, list: ListEndpoint) -> Result<Resolved> {
        debug!(list = %list.list_title(), "Resolving schema type token");
        let value = store.get_json(&list.entity_type_request()).await?;
        let response: EntityTypeResponse = serde_json::from_value(value)?;

        if response.list_item_entity_type_full_name.is_empty() {
            return Err(ListCloneError::parse(format!("{} is empty", ENTITY_TYPE_FIELD)));
        }

        Ok(Resolved {
            list_title: list.list_title().to_string(),
            token: SchemaTypeToken::new(response.list_item_entity_type_full_name),
        })
    }
}
