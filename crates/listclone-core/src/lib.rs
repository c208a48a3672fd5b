//! Domain layer for the list clone command set.
//!
//! Holds the command model, the visibility policy, the record and request
//! shapes, and the `RemoteListStore` seam the application layer drives.

pub mod command;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod notification;
pub mod record;
pub mod store;
pub mod visibility;

// Re-export common error type
pub use error::{ListCloneError, Result};

pub use command::{Command, CommandId, CommandRegistry, CommandVisibilityMap};
pub use config::{CommandSetProperties, RootConfig, StoreConfig, TargetLists};
pub use endpoint::{ListEndpoint, StoreRequest};
pub use notification::{Notification, Notifier};
pub use record::{ClonePayload, Record, RecordRef, SchemaTypeToken, SelectedRow};
pub use store::RemoteListStore;
pub use visibility::{TargetList, VisibilityPolicy};
