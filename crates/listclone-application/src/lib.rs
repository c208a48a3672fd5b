//! Application layer for the list clone command set.
//!
//! Wires the domain rules in `listclone-core` to a `RemoteListStore`: schema
//! type resolution, record fetch and clone, command dispatch, and the command
//! set controller the host calls into.

pub mod command_dispatcher;
pub mod command_set;
pub mod record_cloner;
pub mod record_fetcher;
pub mod schema_type_resolver;

pub use command_dispatcher::CommandDispatcher;
pub use command_set::{ExecuteEvent, ListViewCommandSet, ListViewUpdatedEvent, PageContext};
pub use record_cloner::RecordCloner;
pub use record_fetcher::RecordFetcher;
pub use schema_type_resolver::SchemaTypeResolver;
