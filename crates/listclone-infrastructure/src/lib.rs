//! Infrastructure layer: HTTP transport for the list store and config loading.

pub mod config_service;
pub mod http_list_store;

pub use config_service::ConfigService;
pub use http_list_store::HttpListStore;
