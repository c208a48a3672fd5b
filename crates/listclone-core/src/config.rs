//! Configuration model.
//!
//! Loading lives in `listclone-infrastructure`; this module only defines the
//! shape and defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_LIST: &str = "Custom Command";
pub const DEFAULT_SECONDARY_LIST: &str = "Sheep";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Properties the host passes to the command set.
///
/// Keys keep the host's camelCase names. Only `message_prefix` is consumed.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandSetProperties {
    pub sample_text_one: String,
    pub sample_text_two: String,
    pub message_prefix: String,
}

/// Connection settings for the list store.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Absolute URL of the site that owns the lists
    pub site_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token sent with every request, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            access_token: None,
        }
    }
}

/// The two list identities the visibility policy recognizes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TargetLists {
    pub primary: String,
    pub secondary: String,
}

impl Default for TargetLists {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_LIST.to_string(),
            secondary: DEFAULT_SECONDARY_LIST.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RootConfig {
    pub properties: CommandSetProperties,
    pub store: StoreConfig,
    pub target_lists: TargetLists,
}
