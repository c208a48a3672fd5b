//! Command domain models.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{ListCloneError, Result};

/// Stable identifiers of the commands this command set handles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandId {
    /// Informational command shown when exactly one row is selected
    OneItemSelected,
    /// Informational command shown when exactly two rows are selected
    TwoItemSelected,
    /// Informational command shown regardless of selection
    AlwaysOn,
    /// Clones the selected item
    ItemCopy,
}

impl CommandId {
    /// Parses a host command identifier.
    ///
    /// Unknown identifiers are a configuration mistake on the host side and
    /// yield [`ListCloneError::UnknownCommand`].
    pub fn from_id(id: &str) -> Result<Self> {
        Self::from_str(id).map_err(|_| ListCloneError::unknown_command(id))
    }
}

/// Visibility per registered command, recomputed on every view update.
pub type CommandVisibilityMap = BTreeMap<CommandId, bool>;

/// A command as registered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: CommandId,
    /// Label shown on the command bar
    pub title: String,
    pub visible: bool,
}

impl Command {
    pub fn new(id: CommandId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            visible: true,
        }
    }
}
