//! Error types for the list clone command set.

use thiserror::Error;

/// A shared error type for every listclone crate.
///
/// Variants map onto how the host reacts: `UnknownCommand` is a hard failure,
/// everything else raised inside a workflow ends up as a failure notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListCloneError {
    /// The host invoked a command identifier this command set does not know.
    #[error("Unknown command: '{command_id}'")]
    UnknownCommand { command_id: String },

    /// The current selection cannot drive the requested command.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// HTTP transport failure or non-success status from the list store.
    #[error("Network error{}: {message}", status_suffix(.status))]
    Network {
        status: Option<u16>,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Parse error: {format} - {message}")]
    Parse {
        format: String, // "JSON", "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl ListCloneError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownCommand error
    pub fn unknown_command(command_id: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command_id: command_id.into(),
        }
    }

    /// Creates an InvalidSelection error
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection(message.into())
    }

    /// Creates a Network error without an HTTP status (transport, timeout)
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Network error for a non-success HTTP status
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a JSON Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            format: "JSON".to_string(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an UnknownCommand error
    pub fn is_unknown_command(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. })
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is a Parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Fatal errors signal a programming or configuration mistake in the host
    /// and must not be turned into a user notification.
    pub fn is_fatal(&self) -> bool {
        self.is_unknown_command()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ListCloneError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ListCloneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ListCloneError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({code})")).unwrap_or_default()
}

/// A type alias for `Result<T, ListCloneError>`.
pub type Result<T> = std::result::Result<T, ListCloneError>;
