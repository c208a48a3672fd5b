//! User-facing notifications and the host's modal API.

use std::fmt;

use serde::Serialize;

/// Text shown when the copy workflow fails. Details go to the log only.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy the item.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Notification {
    Info(String),
    Success(String),
    Failure(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Success(message) | Self::Failure(message) => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn copy_failed() -> Self {
        Self::Failure(COPY_FAILED_MESSAGE.to_string())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Host modal / notification surface.
pub trait Notifier: Send + Sync {
    fn alert(&self, notification: &Notification);
}
