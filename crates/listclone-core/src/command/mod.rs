//! Command definitions and the host-side registry.
//!
//! The hosting view framework owns the actual command buttons. This module
//! models the subset it registered for this command set so visibility can be
//! assigned through optional lookups only.

pub mod builtin;
pub mod model;
pub mod registry;

pub use builtin::{builtin_commands, find_builtin_command, BuiltinCommand};
pub use model::{Command, CommandId, CommandVisibilityMap};
pub use registry::CommandRegistry;
