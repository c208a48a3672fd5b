//! Commands declared by this command set's manifest.
//!
//! These definitions are what a host registers by default. They are built
//! once and cached for the lifetime of the process.

use serde::Serialize;
use std::sync::OnceLock;

use super::model::{Command, CommandId};

/// A manifest entry for one command.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltinCommand {
    pub id: CommandId,
    /// Command bar label
    pub title: &'static str,
}

impl BuiltinCommand {
    pub const fn new(id: CommandId, title: &'static str) -> Self {
        Self { id, title }
    }

    /// Materializes the manifest entry as a registered, visible command.
    pub fn to_command(&self) -> Command {
        Command::new(self.id, self.title)
    }
}

static BUILTIN_COMMANDS: OnceLock<Vec<BuiltinCommand>> = OnceLock::new();

/// Returns all manifest commands.
pub fn builtin_commands() -> &'static [BuiltinCommand] {
    BUILTIN_COMMANDS.get_or_init(|| {
        vec![
            BuiltinCommand::new(CommandId::OneItemSelected, "Command One"),
            BuiltinCommand::new(CommandId::TwoItemSelected, "Command Two"),
            BuiltinCommand::new(CommandId::AlwaysOn, "Always On"),
            BuiltinCommand::new(CommandId::ItemCopy, "Copy Item"),
        ]
    })
}

/// Looks up a manifest command by identifier.
pub fn find_builtin_command(id: CommandId) -> Option<&'static BuiltinCommand> {
    builtin_commands().iter().find(|command| command.id == id)
}
