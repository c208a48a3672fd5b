use std::collections::BTreeMap;

use tracing::warn;

use super::builtin::builtin_commands;
use super::model::{Command, CommandId, CommandVisibilityMap};

/// Commands the host has registered for this command set.
///
/// Any manifest command may be absent. All reads and writes go through
/// `try_get_command*`, so a missing command turns an assignment into a no-op.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<CommandId, Command>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every manifest command, all visible.
    pub fn with_builtin_commands() -> Self {
        builtin_commands()
            .iter()
            .map(|builtin| builtin.to_command())
            .collect()
    }

    /// Registers (or replaces) a command.
    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.id, command);
    }

    pub fn try_get_command(&self, id: CommandId) -> Option<&Command> {
        self.commands.get(&id)
    }

    pub fn try_get_command_mut(&mut self, id: CommandId) -> Option<&mut Command> {
        self.commands.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current visibility of every registered command.
    pub fn visibility_map(&self) -> CommandVisibilityMap {
        self.commands
            .values()
            .map(|command| (command.id, command.visible))
            .collect()
    }

    /// Applies a visibility map. Entries for unregistered commands are skipped.
    pub fn apply_visibility(&mut self, map: &CommandVisibilityMap) {
        for (&id, &visible) in map {
            match self.try_get_command_mut(id) {
                Some(command) => command.visible = visible,
                None => warn!(command = %id, "Skipping visibility for unregistered command"),
            }
        }
    }
}

impl FromIterator<Command> for CommandRegistry {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut registry = Self::new();
        for command in iter {
            registry.register(command);
        }
        registry
    }
}
