//! Command visibility policy.
//!
//! Maps the active list and the selection size onto per-command visibility.
//! Only two lists are recognized; every other list leaves visibility as it was.

use tracing::debug;

use crate::command::{CommandId, CommandVisibilityMap};
use crate::config::TargetLists;

/// Which recognized list the view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetList {
    /// List with the informational commands
    Primary,
    /// List with the copy command
    Secondary,
}

impl TargetLists {
    /// Classifies a list identity. Comparison is exact, like the host's list title.
    pub fn classify(&self, list_identity: &str) -> Option<TargetList> {
        if list_identity == self.primary {
            Some(TargetList::Primary)
        } else if list_identity == self.secondary {
            Some(TargetList::Secondary)
        } else {
            None
        }
    }
}

/// Pure visibility rules for this command set.
#[derive(Debug, Clone, Default)]
pub struct VisibilityPolicy {
    target_lists: TargetLists,
}

impl VisibilityPolicy {
    pub fn new(target_lists: TargetLists) -> Self {
        Self { target_lists }
    }

    pub fn target_lists(&self) -> &TargetLists {
        &self.target_lists
    }

    /// Computes visibility for a view update.
    ///
    /// The keys of `prior` are the commands the host registered; only those
    /// are ever assigned. For an unrecognized list `prior` is returned as is.
    pub fn compute(
        &self,
        list_identity: &str,
        selection_size: usize,
        prior: &CommandVisibilityMap,
    ) -> CommandVisibilityMap {
        let mut map = prior.clone();
        let Some(target) = self.target_lists.classify(list_identity) else {
            debug!(list = list_identity, "List not targeted, visibility unchanged");
            return map;
        };

        let mut set = |id: CommandId, visible: bool| {
            if let Some(slot) = map.get_mut(&id) {
                *slot = visible;
            }
        };

        match target {
            TargetList::Primary => {
                set(CommandId::ItemCopy, false);
                set(CommandId::AlwaysOn, true);
                set(CommandId::OneItemSelected, selection_size == 1);
                set(CommandId::TwoItemSelected, selection_size == 2);
            }
            TargetList::Secondary => {
                set(CommandId::OneItemSelected, false);
                set(CommandId::TwoItemSelected, false);
                set(CommandId::AlwaysOn, false);
                set(CommandId::ItemCopy, selection_size == 1);
            }
        }

        debug!(list = list_identity, selection_size, ?target, "Computed command visibility");
        map
    }
}
