//! The command set the host talks to.
//!
//! The host calls `on_list_view_updated` whenever the view or the selection
//! changes and `on_execute` when a command is clicked.

use std::sync::Arc;

use listclone_core::command::{CommandRegistry, CommandVisibilityMap};
use listclone_core::config::{CommandSetProperties, TargetLists};
use listclone_core::endpoint::ListEndpoint;
use listclone_core::error::Result;
use listclone_core::notification::{Notification, Notifier};
use listclone_core::record::SelectedRow;
use listclone_core::store::RemoteListStore;
use listclone_core::visibility::VisibilityPolicy;
use tracing::{debug, info};

use crate::command_dispatcher::CommandDispatcher;

/// Where the view lives: the site and the list it is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub site_url: String,
    pub list_title: String,
}

impl PageContext {
    pub fn new(site_url: impl Into<String>, list_title: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            list_title: list_title.into(),
        }
    }

    pub fn list_endpoint(&self) -> ListEndpoint {
        ListEndpoint::new(&self.site_url, self.list_title.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListViewUpdatedEvent {
    pub selected_rows: Vec<SelectedRow>,
}

#[derive(Debug, Clone)]
pub struct ExecuteEvent {
    pub item_id: String,
    pub selected_rows: Vec<SelectedRow>,
}

pub struct ListViewCommandSet {
    context: PageContext,
    properties: CommandSetProperties,
    registry: CommandRegistry,
    policy: VisibilityPolicy,
    dispatcher: CommandDispatcher,
    notifier: Arc<dyn Notifier>,
}

impl ListViewCommandSet {
    pub fn new(
        context: PageContext,
        properties: CommandSetProperties,
        registry: CommandRegistry,
        store: Arc<dyn RemoteListStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            context,
            properties,
            registry,
            policy: VisibilityPolicy::default(),
            dispatcher: CommandDispatcher::new(store),
            notifier,
        }
    }

    pub fn with_target_lists(mut self, target_lists: TargetLists) -> Self {
        self.policy = VisibilityPolicy::new(target_lists);
        self
    }

    pub fn on_init(&self) {
        info!(list = %self.context.list_title, "Initialized list clone command set");
    }

    /// The host navigated to another list. The schema type token is kept.
    pub fn set_context(&mut self, context: PageContext) {
        self.context = context;
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Recomputes and applies command visibility for the current view.
    pub fn on_list_view_updated(&mut self, event: &ListViewUpdatedEvent) -> CommandVisibilityMap {
        let map = self.policy.compute(
            &self.context.list_title,
            event.selected_rows.len(),
            &self.registry.visibility_map(),
        );
        self.registry.apply_visibility(&map);
        debug!(?map, "Applied command visibility");
        map
    }

    /// Dispatches the clicked command and shows its notification.
    ///
    /// An unknown command is returned as an error and nothing is shown.
    pub async fn on_execute(&self, event: &ExecuteEvent) -> Result<Notification> {
        let notification = self
            .dispatcher
            .execute(
                &event.item_id,
                &event.selected_rows,
                &self.properties.message_prefix,
                &self.context.list_endpoint(),
            )
            .await?;
        self.notifier.alert(&notification);
        Ok(notification)
    }
}
