#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use listclone_core::endpoint::StoreRequest;
use listclone_core::error::{ListCloneError, Result};
use listclone_core::notification::{Notification, Notifier};
use listclone_core::record::SelectedRow;
use listclone_core::store::RemoteListStore;
use serde_json::{json, Value};

pub const SITE: &str = "https://contoso.example.com/sites/farm";
pub const ENTITY_TYPE: &str = "SP.Data.SheepListItem";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post { url: String, content_type: Option<String>, body: Value },
}

/// In-memory list store keyed by record ID.
///
/// Every call yields once before answering so concurrent workflows interleave.
pub struct MockListStore {
    records: Mutex<HashMap<i64, Value>>,
    next_id: Mutex<i64>,
    failures: Mutex<Vec<(String, ListCloneError)>>,
    post_failure: Mutex<Option<ListCloneError>>,
    calls: Mutex<Vec<Call>>,
}

impl MockListStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(HashMap::new()),
            next_id: Mutex::new(100),
            failures: Mutex::new(Vec::new()),
            post_failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_record(self: Arc<Self>, id: i64, title: &str, photo: &str, description: &str) -> Arc<Self> {
        self.records.lock().unwrap().insert(
            id,
            json!({ "Id": id, "Title": title, "Photo": photo, "Description": description }),
        );
        self
    }

    /// Requests whose URL contains `fragment` fail with `error`.
    pub fn fail_when(self: Arc<Self>, fragment: &str, error: ListCloneError) -> Arc<Self> {
        self.failures.lock().unwrap().push((fragment.to_string(), error));
        self
    }

    /// Every POST fails with `error`.
    pub fn fail_posts(self: Arc<Self>, error: ListCloneError) -> Arc<Self> {
        *self.post_failure.lock().unwrap() = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn metadata_gets(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Get(url) if url.contains("ListItemEntityTypeFullName")))
            .count()
    }

    pub fn posts(&self) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Post { body, .. } => Some(body),
                Call::Get(_) => None,
            })
            .collect()
    }

    fn check_failure(&self, url: &str) -> Result<()> {
        let failures = self.failures.lock().unwrap();
        match failures.iter().find(|(fragment, _)| url.contains(fragment.as_str())) {
            Some((_, error)) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

fn item_id(url: &str) -> Option<i64> {
    let start = url.find("/items(")? + "/items(".len();
    let end = start + url[start..].find(')')?;
    url[start..end].parse().ok()
}

#[async_trait]
impl RemoteListStore for MockListStore {
    async fn get_json(&self, request: &StoreRequest) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::Get(request.url.clone()));
        tokio::task::yield_now().await;
        self.check_failure(&request.url)?;

        if request.url.contains("$select=ListItemEntityTypeFullName") {
            return Ok(json!({ "ListItemEntityTypeFullName": ENTITY_TYPE }));
        }
        let id = item_id(&request.url)
            .ok_or_else(|| ListCloneError::http_status(400, format!("bad url {}", request.url)))?;
        self.records
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ListCloneError::http_status(404, "Item does not exist"))
    }

    async fn post_json(&self, request: &StoreRequest, body: &Value) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::Post {
            url: request.url.clone(),
            content_type: request.header("Content-type").map(str::to_string),
            body: body.clone(),
        });
        tokio::task::yield_now().await;
        if let Some(error) = self.post_failure.lock().unwrap().clone() {
            return Err(error);
        }

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        let created = json!({
            "Id": id,
            "Title": body["Title"],
            "Photo": body["Photo"],
            "Description": body["Description"],
        });
        self.records.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alerts(&self) -> Vec<Notification> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, notification: &Notification) {
        self.alerts.lock().unwrap().push(notification.clone());
    }
}

pub fn row(id: i64, title: &str) -> SelectedRow {
    SelectedRow::new()
        .with_value("ID", id.to_string())
        .with_value("Title", title)
}
