//! List records, selected rows and the clone payload.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ListCloneError, Result};

/// Marker prepended to the title of every cloned record.
pub const CLONE_TITLE_PREFIX: &str = "[Clone] - ";

/// Field list requested when fetching a record.
pub const RECORD_SELECT_FIELDS: &str = "Title,Id,Photo,Description";

/// One entry in the remote list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Empty list fields come back as JSON `null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A row of the current selection, keyed by internal field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRow {
    values: HashMap<String, String>,
}

impl SelectedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn value_by_name(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Title of the row, empty when the view did not load it.
    pub fn title(&self) -> &str {
        self.value_by_name("Title").unwrap_or_default()
    }

    /// Reference to the record behind this row.
    pub fn record_ref(&self) -> Result<RecordRef> {
        let raw = self
            .value_by_name("ID")
            .ok_or_else(|| ListCloneError::invalid_selection("selected row has no ID"))?;
        RecordRef::parse(raw)
    }
}

impl FromIterator<(String, String)> for SelectedRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Identifier of a record in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    pub id: i64,
}

impl RecordRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    /// Parses the row's `ID` value. Only non-negative integers are accepted
    /// since the value is interpolated into the request path.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ListCloneError::invalid_selection(format!(
                "'{raw}' is not a record ID"
            )));
        }
        trimmed
            .parse()
            .map(Self::new)
            .map_err(|e| ListCloneError::invalid_selection(format!("'{raw}': {e}")))
    }
}

/// Type name the store requires to create a record in a given list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaTypeToken(String);

impl SchemaTypeToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaTypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityMetadata {
    #[serde(rename = "type")]
    pub type_name: SchemaTypeToken,
}

/// Body of the create request for a cloned record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClonePayload {
    #[serde(rename = "__metadata")]
    pub metadata: EntityMetadata,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Photo")]
    pub photo: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl ClonePayload {
    /// Builds the payload for a copy of `source`: prefixed title, other fields verbatim.
    pub fn from_source(token: &SchemaTypeToken, source: &Record) -> Self {
        Self {
            metadata: EntityMetadata {
                type_name: token.clone(),
            },
            title: format!("{CLONE_TITLE_PREFIX}{}", source.title),
            photo: source.photo.clone(),
            description: source.description.clone(),
        }
    }
}
