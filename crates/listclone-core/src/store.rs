//! Remote list store trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::endpoint::StoreRequest;
use crate::error::Result;

/// Transport for the list REST API.
///
/// Implementations send the request as given and return the decoded JSON
/// body. Transport failures and non-success statuses are
/// [`ListCloneError::Network`](crate::error::ListCloneError::Network);
/// bodies that are not JSON are
/// [`ListCloneError::Parse`](crate::error::ListCloneError::Parse).
#[async_trait]
pub trait RemoteListStore: Send + Sync {
    /// Sends a GET request.
    async fn get_json(&self, request: &StoreRequest) -> Result<Value>;

    /// Sends a POST request with a JSON body.
    async fn post_json(&self, request: &StoreRequest, body: &Value) -> Result<Value>;
}
