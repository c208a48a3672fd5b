//! HttpListStore - reqwest implementation of the list store transport.

use std::time::Duration;

use async_trait::async_trait;
use listclone_core::config::StoreConfig;
use listclone_core::endpoint::StoreRequest;
use listclone_core::error::{ListCloneError, Result};
use listclone_core::store::RemoteListStore;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

/// List store client talking JSON over HTTP.
#[derive(Clone)]
pub struct HttpListStore {
    client: Client,
    access_token: Option<String>,
}

impl HttpListStore {
    /// Creates a client with the configured timeout applied to every request.
    ///
    /// A zero timeout would fail every request immediately and is rejected.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(ListCloneError::config(
                "store.timeout_secs must be at least 1 second",
            ));
        }

        let client = Client::builder()
            .user_agent(concat!("listclone/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ListCloneError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            access_token: config.access_token.clone(),
        })
    }

    fn prepare(&self, mut builder: RequestBuilder, request: &StoreRequest) -> RequestBuilder {
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder, url: &str) -> Result<Value> {
        let response = builder.send().await.map_err(|e| transport_error(url, e))?;
        read_json(response).await
    }
}

#[async_trait]
impl RemoteListStore for HttpListStore {
    async fn get_json(&self, request: &StoreRequest) -> Result<Value> {
        debug!(url = %request.url, "GET");
        let builder = self.prepare(self.client.get(&request.url), request);
        self.send(builder, &request.url).await
    }

    async fn post_json(&self, request: &StoreRequest, body: &Value) -> Result<Value> {
        debug!(url = %request.url, "POST");
        // Body is set raw so the request's own Content-type header is the only one sent.
        let builder = self
            .prepare(self.client.post(&request.url), request)
            .body(body.to_string());
        self.send(builder, &request.url).await
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> ListCloneError {
    if err.is_timeout() {
        ListCloneError::network(format!("Request to {} timed out", url))
    } else {
        ListCloneError::network(format!("Request to {} failed: {}", url, err))
    }
}

async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ListCloneError::network(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
        let detail = if text.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            text
        };
        return Err(ListCloneError::http_status(status.as_u16(), detail));
    }

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listclone_core::endpoint::{ListEndpoint, ACCEPT_NOMETADATA, CONTENT_TYPE_VERBOSE};
    use listclone_core::record::RecordRef;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves exactly one canned response and hands back the raw request text.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let site = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (site, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn store() -> HttpListStore {
        HttpListStore::new(&StoreConfig {
            site_url: String::new(),
            timeout_secs: 5,
            access_token: Some("secret-token".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = HttpListStore::new(&StoreConfig {
            site_url: String::new(),
            timeout_secs: 0,
            access_token: None,
        });

        match result {
            Err(ListCloneError::Config(message)) => assert!(message.contains("timeout_secs")),
            Err(other) => panic!("expected config error, got {other:?}"),
            Ok(_) => panic!("zero timeout was accepted"),
        }
    }

    #[tokio::test]
    async fn test_get_sends_headers_and_parses_body() {
        let (site, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"Id":7,"Title":"Foo","Photo":"p.jpg","Description":"d"}"#,
        )
        .await;
        let request = ListEndpoint::new(&site, "Sheep").record_request(RecordRef::new(7));

        let value = store().get_json(&request).await.unwrap();
        assert_eq!(value["Title"], "Foo");

        let raw = server.await.unwrap().to_lowercase();
        assert!(raw.starts_with("get /_api/web/lists/getbytitle('sheep')/items(7)?$select=title,id,photo,description"));
        assert!(raw.contains(&format!("accept: {}", ACCEPT_NOMETADATA)));
        assert!(raw.contains("authorization: bearer secret-token"));
    }

    #[tokio::test]
    async fn test_post_sends_verbose_content_type_once() {
        let (site, server) = serve_once("HTTP/1.1 201 Created", r#"{"Id":8,"Title":"[Clone] - Foo"}"#).await;
        let request = ListEndpoint::new(&site, "Sheep").create_request();

        let value = store()
            .post_json(&request, &json!({"Title": "[Clone] - Foo"}))
            .await
            .unwrap();
        assert_eq!(value["Id"], 8);

        let raw = server.await.unwrap().to_lowercase();
        assert!(raw.starts_with("post /_api/web/lists/getbytitle('sheep')/items "));
        assert_eq!(raw.matches("content-type:").count(), 1);
        assert!(raw.contains(&format!("content-type: {}", CONTENT_TYPE_VERBOSE)));
        assert!(raw.ends_with(r#"{"title":"[clone] - foo"}"#));
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let (site, server) = serve_once(
            "HTTP/1.1 404 Not Found",
            r#"{"odata.error":{"message":"List 'Sheep' does not exist"}}"#,
        )
        .await;
        let request = ListEndpoint::new(&site, "Sheep").entity_type_request();

        let err = store().get_json(&request).await.unwrap_err();
        match err {
            ListCloneError::Network { status, message } => {
                assert_eq!(status, Some(404));
                assert!(message.contains("does not exist"));
            }
            other => panic!("expected network error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (site, server) = serve_once("HTTP/1.1 200 OK", "<html>login</html>").await;
        let request = ListEndpoint::new(&site, "Sheep").entity_type_request();

        let err = store().get_json(&request).await.unwrap_err();
        assert!(err.is_parse());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_reserved_characters_in_list_title_stay_in_path() {
        let (site, server) = serve_once("HTTP/1.1 200 OK", r#"{"ListItemEntityTypeFullName":"SP.Data.QAListItem"}"#).await;
        let request = ListEndpoint::new(&site, "Q&A #1?").entity_type_request();

        let value = store().get_json(&request).await.unwrap();
        assert_eq!(value["ListItemEntityTypeFullName"], "SP.Data.QAListItem");

        let raw = server.await.unwrap();
        assert!(raw.starts_with(
            "GET /_api/web/lists/getbytitle('Q%26A%20%231%3F')?$select=ListItemEntityTypeFullName "
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let site = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let request = ListEndpoint::new(&site, "Sheep").entity_type_request();
        let err = store().get_json(&request).await.unwrap_err();
        assert!(err.is_network());
    }
}
