//! Request shapes for the list REST endpoints.

use serde::Serialize;
use url::form_urlencoded;

use crate::record::{RecordRef, RECORD_SELECT_FIELDS};

pub const ACCEPT_NOMETADATA: &str = "application/json;odata=nometadata";
pub const CONTENT_TYPE_VERBOSE: &str = "application/json;odata=verbose";

/// Field holding the schema type token in the list metadata.
pub const ENTITY_TYPE_FIELD: &str = "ListItemEntityTypeFullName";

/// A request against the list store, ready for a transport to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreRequest {
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
}

impl StoreRequest {
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// Base endpoint of one list, addressed by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEndpoint {
    list_title: String,
    base: String,
}

impl ListEndpoint {
    pub fn new(site_url: &str, list_title: impl Into<String>) -> Self {
        let list_title = list_title.into();
        let base = format!(
            "{}/_api/web/lists/getbytitle('{}')",
            site_url.trim_end_matches('/'),
            title_literal(&list_title)
        );
        Self { list_title, base }
    }

    pub fn list_title(&self) -> &str {
        &self.list_title
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// `GET {list}?$select=ListItemEntityTypeFullName`
    pub fn entity_type_request(&self) -> StoreRequest {
        StoreRequest {
            url: format!("{}?$select={}", self.base, ENTITY_TYPE_FIELD),
            headers: read_headers(),
        }
    }

    /// `GET {list}/items({id})?$select=Title,Id,Photo,Description`
    pub fn record_request(&self, record: RecordRef) -> StoreRequest {
        StoreRequest {
            url: format!(
                "{}/items({})?$select={}",
                self.base, record.id, RECORD_SELECT_FIELDS
            ),
            headers: read_headers(),
        }
    }

    /// `POST {list}/items`
    pub fn create_request(&self) -> StoreRequest {
        let mut headers = read_headers();
        headers.push(("Content-type", CONTENT_TYPE_VERBOSE));
        StoreRequest {
            url: format!("{}/items", self.base),
            headers,
        }
    }
}

/// Escapes a title for use inside `getbytitle('...')`.
///
/// OData string literals escape a quote by doubling it. The literal is then
/// percent-encoded so `#`, `?` and `/` cannot end the path segment.
fn title_literal(title: &str) -> String {
    let literal = title.replace('\'', "''");
    // form encoding writes a space as `+`, which a path keeps literally.
    form_urlencoded::byte_serialize(literal.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn read_headers() -> Vec<(&'static str, &'static str)> {
    vec![("Accept", ACCEPT_NOMETADATA), ("odata-version", "")]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://contoso.example.com/sites/farm/";

    #[test]
    fn test_endpoint_urls() {
        let endpoint = ListEndpoint::new(SITE, "Sheep");
        assert_eq!(
            endpoint.base_url(),
            "https://contoso.example.com/sites/farm/_api/web/lists/getbytitle('Sheep')"
        );
        assert_eq!(
            endpoint.entity_type_request().url,
            format!("{}?$select=ListItemEntityTypeFullName", endpoint.base_url())
        );
        assert_eq!(
            endpoint.record_request(RecordRef::new(7)).url,
            format!("{}/items(7)?$select=Title,Id,Photo,Description", endpoint.base_url())
        );
        assert_eq!(
            endpoint.create_request().url,
            format!("{}/items", endpoint.base_url())
        );
    }

    #[test]
    fn test_quotes_in_list_title_are_doubled() {
        let endpoint = ListEndpoint::new(SITE, "Bob's Sheep");
        assert!(endpoint.base_url().ends_with("getbytitle('Bob%27%27s%20Sheep')"));
        assert_eq!(endpoint.list_title(), "Bob's Sheep");
    }

    #[test]
    fn test_reserved_characters_in_list_title_are_encoded() {
        let endpoint = ListEndpoint::new(SITE, "Q&A #1? a/b+c");
        assert_eq!(
            endpoint.base_url(),
            "https://contoso.example.com/sites/farm/_api/web/lists/getbytitle('Q%26A%20%231%3F%20a%2Fb%2Bc')"
        );
        assert_eq!(
            endpoint.record_request(RecordRef::new(7)).url,
            format!("{}/items(7)?$select=Title,Id,Photo,Description", endpoint.base_url())
        );
    }

    #[test]
    fn test_headers() {
        let endpoint = ListEndpoint::new(SITE, "Sheep");

        let get = endpoint.record_request(RecordRef::new(1));
        assert_eq!(get.header("accept"), Some(ACCEPT_NOMETADATA));
        assert_eq!(get.header("Content-type"), None);

        let post = endpoint.create_request();
        assert_eq!(post.header("Accept"), Some(ACCEPT_NOMETADATA));
        assert_eq!(post.header("content-type"), Some(CONTENT_TYPE_VERBOSE));
    }
}
