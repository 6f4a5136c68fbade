//! Fetch client with dependency tagging.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::dependency::DependencyTag;
use crate::transport::{HttpTransport, TransportRequest, TransportResponse};

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

/// Outcome of one fetch, kept for request metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRecord {
    pub tag: DependencyTag,
    /// Method and URL without the API key.
    pub target: String,
    pub duration: Duration,
    pub error: Option<String>,
}

/// Fetch client over a pluggable transport.
///
/// No retries and no timeouts: a failed call is reported once and the
/// caller renders its error state.
pub struct FetchClient<T> {
    transport: T,
    api_key: Option<String>,
    records: RefCell<Vec<FetchRecord>>,
}

impl<T: HttpTransport> FetchClient<T> {
    /// Create a new fetch client.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            api_key: None,
            records: RefCell::new(Vec::new()),
        }
    }

    /// Append `key=<api key>` to every request URL.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    /// GET a JSON document.
    pub async fn get_json(&self, url: &str, tag: DependencyTag) -> Result<Value, FetchError> {
        let request = TransportRequest::get(self.authorize(url));
        self.execute(request, url, tag).await
    }

    /// POST a JSON body and decode the JSON answer.
    pub async fn post_json(
        &self,
        url: &str,
        body: &Value,
        tag: DependencyTag,
    ) -> Result<Value, FetchError> {
        let request = TransportRequest::post_json(self.authorize(url), body);
        self.execute(request, url, tag).await
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Take the records collected so far.
    pub fn drain_records(&self) -> Vec<FetchRecord> {
        self.records.borrow_mut().drain(..).collect()
    }

    async fn execute(
        &self,
        request: TransportRequest,
        url: &str,
        tag: DependencyTag,
    ) -> Result<Value, FetchError> {
        let target = format!("{} {}", request.method, url);
        let start = Instant::now();
        let result = self
            .transport
            .send(request)
            .await
            .and_then(|response| decode(response, url));

        self.records.borrow_mut().push(FetchRecord {
            tag,
            target,
            duration: start.elapsed(),
            error: result.as_ref().err().map(ToString::to_string),
        });

        result
    }

    fn authorize(&self, url: &str) -> String {
        match &self.api_key {
            Some(key) => {
                let separator = if url.contains('?') { '&' } else { '?' };
                format!("{}{}key={}", url, separator, urlencoding::encode(key))
            }
            None => url.to_string(),
        }
    }
}

fn decode(response: TransportResponse, url: &str) -> Result<Value, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Http {
            status: response.status,
            url: url.to_string(),
        });
    }
    serde_json::from_slice(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::collections::VecDeque;

    /// Transport answering from a queue and remembering what it was asked.
    #[derive(Default)]
    pub(crate) struct ScriptedTransport {
        pub replies: RefCell<VecDeque<Result<TransportResponse, FetchError>>>,
        pub requests: RefCell<Vec<TransportRequest>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Ok(TransportResponse::new(status, body.as_bytes())));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(FetchError::Transport(message.to_string())));
            self
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: TransportRequest) -> Result<TransportResponse, FetchError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Transport("no scripted reply".to_string())))
        }
    }

    #[test]
    fn test_get_json_appends_api_key() {
        let transport = ScriptedTransport::default().reply(200, r#"{"ok":true}"#);
        let client = FetchClient::new(transport).with_api_key(Some("k 1".to_string()));

        let value = block_on(client.get_json("https://db/doc", DependencyTag::Products)).unwrap();
        assert_eq!(value["ok"], true);

        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].url, "https://db/doc?key=k%201");
        assert_eq!(requests[0].method, gudang_core::Method::GET);
    }

    #[test]
    fn test_http_error_is_recorded_without_key() {
        let transport = ScriptedTransport::default().reply(503, "unavailable");
        let client = FetchClient::new(transport).with_api_key(Some("secret".to_string()));

        let err = block_on(client.post_json(
            "https://db/documents:runQuery",
            &serde_json::json!({}),
            DependencyTag::Brands,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 503,
                url: "https://db/documents:runQuery".to_string()
            }
        );

        let records = client.drain_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag, DependencyTag::Brands);
        assert!(!records[0].target.contains("secret"));
        assert!(records[0].error.is_some());
        assert!(client.drain_records().is_empty());
    }

    #[test]
    fn test_bad_json_is_a_decode_error() {
        let client = FetchClient::new(ScriptedTransport::default().reply(200, "<html>"));
        let err = block_on(client.get_json("https://db/x", DependencyTag::Banners)).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_not_found_helper() {
        let client = FetchClient::new(ScriptedTransport::default().reply(404, "{}"));
        let err = block_on(client.get_json("https://db/x", DependencyTag::Products)).unwrap_err();
        assert!(err.is_not_found());
    }
}
