//! Outbound HTTP seam.

use async_trait::async_trait;
use gudang_core::Method;

use crate::client::FetchError;

/// A request handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// A GET request accepting JSON.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// A POST request with a JSON body.
    pub fn post_json(url: impl Into<String>, body: &serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body: Some(body.to_string().into_bytes()),
        }
    }
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the network.
///
/// The component uses the Spin host; the CLI plugs in its own client.
/// Futures are not required to be `Send` because the component runs on a
/// single-threaded executor.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, FetchError>;
}

/// Transport backed by Spin's outbound HTTP.
#[cfg(feature = "spin")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(feature = "spin")]
#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request, Response};

        let method = if request.method == Method::POST {
            SpinMethod::Post
        } else {
            SpinMethod::Get
        };

        let mut builder = Request::builder();
        builder.method(method).uri(&request.url);
        for (name, value) in &request.headers {
            builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder.body(body);
        }

        let response: Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(TransportResponse::new(*response.status(), response.into_body()))
    }
}
