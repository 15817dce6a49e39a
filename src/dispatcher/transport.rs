use crate::constants::network as network_constants;
use crate::dispatcher::request::{CallBody, OutboundCall};
use crate::dispatcher::routing::HttpMethod;
use crate::errors::DispatchError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Failures the transport can report without having a response in hand.
/// Non-2xx statuses are ordinary `HttpResponse`s and are classified by the
/// dispatcher.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// Request was sent but no response arrived (timeout, connection
    /// refused, DNS failure).
    Network(String),
    /// The request could not be constructed or serialized.
    Setup(String),
}

#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, call: &OutboundCall) -> Result<HttpResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DispatchError> {
        let client = Client::builder()
            .build()
            .map_err(|err| DispatchError::setup(format!("Failed to build HTTP client: {}", err)))?;
        Ok(Self {
            client,
            timeout_ms: network_constants::TIMEOUT_API_REQUEST_MS,
        })
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, call: &OutboundCall) -> Result<HttpResponse, TransportError> {
        let method = match call.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut headers = HeaderMap::new();
        for (name, value) in &call.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TransportError::Setup(format!("Invalid header name: {}", name)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| TransportError::Setup("Invalid header value".to_string()))?;
            headers.insert(name, value);
        }

        let mut req = self
            .client
            .request(method, &call.url)
            .headers(headers)
            .timeout(Duration::from_millis(self.timeout_ms));

        match &call.body {
            Some(CallBody::Json(value)) => {
                req = req.json(value);
            }
            Some(CallBody::Multipart(part)) => {
                let file = reqwest::multipart::Part::bytes(part.bytes.clone())
                    .file_name(part.filename.clone());
                let form = reqwest::multipart::Form::new().part(part.part_name.clone(), file);
                req = req.multipart(form);
            }
            None => {}
        }

        let response = req.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(map_reqwest_error)?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_builder() || err.is_body() {
        return TransportError::Setup(err.to_string());
    }
    TransportError::Network(err.to_string())
}
