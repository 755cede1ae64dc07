//! HTTP transport for the chart API
//! GETs endpoints and POSTs form-encoded payloads, returning JSON bodies

use super::config::ClientConfig;
use crate::domain::ports::{PostPayload, Transport};
use crate::domain::{RequestOptions, TransportError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed transport.
/// Endpoints are appended verbatim to the base URL.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for `base_url` with a default per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send(
        &self,
        endpoint: &str,
        mut request: RequestBuilder,
        options: &RequestOptions,
    ) -> Result<Value, TransportError> {
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| TransportError::Request {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "Chart API response");
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                TransportError::Decode {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                }
            } else {
                TransportError::Request {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                }
            }
        })
    }
}

/// Payload fields as form values, each one JSON text (strings keep their quotes)
fn encode_form(payload: &PostPayload) -> Vec<(String, String)> {
    payload
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect()
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str, options: &RequestOptions) -> Result<Value, TransportError> {
        debug!(endpoint, "GET");
        let request = self.client.get(self.url(endpoint));
        self.send(endpoint, request, options).await
    }

    async fn post(
        &self,
        endpoint: &str,
        payload: PostPayload,
        options: &RequestOptions,
    ) -> Result<Value, TransportError> {
        debug!(endpoint, fields = payload.len(), "POST");
        let request = self
            .client
            .post(self.url(endpoint))
            .form(&encode_form(&payload));
        self.send(endpoint, request, options).await
    }
}
