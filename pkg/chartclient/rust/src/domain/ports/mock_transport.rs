//! Mock transport implementation for testing
//! Serves canned JSON bodies per endpoint and records every request

use crate::domain::{RequestOptions, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{PostPayload, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

/// A request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: RequestMethod,
    pub endpoint: String,
    pub payload: Option<PostPayload>,
    pub options: RequestOptions,
}

/// In-memory transport for tests.
/// Endpoints without a canned response answer with a 404 status error.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, Result<Value, TransportError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests to `endpoint` with `body`
    pub fn respond(&self, endpoint: impl Into<String>, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.into(), Ok(body));
        self
    }

    /// Fail requests to `endpoint` with `error`
    pub fn fail(&self, endpoint: impl Into<String>, error: TransportError) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.into(), Err(error));
        self
    }

    /// All requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, method: RequestMethod) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    fn answer(&self, request: RecordedRequest) -> Result<Value, TransportError> {
        let endpoint = request.endpoint.clone();
        self.requests.lock().unwrap().push(request);

        match self.responses.lock().unwrap().get(&endpoint) {
            Some(response) => response.clone(),
            None => Err(TransportError::Status {
                status: 404,
                endpoint,
            }),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, endpoint: &str, options: &RequestOptions) -> Result<Value, TransportError> {
        self.answer(RecordedRequest {
            method: RequestMethod::Get,
            endpoint: endpoint.to_string(),
            payload: None,
            options: options.clone(),
        })
    }

    async fn post(
        &self,
        endpoint: &str,
        payload: PostPayload,
        options: &RequestOptions,
    ) -> Result<Value, TransportError> {
        self.answer(RecordedRequest {
            method: RequestMethod::Post,
            endpoint: endpoint.to_string(),
            payload: Some(payload),
            options: options.clone(),
        })
    }
}
