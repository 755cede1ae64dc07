//! Transport port
//! Interface for issuing requests against the chart API and getting back
//! parsed JSON bodies

use crate::domain::{RequestOptions, TransportError};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Fields of a POST body; how they are encoded is up to the transport
pub type PostPayload = Map<String, Value>;

/// Port for talking to the chart API
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `endpoint` and return the parsed JSON body
    async fn get(&self, endpoint: &str, options: &RequestOptions) -> Result<Value, TransportError>;

    /// POST `payload` to `endpoint` and return the parsed JSON body
    async fn post(
        &self,
        endpoint: &str,
        payload: PostPayload,
        options: &RequestOptions,
    ) -> Result<Value, TransportError>;
}
