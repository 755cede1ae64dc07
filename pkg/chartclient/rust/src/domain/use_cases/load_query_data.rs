//! LoadQueryData use case
//! Builds the query for a chart and posts it to the endpoint matching the
//! chart's API flavor

use crate::domain::constants::{
    LEGACY_PAYLOAD_KEY, LEGACY_QUERY_ENDPOINT, QUERY_CONTEXT_PAYLOAD_KEY, QUERY_ENDPOINT,
};
use crate::domain::ports::{BuildQueryRegistry, ChartMetadataRegistry, PostPayload, Transport};
use crate::domain::{DomainError, FormData, QueryData, RequestOptions};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Use case for loading query results
#[async_trait]
pub trait LoadQueryData: Send + Sync {
    async fn execute(
        &self,
        form_data: &FormData,
        options: &RequestOptions,
    ) -> Result<QueryData, DomainError>;
}

/// Implementation of LoadQueryData use case
pub struct LoadQueryDataUseCase {
    transport: Arc<dyn Transport>,
    metadata_registry: Arc<dyn ChartMetadataRegistry>,
    build_query_registry: Arc<dyn BuildQueryRegistry>,
}

impl LoadQueryDataUseCase {
    pub fn new(
        transport: Arc<dyn Transport>,
        metadata_registry: Arc<dyn ChartMetadataRegistry>,
        build_query_registry: Arc<dyn BuildQueryRegistry>,
    ) -> Self {
        Self {
            transport,
            metadata_registry,
            build_query_registry,
        }
    }
}

#[async_trait]
impl LoadQueryData for LoadQueryDataUseCase {
    async fn execute(
        &self,
        form_data: &FormData,
        options: &RequestOptions,
    ) -> Result<QueryData, DomainError> {
        let viz_type = form_data.viz_type().unwrap_or_default();

        let metadata = match self.metadata_registry.get(viz_type) {
            Some(metadata) if self.metadata_registry.has(viz_type) => metadata,
            _ => return Err(DomainError::UnknownVisualizationType(viz_type.to_string())),
        };

        // Charts without a registered builder send their form data as the query
        let query = match self.build_query_registry.get(viz_type).await {
            Some(build_query) => build_query(form_data),
            None => form_data.to_value(),
        };

        let (endpoint, payload_key) = if metadata.use_legacy_api {
            (LEGACY_QUERY_ENDPOINT, LEGACY_PAYLOAD_KEY)
        } else {
            (QUERY_ENDPOINT, QUERY_CONTEXT_PAYLOAD_KEY)
        };

        debug!(viz_type, endpoint, "Loading query data");

        let mut payload = PostPayload::new();
        payload.insert(payload_key.to_string(), query);

        Ok(self.transport.post(endpoint, payload, options).await?)
    }
}
