//! LoadDatasource use case

use crate::domain::constants::datasource_metadata_endpoint;
use crate::domain::ports::Transport;
use crate::domain::{DatasourceMetadata, DomainError, RequestOptions};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Use case for loading datasource metadata
#[async_trait]
pub trait LoadDatasource: Send + Sync {
    async fn execute(
        &self,
        datasource_key: &str,
        options: &RequestOptions,
    ) -> Result<DatasourceMetadata, DomainError>;
}

/// Implementation of LoadDatasource use case
pub struct LoadDatasourceUseCase {
    transport: Arc<dyn Transport>,
}

impl LoadDatasourceUseCase {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl LoadDatasource for LoadDatasourceUseCase {
    async fn execute(
        &self,
        datasource_key: &str,
        options: &RequestOptions,
    ) -> Result<DatasourceMetadata, DomainError> {
        debug!(datasource_key, "Loading datasource metadata");
        let endpoint = datasource_metadata_endpoint(datasource_key);
        Ok(self.transport.get(&endpoint, options).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockTransport, RequestMethod};
    use crate::domain::TransportError;
    use serde_json::json;

    #[tokio::test]
    async fn test_returns_body_unchanged() {
        let transport = Arc::new(MockTransport::new());
        let metadata = json!({"id": 5, "type": "table", "columns": [{"column_name": "region"}]});
        transport.respond(
            "/superset/fetch_datasource_metadata?datasourceKey=5__table",
            metadata.clone(),
        );
        let use_case = LoadDatasourceUseCase::new(transport.clone());

        let result = use_case
            .execute("5__table", &RequestOptions::default())
            .await
            .unwrap();

        assert_eq!(result, metadata);
        assert_eq!(transport.request_count(RequestMethod::Get), 1);
    }

    #[tokio::test]
    async fn test_unknown_datasource_is_a_transport_error() {
        let transport = Arc::new(MockTransport::new());
        let use_case = LoadDatasourceUseCase::new(transport);

        let result = use_case
            .execute("404__table", &RequestOptions::default())
            .await;

        assert_eq!(
            result,
            Err(DomainError::Transport(TransportError::Status {
                status: 404,
                endpoint: "/superset/fetch_datasource_metadata?datasourceKey=404__table"
                    .to_string(),
            }))
        );
    }
}
