//! LoadChartData use case
//! Resolves form data first, then fetches annotations, datasource metadata and
//! query results concurrently and merges everything into one bundle

use super::{LoadAnnotations, LoadDatasource, LoadFormData, LoadQueryData};
use crate::domain::{ChartDataBundle, ChartSelector, DomainError, RequestOptions};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Use case for loading everything a chart needs
#[async_trait]
pub trait LoadChartData: Send + Sync {
    async fn execute(
        &self,
        selector: ChartSelector,
        options: &RequestOptions,
    ) -> Result<ChartDataBundle, DomainError>;
}

/// Implementation of LoadChartData use case
pub struct LoadChartDataUseCase {
    load_form_data: Arc<dyn LoadFormData>,
    load_annotations: Arc<dyn LoadAnnotations>,
    load_datasource: Arc<dyn LoadDatasource>,
    load_query_data: Arc<dyn LoadQueryData>,
}

impl LoadChartDataUseCase {
    pub fn new(
        load_form_data: Arc<dyn LoadFormData>,
        load_annotations: Arc<dyn LoadAnnotations>,
        load_datasource: Arc<dyn LoadDatasource>,
        load_query_data: Arc<dyn LoadQueryData>,
    ) -> Self {
        Self {
            load_form_data,
            load_annotations,
            load_datasource,
            load_query_data,
        }
    }
}

#[async_trait]
impl LoadChartData for LoadChartDataUseCase {
    async fn execute(
        &self,
        selector: ChartSelector,
        options: &RequestOptions,
    ) -> Result<ChartDataBundle, DomainError> {
        let form_data = self.load_form_data.execute(selector, options).await?;

        let layers = form_data.annotation_layers()?;
        let datasource_key = form_data.datasource_key();
        debug!(
            viz_type = form_data.viz_type().unwrap_or_default(),
            datasource_key = %datasource_key,
            annotation_layers = layers.len(),
            "Loading chart data"
        );

        let (annotation_data, datasource, query_data) = tokio::try_join!(
            self.load_annotations.execute(&layers),
            self.load_datasource.execute(&datasource_key, options),
            self.load_query_data.execute(&form_data, options),
        )?;

        Ok(ChartDataBundle {
            annotation_data,
            datasource,
            form_data,
            query_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{ChartMetadata, MockTransport, RequestMethod};
    use crate::domain::use_cases::{
        LoadAnnotationsUseCase, LoadDatasourceUseCase, LoadFormDataUseCase, LoadQueryDataUseCase,
    };
    use crate::domain::{AnnotationDataMap, FormData, TransportError};
    use crate::infrastructure::ChartRegistry;
    use serde_json::{json, Value};

    const DATASOURCE_ENDPOINT: &str = "/superset/fetch_datasource_metadata?datasourceKey=5__table";

    fn form(value: Value) -> FormData {
        FormData::from_value(value).unwrap()
    }

    fn use_case(transport: Arc<MockTransport>) -> LoadChartDataUseCase {
        let registry = Arc::new(ChartRegistry::from_charts([
            ("bar", ChartMetadata::current()),
            ("line", ChartMetadata::legacy()),
        ]));

        LoadChartDataUseCase::new(
            Arc::new(LoadFormDataUseCase::new(transport.clone())),
            Arc::new(LoadAnnotationsUseCase::new()),
            Arc::new(LoadDatasourceUseCase::new(transport.clone())),
            Arc::new(LoadQueryDataUseCase::new(
                transport,
                registry.clone(),
                registry,
            )),
        )
    }

    #[tokio::test]
    async fn test_explicit_form_data_bundle() {
        let transport = Arc::new(MockTransport::new());
        transport
            .respond(DATASOURCE_ENDPOINT, json!({"id": 5, "type": "table"}))
            .respond("/api/v1/query/", json!({"data": [{"region": "EU"}]}));
        let use_case = use_case(transport.clone());
        let form_data = form(json!({"datasource": "5__table", "vizType": "bar"}));

        let bundle = use_case
            .execute(ChartSelector::explicit(form_data.clone()), &RequestOptions::default())
            .await
            .unwrap();

        assert_eq!(bundle.form_data, form_data);
        assert_eq!(bundle.datasource, json!({"id": 5, "type": "table"}));
        assert_eq!(bundle.annotation_data, AnnotationDataMap::new());
        assert_eq!(bundle.query_data, json!({"data": [{"region": "EU"}]}));
        assert_eq!(transport.request_count(RequestMethod::Get), 1);
        assert_eq!(transport.request_count(RequestMethod::Post), 1);
    }

    #[tokio::test]
    async fn test_stored_form_data_drives_fetches() {
        let transport = Arc::new(MockTransport::new());
        transport
            .respond(
                "/api/v1/formData/?slice_id=11",
                json!({"form_data": {
                    "viz_type": "line",
                    "datasource": "5__table",
                    "annotation_layers": [{"name": "goal"}]
                }}),
            )
            .respond(DATASOURCE_ENDPOINT, json!({"id": 5}))
            .respond("/superset/explore_json/", json!({"data": []}));
        let use_case = use_case(transport.clone());

        let bundle = use_case
            .execute(ChartSelector::stored(11), &RequestOptions::default())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&bundle.annotation_data).unwrap(),
            json!({"goal": {}})
        );
        assert_eq!(bundle.query_data, json!({"data": []}));
        assert_eq!(transport.request_count(RequestMethod::Get), 2);
    }

    #[tokio::test]
    async fn test_any_branch_failure_fails_bundle() {
        let transport = Arc::new(MockTransport::new());
        transport
            .respond(DATASOURCE_ENDPOINT, json!({"id": 5}))
            .fail(
                "/api/v1/query/",
                TransportError::Request {
                    endpoint: "/api/v1/query/".to_string(),
                    reason: "connection reset".to_string(),
                },
            );
        let use_case = use_case(transport);

        let result = use_case
            .execute(
                ChartSelector::explicit(form(json!({"datasource": "5__table", "viz_type": "bar"}))),
                &RequestOptions::default(),
            )
            .await;

        assert!(matches!(
            result,
            Err(DomainError::Transport(TransportError::Request { .. }))
        ));
    }

    #[tokio::test]
    async fn test_annotation_failure_fails_bundle() {
        let transport = Arc::new(MockTransport::new());
        transport
            .respond(DATASOURCE_ENDPOINT, json!({"id": 5}))
            .respond("/api/v1/query/", json!({"data": []}));
        let use_case = use_case(transport);

        let result = use_case
            .execute(
                ChartSelector::explicit(form(json!({
                    "datasource": "5__table",
                    "viz_type": "bar",
                    "annotation_layers": [{"name": "events", "sourceType": "table"}]
                }))),
                &RequestOptions::default(),
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotImplemented(_))));
    }

    #[tokio::test]
    async fn test_unknown_viz_type_fails_bundle() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(DATASOURCE_ENDPOINT, json!({"id": 5}));
        let use_case = use_case(transport);

        let result = use_case
            .execute(
                ChartSelector::explicit(form(json!({"datasource": "5__table", "viz_type": "pie"}))),
                &RequestOptions::default(),
            )
            .await;

        assert_eq!(
            result,
            Err(DomainError::UnknownVisualizationType("pie".to_string()))
        );
    }

    #[tokio::test]
    async fn test_non_list_annotation_layers_give_empty_annotations() {
        for layers in [json!("nope"), json!({}), json!(false)] {
            let transport = Arc::new(MockTransport::new());
            transport
                .respond(DATASOURCE_ENDPOINT, json!({"id": 5}))
                .respond("/api/v1/query/", json!({"data": []}));
            let use_case = use_case(transport);

            let bundle = use_case
                .execute(
                    ChartSelector::explicit(form(json!({
                        "datasource": "5__table",
                        "viz_type": "bar",
                        "annotation_layers": layers
                    }))),
                    &RequestOptions::default(),
                )
                .await
                .unwrap();

            assert_eq!(serde_json::to_value(&bundle.annotation_data).unwrap(), json!({}));
        }
    }

    #[tokio::test]
    async fn test_missing_datasource_requests_undefined_key() {
        let transport = Arc::new(MockTransport::new());
        transport
            .respond(
                "/superset/fetch_datasource_metadata?datasourceKey=undefined",
                json!({}),
            )
            .respond("/api/v1/query/", json!({"data": []}));
        let use_case = use_case(transport.clone());

        let bundle = use_case
            .execute(
                ChartSelector::explicit(form(json!({"viz_type": "bar"}))),
                &RequestOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(bundle.datasource, json!({}));
        assert!(transport.requests().iter().any(|request| request.endpoint
            == "/superset/fetch_datasource_metadata?datasourceKey=undefined"));
    }
}
