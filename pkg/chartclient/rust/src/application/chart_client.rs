//! Chart client
//! Composition root for the chart-data use cases and the public entry point
//! of the crate

use crate::domain::ports::{BuildQueryRegistry, ChartMetadataRegistry, Transport};
use crate::domain::use_cases::{
    LoadAnnotations, LoadAnnotationsUseCase, LoadChartData, LoadChartDataUseCase, LoadDatasource,
    LoadDatasourceUseCase, LoadFormData, LoadFormDataUseCase, LoadQueryData, LoadQueryDataUseCase,
};
use crate::domain::{
    AnnotationData, AnnotationDataMap, AnnotationLayer, ChartDataBundle, ChartSelector,
    DatasourceMetadata, FormData, QueryData, RequestOptions, Result,
};
use std::sync::Arc;

/// Loads the inputs of a chart (form data, datasource metadata, query results
/// and annotations) through a transport.
///
/// Every call is a one-shot request/response pipeline; the client keeps no
/// state between calls and can be shared freely.
#[derive(Clone)]
pub struct ChartClient {
    load_form_data: Arc<dyn LoadFormData>,
    load_query_data: Arc<dyn LoadQueryData>,
    load_datasource: Arc<dyn LoadDatasource>,
    load_annotations: Arc<dyn LoadAnnotations>,
    load_chart_data: Arc<dyn LoadChartData>,
}

impl ChartClient {
    /// Create a client backed by one registry serving both metadata and query builders
    ///
    /// # Arguments
    ///
    /// * `transport` - Chart API adapter
    /// * `registry` - Chart registry (must implement both registry ports)
    pub fn new<R>(transport: Arc<dyn Transport>, registry: Arc<R>) -> Self
    where
        R: ChartMetadataRegistry + BuildQueryRegistry + 'static,
    {
        Self::with_registries(transport, registry.clone(), registry)
    }

    /// Create a client with separate metadata and query builder registries
    pub fn with_registries(
        transport: Arc<dyn Transport>,
        metadata_registry: Arc<dyn ChartMetadataRegistry>,
        build_query_registry: Arc<dyn BuildQueryRegistry>,
    ) -> Self {
        let load_form_data: Arc<dyn LoadFormData> =
            Arc::new(LoadFormDataUseCase::new(transport.clone()));
        let load_query_data: Arc<dyn LoadQueryData> = Arc::new(LoadQueryDataUseCase::new(
            transport.clone(),
            metadata_registry,
            build_query_registry,
        ));
        let load_datasource: Arc<dyn LoadDatasource> =
            Arc::new(LoadDatasourceUseCase::new(transport));
        let load_annotations: Arc<dyn LoadAnnotations> = Arc::new(LoadAnnotationsUseCase::new());

        let load_chart_data = Arc::new(LoadChartDataUseCase::new(
            load_form_data.clone(),
            load_annotations.clone(),
            load_datasource.clone(),
            load_query_data.clone(),
        ));

        Self {
            load_form_data,
            load_query_data,
            load_datasource,
            load_annotations,
            load_chart_data,
        }
    }

    pub async fn load_form_data(
        &self,
        selector: ChartSelector,
        options: &RequestOptions,
    ) -> Result<FormData> {
        self.load_form_data.execute(selector, options).await
    }

    pub async fn load_query_data(
        &self,
        form_data: &FormData,
        options: &RequestOptions,
    ) -> Result<QueryData> {
        self.load_query_data.execute(form_data, options).await
    }

    pub async fn load_datasource(
        &self,
        datasource_key: &str,
        options: &RequestOptions,
    ) -> Result<DatasourceMetadata> {
        self.load_datasource.execute(datasource_key, options).await
    }

    pub async fn load_annotation(&self, layer: &AnnotationLayer) -> Result<AnnotationData> {
        self.load_annotations.load_layer(layer).await
    }

    /// Resolve annotation layers; `None` and an empty list both give an empty map
    pub async fn load_annotations(
        &self,
        layers: Option<&[AnnotationLayer]>,
    ) -> Result<AnnotationDataMap> {
        self.load_annotations
            .execute(layers.unwrap_or_default())
            .await
    }

    /// Load everything a chart needs with default request options
    pub async fn load_chart_data(&self, selector: ChartSelector) -> Result<ChartDataBundle> {
        self.load_chart_data_with_options(selector, &RequestOptions::default())
            .await
    }

    /// Load everything a chart needs, passing `options` to every request
    pub async fn load_chart_data_with_options(
        &self,
        selector: ChartSelector,
        options: &RequestOptions,
    ) -> Result<ChartDataBundle> {
        self.load_chart_data.execute(selector, options).await
    }
}
