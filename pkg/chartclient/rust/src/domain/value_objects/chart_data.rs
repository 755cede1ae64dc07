//! ChartDataBundle value object
//! Everything a chart component needs to render, built once per request

use super::{AnnotationData, FormData};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Datasource metadata as returned by the API, not inspected
pub type DatasourceMetadata = Value;

/// Query results as returned by the API, not inspected
pub type QueryData = Value;

/// Annotation results keyed by layer name, in layer order
pub type AnnotationDataMap = IndexMap<String, AnnotationData>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataBundle {
    pub annotation_data: AnnotationDataMap,
    pub datasource: DatasourceMetadata,
    pub form_data: FormData,
    pub query_data: QueryData,
}
