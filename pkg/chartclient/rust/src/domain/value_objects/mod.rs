pub mod annotation_layer;
pub mod chart_data;
pub mod form_data;
pub mod request_options;
pub mod selector;

pub use annotation_layer::{AnnotationData, AnnotationLayer};
pub use chart_data::{AnnotationDataMap, ChartDataBundle, DatasourceMetadata, QueryData};
pub use form_data::{FormData, ANNOTATION_LAYERS_KEY, DATASOURCE_KEY, VIZ_TYPE_KEY};
pub use request_options::RequestOptions;
pub use selector::ChartSelector;
