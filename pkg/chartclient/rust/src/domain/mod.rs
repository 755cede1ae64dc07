pub mod constants;
pub mod error;
pub mod ports;
pub mod use_cases;
pub mod value_objects;

pub use error::{DomainError, Result, TransportError};
pub use value_objects::{
    AnnotationData, AnnotationDataMap, AnnotationLayer, ChartDataBundle, ChartSelector,
    DatasourceMetadata, FormData, QueryData, RequestOptions,
};
