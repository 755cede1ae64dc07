//! Chart Client
//!
//! Assembles everything a chart component needs to render by composing calls
//! to a Superset-style HTTP API:
//! - Form data (stored per slice, explicit, or stored with explicit overrides)
//! - Datasource metadata
//! - Query results, through the legacy or the query-context API
//! - Annotation data
//!
//! The pipeline talks to the outside world through ports (`Transport` and the
//! chart registries); `HttpTransport` and `ChartRegistry` are the bundled
//! adapters.

// Core architecture modules
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export public types
pub use application::ChartClient;
pub use domain::ports::{BuildQueryFn, ChartMetadata, Transport};
pub use domain::{
    AnnotationData, AnnotationDataMap, AnnotationLayer, ChartDataBundle, ChartSelector,
    DatasourceMetadata, DomainError, FormData, QueryData, RequestOptions, Result, TransportError,
};
pub use infrastructure::{ChartRegistry, ClientConfig, HttpTransport};
