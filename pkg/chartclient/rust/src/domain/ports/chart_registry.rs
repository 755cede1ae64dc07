//! Chart registry ports
//! Lookups from a visualization type key to what the pipeline needs to know
//! about that chart: which API flavor it talks to and how it builds queries

use crate::domain::FormData;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Static metadata registered for a chart type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMetadata {
    /// Query through `/superset/explore_json/` instead of `/api/v1/query/`
    #[serde(default)]
    pub use_legacy_api: bool,
}

impl ChartMetadata {
    pub fn legacy() -> Self {
        Self { use_legacy_api: true }
    }

    pub fn current() -> Self {
        Self { use_legacy_api: false }
    }
}

/// Turns form data into the query payload sent to the API
pub type BuildQueryFn = Arc<dyn Fn(&FormData) -> Value + Send + Sync>;

/// Port for chart metadata lookups
pub trait ChartMetadataRegistry: Send + Sync {
    fn has(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<ChartMetadata>;
}

/// Port for query builder lookups.
/// Async so implementations can load builders lazily.
#[async_trait]
pub trait BuildQueryRegistry: Send + Sync {
    async fn get(&self, key: &str) -> Option<BuildQueryFn>;
}
