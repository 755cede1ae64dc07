//! In-memory chart registry
//! Maps visualization type keys to their metadata and optional query builder.
//! Populated once at startup, read-only afterwards.

use crate::domain::ports::{BuildQueryFn, BuildQueryRegistry, ChartMetadata, ChartMetadataRegistry};
use crate::domain::FormData;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Default)]
pub struct ChartRegistry {
    metadata: HashMap<String, ChartMetadata>,
    build_queries: HashMap<String, BuildQueryFn>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(key, metadata)` pairs, e.g. the `charts` section of the config
    pub fn from_charts<I, K>(charts: I) -> Self
    where
        I: IntoIterator<Item = (K, ChartMetadata)>,
        K: Into<String>,
    {
        let mut registry = Self::new();
        for (key, metadata) in charts {
            registry.register(key, metadata);
        }
        registry
    }

    /// Register (or replace) the metadata of a chart type
    pub fn register(&mut self, key: impl Into<String>, metadata: ChartMetadata) -> &mut Self {
        let key = key.into();
        debug!(viz_type = %key, use_legacy_api = metadata.use_legacy_api, "Registering chart");
        self.metadata.insert(key, metadata);
        self
    }

    /// Attach a query builder to a chart type.
    /// The type is still unknown to the pipeline until its metadata is registered.
    pub fn register_build_query<F>(&mut self, key: impl Into<String>, build_query: F) -> &mut Self
    where
        F: Fn(&FormData) -> Value + Send + Sync + 'static,
    {
        self.build_queries.insert(key.into(), Arc::new(build_query));
        self
    }

    /// Number of chart types with metadata
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }
}

impl ChartMetadataRegistry for ChartRegistry {
    fn has(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<ChartMetadata> {
        self.metadata.get(key).copied()
    }
}

#[async_trait]
impl BuildQueryRegistry for ChartRegistry {
    async fn get(&self, key: &str) -> Option<BuildQueryFn> {
        self.build_queries.get(key).cloned()
    }
}
