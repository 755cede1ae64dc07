//! LoadAnnotations use case
//! Resolves annotation layers concurrently into a map keyed by layer name.
//!
//! Only static layers (no source type) are supported: they need no query and
//! resolve to an empty object. Querying a layer with a source type is not
//! implemented and fails the whole call.

use crate::domain::{AnnotationData, AnnotationDataMap, AnnotationLayer, DomainError};
use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::debug;

/// Use case for loading annotation data
#[async_trait]
pub trait LoadAnnotations: Send + Sync {
    /// Resolve a single layer
    async fn load_layer(&self, layer: &AnnotationLayer) -> Result<AnnotationData, DomainError>;

    /// Resolve all layers; the first failure fails the whole call
    async fn execute(&self, layers: &[AnnotationLayer]) -> Result<AnnotationDataMap, DomainError>;
}

/// Implementation of LoadAnnotations use case
#[derive(Default)]
pub struct LoadAnnotationsUseCase;

impl LoadAnnotationsUseCase {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoadAnnotations for LoadAnnotationsUseCase {
    async fn load_layer(&self, layer: &AnnotationLayer) -> Result<AnnotationData, DomainError> {
        match &layer.source_type {
            None => Ok(AnnotationData::new()),
            Some(source_type) => Err(DomainError::NotImplemented(format!(
                "annotation layer '{}' with source type '{}'",
                layer.name, source_type
            ))),
        }
    }

    async fn execute(&self, layers: &[AnnotationLayer]) -> Result<AnnotationDataMap, DomainError> {
        if layers.is_empty() {
            return Ok(AnnotationDataMap::new());
        }

        debug!(layers = layers.len(), "Loading annotation layers");
        let results = try_join_all(layers.iter().map(|layer| self.load_layer(layer))).await?;

        // Later layers win on duplicate names, first occurrence keeps its slot
        Ok(layers
            .iter()
            .zip(results)
            .map(|(layer, data)| (layer.name.clone(), data))
            .collect())
    }
}
