//! Annotation layer descriptor value object

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of resolving one annotation layer
pub type AnnotationData = Map<String, Value>;

/// An annotation layer as stored in form data.
/// Layers without a source type are static and need no query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLayer {
    pub name: String,

    #[serde(
        rename = "sourceType",
        alias = "source_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_type: Option<String>,

    /// Layer-specific parameters, kept verbatim
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl AnnotationLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: None,
            params: Map::new(),
        }
    }

    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    pub fn requires_query(&self) -> bool {
        self.source_type.is_some()
    }
}
