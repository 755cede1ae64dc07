//! FormData value object
//! Opaque bag of chart parameters, with accessors for the reserved keys the
//! pipeline needs (visualization type, datasource, annotation layers)

use super::AnnotationLayer;
use crate::domain::{DomainError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const VIZ_TYPE_KEY: &str = "viz_type";
pub const DATASOURCE_KEY: &str = "datasource";
pub const ANNOTATION_LAYERS_KEY: &str = "annotation_layers";

// Front-end spellings, consulted only when the wire key is absent
const VIZ_TYPE_KEY_CAMEL: &str = "vizType";
const ANNOTATION_LAYERS_KEY_CAMEL: &str = "annotationLayers";

/// Datasource key sent when form data has none
pub const MISSING_DATASOURCE_KEY: &str = "undefined";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(Map<String, Value>);

impl FormData {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build form data from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::InvalidFormData(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Shallow merge: every key of `overrides` replaces the key of `self`
    pub fn merge(&mut self, overrides: FormData) {
        for (key, value) in overrides.0 {
            self.0.insert(key, value);
        }
    }

    pub fn merged_with(mut self, overrides: FormData) -> Self {
        self.merge(overrides);
        self
    }

    /// Visualization type key used for registry lookups
    pub fn viz_type(&self) -> Option<&str> {
        self.0
            .get(VIZ_TYPE_KEY)
            .or_else(|| self.0.get(VIZ_TYPE_KEY_CAMEL))
            .and_then(Value::as_str)
    }

    /// Datasource key (e.g. `5__table`). Not validated here: a missing key
    /// renders as `undefined` and other values as their JSON text.
    pub fn datasource_key(&self) -> String {
        match self.0.get(DATASOURCE_KEY) {
            None => MISSING_DATASOURCE_KEY.to_string(),
            Some(Value::String(key)) => key.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Annotation layer descriptors. Anything but a list (absent, null, a
    /// string, an object...) means no layers.
    pub fn annotation_layers(&self) -> Result<Vec<AnnotationLayer>> {
        let raw = self
            .0
            .get(ANNOTATION_LAYERS_KEY)
            .or_else(|| self.0.get(ANNOTATION_LAYERS_KEY_CAMEL));

        match raw {
            Some(value @ Value::Array(_)) => serde_json::from_value(value.clone())
                .map_err(|e| DomainError::InvalidFormData(format!("{}: {}", ANNOTATION_LAYERS_KEY, e))),
            _ => Ok(Vec::new()),
        }
    }
}

impl From<Map<String, Value>> for FormData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<FormData> for Value {
    fn from(form_data: FormData) -> Self {
        Value::Object(form_data.0)
    }
}
