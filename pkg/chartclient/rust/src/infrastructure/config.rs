//! Configuration loading from YAML files
//!
//! A single file describes where the chart API lives and which chart types
//! are known to the client:
//!
//! ```yaml
//! base_url: http://localhost:8088
//! timeout_secs: 30
//! charts:
//!   bar:
//!     use_legacy_api: true
//!   big_number: {}
//! ```

use super::chart_registry::ChartRegistry;
use crate::domain::ports::ChartMetadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const CONFIG_PATH_ENV: &str = "CHART_CLIENT_CONFIG";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default timeout of every request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Chart types known to the client, keyed by visualization type
    #[serde(default)]
    pub charts: BTreeMap<String, ChartMetadata>,
}

fn default_base_url() -> String {
    "http://localhost:8088".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            charts: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        Self::from_yaml(&contents).map_err(|e| format!("Failed to parse YAML from '{}': {}", path, e))
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid, all-defaults config
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Registry populated with the configured chart types
    pub fn registry(&self) -> ChartRegistry {
        ChartRegistry::from_charts(
            self.charts
                .iter()
                .map(|(key, metadata)| (key.clone(), *metadata)),
        )
    }
}

/// Config file path from the `CHART_CLIENT_CONFIG` environment variable
pub fn get_default_config_path() -> Option<String> {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|path| !path.is_empty())
}
