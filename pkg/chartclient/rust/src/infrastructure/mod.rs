pub mod chart_registry;
pub mod config;
pub mod http_transport;

pub use chart_registry::ChartRegistry;
pub use config::{get_default_config_path, ClientConfig};
pub use http_transport::HttpTransport;
