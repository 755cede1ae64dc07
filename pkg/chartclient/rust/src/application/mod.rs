pub mod chart_client;

pub use chart_client::ChartClient;
