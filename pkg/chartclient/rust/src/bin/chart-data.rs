//! Loads the data of one chart and prints it as JSON.
//!
//! # Usage
//!
//! ```bash
//! chart-data --config charts.yaml --slice-id 42
//! chart-data --base-url http://localhost:8088 \
//!     --form-data '{"viz_type": "bar", "datasource": "5__table"}'
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chart_client::infrastructure::get_default_config_path;
use chart_client::{ChartClient, ChartSelector, ClientConfig, FormData, HttpTransport, RequestOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chart-data")]
#[command(about = "Load form data, datasource metadata, query results and annotations of a chart")]
#[command(version)]
struct Args {
    /// YAML config file (base URL, timeout, known chart types).
    /// Falls back to $CHART_CLIENT_CONFIG.
    #[arg(short, long)]
    config: Option<String>,

    /// Base URL of the chart API, overrides the config file
    #[arg(long, env = "CHART_CLIENT_BASE_URL")]
    base_url: Option<String>,

    /// Id of a stored slice whose form data is loaded
    #[arg(long)]
    slice_id: Option<i64>,

    /// Explicit form data as a JSON object, applied on top of stored form data
    #[arg(long)]
    form_data: Option<String>,

    /// Per-request timeout in seconds, overrides the config file
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.config.clone().or_else(get_default_config_path) {
        Some(path) => ClientConfig::load(&path).map_err(|e| anyhow!(e))?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }

    let form_data = args
        .form_data
        .as_deref()
        .map(parse_form_data)
        .transpose()?;
    let selector = ChartSelector::from_parts(args.slice_id, form_data)?;

    let mut options = RequestOptions::default();
    if let Some(secs) = args.timeout_secs {
        options = options.with_timeout(Duration::from_secs(secs));
    }

    tracing::info!(
        base_url = %config.base_url,
        charts = config.charts.len(),
        slice_id = ?args.slice_id,
        "Loading chart data"
    );

    let transport = HttpTransport::from_config(&config).context("Failed to create HTTP client")?;
    let client = ChartClient::new(Arc::new(transport), Arc::new(config.registry()));

    let bundle = client
        .load_chart_data_with_options(selector, &options)
        .await
        .context("Failed to load chart data")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&bundle).context("Failed to serialize chart data")?
    );

    Ok(())
}

fn parse_form_data(raw: &str) -> Result<FormData> {
    let value = serde_json::from_str(raw).context("--form-data is not valid JSON")?;
    Ok(FormData::from_value(value)?)
}
