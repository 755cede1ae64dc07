//! Chart API endpoints and payload keys

/// Stored form data for a slice
pub const FORM_DATA_ENDPOINT: &str = "/api/v1/formData/";

/// Query endpoint for charts still on the legacy API
pub const LEGACY_QUERY_ENDPOINT: &str = "/superset/explore_json/";

/// Query endpoint for charts built on query contexts
pub const QUERY_ENDPOINT: &str = "/api/v1/query/";

pub const DATASOURCE_METADATA_ENDPOINT: &str = "/superset/fetch_datasource_metadata";

/// Payload key of a legacy query
pub const LEGACY_PAYLOAD_KEY: &str = "form_data";

/// Payload key of a query-context query
pub const QUERY_CONTEXT_PAYLOAD_KEY: &str = "query_context";

/// Field of the stored form data response holding the form data
pub const STORED_FORM_DATA_FIELD: &str = "form_data";

pub fn form_data_endpoint(slice_id: i64) -> String {
    format!("{}?slice_id={}", FORM_DATA_ENDPOINT, slice_id)
}

pub fn datasource_metadata_endpoint(datasource_key: &str) -> String {
    format!("{}?datasourceKey={}", DATASOURCE_METADATA_ENDPOINT, datasource_key)
}
