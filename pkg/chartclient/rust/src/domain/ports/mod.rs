pub mod chart_registry;
pub mod mock_transport;
pub mod transport;

pub use chart_registry::{BuildQueryFn, BuildQueryRegistry, ChartMetadata, ChartMetadataRegistry};
pub use mock_transport::{MockTransport, RecordedRequest, RequestMethod};
pub use transport::{PostPayload, Transport};
