pub mod load_annotations;
pub mod load_chart_data;
pub mod load_datasource;
pub mod load_form_data;
pub mod load_query_data;

pub use load_annotations::{LoadAnnotations, LoadAnnotationsUseCase};
pub use load_chart_data::{LoadChartData, LoadChartDataUseCase};
pub use load_datasource::{LoadDatasource, LoadDatasourceUseCase};
pub use load_form_data::{LoadFormData, LoadFormDataUseCase};
pub use load_query_data::{LoadQueryData, LoadQueryDataUseCase};
