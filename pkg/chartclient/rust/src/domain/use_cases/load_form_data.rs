//! LoadFormData use case
//! Resolves the effective form data of a chart from a selector

use crate::domain::constants::{form_data_endpoint, STORED_FORM_DATA_FIELD};
use crate::domain::ports::Transport;
use crate::domain::{ChartSelector, DomainError, FormData, RequestOptions};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Use case for resolving form data
#[async_trait]
pub trait LoadFormData: Send + Sync {
    async fn execute(
        &self,
        selector: ChartSelector,
        options: &RequestOptions,
    ) -> Result<FormData, DomainError>;
}

/// Implementation of LoadFormData use case
pub struct LoadFormDataUseCase {
    transport: Arc<dyn Transport>,
}

impl LoadFormDataUseCase {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the form data stored for a slice.
    /// A response without a `form_data` object contributes no fields.
    async fn fetch_stored(
        &self,
        slice_id: i64,
        options: &RequestOptions,
    ) -> Result<FormData, DomainError> {
        debug!(slice_id, "Fetching stored form data");
        let body = self
            .transport
            .get(&form_data_endpoint(slice_id), options)
            .await?;

        let stored = match body {
            Value::Object(mut fields) => match fields.remove(STORED_FORM_DATA_FIELD) {
                Some(Value::Object(form_data)) => FormData::from(form_data),
                _ => FormData::new(),
            },
            _ => FormData::new(),
        };

        Ok(stored)
    }
}

#[async_trait]
impl LoadFormData for LoadFormDataUseCase {
    async fn execute(
        &self,
        selector: ChartSelector,
        options: &RequestOptions,
    ) -> Result<FormData, DomainError> {
        match selector {
            ChartSelector::Explicit { form_data } => Ok(form_data),
            ChartSelector::Stored { slice_id } => self.fetch_stored(slice_id, options).await,
            ChartSelector::Both { slice_id, form_data } => {
                let stored = self.fetch_stored(slice_id, options).await?;
                Ok(stored.merged_with(form_data))
            }
        }
    }
}
