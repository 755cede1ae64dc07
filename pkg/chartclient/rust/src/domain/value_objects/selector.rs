//! ChartSelector value object
//! Identifies the chart configuration to load: a stored slice, explicit form
//! data, or a stored slice with explicit overrides

use super::FormData;
use crate::domain::{DomainError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSelector {
    /// Form data stored on the server for this slice
    Stored { slice_id: i64 },
    /// Caller-provided form data, used as-is
    Explicit { form_data: FormData },
    /// Stored form data with the explicit fields applied on top
    Both { slice_id: i64, form_data: FormData },
}

impl ChartSelector {
    /// Build a selector from two optional parts; at least one is required
    pub fn from_parts(slice_id: Option<i64>, form_data: Option<FormData>) -> Result<Self> {
        match (slice_id, form_data) {
            (Some(slice_id), Some(form_data)) => Ok(Self::Both { slice_id, form_data }),
            (Some(slice_id), None) => Ok(Self::Stored { slice_id }),
            (None, Some(form_data)) => Ok(Self::Explicit { form_data }),
            (None, None) => Err(DomainError::MissingConfiguration),
        }
    }

    pub fn stored(slice_id: i64) -> Self {
        Self::Stored { slice_id }
    }

    pub fn explicit(form_data: FormData) -> Self {
        Self::Explicit { form_data }
    }

    pub fn both(slice_id: i64, form_data: FormData) -> Self {
        Self::Both { slice_id, form_data }
    }

    pub fn slice_id(&self) -> Option<i64> {
        match self {
            Self::Stored { slice_id } | Self::Both { slice_id, .. } => Some(*slice_id),
            Self::Explicit { .. } => None,
        }
    }

    pub fn form_data(&self) -> Option<&FormData> {
        match self {
            Self::Explicit { form_data } | Self::Both { form_data, .. } => Some(form_data),
            Self::Stored { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_parts_variants() {
        let form_data = FormData::from_value(json!({"viz_type": "bar"})).unwrap();

        assert_eq!(
            ChartSelector::from_parts(Some(1), None).unwrap(),
            ChartSelector::stored(1)
        );
        assert_eq!(
            ChartSelector::from_parts(None, Some(form_data.clone())).unwrap(),
            ChartSelector::explicit(form_data.clone())
        );
        assert_eq!(
            ChartSelector::from_parts(Some(2), Some(form_data.clone())).unwrap(),
            ChartSelector::both(2, form_data)
        );
    }

    #[test]
    fn test_from_parts_requires_one() {
        assert_eq!(
            ChartSelector::from_parts(None, None),
            Err(DomainError::MissingConfiguration)
        );
    }

    #[test]
    fn test_accessors() {
        let selector = ChartSelector::both(9, FormData::new());
        assert_eq!(selector.slice_id(), Some(9));
        assert!(selector.form_data().is_some());

        let selector = ChartSelector::stored(4);
        assert_eq!(selector.slice_id(), Some(4));
        assert!(selector.form_data().is_none());
    }
}
