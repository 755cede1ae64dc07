//! Domain-level errors
//! Transport failures are carried through untouched, everything else is a
//! rule of the chart-data pipeline that was violated

use thiserror::Error;

/// Failure reported by a `Transport` implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request to '{endpoint}' failed with status {status}")]
    Status { status: u16, endpoint: String },

    #[error("Request to '{endpoint}' failed: {reason}")]
    Request { endpoint: String, reason: String },

    #[error("Failed to decode response from '{endpoint}': {reason}")]
    Decode { endpoint: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("At least one of sliceId or formData must be specified")]
    MissingConfiguration,

    #[error("Unknown chart type: {0}")]
    UnknownVisualizationType(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid form data: {0}")]
    InvalidFormData(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, DomainError>;
