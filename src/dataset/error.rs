use crate::format::FormatError;
use crate::metadata::{MetadataError, ValidationErrors};
use crate::path::PathError;
use crate::store::StoreError;

/// Errors that can occur while writing or reading an I/Q dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Recordings array has an unsupported layout
    #[error("Format error: {0}")]
    FormatError(#[from] FormatError),

    /// Metadata failed validation
    #[error("Metadata error: {0}")]
    MetadataError(#[from] MetadataError),

    /// Group resolution or naming failed
    #[error("Path error: {0}")]
    PathError(#[from] PathError),

    /// Container store failure
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// No dataset of that name in the group
    #[error("Dataset '{name}' not found in group '{group}'")]
    NotFound {
        /// Requested dataset name
        name: String,
        /// Group that was searched
        group: String,
    },
}

impl DatasetError {
    /// Per-field violations, if this is a metadata validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            DatasetError::MetadataError(MetadataError::Validation(errors)) => Some(errors),
            _ => None,
        }
    }
}
