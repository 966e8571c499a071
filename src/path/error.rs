use crate::schema::DATASET_PREFIX;
use crate::store::StoreError;

/// Errors raised while resolving groups or assigning names
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// A path segment does not exist (read side)
    #[error("Group '{segment}' not found in '{path}'")]
    GroupNotFound {
        /// Missing segment
        segment: String,
        /// Full path being resolved
        path: String,
    },

    /// A path segment names a dataset, not a group
    #[error("'{segment}' in '{path}' is a dataset, not a group")]
    NotAGroup {
        /// Offending segment
        segment: String,
        /// Full path being resolved
        path: String,
    },

    /// Explicit dataset name already used in the target group
    #[error("Dataset name '{0}' already exists in the target group")]
    DuplicateName(String),

    /// The highest automatic dataset name is already taken
    #[error("No automatic dataset name left after '{}{}'", DATASET_PREFIX, u64::MAX)]
    AutoNameExhausted,

    /// Suffix list length differs from the channel count
    #[error("{suffixes} channel suffix(es) given for {channels} channel(s)")]
    ChannelCountMismatch {
        /// Number of channels in the recordings
        channels: usize,
        /// Number of suffixes supplied
        suffixes: usize,
    },

    /// Two channels would get the same name
    #[error("Duplicate channel name '{0}'")]
    DuplicateChannel(String),

    /// Underlying store error
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}
