/// Errors raised by container stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// Arrow error
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Stored attributes could not be decoded
    #[error("Metadata error: {0}")]
    MetadataError(#[from] crate::metadata::MetadataError),

    /// Handle does not refer to a node of this store
    #[error("No such {kind} handle: {id}")]
    NotFound {
        /// `group` or `table`
        kind: &'static str,
        /// Raw handle value
        id: usize,
    },

    /// A sibling with the same name already exists
    #[error("Name '{0}' already exists in this group")]
    NameConflict(String),

    /// Name cannot be used for a group, table or field
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Table has no field of that name
    #[error("Table has no field '{0}'")]
    FieldNotFound(String),

    /// Row slice length differs from the table's fixed row count
    #[error("Table has {expected} rows, got {found}")]
    LengthMismatch {
        /// Row count fixed at table creation
        expected: usize,
        /// Length of the supplied rows
        found: usize,
    },

    /// Container content does not follow the expected layout
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
