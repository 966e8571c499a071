/// Errors raised while classifying or encoding a recordings array
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The array shape matches none of the supported layouts
    #[error("Invalid recordings shape {shape:?}")]
    InvalidShape {
        /// Shape of the rejected array
        shape: Vec<usize>,
    },

    /// A channel sub-array does not have the shape its layout requires
    #[error("Channel sub-array has shape {shape:?}, expected {expected}")]
    ShapeMismatch {
        /// Human readable description of the expected shape
        expected: &'static str,
        /// Actual shape of the sub-array
        shape: Vec<usize>,
    },

    /// Channels to be stacked have different sample counts
    #[error("Channel {index} has {found} samples, expected {expected}")]
    RaggedChannels {
        /// Index of the offending channel
        index: usize,
        /// Sample count of the first channel
        expected: usize,
        /// Sample count of the offending channel
        found: usize,
    },

    /// Error from ndarray while reshaping
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
