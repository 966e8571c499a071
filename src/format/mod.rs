//! # Format Classifier and Channel Codec
//!
//! I/Q recordings reach the writer in one of several array layouts. The
//! classifier inspects only the rank, the dimensions and whether the element
//! type is complex:
//!
//! | Rank | Shape | Format | Channels | Samples |
//! |------|-------|--------|----------|---------|
//! | 1 | `(n)` | [`RecordingFormat::SingleComplex`] | 1 | `n` |
//! | 2 | `(2, n)`, `n != 2`, real | [`RecordingFormat::SingleIqFirst`] | 1 | `n` |
//! | 2 | `(n, 2)`, `n != 2` | [`RecordingFormat::SingleTimeFirst`] | 1 | `n` |
//! | 2 | anything else | [`RecordingFormat::MultipleComplex`] | `d0` | `d1` |
//! | 3 | `(c, 2, n)`, `n != 2` | [`RecordingFormat::MultipleIqFirst`] | `c` | `n` |
//! | 3 | `(c, n, 2)`, `n != 2` | [`RecordingFormat::MultipleTimeFirst`] | `c` | `n` |
//!
//! Every other shape, including rank 0 and ranks above 3, is
//! [`RecordingFormat::Invalid`]. A `(2, 2)` array is two complex channels of
//! two samples each.
//!
//! The codec turns each channel sub-array into an ordered sequence of
//! `Complex32` samples (the `Real`/`Imag` compound stored per channel), and
//! stacks decoded channels back into a channel-by-sample matrix.

mod codec;
mod error;
mod recordings;

#[cfg(test)]
mod tests;

use std::fmt;

pub use codec::{encode_channel, split_channels, stack_channels};
pub use error::FormatError;
pub use recordings::Recordings;

/// How a single channel's samples are laid out in its sub-array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Rank-1 sequence of complex samples
    Complex,
    /// `(2, n)`: row 0 in-phase, row 1 quadrature
    IqFirst,
    /// `(n, 2)`: one `(I, Q)` pair per row
    TimeFirst,
}

/// Layout tag assigned to a whole recordings array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordingFormat {
    /// One channel, rank 1 complex samples
    SingleComplex,
    /// One channel, shape `(2, n)`
    SingleIqFirst,
    /// One channel, shape `(n, 2)`
    SingleTimeFirst,
    /// Channels along axis 0, shape `(c, n)` complex
    MultipleComplex,
    /// Channels along axis 0, shape `(c, 2, n)`
    MultipleIqFirst,
    /// Channels along axis 0, shape `(c, n, 2)`
    MultipleTimeFirst,
    /// No supported layout
    Invalid,
}

impl RecordingFormat {
    /// Formats holding exactly one channel
    pub const SINGLE_RECORDING: [RecordingFormat; 3] = [
        RecordingFormat::SingleComplex,
        RecordingFormat::SingleIqFirst,
        RecordingFormat::SingleTimeFirst,
    ];

    /// Formats holding channels along axis 0
    pub const MULTIPLE_RECORDING: [RecordingFormat; 3] = [
        RecordingFormat::MultipleComplex,
        RecordingFormat::MultipleIqFirst,
        RecordingFormat::MultipleTimeFirst,
    ];

    /// True for the single-channel formats
    pub fn is_single(self) -> bool {
        Self::SINGLE_RECORDING.contains(&self)
    }

    /// True for the multi-channel formats
    pub fn is_multiple(self) -> bool {
        Self::MULTIPLE_RECORDING.contains(&self)
    }

    /// Per-channel layout, `None` for [`RecordingFormat::Invalid`]
    pub fn channel_layout(self) -> Option<ChannelLayout> {
        match self {
            RecordingFormat::SingleComplex | RecordingFormat::MultipleComplex => {
                Some(ChannelLayout::Complex)
            }
            RecordingFormat::SingleIqFirst | RecordingFormat::MultipleIqFirst => {
                Some(ChannelLayout::IqFirst)
            }
            RecordingFormat::SingleTimeFirst | RecordingFormat::MultipleTimeFirst => {
                Some(ChannelLayout::TimeFirst)
            }
            RecordingFormat::Invalid => None,
        }
    }
}

impl fmt::Display for RecordingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordingFormat::SingleComplex => "single complex",
            RecordingFormat::SingleIqFirst => "single IQ-first",
            RecordingFormat::SingleTimeFirst => "single time-first",
            RecordingFormat::MultipleComplex => "multiple complex",
            RecordingFormat::MultipleIqFirst => "multiple IQ-first",
            RecordingFormat::MultipleTimeFirst => "multiple time-first",
            RecordingFormat::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Classify an array by shape and element kind.
///
/// Total over all shapes; unsupported shapes yield
/// [`RecordingFormat::Invalid`], which callers report as
/// [`FormatError::InvalidShape`].
pub fn classify(shape: &[usize], is_complex: bool) -> RecordingFormat {
    match *shape {
        [_] => RecordingFormat::SingleComplex,
        [d0, d1] => {
            if d0 == 2 && d1 != 2 && !is_complex {
                RecordingFormat::SingleIqFirst
            } else if d1 == 2 && d0 != 2 {
                RecordingFormat::SingleTimeFirst
            } else {
                RecordingFormat::MultipleComplex
            }
        }
        [_, d1, d2] => {
            if d1 == 2 && d2 != 2 {
                RecordingFormat::MultipleIqFirst
            } else if d2 == 2 && d1 != 2 {
                RecordingFormat::MultipleTimeFirst
            } else {
                RecordingFormat::Invalid
            }
        }
        _ => RecordingFormat::Invalid,
    }
}

/// Samples per channel for an array of `shape` classified as `format`
pub fn sample_count(format: RecordingFormat, shape: &[usize]) -> Option<usize> {
    match (format, shape) {
        (RecordingFormat::SingleComplex, [d0]) => Some(*d0),
        (RecordingFormat::SingleTimeFirst, [d0, _]) => Some(*d0),
        (RecordingFormat::SingleIqFirst, [_, d1]) => Some(*d1),
        (RecordingFormat::MultipleComplex, [_, d1]) => Some(*d1),
        (RecordingFormat::MultipleIqFirst, [_, _, d2]) => Some(*d2),
        (RecordingFormat::MultipleTimeFirst, [_, d1, _]) => Some(*d1),
        _ => None,
    }
}

/// Number of channels for an array of `shape` classified as `format`
pub fn channel_count(format: RecordingFormat, shape: &[usize]) -> Option<usize> {
    match format {
        RecordingFormat::Invalid => None,
        f if f.is_single() => Some(1),
        _ => shape.first().copied(),
    }
}
