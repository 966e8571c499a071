use log::warn;
use ndarray::{Array2, ArrayViewD, Axis, Ix2};
use num_complex::{Complex32, Complex64};

use super::{ChannelLayout, FormatError, RecordingFormat, Recordings};

/// Element types a channel sub-array can hold
trait Sample: Copy {
    fn re(self) -> f32;
    fn im(self) -> f32;
}

impl Sample for f64 {
    fn re(self) -> f32 {
        self as f32
    }

    fn im(self) -> f32 {
        0.0
    }
}

impl Sample for Complex64 {
    fn re(self) -> f32 {
        self.re as f32
    }

    fn im(self) -> f32 {
        self.im as f32
    }
}

/// Encode one channel sub-array into time-ordered complex samples.
///
/// For the IQ-first and time-first layouts the elements are cast to `f32`;
/// complex elements contribute only their real part.
pub fn encode_channel(
    layout: ChannelLayout,
    channel: &Recordings,
) -> Result<Vec<Complex32>, FormatError> {
    match channel {
        Recordings::Real(a) => encode(layout, a.view()),
        Recordings::Complex(a) => encode(layout, a.view()),
    }
}

fn encode<T: Sample>(
    layout: ChannelLayout,
    view: ArrayViewD<'_, T>,
) -> Result<Vec<Complex32>, FormatError> {
    match layout {
        ChannelLayout::Complex => {
            if view.ndim() != 1 {
                return Err(mismatch("(n)", view.shape()));
            }
            Ok(view.iter().map(|&s| Complex32::new(s.re(), s.im())).collect())
        }
        ChannelLayout::IqFirst => {
            let shape = view.shape().to_vec();
            let rows = view.into_dimensionality::<Ix2>()?;
            if rows.nrows() != 2 {
                return Err(mismatch("(2, n)", &shape));
            }
            Ok(rows
                .row(0)
                .iter()
                .zip(rows.row(1).iter())
                .map(|(&i, &q)| Complex32::new(i.re(), q.re()))
                .collect())
        }
        ChannelLayout::TimeFirst => {
            let shape = view.shape().to_vec();
            let pairs = view.into_dimensionality::<Ix2>()?;
            if pairs.ncols() != 2 {
                return Err(mismatch("(n, 2)", &shape));
            }
            Ok(pairs
                .rows()
                .into_iter()
                .map(|pair| Complex32::new(pair[0].re(), pair[1].re()))
                .collect())
        }
    }
}

fn mismatch(expected: &'static str, shape: &[usize]) -> FormatError {
    FormatError::ShapeMismatch {
        expected,
        shape: shape.to_vec(),
    }
}

/// Classify `recordings` and encode every channel, in axis-0 order.
pub fn split_channels(
    recordings: &Recordings,
) -> Result<(RecordingFormat, Vec<Vec<Complex32>>), FormatError> {
    let format = recordings.format();
    let invalid = || FormatError::InvalidShape {
        shape: recordings.shape().to_vec(),
    };
    let layout = format.channel_layout().ok_or_else(invalid)?;

    if recordings.is_complex() && layout != ChannelLayout::Complex {
        warn!(
            "Recordings of shape {:?} classified as {}; imaginary parts are discarded",
            recordings.shape(),
            format
        );
    }

    let channels = match recordings {
        Recordings::Real(a) => split(format, layout, a.view())?,
        Recordings::Complex(a) => split(format, layout, a.view())?,
    };
    if channels.is_empty() {
        return Err(invalid());
    }
    Ok((format, channels))
}

fn split<T: Sample>(
    format: RecordingFormat,
    layout: ChannelLayout,
    view: ArrayViewD<'_, T>,
) -> Result<Vec<Vec<Complex32>>, FormatError> {
    if format.is_single() {
        return Ok(vec![encode(layout, view)?]);
    }
    view.axis_iter(Axis(0))
        .map(|channel| encode(layout, channel))
        .collect()
}

/// Stack decoded channels into a `(channels, samples)` matrix.
pub fn stack_channels(channels: &[Vec<Complex32>]) -> Result<Array2<Complex32>, FormatError> {
    let samples = channels.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(channels.len() * samples);
    for (index, channel) in channels.iter().enumerate() {
        if channel.len() != samples {
            return Err(FormatError::RaggedChannels {
                index,
                expected: samples,
                found: channel.len(),
            });
        }
        flat.extend_from_slice(channel);
    }
    Ok(Array2::from_shape_vec((channels.len(), samples), flat)?)
}
