use ndarray::{Array, ArrayD, Dimension};
use num_complex::{Complex, Complex64};

use super::{classify, RecordingFormat};

/// A recordings array as supplied by the caller.
///
/// Integer and float element types are widened to `f64`; complex element
/// types to `Complex64`. The element kind matters for classification: a
/// `(2, n)` real array is read as in-phase/quadrature rows, a `(2, n)`
/// complex array as two channels.
#[derive(Debug, Clone, PartialEq)]
pub enum Recordings {
    /// Real-valued samples
    Real(ArrayD<f64>),
    /// Complex-valued samples
    Complex(ArrayD<Complex64>),
}

impl Recordings {
    /// Shape of the underlying array
    pub fn shape(&self) -> &[usize] {
        match self {
            Recordings::Real(a) => a.shape(),
            Recordings::Complex(a) => a.shape(),
        }
    }

    /// True if the element type is complex
    pub fn is_complex(&self) -> bool {
        matches!(self, Recordings::Complex(_))
    }

    /// Layout of this array
    pub fn format(&self) -> RecordingFormat {
        classify(self.shape(), self.is_complex())
    }
}

macro_rules! real_recordings {
    ($($t:ty),*) => {
        $(
            impl<D: Dimension> From<Array<$t, D>> for Recordings {
                fn from(array: Array<$t, D>) -> Self {
                    Recordings::Real(array.mapv(f64::from).into_dyn())
                }
            }

            impl From<Vec<$t>> for Recordings {
                fn from(samples: Vec<$t>) -> Self {
                    Recordings::from(Array::from_vec(samples))
                }
            }
        )*
    };
}

macro_rules! complex_recordings {
    ($($t:ty),*) => {
        $(
            impl<D: Dimension> From<Array<Complex<$t>, D>> for Recordings {
                fn from(array: Array<Complex<$t>, D>) -> Self {
                    Recordings::Complex(
                        array
                            .mapv(|c| Complex64::new(f64::from(c.re), f64::from(c.im)))
                            .into_dyn(),
                    )
                }
            }

            impl From<Vec<Complex<$t>>> for Recordings {
                fn from(samples: Vec<Complex<$t>>) -> Self {
                    Recordings::from(Array::from_vec(samples))
                }
            }
        )*
    };
}

real_recordings!(f64, f32, i8, i16, i32, u8, u16, u32);
complex_recordings!(f64, f32);
