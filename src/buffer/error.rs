use derive_more::{Display, Error, From, IsVariant};

use crate::buffer::mean::{EmptySourceError, MeanError};
use crate::buffer::stride::{InsufficientDestinationError, InvalidStartError, StrideError};
use crate::util::Fatal;

/// Any failure from this module, for callers chaining several operations with `?`.
///
/// # Examples
/// ```
/// # use buffer_utils::buffer::{BufferError, Stride, try_mean_slice};
/// fn decimate_and_average(samples: &[u16], scratch: &mut [u16]) -> Result<f64, BufferError> {
///     let written = Stride::<2>::try_copy_slice(samples, scratch)?;
///     Ok(try_mean_slice(&scratch[..written])?)
/// }
///
/// let mut scratch = [0; 4];
/// assert_eq!(decimate_and_average(&[1, 9, 3, 9, 5, 9, 7], &mut scratch), Ok(4.0));
/// assert!(decimate_and_average(&[], &mut scratch).unwrap_err().is_mean());
/// ```
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum BufferError {
    Stride(StrideError),
    Mean(MeanError),
}
impl Fatal for BufferError {}

impl From<InvalidStartError> for BufferError {
    fn from(value: InvalidStartError) -> Self {
        StrideError::from(value).into()
    }
}

impl From<InsufficientDestinationError> for BufferError {
    fn from(value: InsufficientDestinationError) -> Self {
        StrideError::from(value).into()
    }
}

impl From<EmptySourceError> for BufferError {
    fn from(value: EmptySourceError) -> Self {
        MeanError::from(value).into()
    }
}
