use num_traits::AsPrimitive;

use crate::buffer::mean::error::{EmptySourceError, MeanError};
use crate::util::ResultExtension;

fn sum<T: AsPrimitive<f64>>(source: &[T]) -> f64 {
    source.iter().fold(0.0, |acc, item| acc + item.as_())
}

/// Returns the arithmetic mean of a fixed-size `source`. Every element is widened to [`f64`] and
/// summed in order before dividing by `S`, whatever `T` is.
///
/// Only primitive integers and floats are supported, since `T` has to be widened with
/// [`AsPrimitive`].
///
/// An empty array is rejected while compiling, so this never fails at runtime.
///
/// # Examples
/// ```
/// # use buffer_utils::buffer::mean;
/// assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
/// assert_eq!(mean(&[1_u8, 2]), 1.5);
/// ```
///
/// ```compile_fail
/// # use buffer_utils::buffer::mean;
/// let empty: [u8; 0] = [];
/// mean(&empty);
/// ```
///
/// ```compile_fail
/// # use buffer_utils::buffer::mean;
/// // Not a primitive number.
/// mean(&[String::from("1")]);
/// ```
pub fn mean<T: AsPrimitive<f64>, const S: usize>(source: &[T; S]) -> f64 {
    const {
        assert!(S > 0, "Source container must be non-empty");
    }

    sum(source) / S as f64
}

/// Returns the arithmetic mean of `source`, failing if it is empty.
///
/// This is the fail-fast counterpart of [`try_mean_slice`].
///
/// # Panics
/// Panics (or aborts, depending on the build, see [`fatal`](crate::util::fatal())) with
/// `"Source container must be non-empty"` if `source` is empty.
///
/// # Examples
/// ```
/// # use buffer_utils::buffer::mean_slice;
/// let samples: Vec<i64> = (1..=100).collect();
/// assert_eq!(mean_slice(&samples), 50.5);
/// ```
#[track_caller]
pub fn mean_slice<T: AsPrimitive<f64>>(source: &[T]) -> f64 {
    try_mean_slice(source).throw()
}

/// Returns the arithmetic mean of `source`. As with [`mean`], `T` must be a primitive number.
///
/// # Errors
/// Returns [`MeanError::EmptySource`] if `source` is empty.
///
/// # Examples
/// ```
/// # use buffer_utils::buffer::try_mean_slice;
/// assert_eq!(try_mean_slice(&[-3_i16, 3, 6]), Ok(2.0));
/// assert!(try_mean_slice::<f32>(&[]).unwrap_err().is_empty_source());
/// ```
pub fn try_mean_slice<T: AsPrimitive<f64>>(source: &[T]) -> Result<f64, MeanError> {
    if source.is_empty() {
        return Err(EmptySourceError.into());
    }

    Ok(sum(source) / source.len() as f64)
}
