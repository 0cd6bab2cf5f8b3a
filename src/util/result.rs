//! Fail-fast unwrapping for the crate's [`Result`]s.

use crate::util::fatal::Fatal;

/// Turns a recoverable [`Result`] into the crate's fail-fast behaviour.
pub trait ResultExtension<T, E: Fatal> {
    /// A method similar to [`Result::unwrap`], except that it applies only to [`Fatal`] errors and
    /// fails with the message of the error itself, unwinding or aborting depending on the build.
    ///
    /// # Panics
    /// Panics (or aborts) if the [`Result`] is an [`Err`].
    ///
    /// # Examples
    /// ```
    /// # use buffer_utils::util::ResultExtension;
    /// # use buffer_utils::buffer::try_mean_slice;
    /// assert_eq!(try_mean_slice(&[1_u8, 3]).throw(), 2.0);
    /// ```
    fn throw(self) -> T;
}

impl<T, E: Fatal> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => error.fail(),
        }
    }
}
