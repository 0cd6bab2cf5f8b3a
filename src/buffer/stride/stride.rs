use crate::buffer::stride::error::{InsufficientDestinationError, InvalidStartError, StrideError};
use crate::util::ResultExtension;

/// Strided copying between buffers, selecting every `N`th element starting at index `START`.
///
/// The stride and start offset are part of the type, so every check that only involves them (and,
/// for arrays, the buffer lengths) happens during compilation. `START` defaults to `0`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `s`: The number of elements in the source.
/// - `d`: The number of elements in the destination.
///
/// | Method | Complexity |
/// |-|-|
/// | `required_len` | `O(1)` |
/// | `copy` | `O(min(d, s / N))` |
/// | `copy_slice` | `O(s / N)` |
///
/// # Examples
/// ```
/// # use buffer_utils::buffer::Stride;
/// let source = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// let mut destination = [0; 3];
/// Stride::<3, 1>::copy(&source, &mut destination);
/// assert_eq!(destination, [2, 5, 8]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stride<const N: usize, const START: usize = 0>;

impl<const N: usize, const START: usize> Stride<N, START> {
    /// Returns the number of elements a strided copy out of a source of `source_len` elements
    /// produces, which is the smallest destination that can hold them all. A start offset at or
    /// past the end of the source selects nothing.
    ///
    /// # Examples
    /// ```
    /// # use buffer_utils::buffer::Stride;
    /// assert_eq!(Stride::<3, 1>::required_len(10), 3);
    /// assert_eq!(Stride::<4>::required_len(9), 3);
    /// assert_eq!(Stride::<2, 5>::required_len(5), 0);
    /// ```
    pub const fn required_len(source_len: usize) -> usize {
        const {
            assert!(N > 0, "N must be greater than 0");
        }

        if START >= source_len {
            0
        } else {
            (source_len - START).div_ceil(N)
        }
    }

    /// Copies every `N`th element of `source`, starting at `START`, into consecutive positions of
    /// `destination` starting at 0. Elements of `destination` past the copied ones are untouched.
    ///
    /// Both lengths are known statically, so an invalid stride, a start offset outside of `source`
    /// or a `destination` too short to hold [`Stride::required_len(S)`](Stride::required_len)
    /// elements is a compile error rather than a runtime failure.
    ///
    /// ```compile_fail
    /// # use buffer_utils::buffer::Stride;
    /// // Four elements are selected, but there is only room for three.
    /// Stride::<3>::copy(&[0_u8; 10], &mut [0; 3]);
    /// ```
    ///
    /// ```compile_fail
    /// # use buffer_utils::buffer::Stride;
    /// Stride::<1, 4>::copy(&[0_u8; 4], &mut [0; 4]);
    /// ```
    pub fn copy<T: Clone, const S: usize, const D: usize>(
        source: &[T; S],
        destination: &mut [T; D],
    ) {
        const {
            assert!(N > 0, "N must be greater than 0");
            assert!(START < S, "START must be within the source extent");
            assert!((S - START).div_ceil(N) <= D, "Destination extent may not be sufficient");
        }

        source[START..]
            .iter()
            .step_by(N)
            .zip(destination.iter_mut())
            .for_each(|(src, dst)| dst.clone_from(src));
    }

    /// Copies every `N`th element of `source`, starting at `START`, into consecutive positions of
    /// `destination` starting at 0, failing if the buffers can't satisfy the copy.
    ///
    /// This is the fail-fast counterpart of [`Stride::try_copy_slice`].
    ///
    /// # Panics
    /// Panics (or aborts, depending on the build, see [`fatal`](crate::util::fatal())) with
    /// `"Invalid start index"` if `START` is greater than `source.len()`, or with
    /// `"Destination container does not have sufficient size, "` if `destination` is shorter than
    /// [`Stride::required_len(source.len())`](Stride::required_len). Nothing is written in either
    /// case.
    ///
    /// # Examples
    /// ```
    /// # use buffer_utils::buffer::Stride;
    /// let readings = vec![10_i32, -1, 20, -1, 30];
    /// let mut kept = vec![0; 3];
    /// Stride::<2>::copy_slice(&readings, &mut kept);
    /// assert_eq!(kept, [10, 20, 30]);
    /// ```
    #[track_caller]
    pub fn copy_slice<T: Clone>(source: &[T], destination: &mut [T]) {
        Self::try_copy_slice(source, destination).throw();
    }

    /// Copies every `N`th element of `source`, starting at `START`, into consecutive positions of
    /// `destination` starting at 0.
    ///
    /// Returns the number of elements written, which is always
    /// [`Stride::required_len(source.len())`](Stride::required_len). A `START` equal to
    /// `source.len()` is accepted and writes nothing.
    ///
    /// # Errors
    /// - [`StrideError::InvalidStart`] if `START` is greater than `source.len()`.
    /// - [`StrideError::InsufficientDestination`] if `destination` is too short.
    ///
    /// `destination` is left unmodified when an error is returned.
    ///
    /// # Examples
    /// ```
    /// # use buffer_utils::buffer::Stride;
    /// let mut destination = [0.0_f32; 2];
    /// assert_eq!(Stride::<2, 1>::try_copy_slice(&[0.5, 1.5, 2.5, 3.5], &mut destination), Ok(2));
    /// assert_eq!(destination, [1.5, 3.5]);
    ///
    /// let err = Stride::<1>::try_copy_slice(&[0.5, 1.5, 2.5], &mut destination).unwrap_err();
    /// assert!(err.is_insufficient_destination());
    /// ```
    pub fn try_copy_slice<T: Clone>(
        source: &[T],
        destination: &mut [T],
    ) -> Result<usize, StrideError> {
        const {
            assert!(N > 0, "N must be greater than 0");
        }

        // START is unsigned, so only the upper bound needs checking.
        if START > source.len() {
            return Err(InvalidStartError.into());
        }

        let required = Self::required_len(source.len());
        if required > destination.len() {
            return Err(InsufficientDestinationError.into());
        }

        for (dst, src) in destination.iter_mut().zip(source[START..].iter().step_by(N)) {
            dst.clone_from(src);
        }

        Ok(required)
    }
}

/// Copies every `N`th element of `source`, starting at `START`, into `destination`. Equivalent to
/// [`Stride::<N, START>::copy_slice`](Stride::copy_slice).
///
/// # Panics
/// See [`Stride::copy_slice`].
///
/// # Examples
/// ```
/// # use buffer_utils::buffer::copy_every_nth_slice;
/// let mut destination = [0_u8; 2];
/// copy_every_nth_slice::<3, 0, _>(&[7, 0, 0, 8, 0], &mut destination);
/// assert_eq!(destination, [7, 8]);
/// ```
#[track_caller]
pub fn copy_every_nth_slice<const N: usize, const START: usize, T: Clone>(
    source: &[T],
    destination: &mut [T],
) {
    Stride::<N, START>::copy_slice(source, destination)
}

/// Copies every `N`th element of `source`, starting at `START`, into `destination`. Equivalent to
/// [`Stride::<N, START>::try_copy_slice`](Stride::try_copy_slice).
///
/// # Errors
/// See [`Stride::try_copy_slice`].
pub fn try_copy_every_nth_slice<const N: usize, const START: usize, T: Clone>(
    source: &[T],
    destination: &mut [T],
) -> Result<usize, StrideError> {
    Stride::<N, START>::try_copy_slice(source, destination)
}
