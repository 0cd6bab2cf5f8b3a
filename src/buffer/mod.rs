//! Strided copies and means over numeric buffers.
//!
//! # Method
//! Every operation comes in two shapes. Fixed-size arrays (`[T; N]`) carry their lengths in the
//! type, so invalid inputs are compile errors and the operation can't fail. Slices only know their
//! lengths at runtime and are checked on every call, either returning an error (`try_*`) or failing
//! fast through [`fatal`](crate::util::fatal()).
//!
//! | Operation | Array | Slice |
//! |-|-|-|
//! | Strided copy | [`Stride::copy`] | [`Stride::copy_slice`], [`Stride::try_copy_slice`] |
//! | Mean | [`mean()`] | [`mean_slice`], [`try_mean_slice`] |

pub mod error;
pub mod mean;
pub mod stride;

#[doc(inline)]
pub use error::BufferError;
#[doc(inline)]
pub use mean::{EmptySourceError, MeanError, mean, mean_slice, try_mean_slice};
#[doc(inline)]
pub use stride::{
    InsufficientDestinationError, InvalidStartError, Stride, StrideError, copy_every_nth_slice,
    try_copy_every_nth_slice,
};
