//! A module containing [`Stride`], for copying every `N`th element of one buffer into another, and
//! the errors it can report.
//!
//! Fixed-size arrays are checked while compiling, slices when copying.

mod error;
mod stride;

pub use error::*;
pub use stride::*;
