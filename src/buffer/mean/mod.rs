//! Arithmetic means over numeric buffers, accumulated in [`f64`].

mod error;
mod mean;

pub use error::*;
pub use mean::*;
