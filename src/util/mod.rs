//! Failure reporting shared by every buffer operation.
#![warn(missing_docs)]

pub mod fatal;
#[cfg(test)]
pub(crate) mod panic;
pub mod result;
mod tests;

#[doc(inline)]
pub use fatal::{Fatal, fatal};
#[doc(inline)]
pub use result::ResultExtension;
