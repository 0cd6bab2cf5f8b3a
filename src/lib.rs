//! Small, allocation-free helpers for numeric buffers on constrained targets: copying every `N`th
//! element of one buffer into another, and taking the mean of a buffer.
//!
//! # Method
//! Where a buffer's length is known at compile time (`[T; N]`), the preconditions of each operation
//! are checked with const assertions and a violation stops the build. Where it isn't (`[T]`), the
//! same preconditions are checked on every call.
//!
//! # Error Handling
//! Runtime failures come in two flavours. The `try_*` functions return strongly typed errors, using
//! enums of ZST structs that implement [`Error`](core::error::Error), so a caller can recover. The
//! other functions fail fast: they hand the error's message to [`util::fatal()`], which either
//! panics (if the target can unwind) or aborts the process. Which one happens is fixed when the
//! crate is compiled (`panic = "abort"` in the build profile, or the `abort` feature), not at
//! runtime. The messages are stable and can be matched on:
//!
//! | Condition | Message |
//! |-|-|
//! | Strided copy start past the end of the source | `"Invalid start index"` |
//! | Short strided copy destination | `"Destination container does not have sufficient size, "` |
//! | Mean of an empty source | `"Source container must be non-empty"` |
//!
//! # Features
//! - `std` (default): link the standard library. Without it the crate is `#![no_std]`.
//! - `abort`: always abort on failure, even if the target supports unwinding. Needs `std` or
//!   `libc`.
//! - `libc`: abort through `libc::abort` on `no_std` targets.
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod buffer;
pub mod util;
