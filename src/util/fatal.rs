//! The fail-fast primitive. Whether a failure unwinds or aborts is decided when the crate is built,
//! never at the call site:
//!
//! | Build | Behaviour |
//! |-|-|
//! | `panic = "unwind"`, no `abort` feature | Panics with the message as its payload. |
//! | `panic = "abort"` or the `abort` feature | Terminates the process immediately. |
//!
//! An unwinding failure can be caught with [`catch_unwind`](std::panic::catch_unwind), the payload
//! being a [`String`] equal to the error's message. If nothing catches it, the process ends with
//! the usual panic diagnostic.

use core::error::Error;
use core::fmt::Display;

/// Reports a fatal condition carrying `message`. Never returns.
///
/// # Panics
/// Panics with `message` when the crate is built with unwinding support and without the `abort`
/// feature. Otherwise the process is aborted and no message is delivered.
///
/// # Examples
/// ```
/// # use buffer_utils::util::fatal;
/// let caught = std::panic::catch_unwind(|| fatal("Invalid start index"));
/// let payload = caught.unwrap_err();
/// assert_eq!(payload.downcast_ref::<String>().unwrap(), "Invalid start index");
/// ```
#[cold]
#[track_caller]
#[cfg(all(panic = "unwind", not(feature = "abort")))]
pub fn fatal(message: impl Display) -> ! {
    panic!("{}", message)
}

/// Reports a fatal condition carrying `message`. Never returns.
///
/// This build has no unwinding support (or enables the `abort` feature), so the process is
/// terminated and `message` is discarded.
#[cold]
#[cfg(not(all(panic = "unwind", not(feature = "abort"))))]
pub fn fatal(message: impl Display) -> ! {
    let _ = message;
    abort()
}

#[cfg(all(feature = "std", not(all(panic = "unwind", not(feature = "abort")))))]
fn abort() -> ! {
    std::process::abort()
}

#[cfg(all(
    not(feature = "std"),
    feature = "libc",
    not(all(panic = "unwind", not(feature = "abort")))
))]
fn abort() -> ! {
    // SAFETY: abort takes no arguments and does not return.
    unsafe { libc::abort() }
}

#[cfg(all(feature = "abort", not(feature = "std"), not(feature = "libc")))]
compile_error!("the abort feature needs std or libc");

// Without std or libc the only way out is the panic handler, which can't unwind under
// `panic = "abort"`.
#[cfg(all(
    not(feature = "std"),
    not(feature = "libc"),
    not(feature = "abort"),
    not(panic = "unwind")
))]
fn abort() -> ! {
    panic!()
}

/// An [`Error`] that can end the current operation through [`fatal`].
///
/// Mirrors a panic-on-error style: the error's [`Display`] output is the message handed to
/// [`fatal`], so the caught payload matches `error.to_string()` exactly.
pub trait Fatal: Error {
    /// Fails with this error's message.
    ///
    /// # Panics
    /// See [`fatal`].
    #[track_caller]
    fn fail(&self) -> ! {
        fatal(self)
    }
}
