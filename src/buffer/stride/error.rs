use derive_more::{Display, Error, From, IsVariant};

use crate::util::Fatal;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Invalid start index")]
pub struct InvalidStartError;
impl Fatal for InvalidStartError {}

// The trailing ", " is part of the message callers match against.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Destination container does not have sufficient size, ")]
pub struct InsufficientDestinationError;
impl Fatal for InsufficientDestinationError {}

/// Failure of a strided copy between runtime-sized buffers.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum StrideError {
    InvalidStart(InvalidStartError),
    InsufficientDestination(InsufficientDestinationError),
}
impl Fatal for StrideError {}
