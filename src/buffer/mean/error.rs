use derive_more::{Display, Error, From, IsVariant};

use crate::util::Fatal;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("Source container must be non-empty")]
pub struct EmptySourceError;
impl Fatal for EmptySourceError {}

/// Failure of a mean over a runtime-sized buffer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum MeanError {
    EmptySource(EmptySourceError),
}
impl Fatal for MeanError {}
