//! Generation error types.

use thiserror::Error;

/// Why a [`GenerationRequest`](super::GenerationRequest) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("length {length} is outside {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
    #[error("no character classes selected")]
    NoClassesSelected,
    #[error("length {length} is below the {classes} enabled classes that must each appear")]
    LengthBelowRequiredClassCount { length: usize, classes: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid request: {0}")]
    InvalidRequest(InvalidReason),
}

impl GenerateError {
    pub fn reason(&self) -> InvalidReason {
        match self {
            GenerateError::InvalidRequest(reason) => *reason,
        }
    }
}

impl From<InvalidReason> for GenerateError {
    fn from(reason: InvalidReason) -> Self {
        GenerateError::InvalidRequest(reason)
    }
}
