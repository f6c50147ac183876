use thiserror::Error;

use crate::pass::GenerateError;

/// Refusals and failures surfaced by the generator state handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("at least one character type must be selected")]
    LastClassRequired,
    #[error("password length must be between {min} and {max}, got {length}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
    #[error("no password to copy")]
    NothingToCopy,
}
