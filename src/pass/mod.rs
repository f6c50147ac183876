//! Password generation.

pub mod charset;
mod error;
mod generate;
mod password;

pub use charset::{CharacterClass, ClassSet};
pub use error::{GenerateError, InvalidReason};
pub use generate::{GenerationRequest, MAX_LENGTH, MIN_LENGTH, generate};
pub use password::Password;
