//! Generator front-end state and event handlers.

mod error;
mod state;

pub use error::AppError;
pub use state::{DEFAULT_LENGTH, GeneratorState, OptionChange};
