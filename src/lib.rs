//! Password generation with per-class coverage enforcement.
//!
//! The core is [`pass::generate`], a pure function of a
//! [`GenerationRequest`](pass::GenerationRequest) and an injected
//! [`RandomSource`](entropy::RandomSource). [`app::GeneratorState`] holds the
//! presentation state a front end needs around it, and [`settings`] persists
//! that state's defaults.

pub mod app;
pub mod entropy;
pub mod pass;
pub mod settings;

pub use app::{AppError, GeneratorState, OptionChange};
pub use entropy::RandomSource;
pub use pass::{
    CharacterClass, ClassSet, GenerateError, GenerationRequest, InvalidReason, Password, generate,
};
pub use settings::{Settings, SettingsError};
