//! Caller-owned presentation state for a password generator front end.
//!
//! Each handler corresponds to one control of a generator window: the length
//! selector and its +/- buttons, the class checkboxes, the coverage and
//! visibility toggles, and the generate and copy buttons. None of them depend
//! on an event loop; a front end calls them from whatever events it has.

use tracing::{debug, warn};

use super::AppError;
use crate::entropy::RandomSource;
use crate::pass::{
    self, CharacterClass, ClassSet, GenerationRequest, MAX_LENGTH, MIN_LENGTH, Password,
};
use crate::settings::Settings;

pub const DEFAULT_LENGTH: usize = 12;

/// A single control change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionChange {
    SetClass(CharacterClass, bool),
    SetCoverage(bool),
    SetShowPassword(bool),
    SetLength(usize),
}

#[derive(Debug, Clone)]
pub struct GeneratorState {
    length: usize,
    classes: ClassSet,
    enforce_coverage: bool,
    show_password: bool,
    current_password: Option<Password>,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: [
                CharacterClass::Lowercase,
                CharacterClass::Uppercase,
                CharacterClass::Digit,
            ]
            .into_iter()
            .collect(),
            enforce_coverage: true,
            show_password: true,
            current_password: None,
        }
    }
}

impl From<&Settings> for GeneratorState {
    fn from(settings: &Settings) -> Self {
        Self {
            length: settings.pass_length.clamp(MIN_LENGTH, MAX_LENGTH),
            classes: settings.classes(),
            enforce_coverage: settings.enforce_coverage,
            show_password: settings.show_password,
            current_password: None,
        }
    }
}

impl GeneratorState {
    /// Default state with one password already generated.
    pub fn with_initial_password<R>(rng: &mut R) -> Result<Self, AppError>
    where
        R: RandomSource + ?Sized,
    {
        let mut state = Self::default();
        state.on_generate_clicked(rng)?;
        Ok(state)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(class)
    }

    pub fn enforce_coverage(&self) -> bool {
        self.enforce_coverage
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn current_password(&self) -> Option<&Password> {
        self.current_password.as_ref()
    }

    /// The request the current controls describe.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes).enforce_coverage(self.enforce_coverage)
    }

    /// Generate a password from the current controls and keep it for display.
    /// On error the previous password is kept.
    pub fn on_generate_clicked<R>(&mut self, rng: &mut R) -> Result<&Password, AppError>
    where
        R: RandomSource + ?Sized,
    {
        let request = self.request();
        let password = pass::generate(&request, rng)?;
        debug!(
            length = request.length,
            classes = request.enabled_classes.len(),
            coverage = request.enforce_coverage,
            "password generated"
        );
        Ok(&*self.current_password.insert(password))
    }

    pub fn on_option_changed(&mut self, change: OptionChange) -> Result<(), AppError> {
        match change {
            OptionChange::SetClass(class, enabled) => self.set_class(class, enabled),
            OptionChange::SetCoverage(enforce) => {
                self.enforce_coverage = enforce;
                Ok(())
            }
            OptionChange::SetShowPassword(show) => {
                self.show_password = show;
                Ok(())
            }
            OptionChange::SetLength(length) => self.set_length(length),
        }
    }

    fn set_class(&mut self, class: CharacterClass, enabled: bool) -> Result<(), AppError> {
        if !enabled && self.classes.contains(class) && self.classes.len() == 1 {
            warn!(?class, "refusing to disable the last character class");
            return Err(AppError::LastClassRequired);
        }
        self.classes.set(class, enabled);
        Ok(())
    }

    /// Flip one class checkbox. Unchecking the last one is refused.
    pub fn toggle_class(&mut self, class: CharacterClass) -> Result<(), AppError> {
        let enabled = !self.classes.contains(class);
        self.set_class(class, enabled)
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), AppError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(AppError::LengthOutOfRange {
                length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        self.length = length;
        Ok(())
    }

    /// Saturates at the maximum length.
    pub fn increment_length(&mut self) {
        if self.length < MAX_LENGTH {
            self.length += 1;
        }
    }

    /// Saturates at the minimum length.
    pub fn decrement_length(&mut self) {
        if self.length > MIN_LENGTH {
            self.length -= 1;
        }
    }

    pub fn toggle_coverage(&mut self) {
        self.enforce_coverage = !self.enforce_coverage;
    }

    pub fn toggle_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Text for the password field: plain or masked, empty before the first
    /// generation.
    pub fn display_text(&self) -> String {
        match &self.current_password {
            Some(pass) if self.show_password => pass.as_str().to_owned(),
            Some(pass) => pass.masked(),
            None => String::new(),
        }
    }

    /// The current password for the clipboard, regardless of visibility.
    pub fn copy_text(&self) -> Result<&str, AppError> {
        self.current_password
            .as_ref()
            .map(Password::as_str)
            .ok_or(AppError::NothingToCopy)
    }
}
