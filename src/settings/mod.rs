//! Persisted generator defaults.

mod file;

use std::path::Path;

use thiserror::Error;

use crate::app::{DEFAULT_LENGTH, GeneratorState};
use crate::pass::{CharacterClass, ClassSet};

pub use file::get_path;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub enforce_coverage: bool,
    pub show_password: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&get_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&get_path())
    }

    /// Load from `path`, writing defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)?;
        Ok(())
    }

    /// Enabled classes. An all-off selection falls back to the defaults.
    pub fn classes(&self) -> ClassSet {
        let mut set = ClassSet::empty();
        set.set(CharacterClass::Lowercase, self.lowercase);
        set.set(CharacterClass::Uppercase, self.uppercase);
        set.set(CharacterClass::Digit, self.digits);
        set.set(CharacterClass::Symbol, self.symbols);
        if set.is_empty() {
            return Settings::default().classes();
        }
        set
    }

    pub fn set_classes(&mut self, classes: ClassSet) {
        self.lowercase = classes.contains(CharacterClass::Lowercase);
        self.uppercase = classes.contains(CharacterClass::Uppercase);
        self.digits = classes.contains(CharacterClass::Digit);
        self.symbols = classes.contains(CharacterClass::Symbol);
    }

    /// Copy the controls of `state` into these settings.
    pub fn update_from(&mut self, state: &GeneratorState) {
        self.pass_length = state.length();
        self.set_classes(state.classes());
        self.enforce_coverage = state.enforce_coverage();
        self.show_password = state.show_password();
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            enforce_coverage: true,
            show_password: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_off_classes_fall_back_to_defaults() {
        let settings = Settings {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            ..Settings::default()
        };
        assert_eq!(settings.classes(), Settings::default().classes());
    }

    #[test]
    fn update_from_state() {
        let mut state = GeneratorState::default();
        state.set_length(40).unwrap();
        state.toggle_class(CharacterClass::Symbol).unwrap();
        state.toggle_coverage();

        let mut settings = Settings::default();
        settings.update_from(&state);
        assert_eq!(settings.pass_length, 40);
        assert!(settings.symbols);
        assert!(!settings.enforce_coverage);
        assert_eq!(settings.number_of_passwords, 1);
    }
}
