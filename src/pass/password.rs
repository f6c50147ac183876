//! Generated password value.

use std::fmt;

use zeroize::Zeroize;

/// An immutable generated password. The buffer is zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Build from ASCII bytes drawn from the class alphabets, consuming and
    /// zeroizing the scratch buffer.
    pub(crate) fn from_ascii(mut bytes: Vec<u8>) -> Self {
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        bytes.zeroize();
        Password(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (every character is ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One `*` per character.
    pub fn masked(&self) -> String {
        "*".repeat(self.len())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
