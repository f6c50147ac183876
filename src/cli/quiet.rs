//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, confirmations and prompts. Passwords and errors still print.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when quiet mode is on or stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !crate::exits::stdin_is_tty()
}
