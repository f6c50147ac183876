//! Interactive terminal mode.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Message shown under the menu after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    None,
    Info(String),
    Error(String),
}

/// Run interactive mode.
pub fn run() {
    gen_main_menu();
}
