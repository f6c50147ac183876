//! Flag-driven, non-interactive mode.

mod context;
mod flags;
mod parse;
mod prompts;
mod quiet;

use std::process;

use tracing::debug;

use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode with the process arguments. Exits the process on failure.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run `passforge --help` for usage.");
            process::exit(e.exit_code());
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => {}
        Err(Stop::Failed(e)) => {
            debug!(error = ?e, "generation failed");
            prompts::error(&e.to_string());
            process::exit(e.exit_code());
        }
    }
}
