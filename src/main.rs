use std::env;

use tracing_subscriber::EnvFilter;

mod cli;
mod exits;
mod terminal;
mod tui;

/// Log filter variable, e.g. `PASSFORGE_LOG=debug`.
const LOG_ENV: &str = "PASSFORGE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if exits::stdin_is_tty() => tui::run(),
        _ => cli::run(args),
    }
}
