//! CLI context - bundles settings, flags, generator state and clipboard.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

use passforge::entropy;
use passforge::{AppError, GeneratorState, OptionChange, Settings, SettingsError};

use super::{CliFlags, ParseError, prompts, quiet};
use crate::tui::print_help;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) => 1,
            _ => 2,
        }
    }
}

/// Why a run stopped before completing normally.
pub enum Stop {
    /// Early exit - not an error, just done.
    Done,
    Failed(CliError),
}

impl From<CliError> for Stop {
    fn from(err: CliError) -> Self {
        Stop::Failed(err)
    }
}

impl From<AppError> for Stop {
    fn from(err: AppError) -> Self {
        Stop::Failed(err.into())
    }
}

/// A closed reader (`passforge -n 1000 | head`) ends the run quietly.
fn output_stop(err: io::Error) -> Stop {
    match err.kind() {
        io::ErrorKind::BrokenPipe => Stop::Done,
        _ => Stop::Failed(err.into()),
    }
}

fn write_out<W: Write>(out: &mut W, bytes: &[u8]) -> Result<(), Stop> {
    out.write_all(bytes).map_err(output_stop)
}

impl From<SettingsError> for Stop {
    fn from(err: SettingsError) -> Self {
        Stop::Failed(err.into())
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub state: GeneratorState,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments and load the starting settings.
    pub fn new(args: &[String]) -> Result<Self, CliError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        let state = GeneratorState::from(&settings);

        Ok(Self {
            settings,
            state,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.handle_clipboard()?;
        self.generate_output()?;
        self.handle_save()?;
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the generator state.
    fn apply_flags(&mut self) -> Result<(), AppError> {
        if let Some(len) = self.flags.length {
            self.state.on_option_changed(OptionChange::SetLength(len))?;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        // Enable before disabling so `--no-lower -S` style combinations never
        // pass through an empty selection.
        let (enables, disables): (Vec<_>, Vec<_>) =
            self.flags.classes.iter().partition(|(_, enabled)| *enabled);
        for &(class, enabled) in enables.into_iter().chain(disables) {
            self.state
                .on_option_changed(OptionChange::SetClass(class, enabled))?;
        }

        if self.flags.no_enforce {
            self.state.on_option_changed(OptionChange::SetCoverage(false))?;
        }
        if self.flags.hide {
            self.state
                .on_option_changed(OptionChange::SetShowPassword(false))?;
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) -> Result<(), Stop> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Stop::Done);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), Stop> {
        let count = self.settings.number_of_passwords.max(1);
        let mut rng = match self.flags.seed {
            Some(seed) => entropy::seeded(seed),
            None => entropy::os(),
        };
        debug!(
            count,
            source = entropy::source_name(self.flags.seed),
            "generating passwords"
        );

        let mut batch = String::new();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for _ in 0..count {
            self.state.on_generate_clicked(&mut rng)?;
            if self.clipboard.is_some() {
                if !batch.is_empty() {
                    batch.push('\n');
                }
                batch.push_str(self.state.copy_text()?);
            } else {
                let mut line = self.state.display_text();
                line.push('\n');
                let written = write_out(&mut out, line.as_bytes());
                line.zeroize();
                written?;
            }
        }
        out.flush().map_err(output_stop)?;

        if let Some(ctx) = self.clipboard.as_mut() {
            let result = ctx.set_contents(batch.clone());
            batch.zeroize();
            result.map_err(|e| CliError::Clipboard(e.to_string()))?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied(count);
        }
        Ok(())
    }

    fn handle_save(&mut self) -> Result<(), SettingsError> {
        if self.flags.save {
            self.settings.update_from(&self.state);
            self.settings.save_to_file()?;
            prompts::settings_saved(&passforge::settings::get_path().display().to_string());
        }
        Ok(())
    }
}
