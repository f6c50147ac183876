use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use passforge::{CharacterClass, GeneratorState, OptionChange, RandomSource, Settings, entropy};

use super::{Status, enter_prompt, get_editable_input, get_numeric_input, print_help, print_main_menu};
use crate::terminal::{clear, reset_terminal};

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        }
    };

    let mut state = GeneratorState::from(&settings);
    let mut rng = entropy::os();
    let mut clipboard: Option<ClipboardContext> = None;
    let mut status = generate(&mut state, &mut rng);

    loop {
        clear();
        print_main_menu(&state, &status);
        status = Status::None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue,
        };

        match input.trim() {
            "" => status = generate(&mut state, &mut rng),
            "+" => state.increment_length(),
            "-" => state.decrement_length(),
            "l" => {
                if let Some(len) = get_numeric_input("Enter new password length", state.length())
                    && let Err(e) = state.on_option_changed(OptionChange::SetLength(len))
                {
                    status = Status::Error(e.to_string());
                }
            }
            choice @ ("1" | "2" | "3" | "4") => {
                status = toggle_class(&mut state, choice);
            }
            "e" => state.toggle_coverage(),
            "h" => state.toggle_visibility(),
            "c" => status = copy(&state, &mut clipboard),
            "s" => {
                settings.update_from(&state);
                status = match settings.save_to_file() {
                    Ok(()) => Status::Info("Settings saved.".to_string()),
                    Err(e) => Status::Error(format!("Error saving settings: {}", e)),
                };
            }
            "r" => {
                state = GeneratorState::default();
                status = generate(&mut state, &mut rng);
            }
            "?" | "help" => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            "q" => {
                clear();
                break;
            }
            _ => status = Status::Error("Invalid option.".to_string()),
        }
    }
}

fn generate<R: RandomSource + ?Sized>(state: &mut GeneratorState, rng: &mut R) -> Status {
    match state.on_generate_clicked(rng) {
        Ok(_) => Status::None,
        Err(e) => Status::Error(e.to_string()),
    }
}

fn toggle_class(state: &mut GeneratorState, choice: &str) -> Status {
    let class = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| CharacterClass::ALL.get(n.wrapping_sub(1)).copied());
    match class {
        Some(class) => match state.toggle_class(class) {
            Ok(()) => Status::None,
            Err(e) => Status::Error(e.to_string()),
        },
        None => Status::Error("Invalid option.".to_string()),
    }
}

fn copy(state: &GeneratorState, clipboard: &mut Option<ClipboardContext>) -> Status {
    let text = match state.copy_text() {
        Ok(text) => Zeroizing::new(text.to_owned()),
        Err(e) => return Status::Error(e.to_string()),
    };

    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                return Status::Error("Clipboard unavailable.".to_string());
            }
        }
    }
    let Some(ctx) = clipboard.as_mut() else {
        return Status::Error("Clipboard unavailable.".to_string());
    };

    match ctx.set_contents(text.as_str().to_owned()) {
        Ok(()) => Status::Info("Password copied to clipboard!".to_string()),
        Err(e) => Status::Error(format!("Clipboard error: {}", e)),
    }
}
