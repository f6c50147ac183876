use passforge::pass::{MAX_LENGTH, MIN_LENGTH, charset};
use passforge::{CharacterClass, GeneratorState, entropy};
use zeroize::Zeroizing;

use super::Status;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, entropy_strength,
    flush, print_error, print_rule, print_success,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Password generator with per-class coverage");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to toggle");
    box_line("     character types, adjust length and copy passwords.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: 12)"),
    );
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("      --no-lower", "Exclude lowercase letters (a-z)");
    box_opt("      --no-upper", "Exclude uppercase letters (A-Z)");
    box_opt("      --no-digits", "Exclude digits (0-9)");
    box_opt("  -S, --symbols", "Include symbols (!@#$%^&* and more)");
    box_opt("      --no-symbols", "Exclude symbols");
    box_opt(
        "      --no-enforce",
        "Do not guarantee one character from each selected type",
    );
    box_opt("      --seed <N>", "Deterministic output for a given seed");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("      --hide", "Print asterisks in place of each character");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the resulting settings as defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passforge                  Interactive mode");
    box_line("  passforge -l 16            One password, 16 characters");
    box_line("  passforge -l 20 -n 3 -S    Three passwords with symbols");
    box_line("  passforge --no-upper -b    Lowercase and digits, to clipboard");
    box_line("  passforge --seed 1 -l 12   Same output on every run");
    box_line("");
    box_bottom();
    println!();
}

/// Menu line holding the password, wiped once the menu is drawn.
fn password_line(state: &GeneratorState) -> Zeroizing<String> {
    let shown = Zeroizing::new(state.display_text());
    Zeroizing::new(format!("  {}", shown.as_str()))
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn print_main_menu(state: &GeneratorState, status: &Status) {
    box_top("Password Generator");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}Password Length{RESET}:"));
    box_line(&format!(
        "  -/+) {}   l) set ({MIN_LENGTH}-{MAX_LENGTH})",
        state.length()
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Character Types{RESET}:"));
    for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            i + 1,
            checkbox(state.is_enabled(class)),
            class.label()
        ));
    }

    box_line("");
    box_line(&format!("{UNDERLINE}Validation{RESET}:"));
    box_line(&format!(
        "  e) {} At least one character from each selected type",
        checkbox(state.enforce_coverage())
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Generated Password{RESET}:"));
    box_line(&password_line(state));
    box_line(&format!(
        "  h) {} Show password",
        checkbox(state.show_password())
    ));

    let classes = state.classes();
    let bits = charset::entropy_bits(state.length(), &classes);
    box_line("");
    box_line(&format!(
        "  {:.1} bits ({}) • Charset: {} chars • {}",
        bits,
        entropy_strength(bits),
        charset::size(&classes),
        entropy::source_name(None)
    ));

    box_line("");
    print_rule();
    box_line("   Enter) generate | c) copy | s) save | r) defaults | ?) help | q) quit");
    box_bottom();

    match status {
        Status::None => println!(),
        Status::Info(msg) => print_success(msg),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}
