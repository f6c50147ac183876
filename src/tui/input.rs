use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Single-line edit buffer. The cursor counts characters, not bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
            cursor: initial.chars().count(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Width in characters.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.width() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.width() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.width();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Outcome of feeding one key to a prompt.
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Edit,
    Submit,
    Cancel,
    Interrupt,
}

fn apply_key(buf: &mut LineBuffer, key: KeyEvent, accept: fn(char) -> bool) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return KeyAction::Interrupt,
        KeyCode::Char('q') if ctrl => return KeyAction::Cancel,
        KeyCode::Char('u') if ctrl => buf.clear(),
        KeyCode::Esc => return KeyAction::Cancel,
        KeyCode::Enter => return KeyAction::Submit,
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete(),
        KeyCode::Left => buf.left(),
        KeyCode::Right => buf.right(),
        KeyCode::Home => buf.home(),
        KeyCode::End => buf.end(),
        KeyCode::Char(c) if accept(c) => buf.insert(c),
        _ => {}
    }
    KeyAction::Edit
}

/// Raw-mode line editor. `None` when cancelled with Esc or Ctrl+Q.
fn edit_line(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut buf = LineBuffer::new(initial);

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(buf.into_string()),
    };

    print!("{}: {}", prompt, buf.as_str());
    flush();

    let mut last_width = buf.width();
    let mut cancelled = false;

    loop {
        match read() {
            Ok(Event::Key(key)) => match apply_key(&mut buf, key, accept) {
                KeyAction::Edit => {
                    print!("\r{}: {}", prompt, " ".repeat(last_width + 1));
                    print!("\r{}: {}", prompt, buf.as_str());
                    last_width = buf.width();
                    print!("\x1b[{}G", prompt.chars().count() + 3 + buf.cursor());
                    flush();
                }
                KeyAction::Submit => break,
                KeyAction::Cancel => {
                    cancelled = true;
                    break;
                }
                KeyAction::Interrupt => {
                    // process::exit skips destructors
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
            },
            Err(_) => break,
            _ => {}
        }
    }

    drop(_guard);
    println!();
    if cancelled { None } else { Some(buf.into_string()) }
}

/// Numeric prompt. Non-digits are ignored.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    edit_line(prompt, &initial, |c| c.is_ascii_digit())?
        .parse()
        .ok()
}

/// Free-text prompt. Menu commands are ASCII, so other input is dropped.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, |c| c.is_ascii() && !c.is_ascii_control())
}
