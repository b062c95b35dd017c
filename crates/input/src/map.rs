//! Key mapping from terminal events to game inputs.

use crate::types::{Action, Difficulty, MenuChoice};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means during a human turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    Action(Action),
    /// Open the rename prompt
    Rename,
    /// Open the difficulty picker (only in matches against the computer)
    ChangeDifficulty,
    /// A key with no meaning here; the raw token is handed to the engine,
    /// which rejects it.
    Unrecognized(String),
}

/// The text a key contributes as a token, if any.
pub fn key_token(key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(c.to_string()),
        _ => None,
    }
}

/// Map a key press during a human turn.
///
/// Non-character keys (arrows, function keys, ...) map to `None` and are ignored.
pub fn turn_key(key: KeyEvent, against_computer: bool) -> Option<TurnInput> {
    let token = key_token(key)?;
    let input = match token.to_lowercase().as_str() {
        "r" => TurnInput::Action(Action::Roll),
        "s" => TurnInput::Action(Action::Stay),
        "3" | "n" => TurnInput::Rename,
        "5" | "d" if against_computer => TurnInput::ChangeDifficulty,
        _ => match Action::from_str(&token) {
            Some(action) => TurnInput::Action(action),
            None => TurnInput::Unrecognized(token),
        },
    };
    Some(input)
}

/// Map a key press on the main menu. `q` is a shortcut for quit.
pub fn menu_key(key: KeyEvent) -> Option<MenuChoice> {
    let token = key_token(key)?;
    if token.eq_ignore_ascii_case("q") {
        return Some(MenuChoice::Quit);
    }
    MenuChoice::from_str(&token)
}

/// Map a key press on the difficulty picker.
pub fn difficulty_key(key: KeyEvent) -> Option<Difficulty> {
    Difficulty::from_str(&key_token(key)?)
}

/// Check if key should quit the program from anywhere.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
