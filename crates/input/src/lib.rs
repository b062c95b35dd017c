//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key events
//! into menu choices, turn inputs and difficulty picks, and provides a small
//! single-line editor for entering player names in raw mode.

pub mod line;
pub mod map;

pub use tui_pig_types as types;

pub use line::{LineEditor, LineEvent};
pub use map::{difficulty_key, key_token, menu_key, should_quit, turn_key, TurnInput};
