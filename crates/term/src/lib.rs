//! Terminal presentation module.
//!
//! Views are pure functions from game state to a [`Screen`] of styled lines,
//! so they can be unit-tested without a terminal. [`TerminalRenderer`] is the
//! only part that touches stdout.
//!
//! Goals:
//! - Keep `core` free of presentation text and colours
//! - Redraw whole screens; a turn-based game has no need for diffing

pub mod renderer;
pub mod screen;
pub mod view;

pub use tui_pig_core as core;
pub use tui_pig_types as types;

pub use renderer::{encode_screen_into, TerminalRenderer};
pub use screen::{Line, Rgb, Screen, Span, TextStyle};
pub use view::{
    difficulty_screen, event_line, invalid_line, leaderboard_screen, menu_screen,
    name_prompt_screen, outcome_line, rules_screen, turn_screen, BAR_MAX_WIDTH,
};
