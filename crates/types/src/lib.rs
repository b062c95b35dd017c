//! Core types module - shared vocabulary and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! from the game core, the input mapping layer, and the terminal views alike.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_SCORE` | 100 | Total score that ends the match |
//! | `DIE_FACES` | 6 | Highest face of the die |
//! | `BUST_FACE` | 1 | Face that wipes out the round |
//! | `CAUTIOUS_POINTS_LIMIT` | 10 | Cautious computer banks at this many round points |
//! | `CAUTIOUS_ROLL_LIMIT` | 2 | Cautious computer banks after this many rolls |
//! | `BALANCED_POINTS_LIMIT` | 20 | Balanced computer banks at this many round points |
//!
//! # Examples
//!
//! ```
//! use tui_pig_types::{Action, Difficulty, WIN_SCORE};
//!
//! // Parse an action token (case-insensitive)
//! assert_eq!(Action::from_str("roll"), Some(Action::Roll));
//! assert_eq!(Action::from_str("1"), Some(Action::Roll));
//!
//! // Difficulty picks use the menu digits
//! assert_eq!(Difficulty::from_str("2"), Some(Difficulty::Balanced));
//!
//! assert_eq!(WIN_SCORE, 100);
//! ```

/// Total score needed to win (inclusive).
pub const WIN_SCORE: u32 = 100;

/// Number of faces on the die; faces are `1..=DIE_FACES`.
pub const DIE_FACES: u32 = 6;

/// The face that busts the round.
pub const BUST_FACE: u32 = 1;

/// Round points at which the cautious computer stops rolling.
pub const CAUTIOUS_POINTS_LIMIT: u32 = 10;

/// Rolls per round after which the cautious computer stops rolling.
pub const CAUTIOUS_ROLL_LIMIT: u32 = 2;

/// Round points at which the balanced computer stops rolling.
pub const BALANCED_POINTS_LIMIT: u32 = 20;

/// Name the automated actor is recorded under in the ledger.
pub const COMPUTER_NAME: &str = "Computer";

/// Default ledger file, relative to the working directory.
pub const DEFAULT_LEDGER_PATH: &str = "highscore_list.txt";

/// Default cosmetic pause before each computer move.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 1000;

/// Actions a player can request during their turn.
///
/// The computer only ever produces [`Action::Roll`] and [`Action::Stay`]
/// (see [`Decision`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Throw the die once
    Roll,
    /// Bank the round points and end the turn
    Stay,
    /// Give up the match
    Concede,
}

impl Action {
    /// Parse an action token (case-insensitive, surrounding whitespace ignored).
    ///
    /// Accepts the word forms and the menu digits shown on the turn prompt.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pig_types::Action;
    ///
    /// assert_eq!(Action::from_str("Stay"), Some(Action::Stay));
    /// assert_eq!(Action::from_str("2"), Some(Action::Stay));
    /// assert_eq!(Action::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "roll" | "toss" | "1" => Some(Action::Roll),
            "stay" | "bank" | "2" => Some(Action::Stay),
            "concede" | "surrender" | "4" => Some(Action::Concede),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Roll => "roll",
            Action::Stay => "stay",
            Action::Concede => "concede",
        }
    }
}

/// What the computer policy tells the automated actor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Roll,
    Stay,
}

impl From<Decision> for Action {
    fn from(value: Decision) -> Self {
        match value {
            Decision::Roll => Action::Roll,
            Decision::Stay => Action::Stay,
        }
    }
}

/// Computer opponent difficulty.
///
/// - **Cautious**: banks early, like a nervous beginner
/// - **Balanced**: banks once the round is worth a moderate amount
/// - **Random**: flips a coin for every decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Cautious,
    #[default]
    Balanced,
    Random,
}

impl Difficulty {
    /// Parse a difficulty pick from the difficulty menu digit or its name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "cautious" => Some(Difficulty::Cautious),
            "2" | "balanced" => Some(Difficulty::Balanced),
            "3" | "random" | "reckless" => Some(Difficulty::Random),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Cautious => "cautious",
            Difficulty::Balanced => "balanced",
            Difficulty::Random => "random",
        }
    }
}

/// Turn state machine phases.
///
/// A turn starts in `AwaitingAction` and ends in exactly one of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    AwaitingAction,
    /// Rolled a one; round points discarded
    Busted,
    /// Stayed; round points committed
    Banked,
    /// Reached the win score
    Won,
    /// Gave up the match
    Conceded,
}

impl TurnPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnPhase::AwaitingAction)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingAction => "awaiting action",
            TurnPhase::Busted => "busted",
            TurnPhase::Banked => "banked",
            TurnPhase::Won => "won",
            TurnPhase::Conceded => "conceded",
        }
    }
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlayerVsPlayer,
    PlayerVsComputer,
    Rules,
    Leaderboard,
    Quit,
}

impl MenuChoice {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::PlayerVsPlayer),
            "2" => Some(MenuChoice::PlayerVsComputer),
            "3" => Some(MenuChoice::Rules),
            "4" => Some(MenuChoice::Leaderboard),
            "5" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Normalise a player name: trimmed, first character upper case, rest lower case.
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
