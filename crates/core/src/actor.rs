//! Match participants.
//!
//! An [`Actor`] is either a human or the computer; the computer additionally
//! carries its current [`Difficulty`]. Scores only change through the turn
//! engine, which is why the setters here are crate-private.

use crate::types::{normalize_name, Difficulty, COMPUTER_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Human,
    Computer { difficulty: Difficulty },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    name: String,
    kind: ActorKind,
    total_score: u32,
    /// Dice thrown across the whole match (all turns).
    turns_taken: u32,
}

impl Actor {
    /// Create a human actor. The name is normalised (see [`normalize_name`]).
    pub fn human(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            kind: ActorKind::Human,
            total_score: 0,
            turns_taken: 0,
        }
    }

    pub fn computer(difficulty: Difficulty) -> Self {
        Self {
            name: COMPUTER_NAME.to_string(),
            kind: ActorKind::Computer { difficulty },
            total_score: 0,
            turns_taken: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.kind, ActorKind::Computer { .. })
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Current difficulty, `None` for humans.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.kind {
            ActorKind::Human => None,
            ActorKind::Computer { difficulty } => Some(difficulty),
        }
    }

    /// Name a win is recorded under in the ledger.
    pub fn ledger_name(&self) -> &str {
        match self.kind {
            ActorKind::Human => &self.name,
            ActorKind::Computer { .. } => COMPUTER_NAME,
        }
    }

    /// Subject used in the win banner ("You won in 12 throws!").
    pub fn win_subject(&self) -> &str {
        match self.kind {
            ActorKind::Human => "You",
            ActorKind::Computer { .. } => COMPUTER_NAME,
        }
    }

    /// Returns `false` for humans, which have no difficulty to change.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        match &mut self.kind {
            ActorKind::Human => false,
            ActorKind::Computer { difficulty: d } => {
                *d = difficulty;
                true
            }
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn commit_score(&mut self, total: u32) {
        debug_assert!(total >= self.total_score, "total score must never decrease");
        self.total_score = total;
    }

    pub(crate) fn count_throw(&mut self) {
        self.turns_taken += 1;
    }
}
