//! Error types for the game core.
//!
//! Busting, banking, winning and conceding are ordinary turn outcomes, not
//! errors. What remains is a rejected action request, a rejected rename, and
//! a failure to write the ledger back to disk.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Action, TurnPhase};

/// An action request the engine refused. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAction {
    #[error("unrecognized action: {0:?}")]
    Unrecognized(String),

    #[error("{actor} may not {}", .action.as_str())]
    NotPermitted { action: Action, actor: String },

    #[error("turn already ended ({})", .0.as_str())]
    TurnOver(TurnPhase),

    #[error("match is over")]
    MatchOver,

    #[error("not this actor's turn")]
    NotYourTurn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name {0:?} is already taken")]
    Taken(String),

    #[error("only human players can be renamed")]
    NotHuman,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to write ledger {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
