//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of Pig: rolling, banking, busting, winning,
//! the computer opponent's decision policy, and the persisted win ledger.
//! It has **no dependencies** on the terminal, which makes it:
//!
//! - **Deterministic**: seeded dice and policy replay identical matches
//! - **Testable**: a [`LoadedDie`] scripts every roll
//! - **Portable**: any front end can drive a [`Match`] step by step
//!
//! # Module Structure
//!
//! - [`die`]: six-sided die and the [`RollSource`] abstraction
//! - [`actor`]: human and computer participants
//! - [`turn`]: per-turn state machine (roll / stay / concede)
//! - [`policy`]: difficulty-driven computer decisions
//! - [`ledger`]: `name : count` win ledger on disk
//! - [`game`]: match orchestration between two actors
//! - [`error`]: rejected actions, renames, and ledger write failures
//!
//! # Game Rules
//!
//! - Each roll adds its face to the round; a **1** busts the round
//! - **Stay** banks the round into the total score
//! - Reaching **100** (inclusive) wins immediately, mid-turn
//! - **Concede** hands the match to the opponent and records no win
//!
//! # Example
//!
//! ```
//! use tui_pig_core::{Actor, LoadedDie, TurnEngine, TurnEvent};
//! use tui_pig_types::Action;
//!
//! let mut ann = Actor::human("ann");
//! let mut die = LoadedDie::new([5, 6]);
//! let mut turn = TurnEngine::start_round(&ann);
//!
//! turn.submit_action(&mut ann, Action::Roll, &mut die).unwrap();
//! turn.submit_action(&mut ann, Action::Roll, &mut die).unwrap();
//! let banked = turn.submit_action(&mut ann, Action::Stay, &mut die).unwrap();
//!
//! assert_eq!(banked, TurnEvent::Banked { banked: 11, total: 11 });
//! assert_eq!(ann.total_score(), 11);
//! ```

pub mod actor;
pub mod die;
pub mod error;
pub mod game;
pub mod ledger;
pub mod policy;
pub mod turn;

pub use tui_pig_types as types;

// Re-export commonly used types for convenience
pub use actor::{Actor, ActorKind};
pub use die::{Die, LoadedDie, RollSource};
pub use error::{InvalidAction, LedgerError, RenameError};
pub use game::{Match, MatchEvent, MatchOutcome, Seat};
pub use ledger::{ScoreLedger, WinRecorder};
pub use policy::ComputerPolicy;
pub use turn::{RoundState, TurnEngine, TurnEvent, TurnSnapshot};
