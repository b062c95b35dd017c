//! Match orchestrator - alternates turns between two actors
//!
//! A [`Match`] owns both actors, the die, the computer policy and the win
//! recorder for its whole lifetime. The presentation layer drives it one step
//! at a time, much like feeding key presses into a game loop:
//!
//! - human seat: [`Match::submit_action`] / [`Match::submit_token`]
//! - computer seat: [`Match::step_computer`] (the policy picks the action)
//!
//! Busting or banking passes the turn to the other seat. A win reports the
//! winner to the [`WinRecorder`] before the match ends; a concession names the
//! other actor the winner and records nothing.
//!
//! # Example
//!
//! ```
//! use tui_pig_core::{Actor, ComputerPolicy, LoadedDie, Match, MatchOutcome, ScoreLedger, Seat};
//! use tui_pig_types::{Action, Difficulty};
//!
//! let mut ledger = ScoreLedger::in_memory();
//! let mut game = Match::new(
//!     Actor::human("ann"),
//!     Actor::computer(Difficulty::Cautious),
//!     LoadedDie::new([6, 5]),
//!     ComputerPolicy::new(7),
//!     &mut ledger,
//! )
//! .unwrap();
//!
//! game.submit_action(Action::Roll).unwrap();
//! game.submit_action(Action::Stay).unwrap();
//! assert_eq!(game.score_of("Ann"), Some(6));
//!
//! // Now it is the computer's turn.
//! assert!(!game.awaiting_human());
//! game.play_computer_turn().unwrap();
//!
//! game.submit_action(Action::Concede).unwrap();
//! assert!(matches!(
//!     game.outcome(),
//!     Some(MatchOutcome::Conceded { conceder: Seat::First, winner: Seat::Second })
//! ));
//! drop(game);
//! assert!(ledger.is_empty());
//! ```

use tracing::{info, warn};

use crate::actor::Actor;
use crate::die::RollSource;
use crate::error::{InvalidAction, LedgerError, RenameError};
use crate::ledger::WinRecorder;
use crate::policy::ComputerPolicy;
use crate::turn::{TurnEngine, TurnEvent, TurnSnapshot};
use crate::types::{normalize_name, Action, Difficulty, COMPUTER_NAME};

/// One of the two places at the table. `First` takes the opening turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won {
        winner: Seat,
        total: u32,
        turns_taken: u32,
    },
    Conceded {
        conceder: Seat,
        winner: Seat,
    },
}

impl MatchOutcome {
    pub fn winner(&self) -> Seat {
        match *self {
            MatchOutcome::Won { winner, .. } | MatchOutcome::Conceded { winner, .. } => winner,
        }
    }
}

/// One accepted action and the seat that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    pub seat: Seat,
    pub event: TurnEvent,
}

pub struct Match<D, R> {
    actors: [Actor; 2],
    active: Seat,
    turn: TurnEngine,
    die: D,
    policy: ComputerPolicy,
    recorder: R,
    outcome: Option<MatchOutcome>,
    /// Set when reporting a win failed to persist; taken by the caller.
    ledger_error: Option<LedgerError>,
}

impl<D: RollSource, R: WinRecorder> Match<D, R> {
    /// Seat two actors; `first` takes the first turn.
    ///
    /// Fails with [`RenameError::Taken`] when both actors share a name or a
    /// human has the computer's reserved name.
    pub fn new(
        first: Actor,
        second: Actor,
        die: D,
        policy: ComputerPolicy,
        recorder: R,
    ) -> Result<Self, RenameError> {
        for actor in [&first, &second] {
            if !actor.is_computer() && actor.name() == COMPUTER_NAME {
                return Err(RenameError::Taken(COMPUTER_NAME.to_string()));
            }
        }
        if first.name() == second.name() {
            return Err(RenameError::Taken(second.name().to_string()));
        }
        let turn = TurnEngine::start_round(&first);
        Ok(Self {
            actors: [first, second],
            active: Seat::First,
            turn,
            die,
            policy,
            recorder,
            outcome: None,
            ledger_error: None,
        })
    }

    pub fn actors(&self) -> &[Actor; 2] {
        &self.actors
    }

    pub fn actor(&self, seat: Seat) -> &Actor {
        &self.actors[seat.index()]
    }

    pub fn active_seat(&self) -> Seat {
        self.active
    }

    pub fn active_actor(&self) -> &Actor {
        self.actor(self.active)
    }

    pub fn current_state(&self) -> TurnSnapshot {
        self.turn.current_state()
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The match is live and waiting on a human's input.
    pub fn awaiting_human(&self) -> bool {
        !self.is_over() && !self.active_actor().is_computer()
    }

    /// Whether either seat is the computer.
    pub fn has_computer(&self) -> bool {
        self.actors.iter().any(Actor::is_computer)
    }

    /// (name, total score) for both seats in seat order.
    pub fn scoreboard(&self) -> [(&str, u32); 2] {
        [
            (self.actors[0].name(), self.actors[0].total_score()),
            (self.actors[1].name(), self.actors[1].total_score()),
        ]
    }

    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.actors
            .iter()
            .find(|a| a.name() == name)
            .map(Actor::total_score)
    }

    /// Failure from persisting the last reported win, if any.
    pub fn take_ledger_error(&mut self) -> Option<LedgerError> {
        self.ledger_error.take()
    }

    /// Submit an action for the human whose turn it is.
    pub fn submit_action(&mut self, action: Action) -> Result<MatchEvent, InvalidAction> {
        self.ensure_live()?;
        if self.active_actor().is_computer() {
            return Err(InvalidAction::NotYourTurn);
        }
        self.apply(action)
    }

    /// Parse and submit a raw action token for the human whose turn it is.
    pub fn submit_token(&mut self, token: &str) -> Result<MatchEvent, InvalidAction> {
        let action =
            Action::from_str(token).ok_or_else(|| InvalidAction::Unrecognized(token.to_string()))?;
        self.submit_action(action)
    }

    /// Let the computer make one decision and act on it.
    pub fn step_computer(&mut self) -> Result<MatchEvent, InvalidAction> {
        self.ensure_live()?;
        // Read the difficulty now; it may have changed since the last decision.
        let Some(difficulty) = self.active_actor().difficulty() else {
            return Err(InvalidAction::NotYourTurn);
        };
        let round = self.turn.round();
        let decision =
            self.policy
                .decide(difficulty, round.rolls_this_round, round.points_this_round);
        self.apply(decision.into())
    }

    /// Step the computer until its turn (or the match) ends.
    pub fn play_computer_turn(&mut self) -> Result<Vec<MatchEvent>, InvalidAction> {
        let mut events = Vec::new();
        loop {
            let ev = self.step_computer()?;
            events.push(ev);
            if ev.event.ends_turn() {
                return Ok(events);
            }
        }
    }

    /// Rename the human in `seat`.
    ///
    /// The name is normalised and must differ from the other seat's name and
    /// from the computer's reserved name. Scores and turn state are unaffected.
    pub fn rename(&mut self, seat: Seat, raw: &str) -> Result<(), RenameError> {
        if self.actor(seat).is_computer() {
            return Err(RenameError::NotHuman);
        }
        let name = normalize_name(raw);
        if name.is_empty() {
            return Err(RenameError::Empty);
        }
        if name == COMPUTER_NAME || name == self.actor(seat.other()).name() {
            return Err(RenameError::Taken(name));
        }
        info!(old = self.actor(seat).name(), new = %name, "renamed");
        self.actors[seat.index()].set_name(name);
        Ok(())
    }

    /// Change every computer seat's difficulty. Returns `false` if there is none.
    pub fn set_computer_difficulty(&mut self, difficulty: Difficulty) -> bool {
        let mut changed = false;
        for actor in &mut self.actors {
            changed |= actor.set_difficulty(difficulty);
        }
        if changed {
            info!(difficulty = difficulty.as_str(), "computer difficulty changed");
        }
        changed
    }

    fn ensure_live(&self) -> Result<(), InvalidAction> {
        if self.is_over() {
            Err(InvalidAction::MatchOver)
        } else {
            Ok(())
        }
    }

    fn apply(&mut self, action: Action) -> Result<MatchEvent, InvalidAction> {
        let seat = self.active;
        let event = self
            .turn
            .submit_action(&mut self.actors[seat.index()], action, &mut self.die)?;

        match event {
            TurnEvent::Rolled { .. } => {}
            TurnEvent::Busted { .. } | TurnEvent::Banked { .. } => {
                self.active = seat.other();
                self.turn = TurnEngine::start_round(self.actor(self.active));
            }
            TurnEvent::Won {
                total, turns_taken, ..
            } => {
                let winner = &self.actors[seat.index()];
                if let Err(err) = self.recorder.report_win(winner.ledger_name(), turns_taken) {
                    warn!(error = %err, "could not persist win");
                    self.ledger_error = Some(err);
                }
                self.outcome = Some(MatchOutcome::Won {
                    winner: seat,
                    total,
                    turns_taken,
                });
            }
            TurnEvent::Conceded { .. } => {
                let winner = seat.other();
                info!(
                    conceder = self.actor(seat).name(),
                    winner = self.actor(winner).name(),
                    "match conceded"
                );
                self.outcome = Some(MatchOutcome::Conceded {
                    conceder: seat,
                    winner,
                });
            }
        }

        Ok(MatchEvent { seat, event })
    }
}
