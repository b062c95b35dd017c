//! Turn engine - resolves one actor's turn
//!
//! A turn starts in [`TurnPhase::AwaitingAction`] with the actor's total score
//! as the round baseline and ends in exactly one terminal phase:
//!
//! - **roll**: a one busts the round (round points discarded). Any other face
//!   adds to the round; if `baseline + points_this_round >= WIN_SCORE` the turn
//!   ends immediately as a win with that exact sum committed.
//! - **stay**: commits `baseline + points_this_round` once and ends the turn.
//! - **concede**: ends the turn (and the match) without touching the score.
//!
//! Rejected requests return [`InvalidAction`] and change nothing. Round state is
//! reset as soon as the turn reaches a terminal phase; the returned
//! [`TurnEvent`] carries what happened.

use tracing::{debug, info};

use crate::actor::Actor;
use crate::die::RollSource;
use crate::error::InvalidAction;
use crate::types::{Action, TurnPhase, BUST_FACE, WIN_SCORE};

/// Ephemeral per-turn counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoundState {
    pub rolls_this_round: u32,
    pub points_this_round: u32,
}

/// Result of one accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnEvent {
    /// Non-bust roll below the win score; the turn continues.
    Rolled { face: u32, round: RoundState },
    /// Rolled a one; `lost` round points were discarded.
    Busted { face: u32, lost: u32 },
    /// Stayed; `banked` round points were committed, giving `total`.
    Banked { banked: u32, total: u32 },
    /// A roll reached the win score.
    Won {
        face: u32,
        total: u32,
        turns_taken: u32,
    },
    Conceded { total: u32 },
}

impl TurnEvent {
    /// Whether this event ended the turn.
    pub fn ends_turn(&self) -> bool {
        !matches!(self, TurnEvent::Rolled { .. })
    }
}

/// Read-only view of the turn in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnSnapshot {
    pub phase: TurnPhase,
    pub baseline: u32,
    pub round: RoundState,
}

impl TurnSnapshot {
    /// Score the actor would have if they stayed now.
    pub fn candidate(&self) -> u32 {
        self.baseline + self.round.points_this_round
    }
}

#[derive(Debug, Clone)]
pub struct TurnEngine {
    phase: TurnPhase,
    baseline: u32,
    round: RoundState,
}

impl TurnEngine {
    /// Begin a turn for `actor`, carrying their total in as the baseline.
    pub fn start_round(actor: &Actor) -> Self {
        Self {
            phase: TurnPhase::AwaitingAction,
            baseline: actor.total_score(),
            round: RoundState::default(),
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn current_state(&self) -> TurnSnapshot {
        TurnSnapshot {
            phase: self.phase,
            baseline: self.baseline,
            round: self.round,
        }
    }

    /// Parse a raw action token and submit it.
    ///
    /// Unknown tokens are rejected with [`InvalidAction::Unrecognized`].
    pub fn submit_token(
        &mut self,
        actor: &mut Actor,
        token: &str,
        die: &mut impl RollSource,
    ) -> Result<TurnEvent, InvalidAction> {
        let action =
            Action::from_str(token).ok_or_else(|| InvalidAction::Unrecognized(token.to_string()))?;
        self.submit_action(actor, action, die)
    }

    /// Apply one action for `actor`, who must be the actor the turn was started for.
    pub fn submit_action(
        &mut self,
        actor: &mut Actor,
        action: Action,
        die: &mut impl RollSource,
    ) -> Result<TurnEvent, InvalidAction> {
        if self.phase.is_terminal() {
            return Err(InvalidAction::TurnOver(self.phase));
        }
        debug_assert_eq!(actor.total_score(), self.baseline, "turn started for another actor");

        match action {
            Action::Roll => Ok(self.roll(actor, die)),
            Action::Stay => Ok(self.stay(actor)),
            Action::Concede => {
                if actor.is_computer() {
                    return Err(InvalidAction::NotPermitted {
                        action,
                        actor: actor.name().to_string(),
                    });
                }
                self.finish(TurnPhase::Conceded);
                info!(actor = actor.name(), total = actor.total_score(), "conceded");
                Ok(TurnEvent::Conceded {
                    total: actor.total_score(),
                })
            }
        }
    }

    fn roll(&mut self, actor: &mut Actor, die: &mut impl RollSource) -> TurnEvent {
        let face = die.roll();
        actor.count_throw();
        self.round.rolls_this_round += 1;
        debug!(actor = actor.name(), face, "rolled");

        if face == BUST_FACE {
            let lost = self.round.points_this_round;
            self.finish(TurnPhase::Busted);
            return TurnEvent::Busted { face, lost };
        }

        self.round.points_this_round += face;
        let candidate = self.baseline + self.round.points_this_round;
        if candidate >= WIN_SCORE {
            actor.commit_score(candidate);
            self.finish(TurnPhase::Won);
            info!(
                actor = actor.name(),
                total = candidate,
                turns_taken = actor.turns_taken(),
                "won"
            );
            return TurnEvent::Won {
                face,
                total: candidate,
                turns_taken: actor.turns_taken(),
            };
        }

        TurnEvent::Rolled {
            face,
            round: self.round,
        }
    }

    fn stay(&mut self, actor: &mut Actor) -> TurnEvent {
        let banked = self.round.points_this_round;
        let total = self.baseline + banked;
        actor.commit_score(total);
        self.finish(TurnPhase::Banked);
        info!(actor = actor.name(), banked, total, "banked");
        TurnEvent::Banked { banked, total }
    }

    fn finish(&mut self, phase: TurnPhase) {
        self.phase = phase;
        self.round = RoundState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::LoadedDie;
    use crate::types::Difficulty;

    #[test]
    fn test_rolls_accumulate_then_stay_commits_once() {
        let mut actor = Actor::human("ann");
        let mut die = LoadedDie::new([3, 4, 6]);
        let mut turn = TurnEngine::start_round(&actor);

        for _ in 0..3 {
            let ev = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
            assert!(!ev.ends_turn());
        }
        assert_eq!(turn.round().points_this_round, 13);
        assert_eq!(turn.round().rolls_this_round, 3);
        assert_eq!(turn.current_state().candidate(), 13);
        assert_eq!(actor.total_score(), 0);

        let ev = turn.submit_action(&mut actor, Action::Stay, &mut die).unwrap();
        assert_eq!(ev, TurnEvent::Banked { banked: 13, total: 13 });
        assert_eq!(actor.total_score(), 13);
        assert_eq!(turn.phase(), TurnPhase::Banked);
        assert_eq!(turn.round(), RoundState::default());

        // A second stay in the same turn must not double-count.
        let err = turn.submit_action(&mut actor, Action::Stay, &mut die).unwrap_err();
        assert_eq!(err, InvalidAction::TurnOver(TurnPhase::Banked));
        assert_eq!(actor.total_score(), 13);
    }

    #[test]
    fn test_bust_discards_round() {
        let mut actor = Actor::human("ann");
        let mut die = LoadedDie::new([6, 6, 1]);
        let mut turn = TurnEngine::start_round(&actor);

        turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
        turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
        let ev = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();

        assert_eq!(ev, TurnEvent::Busted { face: 1, lost: 12 });
        assert_eq!(actor.total_score(), 0);
        assert_eq!(actor.turns_taken(), 3);
        assert_eq!(turn.phase(), TurnPhase::Busted);
    }

    #[test]
    fn test_crossing_win_score_ends_turn() {
        let mut actor = Actor::human("ann");
        actor.commit_score(95);
        let mut die = LoadedDie::new([6]);
        let mut turn = TurnEngine::start_round(&actor);

        let ev = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
        assert_eq!(
            ev,
            TurnEvent::Won {
                face: 6,
                total: 101,
                turns_taken: 1
            }
        );
        assert_eq!(actor.total_score(), 101);
        assert_eq!(turn.phase(), TurnPhase::Won);

        let err = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap_err();
        assert_eq!(err, InvalidAction::TurnOver(TurnPhase::Won));
    }

    #[test]
    fn test_exactly_win_score_wins() {
        let mut actor = Actor::human("ann");
        actor.commit_score(96);
        let mut die = LoadedDie::new([4]);
        let mut turn = TurnEngine::start_round(&actor);

        let ev = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
        assert!(matches!(ev, TurnEvent::Won { total: 100, .. }));
    }

    #[test]
    fn test_concede_keeps_score() {
        let mut actor = Actor::human("ann");
        actor.commit_score(40);
        let mut die = LoadedDie::new([5]);
        let mut turn = TurnEngine::start_round(&actor);

        turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
        let ev = turn.submit_action(&mut actor, Action::Concede, &mut die).unwrap();
        assert_eq!(ev, TurnEvent::Conceded { total: 40 });
        assert_eq!(actor.total_score(), 40);
        assert_eq!(turn.phase(), TurnPhase::Conceded);
    }

    #[test]
    fn test_computer_may_not_concede() {
        let mut cpu = Actor::computer(Difficulty::Balanced);
        let mut die = LoadedDie::new([5]);
        let mut turn = TurnEngine::start_round(&cpu);

        let err = turn.submit_action(&mut cpu, Action::Concede, &mut die).unwrap_err();
        assert!(matches!(err, InvalidAction::NotPermitted { action: Action::Concede, .. }));
        assert_eq!(turn.phase(), TurnPhase::AwaitingAction);
    }

    #[test]
    fn test_unrecognized_token_changes_nothing() {
        let mut actor = Actor::human("ann");
        let mut die = LoadedDie::new([2, 2]);
        let mut turn = TurnEngine::start_round(&actor);
        turn.submit_token(&mut actor, "roll", &mut die).unwrap();

        let before = turn.current_state();
        let err = turn.submit_token(&mut actor, "word", &mut die).unwrap_err();
        assert_eq!(err, InvalidAction::Unrecognized("word".to_string()));
        assert_eq!(turn.current_state(), before);
        assert_eq!(actor.turns_taken(), 1);
        assert_eq!(die.remaining(), 1);
    }
}
