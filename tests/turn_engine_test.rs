//! Turn engine behaviour driven through scripted dice.

use tui_pig::core::{Actor, InvalidAction, LoadedDie, TurnEngine, TurnEvent};
use tui_pig::types::{Action, Difficulty, TurnPhase};

/// Play one full turn of `rolls` then stay.
fn bank(actor: &mut Actor, die: &mut LoadedDie, rolls: usize) -> TurnEvent {
    let mut turn = TurnEngine::start_round(actor);
    for _ in 0..rolls {
        let ev = turn.submit_action(actor, Action::Roll, die).unwrap();
        assert!(!ev.ends_turn(), "unexpected end of turn: {ev:?}");
    }
    turn.submit_action(actor, Action::Stay, die).unwrap()
}

#[test]
fn test_stay_commits_baseline_plus_round() {
    let mut actor = Actor::human("ann");
    let mut die = LoadedDie::new([4, 4, 2, 6, 3]);

    assert_eq!(bank(&mut actor, &mut die, 3), TurnEvent::Banked { banked: 10, total: 10 });
    assert_eq!(bank(&mut actor, &mut die, 2), TurnEvent::Banked { banked: 9, total: 19 });
    assert_eq!(actor.total_score(), 19);
    assert_eq!(actor.turns_taken(), 5);
}

#[test]
fn test_bust_returns_to_baseline() {
    let mut actor = Actor::human("ann");
    let mut die = LoadedDie::new([6, 6, 5, 5, 6, 1]);
    bank(&mut actor, &mut die, 2);
    assert_eq!(actor.total_score(), 12);

    let mut turn = TurnEngine::start_round(&actor);
    for _ in 0..3 {
        turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
    }
    assert_eq!(turn.round().points_this_round, 16);

    let ev = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
    assert_eq!(ev, TurnEvent::Busted { face: 1, lost: 16 });
    assert_eq!(actor.total_score(), 12);
    assert_eq!(turn.phase(), TurnPhase::Busted);
}

#[test]
fn test_roll_past_win_score_wins_immediately() {
    let mut actor = Actor::human("ann");
    // 19 fives bank 95 without ever touching 100.
    let mut faces = vec![5; 19];
    faces.push(6);
    let mut die = LoadedDie::new(faces);

    bank(&mut actor, &mut die, 19);
    assert_eq!(actor.total_score(), 95);

    let mut turn = TurnEngine::start_round(&actor);
    assert_eq!(turn.baseline(), 95);
    let ev = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();

    assert_eq!(
        ev,
        TurnEvent::Won {
            face: 6,
            total: 101,
            turns_taken: 20
        }
    );
    assert_eq!(actor.total_score(), 101);
    assert_eq!(turn.phase(), TurnPhase::Won);
    assert_eq!(
        turn.submit_action(&mut actor, Action::Stay, &mut die),
        Err(InvalidAction::TurnOver(TurnPhase::Won))
    );
}

#[test]
fn test_win_inside_first_turn() {
    let mut actor = Actor::human("ann");
    let mut die = LoadedDie::new(vec![6; 17]);
    let mut turn = TurnEngine::start_round(&actor);

    let mut last = None;
    for _ in 0..17 {
        let ev = turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();
        last = Some(ev);
        if ev.ends_turn() {
            break;
        }
    }
    // 16 sixes = 96, the 17th crosses 100.
    assert_eq!(
        last,
        Some(TurnEvent::Won {
            face: 6,
            total: 102,
            turns_taken: 17
        })
    );
}

#[test]
fn test_invalid_requests_leave_state_alone() {
    let mut actor = Actor::human("ann");
    let mut die = LoadedDie::new([3, 3, 3]);
    let mut turn = TurnEngine::start_round(&actor);
    turn.submit_action(&mut actor, Action::Roll, &mut die).unwrap();

    let before = turn.current_state();
    for token in ["", "5", "jump", "rollx"] {
        let err = turn.submit_token(&mut actor, token, &mut die).unwrap_err();
        assert_eq!(err, InvalidAction::Unrecognized(token.to_string()));
    }
    assert_eq!(turn.current_state(), before);
    assert_eq!(turn.round().rolls_this_round, 1);
    assert_eq!(turn.round().points_this_round, 3);
    assert_eq!(actor.total_score(), 0);
    assert_eq!(actor.turns_taken(), 1);
    assert_eq!(die.remaining(), 2);
}

#[test]
fn test_tokens_are_case_insensitive() {
    let mut actor = Actor::human("ann");
    let mut die = LoadedDie::new([2]);
    let mut turn = TurnEngine::start_round(&actor);

    assert!(matches!(
        turn.submit_token(&mut actor, "ROLL", &mut die),
        Ok(TurnEvent::Rolled { face: 2, .. })
    ));
    assert!(matches!(
        turn.submit_token(&mut actor, "Stay", &mut die),
        Ok(TurnEvent::Banked { total: 2, .. })
    ));
}

#[test]
fn test_computer_cannot_concede() {
    let mut cpu = Actor::computer(Difficulty::Random);
    let mut die = LoadedDie::new([4]);
    let mut turn = TurnEngine::start_round(&cpu);

    let err = turn
        .submit_action(&mut cpu, Action::Concede, &mut die)
        .unwrap_err();
    assert_eq!(
        err,
        InvalidAction::NotPermitted {
            action: Action::Concede,
            actor: "Computer".to_string()
        }
    );
    assert_eq!(turn.phase(), TurnPhase::AwaitingAction);
    assert_eq!(cpu.turns_taken(), 0);
}
