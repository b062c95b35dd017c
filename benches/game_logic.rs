use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pig::core::{Actor, ComputerPolicy, Die, Match, ScoreLedger, TurnEngine};
use tui_pig::types::{Action, Difficulty};

fn bench_turn_roll(c: &mut Criterion) {
    let mut die = Die::new(12345);

    c.bench_function("turn_roll_until_end", |b| {
        b.iter(|| {
            let mut actor = Actor::human("bench");
            let mut turn = TurnEngine::start_round(&actor);
            while let Ok(ev) = turn.submit_action(&mut actor, Action::Roll, &mut die) {
                if ev.ends_turn() {
                    break;
                }
            }
            black_box(actor.total_score());
        })
    });
}

fn bench_policy_decide(c: &mut Criterion) {
    let mut policy = ComputerPolicy::new(12345);

    c.bench_function("policy_decide_random", |b| {
        b.iter(|| policy.decide(black_box(Difficulty::Random), black_box(3), black_box(12)))
    });
}

fn bench_full_match(c: &mut Criterion) {
    c.bench_function("full_match_vs_computer", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut ledger = ScoreLedger::in_memory();
            let mut stand_in = ComputerPolicy::new(seed ^ 0xA5A5);
            let mut game = Match::new(
                Actor::human("bench"),
                Actor::computer(Difficulty::Balanced),
                Die::new(seed),
                ComputerPolicy::new(seed),
                &mut ledger,
            )
            .expect("distinct names");

            while !game.is_over() {
                if game.awaiting_human() {
                    let round = game.current_state().round;
                    let decision = stand_in.decide(
                        Difficulty::Balanced,
                        round.rolls_this_round,
                        round.points_this_round,
                    );
                    let _ = game.submit_action(decision.into());
                } else {
                    let _ = game.step_computer();
                }
            }
            black_box(game.outcome());
        })
    });
}

criterion_group!(benches, bench_turn_roll, bench_policy_decide, bench_full_match);
criterion_main!(benches);
