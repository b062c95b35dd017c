//! Computer policy - decides whether the automated actor rolls again
//!
//! | Difficulty | Stays when |
//! |------------|------------|
//! | Cautious | `points_this_round >= 10` or `rolls_this_round >= 2` |
//! | Balanced | `points_this_round >= 20` |
//! | Random | a fair coin says so (round state ignored) |
//!
//! The difficulty is passed in on every call so a change made between turns is
//! picked up at the very next decision.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::types::{
    Decision, Difficulty, BALANCED_POINTS_LIMIT, CAUTIOUS_POINTS_LIMIT, CAUTIOUS_ROLL_LIMIT,
};

#[derive(Debug, Clone)]
pub struct ComputerPolicy {
    /// Coin for `Difficulty::Random`.
    rng: ChaCha8Rng,
}

impl ComputerPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn decide(
        &mut self,
        difficulty: Difficulty,
        rolls_this_round: u32,
        points_this_round: u32,
    ) -> Decision {
        let decision = match difficulty {
            Difficulty::Cautious => {
                if points_this_round >= CAUTIOUS_POINTS_LIMIT
                    || rolls_this_round >= CAUTIOUS_ROLL_LIMIT
                {
                    Decision::Stay
                } else {
                    Decision::Roll
                }
            }
            Difficulty::Balanced => {
                if points_this_round >= BALANCED_POINTS_LIMIT {
                    Decision::Stay
                } else {
                    Decision::Roll
                }
            }
            Difficulty::Random => {
                if self.rng.gen_bool(0.5) {
                    Decision::Roll
                } else {
                    Decision::Stay
                }
            }
        };
        debug!(
            difficulty = difficulty.as_str(),
            rolls_this_round,
            points_this_round,
            ?decision,
            "computer decision"
        );
        decision
    }
}
