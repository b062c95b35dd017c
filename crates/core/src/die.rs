//! Die module - uniform six-sided die
//!
//! [`Die`] draws faces from a ChaCha8 stream, seeded for reproducible sessions
//! or from OS entropy for normal play. [`LoadedDie`] replays a fixed sequence of
//! faces, which makes turns fully deterministic for replays and tests.
//!
//! Everything that needs a face goes through the [`RollSource`] trait.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::DIE_FACES;

/// Anything that can produce a die face in `1..=DIE_FACES`.
pub trait RollSource {
    fn roll(&mut self) -> u32;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

/// Fair six-sided die.
#[derive(Debug, Clone)]
pub struct Die {
    rng: ChaCha8Rng,
}

impl Die {
    /// Create a die with a fixed seed (same seed, same faces).
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a die seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RollSource for Die {
    fn roll(&mut self) -> u32 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Die that replays a scripted sequence of faces.
///
/// Once the script runs out it keeps returning the last face (or 1 when the
/// script was empty), so a runaway loop busts instead of panicking.
#[derive(Debug, Clone)]
pub struct LoadedDie {
    faces: VecDeque<u32>,
    last: u32,
}

impl LoadedDie {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: VecDeque<u32> = faces.into_iter().collect();
        debug_assert!(faces.iter().all(|f| (1..=DIE_FACES).contains(f)));
        Self { faces, last: 1 }
    }

    /// Faces not yet rolled.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Default for LoadedDie {
    fn default() -> Self {
        Self::new([])
    }
}

impl RollSource for LoadedDie {
    fn roll(&mut self) -> u32 {
        if let Some(face) = self.faces.pop_front() {
            self.last = face;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_deterministic() {
        let mut a = Die::new(12345);
        let mut b = Die::new(12345);

        for _ in 0..100 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_die_faces_in_range() {
        let mut die = Die::new(7);
        let mut seen = [false; DIE_FACES as usize];

        for _ in 0..1000 {
            let face = die.roll();
            assert!((1..=DIE_FACES).contains(&face), "face out of range: {face}");
            seen[(face - 1) as usize] = true;
        }

        // Every face should show up in 1000 throws
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_die_roughly_uniform() {
        let mut die = Die::new(99);
        let mut counts = [0u32; DIE_FACES as usize];
        for _ in 0..60_000 {
            counts[(die.roll() - 1) as usize] += 1;
        }
        for count in counts {
            assert!((9_000..=11_000).contains(&count), "skewed count: {count}");
        }
    }

    #[test]
    fn test_loaded_die_replays_then_repeats_last() {
        let mut die = LoadedDie::new([3, 5]);
        assert_eq!(die.remaining(), 2);
        assert_eq!(die.roll(), 3);
        assert_eq!(die.roll(), 5);
        assert_eq!(die.remaining(), 0);
        assert_eq!(die.roll(), 5);
    }

    #[test]
    fn test_empty_loaded_die_busts() {
        let mut die = LoadedDie::default();
        assert_eq!(die.roll(), 1);
    }
}
