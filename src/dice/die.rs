//! N-sided die with random and forced outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Face count used whenever a requested count is zero or negative.
pub const DEFAULT_FACES: i64 = 6;

/// Capabilities the HTTP handlers need from a die.
pub trait Die: Send + Sync {
    /// Current number of faces.
    fn faces(&self) -> i64;

    /// Overwrite the number of faces. No validation is applied.
    fn set_faces(&mut self, faces: i64);

    /// Uniformly random outcome in `[1, faces]`.
    fn roll(&mut self) -> i64;

    /// Forced outcome: `number` when `1 <= number < faces`, otherwise `faces`.
    fn cheat(&self, number: i64) -> i64;
}

/// Production die backed by a process-lifetime `StdRng`.
#[derive(Debug)]
pub struct StandardDie {
    faces: i64,
    rng: StdRng,
}

impl StandardDie {
    /// Create a die seeded from OS entropy.
    ///
    /// A non-positive `faces` falls back to [`DEFAULT_FACES`].
    pub fn new(faces: i64) -> Self {
        Self {
            faces: normalize_faces(faces),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a die with a fixed seed, producing a reproducible roll sequence.
    pub fn with_seed(faces: i64, seed: u64) -> Self {
        Self {
            faces: normalize_faces(faces),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StandardDie {
    fn default() -> Self {
        Self::new(DEFAULT_FACES)
    }
}

impl Die for StandardDie {
    fn faces(&self) -> i64 {
        self.faces
    }

    fn set_faces(&mut self, faces: i64) {
        self.faces = faces;
    }

    fn roll(&mut self) -> i64 {
        // set_faces does not validate, so guard the range here
        let upper = normalize_faces(self.faces);
        self.rng.gen_range(1..=upper)
    }

    fn cheat(&self, number: i64) -> i64 {
        if number <= 0 || number >= self.faces {
            self.faces
        } else {
            number
        }
    }
}

fn normalize_faces(faces: i64) -> i64 {
    if faces <= 0 {
        DEFAULT_FACES
    } else {
        faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_faces() {
        let mut die = StandardDie::new(6);
        die.set_faces(20);
        assert_eq!(die.faces(), 20);
    }

    #[test]
    fn test_new_keeps_positive_faces() {
        assert_eq!(StandardDie::new(12).faces(), 12);
        assert_eq!(StandardDie::new(1).faces(), 1);
    }

    #[test]
    fn test_new_defaults_non_positive_faces() {
        assert_eq!(StandardDie::new(0).faces(), DEFAULT_FACES);
        assert_eq!(StandardDie::new(-12).faces(), DEFAULT_FACES);
        assert_eq!(StandardDie::with_seed(-1, 7).faces(), DEFAULT_FACES);
    }

    #[test]
    fn test_roll_within_bounds() {
        for faces in [1, 2, 6, 12, 20, 100] {
            let mut die = StandardDie::new(faces);
            for _ in 0..500 {
                let value = die.roll();
                assert!(
                    (1..=faces).contains(&value),
                    "roll {} out of range for d{}",
                    value,
                    faces
                );
            }
        }
    }

    #[test]
    fn test_roll_covers_every_face() {
        let mut die = StandardDie::with_seed(6, 42);
        let mut seen = [false; 6];
        for _ in 0..1_000 {
            seen[(die.roll() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "faces seen: {:?}", seen);
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let mut a = StandardDie::with_seed(20, 1234);
        let mut b = StandardDie::with_seed(20, 1234);
        let rolls_a: Vec<i64> = (0..32).map(|_| a.roll()).collect();
        let rolls_b: Vec<i64> = (0..32).map(|_| b.roll()).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_roll_after_invalid_set_faces() {
        let mut die = StandardDie::new(6);
        die.set_faces(0);
        let value = die.roll();
        assert!((1..=DEFAULT_FACES).contains(&value));
    }

    #[test]
    fn test_cheat_returns_number_in_range() {
        let die = StandardDie::new(6);
        assert_eq!(die.cheat(1), 1);
        assert_eq!(die.cheat(4), 4);
        assert_eq!(die.cheat(5), 5);
    }

    #[test]
    fn test_cheat_clamps_to_faces() {
        let die = StandardDie::new(6);
        assert_eq!(die.cheat(6), 6);
        assert_eq!(die.cheat(7), 6);
        assert_eq!(die.cheat(0), 6);
        assert_eq!(die.cheat(-6), 6);
    }
}
