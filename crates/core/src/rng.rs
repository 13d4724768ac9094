//! RNG module - seeded random source and draw helpers
//!
//! The game owns one random source. By default it is a `StdRng` seeded from a
//! `u64`, so the same seed replays the same game; any `rand::Rng` can be
//! injected instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Ball;

/// Deterministic random source for a given seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform random ball color in `[0, colors)`
pub fn random_ball<R: Rng + ?Sized>(rng: &mut R, colors: u8) -> Ball {
    Ball::new(rng.random_range(0..colors.max(1)))
}

/// Uniform random index in `[0, len)`; 0 for empty or single-element ranges
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    rng.random_range(0..len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = seeded(12345);
        let mut rng2 = seeded(12345);

        for _ in 0..100 {
            assert_eq!(random_ball(&mut rng1, 7), random_ball(&mut rng2, 7));
        }
    }

    #[test]
    fn test_random_ball_in_range() {
        let mut rng = seeded(7);
        for _ in 0..500 {
            assert!(random_ball(&mut rng, 3).color() < 3);
        }
    }

    #[test]
    fn test_all_colors_eventually_drawn() {
        let mut rng = seeded(99);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[random_ball(&mut rng, 7).color() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_pick_index_bounds() {
        let mut rng = seeded(1);
        assert_eq!(pick_index(&mut rng, 0), 0);
        assert_eq!(pick_index(&mut rng, 1), 0);
        for _ in 0..200 {
            assert!(pick_index(&mut rng, 10) < 10);
        }
    }
}
