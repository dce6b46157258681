// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random scrambles.

use crate::cubie::constants::N_MOVES;
use crate::cubie::Move;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Length of the scrambles used by `--solve-scramble` and the benchmarks.
pub const SCRAMBLE_LENGTH: usize = 50;

/// `n` uniformly chosen moves, no two consecutive moves on the same face.
pub fn random_scramble<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(n);
    while moves.len() < n {
        let Some(mv) = Move::from_index(rng.gen_range(0..N_MOVES)) else {
            continue;
        };
        if moves.last().is_some_and(|last| last.is_same_face(mv)) {
            continue;
        }
        moves.push(mv);
    }
    moves
}

/// A reproducible scramble generator.
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::CubieCube;

    #[test]
    fn test_no_same_face_pairs() {
        let mut rng = seeded_rng(7);
        let scramble = random_scramble(&mut rng, 500);
        assert_eq!(scramble.len(), 500);
        for pair in scramble.windows(2) {
            assert!(!pair[0].is_same_face(pair[1]), "{} {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_scramble(&mut seeded_rng(42), SCRAMBLE_LENGTH);
        let b = random_scramble(&mut seeded_rng(42), SCRAMBLE_LENGTH);
        let c = random_scramble(&mut seeded_rng(43), SCRAMBLE_LENGTH);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scrambles_are_valid_cubes() {
        let mut rng = seeded_rng(1);
        for _ in 0..20 {
            let cube = CubieCube::from_moves(&random_scramble(&mut rng, SCRAMBLE_LENGTH));
            assert!(cube.is_valid());
            assert!(cube.has_consistent_parity());
        }
    }

    #[test]
    fn test_empty() {
        assert!(random_scramble(&mut seeded_rng(0), 0).is_empty());
    }
}
