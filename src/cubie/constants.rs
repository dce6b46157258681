// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the cube model and its coordinates.
//!
//! Every coordinate is an integer in `0..N_*`. The ranges follow from
//! simple counting arguments, which are spelled out next to each constant
//! and re-checked by the tests at the bottom of this file.

/// Number of corner cubies.
pub const N_CORNERS: usize = 8;

/// Number of edge cubies.
pub const N_EDGES: usize = 12;

/// Number of face turns (6 faces × {quarter, half, inverse quarter}).
pub const N_MOVES: usize = 18;

/// Number of face turns that preserve the phase-2 subgroup
/// (quarter turns of U and D, half turns of R, F, L and B).
pub const N_PHASE2_MOVES: usize = 10;

/// Corner orientation coordinate: 3^7 (the eighth corner is forced).
pub const N_TWIST: usize = pow(3, N_CORNERS - 1);

/// Edge orientation coordinate: 2^11 (the twelfth edge is forced).
pub const N_FLIP: usize = pow(2, N_EDGES - 1);

/// Position of the four UD-slice edges, ignoring their order: C(12, 4).
pub const N_SLICE: usize = choose(N_EDGES, 4);

/// Position and order of the four UD-slice edges: C(12, 4) × 4!.
pub const N_SLICE_SORTED: usize = N_SLICE * factorial(4);

/// Position and order of the six edges UR..DF: 12! / 6!.
pub const N_UD6_EDGES: usize = factorial(N_EDGES) / factorial(N_EDGES - 6);

/// Position and order of the seven edges UR..DL: 12! / 5!.
pub const N_UD7_EDGES: usize = factorial(N_EDGES) / factorial(N_EDGES - 7);

/// The UD7 coordinate of any phase-2 cube lies below 8!.
pub const N_UD7_PHASE2: usize = factorial(8);

/// Corner permutation coordinate: 8!.
pub const N_CORNER_PERMUTATIONS: usize = factorial(N_CORNERS);

/// Combined edge orientation and slice coordinate: 2^11 × C(12, 4).
pub const N_FLIPSLICE: usize = N_FLIP * N_SLICE;

/// Number of symmetries of the cube, reflections included.
pub const N_SYM: usize = 48;

/// Order of the D4h subgroup that preserves the U/D axis.
pub const N_SYM_D4H: usize = 16;

/// Number of D4h equivalence classes of the flipslice coordinate.
pub const N_FLIPSLICE_CLASSES: usize = 64430;

/// Number of D4h equivalence classes of the corner permutation coordinate.
pub const N_CORNER_CLASSES: usize = 2768;

/// Size of the frame arena used by the search; no solution is longer.
pub const MAX_DEPTH: usize = 30;

/// Maximum distance recorded in the phase-1 pruning table.
pub const PHASE1_MAX_DISTANCE: u8 = 12;

/// Maximum distance recorded in the phase-2 pruning table.
pub const PHASE2_MAX_DISTANCE: u8 = 18;

/// Compute factorial at compile time.
pub const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

const fn pow(base: usize, exp: usize) -> usize {
    match exp {
        0 => 1,
        _ => base * pow(base, exp - 1),
    }
}

/// Compute binomial coefficient (n choose k) at compile time.
///
/// Returns 0 when k > n, which the coordinate ranking functions rely on.
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else if k == 0 || k == n {
        1
    } else {
        factorial(n) / (factorial(k) * factorial(n - k))
    }
}

/// Pascal's triangle up to 12, so the ranking functions avoid divisions.
const BINOMIAL: [[u32; N_EDGES + 1]; N_EDGES + 1] = {
    let mut table = [[0u32; N_EDGES + 1]; N_EDGES + 1];
    let mut n = 0;
    while n <= N_EDGES {
        table[n][0] = 1;
        let mut k = 1;
        while k <= n {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
};

/// Table-driven binomial coefficient for `n, k <= 12`.
#[inline]
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else {
        BINOMIAL[n][k] as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(8), 40320);
        assert_eq!(factorial(12), 479_001_600);
    }

    #[test]
    fn test_choose() {
        assert_eq!(choose(12, 4), 495);
        assert_eq!(choose(11, 0), 1);
        assert_eq!(choose(3, 4), 0);
        assert_eq!(choose(7, 7), 1);
    }

    #[test]
    fn test_binomial_matches_choose() {
        for n in 0..=N_EDGES {
            for k in 0..=N_EDGES {
                assert_eq!(binomial(n, k), choose(n, k), "C({}, {})", n, k);
            }
        }
    }

    #[test]
    fn test_coordinate_ranges() {
        assert_eq!(N_TWIST, 2187);
        assert_eq!(N_FLIP, 2048);
        assert_eq!(N_SLICE, 495);
        assert_eq!(N_SLICE_SORTED, 11880);
        assert_eq!(N_UD6_EDGES, 665_280);
        assert_eq!(N_UD7_EDGES, 3_991_680);
        assert_eq!(N_CORNER_PERMUTATIONS, 40320);
        assert_eq!(N_FLIPSLICE, 1_013_760);
    }
}
