// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ranking functions between cubie cubes and integer coordinates.
//!
//! Each coordinate has a getter, which ranks one aspect of a cube, and a
//! setter, which overwrites that aspect of a cube from a rank. Setters only
//! touch the fields the coordinate describes: `set_edge_orientations` leaves
//! the permutations alone, and the permutation setters leave orientations
//! alone.
//!
//! | coordinate            | range      | describes                                  |
//! |-----------------------|------------|--------------------------------------------|
//! | corner orientations   | 0..2187    | twist of corners URF..DBL                  |
//! | edge orientations     | 0..2048    | flip of edges UR..BL                       |
//! | E slice               | 0..495     | which slots hold FR, FL, BL, BR            |
//! | E sorted slice        | 0..11880   | where FR, FL, BL, BR are, and in what order |
//! | UD6 edges             | 0..665280  | where UR..DF are, and in what order        |
//! | UD7 edges             | 0..3991680 | where UR..DL are, and in what order        |
//! | corner permutations   | 0..40320   | the whole corner permutation               |
//!
//! Positions are ranked with the combinatorial number system and orders with
//! a rotation-counting (Lehmer-like) code. In each case the solved cube has
//! coordinate 0.

use super::constants::{binomial, factorial, N_CORNERS, N_EDGES};
use super::cube::CubieCube;
use super::pieces::{Corner, Edge};

/// Number of edges tracked by the UD6 coordinate (UR..DF).
const UD6: usize = 6;

/// Number of edges tracked by the UD7 coordinate (UR..DL).
const UD7: usize = 7;

impl CubieCube {
    /// Corner orientations as a base-3 number over the first seven corners.
    pub fn corner_orientations(&self) -> usize {
        self.co[..N_CORNERS - 1]
            .iter()
            .fold(0, |twist, &ori| 3 * twist + ori as usize)
    }

    /// Set corner orientations; the last corner completes the sum to 0 mod 3.
    pub fn set_corner_orientations(&mut self, twist: usize) {
        let mut rest = twist;
        let mut sum = 0;
        for i in (0..N_CORNERS - 1).rev() {
            self.co[i] = (rest % 3) as u8;
            sum += rest % 3;
            rest /= 3;
        }
        self.co[N_CORNERS - 1] = ((3 - sum % 3) % 3) as u8;
        debug_assert!(self.co.iter().map(|&o| o as usize).sum::<usize>() % 3 == 0);
    }

    /// Edge orientations as a base-2 number over the first eleven edges.
    pub fn edge_orientations(&self) -> usize {
        self.eo[..N_EDGES - 1]
            .iter()
            .fold(0, |flip, &ori| 2 * flip + ori as usize)
    }

    /// Set edge orientations; the last edge completes the sum to 0 mod 2.
    pub fn set_edge_orientations(&mut self, flip: usize) {
        let mut rest = flip;
        let mut sum = 0;
        for i in (0..N_EDGES - 1).rev() {
            self.eo[i] = (rest % 2) as u8;
            sum += rest % 2;
            rest /= 2;
        }
        self.eo[N_EDGES - 1] = (sum % 2) as u8;
    }

    /// Which four slots hold the UD-slice edges, order ignored.
    pub fn e_slice(&self) -> usize {
        let mut slice = 0;
        let mut seen = 0;
        for i in (0..N_EDGES).rev() {
            if self.ep[i].is_slice() {
                seen += 1;
                slice += binomial(N_EDGES - 1 - i, seen);
            }
        }
        slice
    }

    /// Place FR, FL, BL, BR (in that order) into the slots named by `slice`;
    /// the other edges fill the remaining slots in order.
    pub fn set_e_slice(&mut self, slice: usize) {
        self.place_slice_edges(slice, Edge::SLICE);
    }

    /// Which slots hold the UD-slice edges and in what order.
    pub fn e_sorted_slice(&self) -> usize {
        let mut combination = 0;
        let mut seen = 0;
        let mut edges = [Edge::FR; 4];
        for i in (0..N_EDGES).rev() {
            let edge = self.ep[i];
            if edge.is_slice() {
                combination += binomial(N_EDGES - 1 - i, seen + 1);
                edges[3 - seen] = edge;
                seen += 1;
            }
        }
        let offset = Edge::FR.index();
        24 * combination + rank_order(&mut edges, |e| e.index() - offset)
    }

    pub fn set_e_sorted_slice(&mut self, sorted_slice: usize) {
        let mut edges = Edge::SLICE;
        unrank_order(&mut edges, sorted_slice % 24);
        self.place_slice_edges(sorted_slice / 24, edges);
    }

    /// Where the edges UR..DF are and in what order.
    pub fn ud6_edges(&self) -> usize {
        self.ud_edges::<UD6>()
    }

    pub fn set_ud6_edges(&mut self, ud6: usize) {
        self.set_ud_edges::<UD6>(ud6);
    }

    /// Where the edges UR..DL are and in what order. Below 40320 exactly
    /// when all seven are in the U and D layers, as in phase 2.
    pub fn ud7_edges(&self) -> usize {
        self.ud_edges::<UD7>()
    }

    pub fn set_ud7_edges(&mut self, ud7: usize) {
        self.set_ud_edges::<UD7>(ud7);
    }

    /// The corner permutation ranked over all 8! arrangements.
    pub fn corner_permutations(&self) -> usize {
        let mut corners = self.cp;
        rank_order(&mut corners, Corner::index)
    }

    pub fn set_corner_permutations(&mut self, permutation: usize) {
        let mut corners = Corner::ALL;
        unrank_order(&mut corners, permutation);
        self.cp = corners;
    }

    /// Greedy inverse of the slice combination: ascending slots, most
    /// significant term first.
    fn place_slice_edges(&mut self, combination: usize, slice_edges: [Edge; 4]) {
        let mut placed: [Option<Edge>; N_EDGES] = [None; N_EDGES];
        let mut rest = combination;
        let mut remaining = 4;
        for (i, slot) in placed.iter_mut().enumerate() {
            if remaining == 0 {
                break;
            }
            let term = binomial(N_EDGES - 1 - i, remaining);
            if rest >= term {
                *slot = Some(slice_edges[4 - remaining]);
                rest -= term;
                remaining -= 1;
            }
        }
        debug_assert_eq!(remaining, 0, "slice combination {} out of range", combination);
        self.fill_edges(placed, &Edge::ALL[..Edge::FR.index()]);
    }

    /// Rank the first `K` edges (UR onwards): combination of slots
    /// ascending, then their order.
    fn ud_edges<const K: usize>(&self) -> usize {
        let mut combination = 0;
        let mut seen = 0;
        let mut edges = [Edge::UR; K];
        for i in 0..N_EDGES {
            let edge = self.ep[i];
            if edge.index() < K {
                combination += binomial(i, seen + 1);
                edges[seen] = edge;
                seen += 1;
            }
        }
        combination * factorial(K) + rank_order(&mut edges, Edge::index)
    }

    fn set_ud_edges<const K: usize>(&mut self, rank: usize) {
        let mut edges = [Edge::UR; K];
        edges.copy_from_slice(&Edge::ALL[..K]);
        unrank_order(&mut edges, rank % factorial(K));

        let mut placed: [Option<Edge>; N_EDGES] = [None; N_EDGES];
        let mut rest = rank / factorial(K);
        let mut remaining = K;
        for i in (0..N_EDGES).rev() {
            if remaining == 0 {
                break;
            }
            let term = binomial(i, remaining);
            if rest >= term {
                placed[i] = Some(edges[remaining - 1]);
                rest -= term;
                remaining -= 1;
            }
        }
        debug_assert_eq!(remaining, 0, "UD{} coordinate {} out of range", K, rank);
        self.fill_edges(placed, &Edge::ALL[K..]);
    }

    /// Write `placed` into the edge permutation, filling gaps from `others` in order.
    fn fill_edges(&mut self, placed: [Option<Edge>; N_EDGES], others: &[Edge]) {
        let mut others = others.iter();
        for (slot, edge) in self.ep.iter_mut().zip(placed) {
            if let Some(edge) = edge.or_else(|| others.next().copied()) {
                *slot = edge;
            }
        }
    }
}

/// Rank the order of `pieces`, whose `index` values are a permutation of
/// `0..pieces.len()`. Scrambles `pieces`.
///
/// Working down from the last slot, rotate the prefix left until the
/// largest remaining piece is in place, and record the rotation count as a
/// mixed-radix digit.
fn rank_order<T: Copy>(pieces: &mut [T], index: impl Fn(T) -> usize) -> usize {
    let mut rank = 0;
    for i in (1..pieces.len()).rev() {
        let mut rotations = 0;
        while index(pieces[i]) != i {
            pieces[..=i].rotate_left(1);
            rotations += 1;
        }
        rank = (i + 1) * rank + rotations;
    }
    rank
}

/// Inverse of [`rank_order`], applied to pieces that start in order.
fn unrank_order<T>(pieces: &mut [T], rank: usize) {
    let mut rest = rank;
    for i in 1..pieces.len() {
        let rotations = rest % (i + 1);
        rest /= i + 1;
        pieces[..=i].rotate_right(rotations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::constants::*;
    use crate::cubie::moves::{parse_moves, Move};

    #[test]
    fn test_solved_coordinates_are_zero() {
        let cube = CubieCube::IDENTITY;
        assert_eq!(cube.corner_orientations(), 0);
        assert_eq!(cube.edge_orientations(), 0);
        assert_eq!(cube.e_slice(), 0);
        assert_eq!(cube.e_sorted_slice(), 0);
        assert_eq!(cube.ud6_edges(), 0);
        assert_eq!(cube.ud7_edges(), 0);
        assert_eq!(cube.corner_permutations(), 0);
    }

    #[test]
    fn test_orientation_round_trip() {
        let mut cube = CubieCube::IDENTITY;
        for twist in 0..N_TWIST {
            cube.set_corner_orientations(twist);
            assert!(cube.is_valid());
            assert_eq!(cube.corner_orientations(), twist);
        }
        for flip in 0..N_FLIP {
            cube.set_edge_orientations(flip);
            assert!(cube.is_valid());
            assert_eq!(cube.edge_orientations(), flip);
        }
    }

    #[test]
    fn test_slice_round_trip() {
        let mut cube = CubieCube::IDENTITY;
        for slice in 0..N_SLICE {
            cube.set_e_slice(slice);
            assert!(cube.is_valid());
            assert_eq!(cube.e_slice(), slice);
        }
        for sorted in 0..N_SLICE_SORTED {
            cube.set_e_sorted_slice(sorted);
            assert!(cube.is_valid());
            assert_eq!(cube.e_sorted_slice(), sorted);
            assert_eq!(cube.e_slice(), sorted / 24);
        }
    }

    #[test]
    fn test_corner_permutation_round_trip() {
        let mut cube = CubieCube::IDENTITY;
        for permutation in 0..N_CORNER_PERMUTATIONS {
            cube.set_corner_permutations(permutation);
            assert!(cube.is_valid());
            assert_eq!(cube.corner_permutations(), permutation);
        }
    }

    #[test]
    fn test_ud_edges_round_trip() {
        let mut cube = CubieCube::IDENTITY;
        for ud6 in (0..N_UD6_EDGES).step_by(97) {
            cube.set_ud6_edges(ud6);
            assert!(cube.is_valid());
            assert_eq!(cube.ud6_edges(), ud6);
        }
        for ud7 in (0..N_UD7_EDGES).step_by(571) {
            cube.set_ud7_edges(ud7);
            assert!(cube.is_valid());
            assert_eq!(cube.ud7_edges(), ud7);
        }
        cube.set_ud7_edges(N_UD7_EDGES - 1);
        assert_eq!(cube.ud7_edges(), N_UD7_EDGES - 1);
    }

    #[test]
    fn test_phase2_ud7_range() {
        let mut cube = CubieCube::IDENTITY;
        for mv in parse_moves("U R2 F2 D' L2 B2 U2 R2 D").unwrap() {
            cube.apply_move(mv);
            assert!(cube.ud7_edges() < N_UD7_PHASE2, "after {}", mv);
        }
        cube.apply_move(Move::R1);
        assert!(cube.ud7_edges() >= N_UD7_PHASE2);
    }

    #[test]
    fn test_single_move_coordinates() {
        let mut cube = CubieCube::IDENTITY;
        cube.apply_move(Move::U1);
        assert_eq!(cube.corner_orientations(), 0);
        assert_eq!(cube.edge_orientations(), 0);
        assert_eq!(cube.e_slice(), 0);
        assert_ne!(cube.corner_permutations(), 0);

        let mut cube = CubieCube::IDENTITY;
        cube.apply_move(Move::F1);
        assert_ne!(cube.edge_orientations(), 0);
        assert_ne!(cube.corner_orientations(), 0);
        assert_ne!(cube.e_slice(), 0);
    }

    #[test]
    fn test_rank_order() {
        let mut pieces = [0usize, 1, 2, 3];
        assert_eq!(rank_order(&mut pieces, |p| p), 0);
        for rank in 0..24 {
            let mut pieces = [0usize, 1, 2, 3];
            unrank_order(&mut pieces, rank);
            let mut sorted = pieces;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3]);
            assert_eq!(rank_order(&mut pieces, |p| p), rank);
        }
    }
}
