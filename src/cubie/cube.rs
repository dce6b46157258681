// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cubie-level cube: permutation and orientation of every corner and edge.
//!
//! A [`CubieCube`] is a group element. `a.multiply(&b)` is "`a` then `b`",
//! so applying a move `m` to a cube `c` is `c.multiply(&MOVE_CUBES[m])`.
//!
//! Corner orientations are 0..=2 for ordinary cube states. Mirror
//! symmetries (see [`crate::symmetry`]) use the values 3..=5, and the corner
//! product below handles all four combinations so that symmetry conjugation
//! can be computed with the same multiplication.

use super::constants::{N_CORNERS, N_EDGES, N_MOVES};
use super::moves::Move;
use super::pieces::{Corner, Edge};
use Corner::*;
use Edge::*;

/// Permutation and orientation of the 8 corners and 12 edges.
///
/// Slot `i` holds cubie `cp[i]` (resp. `ep[i]`) with orientation `co[i]`
/// (resp. `eo[i]`). The solved cube has every cubie home with orientation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    /// Corner permutation.
    pub cp: [Corner; N_CORNERS],
    /// Corner orientation, 0..=2 (3..=5 for mirror images).
    pub co: [u8; N_CORNERS],
    /// Edge permutation.
    pub ep: [Edge; N_EDGES],
    /// Edge orientation, 0..=1.
    pub eo: [u8; N_EDGES],
}

impl CubieCube {
    /// The solved cube.
    pub const IDENTITY: CubieCube = CubieCube {
        cp: Corner::ALL,
        co: [0; N_CORNERS],
        ep: Edge::ALL,
        eo: [0; N_EDGES],
    };

    pub const fn new(
        cp: [Corner; N_CORNERS],
        co: [u8; N_CORNERS],
        ep: [Edge; N_EDGES],
        eo: [u8; N_EDGES],
    ) -> CubieCube {
        CubieCube { cp, co, ep, eo }
    }

    /// The cube reached from solved by applying `moves` in order.
    pub fn from_moves(moves: &[Move]) -> CubieCube {
        let mut cube = CubieCube::IDENTITY;
        cube.apply_moves(moves);
        cube
    }

    /// Group composition: `self` then `other`.
    pub const fn multiply(&self, other: &CubieCube) -> CubieCube {
        let (cp, co) = corner_product(self, other);
        let (ep, eo) = edge_product(self, other);
        CubieCube { cp, co, ep, eo }
    }

    /// Replace the corners of `self` by those of `self * other`.
    #[inline]
    pub fn multiply_corners(&mut self, other: &CubieCube) {
        let (cp, co) = corner_product(self, other);
        self.cp = cp;
        self.co = co;
    }

    /// Replace the edges of `self` by those of `self * other`.
    #[inline]
    pub fn multiply_edges(&mut self, other: &CubieCube) {
        let (ep, eo) = edge_product(self, other);
        self.ep = ep;
        self.eo = eo;
    }

    pub fn apply_move(&mut self, mv: Move) {
        *self = self.multiply(&MOVE_CUBES[mv.index()]);
    }

    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }

    /// The group inverse, so that `c.multiply(&c.inverse())` is the identity.
    pub fn inverse(&self) -> CubieCube {
        let mut inverse = CubieCube::IDENTITY;
        for i in 0..N_EDGES {
            inverse.ep[self.ep[i].index()] = Edge::ALL[i];
        }
        for i in 0..N_EDGES {
            inverse.eo[i] = self.eo[inverse.ep[i].index()];
        }
        for i in 0..N_CORNERS {
            inverse.cp[self.cp[i].index()] = Corner::ALL[i];
        }
        for i in 0..N_CORNERS {
            let ori = self.co[inverse.cp[i].index()];
            inverse.co[i] = if ori >= 3 { ori } else { (3 - ori) % 3 };
        }
        inverse
    }

    /// Permutations are bijections and the orientation sums are 0 mod 3 and 0 mod 2.
    ///
    /// Deliberately does not compare corner and edge parity: coordinate
    /// setters build cubes whose corners and edges are unrelated. See
    /// [`has_consistent_parity`](Self::has_consistent_parity).
    pub fn is_valid(&self) -> bool {
        let mut corners_seen = [false; N_CORNERS];
        for corner in self.cp {
            if std::mem::replace(&mut corners_seen[corner.index()], true) {
                return false;
            }
        }
        let mut edges_seen = [false; N_EDGES];
        for edge in self.ep {
            if std::mem::replace(&mut edges_seen[edge.index()], true) {
                return false;
            }
        }
        let twist: u32 = self.co.iter().map(|&o| o as u32).sum();
        let flip: u32 = self.eo.iter().map(|&o| o as u32).sum();
        twist % 3 == 0 && flip % 2 == 0
    }

    /// Parity (0 even, 1 odd) of the corner permutation.
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp)
    }

    /// Parity (0 even, 1 odd) of the edge permutation.
    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep)
    }

    /// Whether corner and edge permutations have equal parity, as they do
    /// for every cube reachable by face turns.
    pub fn has_consistent_parity(&self) -> bool {
        self.corner_parity() == self.edge_parity()
    }
}

impl Default for CubieCube {
    fn default() -> Self {
        CubieCube::IDENTITY
    }
}

fn permutation_parity<T: Ord>(pieces: &[T]) -> u8 {
    let mut inversions = 0;
    for i in 0..pieces.len() {
        for j in 0..i {
            if pieces[j] > pieces[i] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}

const fn corner_product(a: &CubieCube, b: &CubieCube) -> ([Corner; N_CORNERS], [u8; N_CORNERS]) {
    let mut cp = [URF; N_CORNERS];
    let mut co = [0u8; N_CORNERS];
    let mut i = 0;
    while i < N_CORNERS {
        let from = b.cp[i] as usize;
        cp[i] = a.cp[from];
        let ori_a = a.co[from] as i8;
        let ori_b = b.co[i] as i8;
        let ori = if ori_a < 3 && ori_b < 3 {
            // two ordinary cubes
            let sum = ori_a + ori_b;
            if sum >= 3 {
                sum - 3
            } else {
                sum
            }
        } else if ori_a < 3 {
            // ordinary then mirrored
            let sum = ori_a + ori_b;
            if sum >= 6 {
                sum - 3
            } else {
                sum
            }
        } else if ori_b < 3 {
            // mirrored then ordinary
            let diff = ori_a - ori_b;
            if diff < 3 {
                diff + 3
            } else {
                diff
            }
        } else {
            // two mirrors
            let diff = ori_a - ori_b;
            if diff < 0 {
                diff + 3
            } else {
                diff
            }
        };
        co[i] = ori as u8;
        i += 1;
    }
    (cp, co)
}

const fn edge_product(a: &CubieCube, b: &CubieCube) -> ([Edge; N_EDGES], [u8; N_EDGES]) {
    let mut ep = [UR; N_EDGES];
    let mut eo = [0u8; N_EDGES];
    let mut i = 0;
    while i < N_EDGES {
        let from = b.ep[i] as usize;
        ep[i] = a.ep[from];
        eo[i] = (b.eo[i] + a.eo[from]) % 2;
        i += 1;
    }
    (ep, eo)
}

/// Clockwise quarter turns of the six faces, in [`Face`](super::Face) order.
pub const BASIC_MOVES: [CubieCube; 6] = [
    // U
    CubieCube::new(
        [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ),
    // R
    CubieCube::new(
        [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
        [2, 0, 0, 1, 1, 0, 0, 2],
        [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ),
    // F
    CubieCube::new(
        [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
        [1, 2, 0, 0, 2, 1, 0, 0],
        [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
        [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    ),
    // D
    CubieCube::new(
        [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ),
    // L
    CubieCube::new(
        [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
        [0, 1, 2, 0, 0, 2, 1, 0],
        [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ),
    // B
    CubieCube::new(
        [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
        [0, 0, 1, 2, 0, 0, 2, 1],
        [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
        [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    ),
];

/// The cubie cube of every move, indexed by [`Move::index`].
pub const MOVE_CUBES: [CubieCube; N_MOVES] = {
    let mut cubes = [CubieCube::IDENTITY; N_MOVES];
    let mut face = 0;
    while face < 6 {
        let mut cube = BASIC_MOVES[face];
        let mut power = 0;
        while power < 3 {
            cubes[3 * face + power] = cube;
            cube = cube.multiply(&BASIC_MOVES[face]);
            power += 1;
        }
        face += 1;
    }
    cubes
};
