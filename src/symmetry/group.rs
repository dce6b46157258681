// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The 48 symmetries of the cube as cubie cubes.
//!
//! Every symmetry is a product of four generators:
//! - `ROT_URF3`: 120° rotation about the URF-DBL diagonal
//! - `ROT_F2`: 180° rotation about the F-B axis
//! - `ROT_U4`: 90° rotation about the U-D axis
//! - `MIRR_LR2`: reflection in the plane separating L and R
//!
//! Symmetry `16 * a + 8 * b + 2 * c + d` is
//! `ROT_URF3^a * ROT_F2^b * ROT_U4^c * MIRR_LR2^d`, so the first 16
//! (those with `a == 0`) form the D4h subgroup that fixes the U/D axis.

use crate::cubie::constants::{N_MOVES, N_SYM};
use crate::cubie::{Corner::*, CubieCube, Edge::*, Move, MOVE_CUBES};

pub const ROT_URF3: CubieCube = CubieCube::new(
    [URF, DFR, DLF, UFL, UBR, DRB, DBL, ULB],
    [1, 2, 1, 2, 2, 1, 2, 1],
    [UF, FR, DF, FL, UB, BR, DB, BL, UR, DR, DL, UL],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1],
);

pub const ROT_F2: CubieCube = CubieCube::new(
    [DLF, DFR, DRB, DBL, UFL, URF, UBR, ULB],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [DL, DF, DR, DB, UL, UF, UR, UB, FL, FR, BR, BL],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
);

pub const ROT_U4: CubieCube = CubieCube::new(
    [UBR, URF, UFL, ULB, DRB, DFR, DLF, DBL],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [UB, UR, UF, UL, DB, DR, DF, DL, BR, FR, FL, BL],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
);

pub const MIRR_LR2: CubieCube = CubieCube::new(
    [UFL, URF, UBR, ULB, DLF, DFR, DRB, DBL],
    [3, 3, 3, 3, 3, 3, 3, 3],
    [UL, UF, UR, UB, DL, DF, DR, DB, FL, FR, BR, BL],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
);

/// The full symmetry group with inverses and move conjugation.
#[derive(Debug, Clone)]
pub struct SymmetryGroup {
    cubes: Vec<CubieCube>,
    inverse: [usize; N_SYM],
    /// `conj_move[N_MOVES * s + m]`
    conj_move: Vec<Move>,
}

impl SymmetryGroup {
    pub fn new() -> Self {
        let cubes = generate();
        let inverse = std::array::from_fn(|s| {
            (0..N_SYM)
                .find(|&j| cubes[s].multiply(&cubes[j]) == CubieCube::IDENTITY)
                .unwrap_or_else(|| panic!("symmetry {} has no inverse", s))
        });
        let mut conj_move = Vec::with_capacity(N_SYM * N_MOVES);
        for s in 0..N_SYM {
            for mv in Move::ALL {
                let conjugated = cubes[s]
                    .multiply(&MOVE_CUBES[mv.index()])
                    .multiply(&cubes[inverse[s]]);
                let image = Move::ALL
                    .into_iter()
                    .find(|m| MOVE_CUBES[m.index()] == conjugated)
                    .unwrap_or_else(|| panic!("symmetry {} maps {} to no move", s, mv));
                conj_move.push(image);
            }
        }
        Self {
            cubes,
            inverse,
            conj_move,
        }
    }

    #[inline]
    pub fn cube(&self, sym: usize) -> &CubieCube {
        &self.cubes[sym]
    }

    pub fn cubes(&self) -> &[CubieCube] {
        &self.cubes
    }

    #[inline]
    pub fn inverse(&self, sym: usize) -> usize {
        self.inverse[sym]
    }

    /// The move `S * mv * S^-1` for symmetry `S`.
    #[inline]
    pub fn conj_move(&self, mv: Move, sym: usize) -> Move {
        self.conj_move[N_MOVES * sym + mv.index()]
    }

    /// `S * cube * S^-1`.
    pub fn conjugate(&self, cube: &CubieCube, sym: usize) -> CubieCube {
        self.cubes[sym]
            .multiply(cube)
            .multiply(&self.cubes[self.inverse[sym]])
    }

    /// Corners of `S * cube * S^-1`; edges are left unspecified.
    pub fn conjugate_corners(&self, cube: &CubieCube, sym: usize) -> CubieCube {
        let mut result = self.cubes[sym];
        result.multiply_corners(cube);
        result.multiply_corners(&self.cubes[self.inverse[sym]]);
        result
    }

    /// Edges of `S * cube * S^-1`; corners are left unspecified.
    pub fn conjugate_edges(&self, cube: &CubieCube, sym: usize) -> CubieCube {
        let mut result = self.cubes[sym];
        result.multiply_edges(cube);
        result.multiply_edges(&self.cubes[self.inverse[sym]]);
        result
    }
}

impl Default for SymmetryGroup {
    fn default() -> Self {
        Self::new()
    }
}

fn generate() -> Vec<CubieCube> {
    let mut cubes = Vec::with_capacity(N_SYM);
    let mut cube = CubieCube::IDENTITY;
    for _urf3 in 0..3 {
        for _f2 in 0..2 {
            for _u4 in 0..4 {
                for _lr2 in 0..2 {
                    cubes.push(cube);
                    cube = cube.multiply(&MIRR_LR2);
                }
                cube = cube.multiply(&ROT_U4);
            }
            cube = cube.multiply(&ROT_F2);
        }
        cube = cube.multiply(&ROT_URF3);
    }
    cubes
}
