// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The coordinate cube: a cube state as eight table indices.
//!
//! A [`CoordCube`] is derived once from a [`CubieCube`] and afterwards
//! changed only through [`CoordCube::apply_move`], which replaces every
//! coordinate by a move-table lookup. This is the state the search stacks
//! copy from frame to frame, so it is small and `Copy`.

use crate::cubie::constants::*;
use crate::cubie::{CubieCube, Move};
use crate::memo::MoveTables;

/// Every coordinate of one cube state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CoordCube {
    /// 0..2048
    pub edge_orientations: u16,
    /// 0..2187
    pub corner_orientations: u16,
    /// 0..495
    pub e_slice: u16,
    /// 0..11880
    pub e_sorted_slice: u16,
    /// Permutation parity, 0 or 1.
    pub parity: u8,
    /// 0..665280
    pub ud6_edges: u32,
    /// 0..3991680
    pub ud7_edges: u32,
    /// 0..40320
    pub corner_permutations: u16,
}

impl CoordCube {
    /// The solved cube, whose coordinates are all zero.
    pub const SOLVED: CoordCube = CoordCube {
        edge_orientations: 0,
        corner_orientations: 0,
        e_slice: 0,
        e_sorted_slice: 0,
        parity: 0,
        ud6_edges: 0,
        ud7_edges: 0,
        corner_permutations: 0,
    };

    pub fn from_cubie(cube: &CubieCube) -> Self {
        debug_assert!(cube.is_valid(), "invalid cubie cube {:?}", cube);
        Self {
            edge_orientations: cube.edge_orientations() as u16,
            corner_orientations: cube.corner_orientations() as u16,
            e_slice: cube.e_slice() as u16,
            e_sorted_slice: cube.e_sorted_slice() as u16,
            parity: cube.corner_parity(),
            ud6_edges: cube.ud6_edges() as u32,
            ud7_edges: cube.ud7_edges() as u32,
            corner_permutations: cube.corner_permutations() as u16,
        }
    }

    /// Replace every coordinate by its image under `mv`.
    #[inline]
    pub fn apply_move(&mut self, tables: &MoveTables, mv: Move) {
        let m = mv.index();
        self.edge_orientations =
            tables.edge_orientations[N_MOVES * self.edge_orientations as usize + m];
        self.corner_orientations =
            tables.corner_orientations[N_MOVES * self.corner_orientations as usize + m];
        self.e_slice = tables.e_slice[N_MOVES * self.e_slice as usize + m];
        self.e_sorted_slice = tables.e_sorted_slice[N_MOVES * self.e_sorted_slice as usize + m];
        self.parity = tables.parity[self.parity as usize][m];
        self.ud6_edges = tables.ud6_edges[N_MOVES * self.ud6_edges as usize + m];
        self.ud7_edges = tables.ud7_edges[N_MOVES * self.ud7_edges as usize + m];
        self.corner_permutations =
            tables.corner_permutations[N_MOVES * self.corner_permutations as usize + m];
        debug_assert!(self.in_range(), "coordinate out of range after {}: {:?}", mv, self);
    }

    pub fn apply_moves(&mut self, tables: &MoveTables, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(tables, mv);
        }
    }

    /// Edges and corners oriented, and the UD-slice edges in the UD slice.
    #[inline]
    pub fn is_phase1_solved(&self) -> bool {
        self.edge_orientations == 0 && self.corner_orientations == 0 && self.e_slice == 0
    }

    /// Every cubie home.
    #[inline]
    pub fn is_phase2_solved(&self) -> bool {
        self.ud6_edges == 0 && self.corner_permutations == 0 && self.e_sorted_slice == 0
    }

    pub fn is_solved(&self) -> bool {
        self.is_phase1_solved() && self.is_phase2_solved()
    }

    fn in_range(&self) -> bool {
        (self.edge_orientations as usize) < N_FLIP
            && (self.corner_orientations as usize) < N_TWIST
            && (self.e_slice as usize) < N_SLICE
            && (self.e_sorted_slice as usize) < N_SLICE_SORTED
            && self.parity < 2
            && (self.ud6_edges as usize) < N_UD6_EDGES
            && (self.ud7_edges as usize) < N_UD7_EDGES
            && (self.corner_permutations as usize) < N_CORNER_PERMUTATIONS
    }
}

impl From<&CubieCube> for CoordCube {
    fn from(cube: &CubieCube) -> Self {
        CoordCube::from_cubie(cube)
    }
}
