// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! This module contains all immutable precomputed tables:
//! - Coordinate move tables (`moves`)
//! - Pruning tables (`pruning`)
//! - The persistent binary cache they are stored in (`cache`)
//!
//! The symmetry tables live in [`crate::symmetry`] but are owned, like the
//! others, by [`Tables`], which builds everything once in dependency order
//! (moves, then symmetry, then pruning) and is then shared read-only by
//! every solve.

pub mod cache;
pub mod moves;
pub mod pruning;

pub use cache::{CacheError, TableCache};
pub use moves::MoveTables;
pub use pruning::{PruningTables, ReducedSpace};

use crate::cubie::constants::{N_TWIST, N_UD7_PHASE2};
use crate::state::CoordCube;
use crate::symmetry::SymmetryTables;
use log::info;
use std::time::Instant;

/// Every precomputed table the solver needs.
///
/// # Size
///
/// - Move tables: ~340 MB, dominated by the UD7 edge table (3,991,680 × 18 × 4 bytes)
/// - Symmetry tables: ~6 MB
/// - Pruning tables: ~252 MB (phase 1: 140,908,410 bytes, phase 2: 111,605,760 bytes)
///
/// Building from scratch takes minutes; loading from the cache takes seconds.
#[derive(Debug, Clone)]
pub struct Tables {
    pub moves: MoveTables,
    pub symmetry: SymmetryTables,
    pub pruning: PruningTables,
}

impl Tables {
    /// Load every table from `cache`, building (and storing) whatever is missing.
    pub fn build(cache: &TableCache) -> Self {
        let start = Instant::now();
        info!("Initializing tables...");
        let moves = MoveTables::build(cache);
        let symmetry = SymmetryTables::build(cache);
        let pruning = PruningTables::build(cache, &moves, &symmetry);
        info!("Tables ready in {:.2?}", start.elapsed());
        Self {
            moves,
            symmetry,
            pruning,
        }
    }

    /// Lower bound on the number of moves to reach the phase-1 goal.
    #[inline]
    pub fn phase1_pruning(&self, cube: &CoordCube) -> u8 {
        let (class, sym) = self
            .symmetry
            .reduce_flipslice(cube.e_slice as usize, cube.edge_orientations as usize);
        let twist = self
            .symmetry
            .twist_conj
            .conj(cube.corner_orientations as usize, sym);
        self.pruning.phase1[class * N_TWIST + twist]
    }

    /// Lower bound on the number of phase-2 moves to solve a phase-1-solved cube.
    #[inline]
    pub fn phase2_pruning(&self, cube: &CoordCube) -> u8 {
        debug_assert!(cube.is_phase1_solved(), "phase-2 pruning outside phase 2");
        let (class, sym) = self
            .symmetry
            .reduce_corners(cube.corner_permutations as usize);
        let ud_edges = self
            .symmetry
            .ud_edges_conj
            .conj(cube.ud7_edges as usize, sym);
        self.pruning.phase2[class * N_UD7_PHASE2 + ud_edges]
    }
}
