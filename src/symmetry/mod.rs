// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction for the pruning tables.
//!
//! Two cube states that are conjugate under a symmetry `S` (that is,
//! `y = S * x * S^-1`) are the same distance from solved, provided `S` maps
//! the goal set onto itself. The D4h symmetries fix the U/D axis and hence
//! both phase goals, so the pruning tables store one entry per D4h class
//! instead of one per raw coordinate.
//!
//! ## Module Structure
//!
//! - `group`: the 48 symmetry cubes, inverses and move conjugation
//! - `classes`: orbit tables mapping raw coordinates to (class, symmetry)
//! - `conjugation`: per-symmetry images of the twist and UD-edge coordinates
//! - `mod`: [`SymmetryTables`], which builds and caches all of the above
//!
//! ## Tables
//!
//! | table            | indexed by             | size          |
//! |------------------|------------------------|---------------|
//! | `flipslice`      | `2048 * slice + flip`  | 64430 classes |
//! | `corners`        | corner permutation     | 2768 classes  |
//! | `twist_conj`     | twist × D4h            | 2187 × 16     |
//! | `ud_edges_conj`  | phase-2 UD7 × D4h      | 40320 × 16    |

pub mod classes;
pub mod conjugation;
pub mod group;

pub use classes::OrbitTable;
pub use conjugation::ConjugationTable;
pub use group::{SymmetryGroup, MIRR_LR2, ROT_F2, ROT_U4, ROT_URF3};

use crate::cubie::constants::*;
use crate::cubie::CubieCube;
use crate::memo::cache::{TableCache, SYMMETRY_GROUP as CACHE_GROUP};
use log::info;
use std::time::Instant;

/// The symmetry group and every table derived from it.
#[derive(Debug, Clone)]
pub struct SymmetryTables {
    pub group: SymmetryGroup,
    /// Classes of the flipslice coordinate `2048 * e_slice + flip`.
    pub flipslice: OrbitTable,
    /// Classes of the corner permutation coordinate.
    pub corners: OrbitTable,
    pub twist_conj: ConjugationTable,
    /// Conjugation of the UD7 coordinate, restricted to phase 2 (`< 40320`).
    pub ud_edges_conj: ConjugationTable,
}

impl SymmetryTables {
    /// Load the tables from `cache`, or build and store them.
    ///
    /// The cached tables are used only if every one of them loads; a
    /// partial cache is rebuilt in full.
    pub fn build(cache: &TableCache) -> Self {
        let group = SymmetryGroup::new();
        if let Some(tables) = Self::load(cache, &group) {
            info!("Symmetry tables loaded from cache");
            return tables;
        }
        let start = Instant::now();
        let tables = Self::compute(group);
        tables.store(cache);
        info!("Symmetry tables built in {:.2?}", start.elapsed());
        tables
    }

    /// Build every table in memory.
    pub fn compute(group: SymmetryGroup) -> Self {
        let flipslice = OrbitTable::build(N_FLIPSLICE, N_FLIPSLICE_CLASSES, |raw| {
            let mut cube = CubieCube::IDENTITY;
            cube.set_e_slice(raw / N_FLIP);
            cube.set_edge_orientations(raw % N_FLIP);
            std::array::from_fn(|s| {
                let image = group.conjugate_edges(&cube, group.inverse(s));
                N_FLIP * image.e_slice() + image.edge_orientations()
            })
        });
        info!("{} flipslice classes", flipslice.n_classes());

        let corners = OrbitTable::build(N_CORNER_PERMUTATIONS, N_CORNER_CLASSES, |raw| {
            let mut cube = CubieCube::IDENTITY;
            cube.set_corner_permutations(raw);
            std::array::from_fn(|s| {
                group
                    .conjugate_corners(&cube, group.inverse(s))
                    .corner_permutations()
            })
        });
        info!("{} corner permutation classes", corners.n_classes());

        let twist_conj = ConjugationTable::build(N_TWIST, |twist, s| {
            let mut cube = CubieCube::IDENTITY;
            cube.set_corner_orientations(twist);
            group.conjugate_corners(&cube, s).corner_orientations()
        });

        let ud_edges_conj = ConjugationTable::build(N_UD7_PHASE2, |ud7, s| {
            let mut cube = CubieCube::IDENTITY;
            cube.set_ud7_edges(ud7);
            group.conjugate_edges(&cube, s).ud7_edges()
        });

        Self {
            group,
            flipslice,
            corners,
            twist_conj,
            ud_edges_conj,
        }
    }

    fn load(cache: &TableCache, group: &SymmetryGroup) -> Option<Self> {
        Some(Self {
            group: group.clone(),
            flipslice: OrbitTable::load(
                cache,
                CACHE_GROUP,
                "flipslice",
                N_FLIPSLICE,
                N_FLIPSLICE_CLASSES,
            )?,
            corners: OrbitTable::load(
                cache,
                CACHE_GROUP,
                "corners",
                N_CORNER_PERMUTATIONS,
                N_CORNER_CLASSES,
            )?,
            twist_conj: ConjugationTable::load(cache, CACHE_GROUP, "twist_conj", N_TWIST)?,
            ud_edges_conj: ConjugationTable::load(
                cache,
                CACHE_GROUP,
                "ud_edges_conj",
                N_UD7_PHASE2,
            )?,
        })
    }

    fn store(&self, cache: &TableCache) {
        self.flipslice.store(cache, CACHE_GROUP, "flipslice");
        self.corners.store(cache, CACHE_GROUP, "corners");
        self.twist_conj.store(cache, CACHE_GROUP, "twist_conj");
        self.ud_edges_conj.store(cache, CACHE_GROUP, "ud_edges_conj");
    }

    /// `(class, symmetry)` of a cube's flipslice coordinate.
    #[inline]
    pub fn reduce_flipslice(&self, slice: usize, flip: usize) -> (usize, usize) {
        self.flipslice.reduce(N_FLIP * slice + flip)
    }

    /// `(class, symmetry)` of a corner permutation coordinate.
    #[inline]
    pub fn reduce_corners(&self, corner_permutation: usize) -> (usize, usize) {
        self.corners.reduce(corner_permutation)
    }
}
