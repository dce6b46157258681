// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate move tables: `(coordinate, move) -> coordinate`.
//!
//! Each table is built by converting every coordinate value to a cubie
//! cube, applying each move at the cubie level and ranking the result. The
//! table for coordinate family `f` stores the image of `(x, m)` at
//! `f[N_MOVES * x + m]`.
//!
//! The four permutation tables are large enough to be worth caching; the
//! orientation and slice tables take milliseconds and are always rebuilt.

use crate::cubie::constants::*;
use crate::cubie::{CubieCube, Move, MOVE_CUBES};
use crate::memo::cache::{TableCache, MOVES_GROUP as CACHE_GROUP};
use log::info;
use std::time::Instant;

/// Move tables of every coordinate family, plus the parity table.
#[derive(Debug, Clone)]
pub struct MoveTables {
    pub edge_orientations: Vec<u16>,
    pub corner_orientations: Vec<u16>,
    pub e_slice: Vec<u16>,
    pub e_sorted_slice: Vec<u16>,
    pub ud6_edges: Vec<u32>,
    pub ud7_edges: Vec<u32>,
    pub corner_permutations: Vec<u16>,
    /// `parity[p][m]`: permutation parity after move `m` from parity `p`.
    pub parity: [[u8; N_MOVES]; 2],
}

impl MoveTables {
    pub fn build(cache: &TableCache) -> Self {
        let start = Instant::now();
        let tables = Self {
            edge_orientations: build_table(
                "edge orientations",
                N_FLIP,
                CubieCube::set_edge_orientations,
                CubieCube::edge_orientations,
                CubieCube::multiply_edges,
            ),
            corner_orientations: build_table(
                "corner orientations",
                N_TWIST,
                CubieCube::set_corner_orientations,
                CubieCube::corner_orientations,
                CubieCube::multiply_corners,
            ),
            e_slice: build_table(
                "E slice",
                N_SLICE,
                CubieCube::set_e_slice,
                CubieCube::e_slice,
                CubieCube::multiply_edges,
            ),
            e_sorted_slice: cache.load_or_build(
                CACHE_GROUP,
                "e_sorted_slice",
                N_SLICE_SORTED * N_MOVES,
                || {
                    build_table(
                        "E sorted slice",
                        N_SLICE_SORTED,
                        CubieCube::set_e_sorted_slice,
                        CubieCube::e_sorted_slice,
                        CubieCube::multiply_edges,
                    )
                },
            ),
            ud6_edges: cache.load_or_build(CACHE_GROUP, "ud6_edges", N_UD6_EDGES * N_MOVES, || {
                build_table(
                    "UD6 edges",
                    N_UD6_EDGES,
                    CubieCube::set_ud6_edges,
                    CubieCube::ud6_edges,
                    CubieCube::multiply_edges,
                )
            }),
            ud7_edges: cache.load_or_build(CACHE_GROUP, "ud7_edges", N_UD7_EDGES * N_MOVES, || {
                build_table(
                    "UD7 edges",
                    N_UD7_EDGES,
                    CubieCube::set_ud7_edges,
                    CubieCube::ud7_edges,
                    CubieCube::multiply_edges,
                )
            }),
            corner_permutations: cache.load_or_build(
                CACHE_GROUP,
                "corner_permutations",
                N_CORNER_PERMUTATIONS * N_MOVES,
                || {
                    build_table(
                        "corner permutations",
                        N_CORNER_PERMUTATIONS,
                        CubieCube::set_corner_permutations,
                        CubieCube::corner_permutations,
                        CubieCube::multiply_corners,
                    )
                },
            ),
            parity: parity_table(),
        };
        info!("Move tables ready in {:.2?}", start.elapsed());
        tables
    }
}

/// Tabulate one coordinate family.
///
/// # Panics
///
/// Panics if a move takes a coordinate out of `0..n`, or a value does not
/// fit the element type; either means the ranking functions are broken.
fn build_table<T: TryFrom<usize>>(
    name: &str,
    n: usize,
    set: impl Fn(&mut CubieCube, usize),
    get: impl Fn(&CubieCube) -> usize,
    multiply: fn(&mut CubieCube, &CubieCube),
) -> Vec<T> {
    info!("Building {} move table ({} entries)", name, n * N_MOVES);
    let mut table = Vec::with_capacity(n * N_MOVES);
    for coordinate in 0..n {
        let mut cube = CubieCube::IDENTITY;
        set(&mut cube, coordinate);
        for mv in Move::ALL {
            let mut moved = cube;
            multiply(&mut moved, &MOVE_CUBES[mv.index()]);
            let image = get(&moved);
            assert!(
                image < n,
                "{}: {} by {} gives {}, out of range",
                name,
                coordinate,
                mv,
                image
            );
            match T::try_from(image) {
                Ok(value) => table.push(value),
                Err(_) => panic!("{}: {} does not fit the table", name, image),
            }
        }
    }
    table
}

fn parity_table() -> [[u8; N_MOVES]; 2] {
    let mut table = [[0; N_MOVES]; 2];
    for mv in Move::ALL {
        let flip = MOVE_CUBES[mv.index()].corner_parity();
        table[0][mv.index()] = flip;
        table[1][mv.index()] = 1 - flip;
    }
    table
}
