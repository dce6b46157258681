// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry-reduced pruning tables, built by breadth-first search.
//!
//! A pruning table holds, for each pair (class, inner coordinate), the
//! exact number of moves from the class representative combined with that
//! inner coordinate to the goal of its phase:
//!
//! | phase | class coordinate       | inner coordinate | entries     | moves |
//! |-------|------------------------|------------------|-------------|-------|
//! | 1     | flipslice (64430)      | twist (2187)     | 140,908,410 | 18    |
//! | 2     | corner perm (2768)     | UD7 edges (40320)| 111,605,760 | 10    |
//!
//! # Construction
//!
//! Starting from index 0 (the solved state), each pass of the BFS expands
//! every entry at the current depth: the move is applied to the class
//! representative, and the result is reduced back to (class, inner) through
//! the orbit and conjugation tables.
//!
//! When a class representative is fixed by a symmetry `s` (its stabilizer),
//! the inner coordinates `i` and `conj(i, s)` describe conjugate states and
//! so lie at equal distance. Every time an entry is recorded, all of its
//! stabilizer images are recorded with it; without this some entries would
//! never be reached.
//!
//! Once more than half the table is filled, passes run backwards instead:
//! each unvisited entry looks for a neighbour at the current depth, which
//! touches far fewer entries near the end.

use crate::cubie::constants::*;
use crate::cubie::Move;
use crate::memo::cache::PRUNING_GROUP as CACHE_GROUP;
use crate::memo::{MoveTables, TableCache};
use crate::symmetry::SymmetryTables;
use log::info;
use std::time::Instant;

/// Marker for entries not yet reached during construction.
pub const UNVISITED: u8 = u8::MAX;

/// A coordinate space reduced by D4h symmetry, as seen by the BFS.
pub trait ReducedSpace {
    /// Name for progress messages and cache files.
    fn name(&self) -> &'static str;

    fn n_classes(&self) -> usize;

    fn n_inner(&self) -> usize;

    /// Moves generating the space. Must be closed under D4h conjugation.
    fn moves(&self) -> &'static [Move];

    /// Largest distance any entry may have.
    fn max_distance(&self) -> u8;

    /// Bitmask of symmetries fixing the representative of `class`.
    fn stabilizer(&self, class: usize) -> u16;

    /// Conjugate an inner coordinate by a D4h symmetry.
    fn conj_inner(&self, inner: usize, sym: usize) -> usize;

    /// Reduced (class, inner) of the representative of `class` with
    /// coordinate `inner`, after `mv`.
    fn successor(&self, class: usize, inner: usize, mv: Move) -> (usize, usize);
}

/// Phase 1: flipslice classes × corner twist, all 18 moves.
pub struct FlipSliceTwist<'a> {
    pub moves: &'a MoveTables,
    pub symmetry: &'a SymmetryTables,
}

impl ReducedSpace for FlipSliceTwist<'_> {
    fn name(&self) -> &'static str {
        "phase1"
    }

    fn n_classes(&self) -> usize {
        N_FLIPSLICE_CLASSES
    }

    fn n_inner(&self) -> usize {
        N_TWIST
    }

    fn moves(&self) -> &'static [Move] {
        &Move::ALL
    }

    fn max_distance(&self) -> u8 {
        PHASE1_MAX_DISTANCE
    }

    fn stabilizer(&self, class: usize) -> u16 {
        self.symmetry.flipslice.stabilizer(class)
    }

    fn conj_inner(&self, twist: usize, sym: usize) -> usize {
        self.symmetry.twist_conj.conj(twist, sym)
    }

    fn successor(&self, class: usize, twist: usize, mv: Move) -> (usize, usize) {
        let m = mv.index();
        let raw = self.symmetry.flipslice.representative(class);
        let flip = self.moves.edge_orientations[N_MOVES * (raw % N_FLIP) + m] as usize;
        let slice = self.moves.e_slice[N_MOVES * (raw / N_FLIP) + m] as usize;
        let (class, sym) = self.symmetry.reduce_flipslice(slice, flip);
        let twist = self.moves.corner_orientations[N_MOVES * twist + m] as usize;
        (class, self.symmetry.twist_conj.conj(twist, sym))
    }
}

/// Phase 2: corner permutation classes × UD7 edges, the 10 phase-2 moves.
pub struct CornersUdEdges<'a> {
    pub moves: &'a MoveTables,
    pub symmetry: &'a SymmetryTables,
}

impl ReducedSpace for CornersUdEdges<'_> {
    fn name(&self) -> &'static str {
        "phase2"
    }

    fn n_classes(&self) -> usize {
        N_CORNER_CLASSES
    }

    fn n_inner(&self) -> usize {
        N_UD7_PHASE2
    }

    fn moves(&self) -> &'static [Move] {
        &Move::PHASE2
    }

    fn max_distance(&self) -> u8 {
        PHASE2_MAX_DISTANCE
    }

    fn stabilizer(&self, class: usize) -> u16 {
        self.symmetry.corners.stabilizer(class)
    }

    fn conj_inner(&self, ud_edges: usize, sym: usize) -> usize {
        self.symmetry.ud_edges_conj.conj(ud_edges, sym)
    }

    fn successor(&self, class: usize, ud_edges: usize, mv: Move) -> (usize, usize) {
        let m = mv.index();
        let raw = self.symmetry.corners.representative(class);
        let corners = self.moves.corner_permutations[N_MOVES * raw + m] as usize;
        let (class, sym) = self.symmetry.reduce_corners(corners);
        let ud_edges = self.moves.ud7_edges[N_MOVES * ud_edges + m] as usize;
        (class, self.symmetry.ud_edges_conj.conj(ud_edges, sym))
    }
}

/// Both pruning tables, indexed `class * n_inner + inner`.
#[derive(Debug, Clone)]
pub struct PruningTables {
    pub phase1: Vec<u8>,
    pub phase2: Vec<u8>,
}

impl PruningTables {
    pub fn build(cache: &TableCache, moves: &MoveTables, symmetry: &SymmetryTables) -> Self {
        Self {
            phase1: load_or_build(cache, &FlipSliceTwist { moves, symmetry }),
            phase2: load_or_build(cache, &CornersUdEdges { moves, symmetry }),
        }
    }
}

fn load_or_build<S: ReducedSpace>(cache: &TableCache, space: &S) -> Vec<u8> {
    let len = space.n_classes() * space.n_inner();
    cache.load_or_build(CACHE_GROUP, space.name(), len, || build_table(space))
}

/// Fill a pruning table by BFS from index 0.
///
/// # Panics
///
/// Panics if any distance would exceed `space.max_distance()`, or if a
/// pass reaches no new entry while some remain unvisited. Either means the
/// move or symmetry tables are inconsistent.
pub fn build_table<S: ReducedSpace>(space: &S) -> Vec<u8> {
    let start = Instant::now();
    let n_inner = space.n_inner();
    let total = space.n_classes() * n_inner;
    info!("Building {} pruning table ({} entries)", space.name(), total);

    let mut table = vec![UNVISITED; total];
    let mut filled = record(&mut table, space, 0, 0, 0);
    let mut depth = 0u8;

    while filled < total {
        assert!(
            depth < space.max_distance(),
            "{}: {} entries still unvisited beyond depth {}",
            space.name(),
            total - filled,
            space.max_distance()
        );
        let backward = filled > total / 2;
        let mut reached = 0;
        for index in 0..total {
            let (class, inner) = (index / n_inner, index % n_inner);
            if backward {
                if table[index] != UNVISITED {
                    continue;
                }
                let has_parent = space.moves().iter().any(|&mv| {
                    let (next_class, next_inner) = space.successor(class, inner, mv);
                    table[next_class * n_inner + next_inner] == depth
                });
                if has_parent {
                    reached += record(&mut table, space, class, inner, depth + 1);
                }
            } else {
                if table[index] != depth {
                    continue;
                }
                for &mv in space.moves() {
                    let (next_class, next_inner) = space.successor(class, inner, mv);
                    if table[next_class * n_inner + next_inner] == UNVISITED {
                        reached += record(&mut table, space, next_class, next_inner, depth + 1);
                    }
                }
            }
        }
        assert!(
            reached > 0,
            "{}: search stalled at depth {} with {} entries unvisited",
            space.name(),
            depth,
            total - filled
        );
        filled += reached;
        depth += 1;
        info!(
            "{}: depth {:2} {:>11} entries ({:>11} total) {}",
            space.name(),
            depth,
            reached,
            filled,
            if backward { "backward" } else { "forward" }
        );
    }

    debug_assert!(table.iter().all(|&d| d != UNVISITED));
    info!(
        "{} pruning table built in {:.2?}, max distance {}",
        space.name(),
        start.elapsed(),
        depth
    );
    table
}

/// Set `(class, inner)` and its stabilizer images to `distance`, returning
/// how many entries were newly set.
fn record<S: ReducedSpace>(
    table: &mut [u8],
    space: &S,
    class: usize,
    inner: usize,
    distance: u8,
) -> usize {
    let base = class * space.n_inner();
    let stabilizer = space.stabilizer(class);
    let mut count = 0;
    for sym in 0..N_SYM_D4H {
        if stabilizer & (1 << sym) == 0 {
            continue;
        }
        let entry = &mut table[base + space.conj_inner(inner, sym)];
        if *entry == UNVISITED {
            *entry = distance;
            count += 1;
        }
    }
    count
}
