// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of Kociemba's two-phase Rubik's Cube solver.
//!
//! Phase 1 searches for a move sequence that takes the cube into the
//! subgroup generated by U, D, R2, L2, F2 and B2: every corner and edge
//! oriented and the four UD-slice edges in the slice. Phase 2 solves the
//! cube inside that subgroup. Both phases are IDA* searches over integer
//! coordinates, guided by symmetry-reduced pruning tables.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes during a solve, owned by
//! [`memo::Tables`] and built once in dependency order:
//! - Coordinate move tables
//! - Symmetry tables: the 48-element symmetry group, orbit classes and
//!   coordinate conjugation
//! - Phase-1 and phase-2 pruning tables
//!
//! The tables are large (hundreds of MB) and slow to build, so they are
//! cached on disk by [`memo::TableCache`].
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! State that changes during a solve:
//! - The coordinate cube, copied from frame to frame on the search stacks
//! - Statistics counters and per-solve records
//!
//! # Search Algorithm
//!
//! 1. **Phase 1**: resumable IDA* over all 18 moves, yielding prefixes that
//!    reach the subgroup, shortest first
//! 2. **Phase 2**: for each prefix, IDA* over the 10 subgroup moves with the
//!    depth left over from the prefix
//! 3. Prefix and suffix together form one solution; phase 1 resumes until
//!    enough solutions are found
//!
//! # References
//!
//! - Kociemba, H. "Two-Phase Algorithm Details". <https://kociemba.org/math/imptwophase.htm>

pub mod context;
pub mod cubie;
pub mod engine;
pub mod memo;
pub mod scramble;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use context::{solve, Solution, SolveContext, SolutionLimit, SolverConfig};
pub use cubie::{CubieCube, Move};
pub use memo::{TableCache, Tables};
pub use state::{CoordCube, StatsLog};
