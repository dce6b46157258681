// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two phases of the search, as implementations of [`Phase`].

use crate::cubie::Move;
use crate::memo::Tables;
use crate::state::CoordCube;

/// What distinguishes one phase's IDA* from the other's.
pub trait Phase {
    /// Name used in log messages.
    const NAME: &'static str;

    /// The moves this phase may make, in the order they are tried.
    const MOVES: &'static [Move];

    /// Admissible lower bound on the moves left to reach the goal.
    fn estimate(tables: &Tables, cube: &CoordCube) -> usize;

    fn is_goal(cube: &CoordCube) -> bool;
}

/// Reduce to the subgroup generated by U, D, R2, L2, F2, B2.
#[derive(Debug, Clone, Copy)]
pub struct Phase1;

/// Solve within that subgroup.
#[derive(Debug, Clone, Copy)]
pub struct Phase2;

impl Phase for Phase1 {
    const NAME: &'static str = "phase 1";
    const MOVES: &'static [Move] = &Move::ALL;

    #[inline]
    fn estimate(tables: &Tables, cube: &CoordCube) -> usize {
        tables.phase1_pruning(cube) as usize
    }

    #[inline]
    fn is_goal(cube: &CoordCube) -> bool {
        cube.is_phase1_solved()
    }
}

impl Phase for Phase2 {
    const NAME: &'static str = "phase 2";
    const MOVES: &'static [Move] = &Move::PHASE2;

    #[inline]
    fn estimate(tables: &Tables, cube: &CoordCube) -> usize {
        tables.phase2_pruning(cube) as usize
    }

    #[inline]
    fn is_goal(cube: &CoordCube) -> bool {
        cube.is_phase2_solved()
    }
}
