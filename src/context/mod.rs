// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve context combining MEMO and DYNAMIC state.
//!
//! A [`SolveContext`] borrows the Tier 1 tables and the read-only
//! [`SolverConfig`], and owns everything one solve mutates:
//! - the phase-1 search, suspended between prefixes
//! - the phase-2 search, reset for each prefix
//! - statistics counters
//! - the solutions found so far
//!
//! # Memory Model
//!
//! ```text
//! SolveContext<'a> {
//!     tables: &'a Tables           ← shared, read-only, built once
//!     config: &'a SolverConfig     ← shared, read-only
//!     phase1: IdaSearch<Phase1>    ← owned, one frame arena
//!     phase2: IdaSearch<Phase2>    ← owned, frame arena reused per prefix
//!     statistics, solutions        ← owned
//! }
//! ```
//!
//! Contexts share nothing mutable, so independent solves can run side by
//! side against the same [`Tables`].

pub mod config;
pub mod solution;

pub use config::{parse_blacklist, ConfigError, SolutionLimit, SolverConfig};
pub use solution::Solution;

use crate::cubie::{CubieCube, Move};
use crate::engine::{IdaSearch, Phase1, Phase1Solutions, Phase2};
use crate::memo::Tables;
use crate::state::{CoordCube, Counters, SolveStats, Statistics, StatsLog};
use log::{debug, trace};
use std::time::{Duration, Instant};

/// The state of one two-phase solve.
pub struct SolveContext<'a> {
    tables: &'a Tables,
    config: &'a SolverConfig,
    root: CoordCube,
    phase1: Phase1Solutions<'a>,
    phase2: IdaSearch<'a, Phase2>,
    statistics: Statistics,
    solutions: Vec<Solution>,
    phase2_time: Duration,
    total_time: Duration,
}

impl<'a> SolveContext<'a> {
    pub fn new(tables: &'a Tables, config: &'a SolverConfig, cube: &CubieCube) -> Self {
        let root = CoordCube::from_cubie(cube);
        Self {
            tables,
            config,
            root,
            phase1: IdaSearch::<Phase1>::new(
                tables,
                root,
                config.max_depth(),
                config.blacklist(),
                None,
            ),
            phase2: IdaSearch::new(tables, root, 0, config.blacklist(), None),
            statistics: Statistics::new(),
            solutions: Vec::new(),
            phase2_time: Duration::ZERO,
            total_time: Duration::ZERO,
        }
    }

    /// Run the two-phase search until the solution limit is reached or
    /// phase 1 is exhausted, and return every solution found, in the order
    /// found.
    pub fn solve(&mut self) -> &[Solution] {
        let start = Instant::now();
        while !self.config.solutions().is_reached(self.solutions.len()) {
            let Some(prefix) = self.phase1.next_solution() else {
                break;
            };
            self.statistics.increment(Counters::Phase1Solutions);
            trace!("phase 1 hit: {:?}", prefix);

            if self.config.solutions() == SolutionLimit::Phase1Only {
                self.push_solution(prefix, Vec::new(), start);
                break;
            }

            let mut cube = self.root;
            cube.apply_moves(&self.tables.moves, &prefix);
            let budget = self.config.max_depth() - prefix.len();
            let phase2_start = Instant::now();
            self.phase2.reset(cube, budget, prefix.last().copied());
            let suffix = self.phase2.next_solution();
            self.phase2_time += phase2_start.elapsed();

            match suffix {
                Some(suffix) => self.push_solution(prefix, suffix, start),
                None => {
                    debug!("no phase 2 within {} moves after {:?}", budget, prefix);
                    self.statistics.increment(Counters::Phase2Failures);
                }
            }
        }
        self.total_time = start.elapsed();
        self.update_node_counts();
        &self.solutions
    }

    fn push_solution(&mut self, phase1: Vec<Move>, phase2: Vec<Move>, start: Instant) {
        self.statistics.increment(Counters::Solutions);
        let total_time = start.elapsed();
        let stats = SolveStats {
            solved: true,
            phase1_depth: phase1.len(),
            phase2_depth: phase2.len(),
            solution_length: phase1.len() + phase2.len(),
            phase1_nodes: self.phase1.nodes(),
            phase2_nodes: self.phase2.nodes(),
            phase1_time: total_time.saturating_sub(self.phase2_time),
            phase2_time: self.phase2_time,
            total_time,
        };
        self.solutions.push(Solution {
            phase1,
            phase2,
            stats,
        });
    }

    fn update_node_counts(&mut self) {
        let phase1 = self.phase1.nodes() - self.statistics.get(Counters::Phase1Nodes);
        let phase2 = self.phase2.nodes() - self.statistics.get(Counters::Phase2Nodes);
        self.statistics.add(Counters::Phase1Nodes, phase1);
        self.statistics.add(Counters::Phase2Nodes, phase2);
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The record for this solve: depths of the first solution, node counts
    /// and timings of the whole search.
    pub fn summary(&self) -> SolveStats {
        let (solved, phase1_depth, phase2_depth) = match self.solutions.first() {
            Some(first) => (true, first.phase1.len(), first.phase2.len()),
            None => (false, 0, 0),
        };
        SolveStats {
            solved,
            phase1_depth,
            phase2_depth,
            solution_length: phase1_depth + phase2_depth,
            phase1_nodes: self.phase1.nodes(),
            phase2_nodes: self.phase2.nodes(),
            phase1_time: self.total_time.saturating_sub(self.phase2_time),
            phase2_time: self.phase2_time,
            total_time: self.total_time,
        }
    }
}

/// Solve `cube` and append the solve's record to `log`.
///
/// An empty result means no solution exists within `config.max_depth()`.
pub fn solve(
    tables: &Tables,
    config: &SolverConfig,
    cube: &CubieCube,
    log: &mut StatsLog,
) -> Vec<Solution> {
    let mut context = SolveContext::new(tables, config, cube);
    context.solve();
    log.record(context.summary(), context.statistics());
    context.into_solutions()
}
