// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable IDA* search.
//!
//! [`IdaSearch`] runs depth-first search under an increasing depth bound,
//! pruned by the phase's admissible estimate. The search state lives in a
//! [`SearchStack`] of frames, one per move on the current path, so a search
//! can stop at a solution and later resume exactly where it stopped.
//!
//! # Architecture
//!
//! Each frame holds the coordinate cube at that depth, the move that produced
//! it and a cursor into the phase's move list. One step of the search:
//! 1. Take the next candidate move from the top frame (skipping blacklisted
//!    moves and moves on the same face as the frame's own move)
//! 2. If there is none: pop the frame (backtrack)
//! 3. Apply the move; if `depth + estimate > bound`: prune
//! 4. If `depth == bound`: report the path if the new cube is at the goal
//! 5. Otherwise: push a frame for the new cube
//!
//! When the root frame is popped, the bound grows by one and the stack
//! restarts from the root, until the bound passes `max_depth`.
//!
//! Reporting only at `depth == bound` means each path is reported once, by
//! the iteration whose bound equals its length, so solutions come out in
//! nondecreasing length.
//!
//! # Example
//!
//! ```no_run
//! use cube_search::cubie::{parse_moves, CubieCube, MoveSet};
//! use cube_search::engine::Phase1Solutions;
//! use cube_search::memo::{TableCache, Tables};
//! use cube_search::state::CoordCube;
//!
//! let tables = Tables::build(&TableCache::new("cache"));
//! let scramble = parse_moves("R U F' D2 L").unwrap();
//! let root = CoordCube::from(&CubieCube::from_moves(&scramble));
//! for prefix in Phase1Solutions::new(&tables, root, 12, MoveSet::EMPTY, None).take(3) {
//!     println!("{:?}", prefix);
//! }
//! ```

pub mod phase;
pub mod stack;

pub use phase::{Phase, Phase1, Phase2};
pub use stack::{Frame, SearchStack};

use crate::cubie::constants::MAX_DEPTH;
use crate::cubie::{Move, MoveSet};
use crate::memo::Tables;
use crate::state::CoordCube;
use log::debug;
use std::marker::PhantomData;

/// Generator of phase-1 prefixes, shortest first.
pub type Phase1Solutions<'a> = IdaSearch<'a, Phase1>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    /// The root has not been examined.
    Fresh,
    /// Depth-first search under `bound` is in progress.
    Running,
    /// The bound has passed `max_depth`.
    Exhausted,
}

/// An IDA* search for one phase, suspended between solutions.
pub struct IdaSearch<'a, P: Phase> {
    tables: &'a Tables,
    stack: SearchStack,
    root: Frame,
    bound: usize,
    max_depth: usize,
    blacklist: MoveSet,
    state: SearchState,
    /// Nodes generated since construction, across resets.
    nodes: u64,
    _phase: PhantomData<P>,
}

impl<'a, P: Phase> IdaSearch<'a, P> {
    /// Search from `root` for paths of at most `max_depth` moves.
    ///
    /// `last_move`, when given, is treated as the move that produced `root`,
    /// so the first move of every path avoids its face.
    pub fn new(
        tables: &'a Tables,
        root: CoordCube,
        max_depth: usize,
        blacklist: MoveSet,
        last_move: Option<Move>,
    ) -> Self {
        let mut search = Self {
            tables,
            stack: SearchStack::new(),
            root: Frame::new(root, last_move),
            bound: 0,
            max_depth: 0,
            blacklist,
            state: SearchState::Fresh,
            nodes: 0,
            _phase: PhantomData,
        };
        search.reset(root, max_depth, last_move);
        search
    }

    /// Start over from a new root, reusing the frame arena.
    pub fn reset(&mut self, root: CoordCube, max_depth: usize, last_move: Option<Move>) {
        assert!(
            max_depth <= MAX_DEPTH,
            "max depth {} exceeds {}",
            max_depth,
            MAX_DEPTH
        );
        self.root = Frame::new(root, last_move);
        self.stack.reset(self.root);
        self.bound = 0;
        self.max_depth = max_depth;
        self.state = SearchState::Fresh;
    }

    /// The current depth bound.
    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == SearchState::Exhausted
    }

    /// Resume the search and return the next path to the goal, or `None`
    /// once every path of at most `max_depth` moves has been reported.
    pub fn next_solution(&mut self) -> Option<Vec<Move>> {
        loop {
            match self.state {
                SearchState::Exhausted => return None,
                SearchState::Fresh => {
                    let estimate = P::estimate(self.tables, &self.root.cube);
                    self.bound = estimate.max(1);
                    self.state = if self.bound > self.max_depth {
                        SearchState::Exhausted
                    } else {
                        SearchState::Running
                    };
                    if P::is_goal(&self.root.cube) {
                        return Some(Vec::new());
                    }
                }
                SearchState::Running => {
                    if let Some(path) = self.descend() {
                        return Some(path);
                    }
                    self.bound += 1;
                    if self.bound > self.max_depth {
                        debug!("{}: exhausted at depth {}", P::NAME, self.max_depth);
                        self.state = SearchState::Exhausted;
                    } else {
                        debug!("{}: depth bound {}", P::NAME, self.bound);
                        self.stack.reset(self.root);
                    }
                }
            }
        }
    }

    /// Depth-first search under the current bound, from wherever the stack
    /// stopped. Returns `None` once the root frame has been popped.
    fn descend(&mut self) -> Option<Vec<Move>> {
        let tables = self.tables;
        loop {
            let depth = self.stack.depth() + 1;
            let top = self.stack.top_mut()?;
            let Some(mv) = top.next_move(P::MOVES, self.blacklist) else {
                self.stack.pop();
                continue;
            };
            let parent = top.cube;
            let mut cube = parent;
            cube.apply_move(&tables.moves, mv);
            self.nodes += 1;

            if depth + P::estimate(tables, &cube) > self.bound {
                continue;
            }
            if depth == self.bound {
                // A goal whose parent is already at the goal only extends a shorter path.
                if P::is_goal(&cube) && !P::is_goal(&parent) {
                    let mut path = self.stack.path();
                    path.push(mv);
                    return Some(path);
                }
                continue;
            }
            self.stack.push(Frame::new(cube, Some(mv)));
        }
    }
}

impl<P: Phase> Iterator for IdaSearch<'_, P> {
    type Item = Vec<Move>;

    fn next(&mut self) -> Option<Vec<Move>> {
        self.next_solution()
    }
}
