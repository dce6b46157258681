// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::cubie::{format_moves, Move};
use crate::state::SolveStats;
use std::fmt;

/// A phase-1 prefix and the phase-2 suffix that completes it.
///
/// In phase-1-only mode the suffix is empty and the moves only reach the
/// phase-1 goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub phase1: Vec<Move>,
    pub phase2: Vec<Move>,
    /// Statistics at the moment this solution was found.
    pub stats: SolveStats,
}

impl Solution {
    /// The prefix followed by the suffix.
    pub fn moves(&self) -> Vec<Move> {
        self.phase1.iter().chain(self.phase2.iter()).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.phase1.len() + self.phase2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let moves = format_moves(&self.moves());
        if !moves.is_empty() {
            write!(f, "{} ", moves)?;
        }
        write!(f, "({} moves: {}+{})", self.len(), self.phase1.len(), self.phase2.len())
    }
}
