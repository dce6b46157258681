// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for user-supplied cube descriptions.
//!
//! These are the only recoverable errors of the cube model: everything past
//! the parsers assumes valid input and checks its invariants with assertions.

use thiserror::Error;

/// Reasons a facelet string does not describe a solvable cube.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaceletError {
    /// The string does not have exactly 54 facelets.
    #[error("expected 54 facelets, found {length}")]
    WrongLength { length: usize },

    /// A facelet is not one of U, R, F, D, L, B.
    #[error("unknown facelet color {found:?} at position {position}")]
    UnknownColor { found: char, position: usize },

    /// A color does not appear exactly nine times.
    #[error("color {color} appears {count} times, expected 9")]
    WrongColorCount { color: char, count: usize },

    /// The three facelets of a corner slot do not name any corner cubie.
    #[error("corner slot {slot} has no matching corner cubie")]
    UnknownCorner { slot: usize },

    /// The two facelets of an edge slot do not name any edge cubie.
    #[error("edge slot {slot} has no matching edge cubie")]
    UnknownEdge { slot: usize },

    /// Some cubie appears twice, or the orientations do not sum correctly.
    #[error("impossible cube: twisted corner, flipped edge or duplicated cubie")]
    InvalidCube,

    /// Corner and edge permutations have different parities.
    #[error("corner and edge permutation parities differ (two cubies swapped)")]
    ParityMismatch,
}

/// A token of a move sequence that is not a face turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("unknown move {token:?}")]
    UnknownMove { token: String },
}
