// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face turns and sets of face turns.
//!
//! Moves are numbered `3 * face + (power - 1)`, so the three turns of a face
//! form a contiguous triple: `U1 U2 U3 R1 R2 R3 F1 ... B3`. A power of 1 is a
//! clockwise quarter turn, 2 a half turn and 3 an anticlockwise quarter turn.

use super::errors::MoveParseError;
use super::pieces::Face;
use std::fmt;
use std::str::FromStr;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the 18 face turns.
///
/// A move sequence is a `Vec<Move>` or `&[Move]`; "no move" is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Move {
    U1,
    U2,
    U3,
    R1,
    R2,
    R3,
    F1,
    F2,
    F3,
    D1,
    D2,
    D3,
    L1,
    L2,
    L3,
    B1,
    B2,
    B3,
}

impl Move {
    pub const ALL: [Move; 18] = [
        Move::U1,
        Move::U2,
        Move::U3,
        Move::R1,
        Move::R2,
        Move::R3,
        Move::F1,
        Move::F2,
        Move::F3,
        Move::D1,
        Move::D2,
        Move::D3,
        Move::L1,
        Move::L2,
        Move::L3,
        Move::B1,
        Move::B2,
        Move::B3,
    ];

    /// The moves that keep a phase-1-solved cube inside the phase-2 subgroup.
    pub const PHASE2: [Move; 10] = [
        Move::U1,
        Move::U2,
        Move::U3,
        Move::R2,
        Move::F2,
        Move::D1,
        Move::D2,
        Move::D3,
        Move::L2,
        Move::B2,
    ];

    /// The move turning `face` by `power` quarter turns clockwise (1..=3).
    pub fn new(face: Face, power: u8) -> Move {
        debug_assert!((1..=3).contains(&power), "bad power {}", power);
        Move::ALL[3 * face.index() + power as usize - 1]
    }

    pub fn from_index(index: usize) -> Option<Move> {
        Move::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn face(self) -> Face {
        Face::ALL[self as usize / 3]
    }

    /// Number of clockwise quarter turns, 1..=3.
    #[inline]
    pub fn power(self) -> u8 {
        self as u8 % 3 + 1
    }

    pub fn inverse(self) -> Move {
        Move::new(self.face(), 4 - self.power())
    }

    /// Quarter turns change the parity of both corner and edge permutations.
    #[inline]
    pub fn is_quarter_turn(self) -> bool {
        self.power() != 2
    }

    /// Two consecutive turns of one face can always be merged, so search
    /// never tries them.
    #[inline]
    pub fn is_same_face(self, other: Move) -> bool {
        self as u8 / 3 == other as u8 / 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.power() {
            1 => "",
            2 => "2",
            _ => "'",
        };
        write!(f, "{}{}", self.face().to_char(), suffix)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts standard notation (`R`, `R2`, `R'`) and numbered powers (`R1`, `R3`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || MoveParseError::UnknownMove {
            token: token.to_string(),
        };
        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_char).ok_or_else(unknown)?;
        let power = match chars.as_str() {
            "" | "1" => 1,
            "2" => 2,
            "'" | "3" => 3,
            _ => return Err(unknown()),
        };
        Ok(Move::new(face, power))
    }
}

/// Parse a whitespace-separated move sequence such as `"F R B R"`.
pub fn parse_moves(text: &str) -> Result<Vec<Move>, MoveParseError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Format a move sequence in standard notation, separated by spaces.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The inverse sequence: reversed, each move inverted.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

/// A set of moves, stored as a bitset indexed by [`Move::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveSet(u32);

impl MoveSet {
    pub const EMPTY: MoveSet = MoveSet(0);

    pub fn insert(&mut self, mv: Move) {
        self.0 |= 1 << mv.index();
    }

    /// Add all three turns of `face`.
    pub fn insert_face(&mut self, face: Face) {
        for power in 1..=3 {
            self.insert(Move::new(face, power));
        }
    }

    #[inline]
    pub fn contains(self, mv: Move) -> bool {
        self.0 & (1 << mv.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |&m| self.contains(m))
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = MoveSet::EMPTY;
        for mv in iter {
            set.insert(mv);
        }
        set
    }
}
