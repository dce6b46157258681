// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Type-safe names for faces, corner cubies and edge cubies.
//!
//! The discriminants double as array indices: a corner slot `i` of a
//! [`CubieCube`](super::CubieCube) is the home position of `Corner::ALL[i]`.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// The six faces, in the order used by facelet strings and move numbering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCountMacro, EnumIter,
)]
#[repr(u8)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Parse a facelet or move letter.
    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Corner cubies, named by the faces they touch (clockwise).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCountMacro, EnumIter,
)]
#[repr(u8)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Edge cubies. The last four (FR, FL, BL, BR) form the UD slice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCountMacro, EnumIter,
)]
#[repr(u8)]
pub enum Edge {
    UR,
    UF,
    UL,
    UB,
    DR,
    DF,
    DL,
    DB,
    FR,
    FL,
    BL,
    BR,
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ];

    /// The four edges between the U and D layers.
    pub const SLICE: [Edge; 4] = [Edge::FR, Edge::FL, Edge::BL, Edge::BR];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this edge belongs to the UD slice.
    #[inline]
    pub fn is_slice(self) -> bool {
        self >= Edge::FR
    }
}
