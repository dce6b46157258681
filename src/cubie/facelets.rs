// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conversion between facelet strings and cubie cubes.
//!
//! A facelet string lists the 54 stickers face by face in the order
//! U, R, F, D, L, B. Within a face the stickers run left to right, top to
//! bottom, as seen looking at that face with U up (or, for U and D, with F
//! at the bottom and top respectively):
//!
//! ```text
//!              |************|
//!              |*U1**U2**U3*|
//!              |************|
//!              |*U4**U5**U6*|
//!              |************|
//!              |*U7**U8**U9*|
//!              |************|
//! |************|************|************|************|
//! |*L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
//! |************|************|************|************|
//! |*L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
//! |************|************|************|************|
//! |*L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
//! |************|************|************|************|
//!              |************|
//!              |*D1**D2**D3*|
//!              |************|
//!              |*D4**D5**D6*|
//!              |************|
//!              |*D7**D8**D9*|
//!              |************|
//! ```
//!
//! Each sticker is written as the letter of the face whose center has that
//! color, so the solved cube is `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.
//!
//! # Example
//!
//! ```
//! use cube_search::cubie::CubieCube;
//!
//! let solved: CubieCube = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
//!     .parse()
//!     .unwrap();
//! assert_eq!(solved, CubieCube::IDENTITY);
//! ```

use super::cube::CubieCube;
use super::errors::FaceletError;
use super::pieces::{Corner, Edge, Face};
use std::str::FromStr;
use Face::*;

/// Number of stickers on the cube.
pub const N_FACELETS: usize = 54;

/// Sticker index of facelet `n` (1..=9) of `face`.
const fn facelet(face: Face, n: usize) -> usize {
    9 * face as usize + n - 1
}

/// Stickers of each corner slot, starting with the U or D sticker and
/// running clockwise.
const CORNER_FACELETS: [[usize; 3]; 8] = [
    [facelet(U, 9), facelet(R, 1), facelet(F, 3)],
    [facelet(U, 7), facelet(F, 1), facelet(L, 3)],
    [facelet(U, 1), facelet(L, 1), facelet(B, 3)],
    [facelet(U, 3), facelet(B, 1), facelet(R, 3)],
    [facelet(D, 3), facelet(F, 9), facelet(R, 7)],
    [facelet(D, 1), facelet(L, 9), facelet(F, 7)],
    [facelet(D, 7), facelet(B, 9), facelet(L, 7)],
    [facelet(D, 9), facelet(R, 9), facelet(B, 7)],
];

/// Stickers of each edge slot, reference sticker first.
const EDGE_FACELETS: [[usize; 2]; 12] = [
    [facelet(U, 6), facelet(R, 2)],
    [facelet(U, 8), facelet(F, 2)],
    [facelet(U, 4), facelet(L, 2)],
    [facelet(U, 2), facelet(B, 2)],
    [facelet(D, 6), facelet(R, 8)],
    [facelet(D, 2), facelet(F, 8)],
    [facelet(D, 4), facelet(L, 8)],
    [facelet(D, 8), facelet(B, 8)],
    [facelet(F, 6), facelet(R, 4)],
    [facelet(F, 4), facelet(L, 6)],
    [facelet(B, 6), facelet(L, 4)],
    [facelet(B, 4), facelet(R, 6)],
];

/// Colors of each corner cubie, in the same order as [`CORNER_FACELETS`].
const CORNER_COLORS: [[Face; 3]; 8] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

/// Colors of each edge cubie, in the same order as [`EDGE_FACELETS`].
const EDGE_COLORS: [[Face; 2]; 12] = [
    [U, R],
    [U, F],
    [U, L],
    [U, B],
    [D, R],
    [D, F],
    [D, L],
    [D, B],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];

impl CubieCube {
    /// Parse and validate a facelet string.
    ///
    /// Rejects anything that is not a solvable cube: wrong length, unknown
    /// letters, wrong color counts, impossible cubies, twisted corners,
    /// flipped edges and odd permutation parity.
    pub fn from_facelets(text: &str) -> Result<CubieCube, FaceletError> {
        let colors = parse_colors(text)?;
        let cube = cube_from_colors(&colors)?;
        if !cube.is_valid() {
            return Err(FaceletError::InvalidCube);
        }
        if !cube.has_consistent_parity() {
            return Err(FaceletError::ParityMismatch);
        }
        Ok(cube)
    }

    /// The facelet string of this cube. Inverse of [`from_facelets`](Self::from_facelets).
    pub fn to_facelets(&self) -> String {
        let mut colors = [U; N_FACELETS];
        for face in Face::ALL {
            colors[facelet(face, 5)] = face;
        }
        for (slot, stickers) in CORNER_FACELETS.iter().enumerate() {
            let corner = self.cp[slot].index();
            let ori = self.co[slot] as usize;
            for (n, &sticker) in stickers.iter().enumerate() {
                colors[sticker] = CORNER_COLORS[corner][(n + 3 - ori) % 3];
            }
        }
        for (slot, stickers) in EDGE_FACELETS.iter().enumerate() {
            let edge = self.ep[slot].index();
            let ori = self.eo[slot] as usize;
            for (n, &sticker) in stickers.iter().enumerate() {
                colors[sticker] = EDGE_COLORS[edge][(n + ori) % 2];
            }
        }
        colors.iter().map(|face| face.to_char()).collect()
    }
}

impl FromStr for CubieCube {
    type Err = FaceletError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        CubieCube::from_facelets(text)
    }
}

fn parse_colors(text: &str) -> Result<[Face; N_FACELETS], FaceletError> {
    let length = text.chars().count();
    if length != N_FACELETS {
        return Err(FaceletError::WrongLength { length });
    }
    let mut colors = [U; N_FACELETS];
    let mut counts = [0usize; 6];
    for (position, found) in text.chars().enumerate() {
        let face = Face::from_char(found).ok_or(FaceletError::UnknownColor { found, position })?;
        colors[position] = face;
        counts[face.index()] += 1;
    }
    for face in Face::ALL {
        let count = counts[face.index()];
        if count != 9 {
            return Err(FaceletError::WrongColorCount {
                color: face.to_char(),
                count,
            });
        }
    }
    Ok(colors)
}

fn cube_from_colors(colors: &[Face; N_FACELETS]) -> Result<CubieCube, FaceletError> {
    let mut cube = CubieCube::IDENTITY;
    for (slot, stickers) in CORNER_FACELETS.iter().enumerate() {
        // the U or D sticker fixes the orientation
        let ori = stickers
            .iter()
            .position(|&s| colors[s] == U || colors[s] == D)
            .ok_or(FaceletError::UnknownCorner { slot })?;
        let first = colors[stickers[(ori + 1) % 3]];
        let second = colors[stickers[(ori + 2) % 3]];
        let corner = CORNER_COLORS
            .iter()
            .position(|c| c[1] == first && c[2] == second)
            .ok_or(FaceletError::UnknownCorner { slot })?;
        cube.cp[slot] = Corner::ALL[corner];
        cube.co[slot] = ori as u8;
    }
    for (slot, stickers) in EDGE_FACELETS.iter().enumerate() {
        let pair = [colors[stickers[0]], colors[stickers[1]]];
        let (edge, ori) = EDGE_COLORS
            .iter()
            .enumerate()
            .find_map(|(edge, c)| {
                if *c == pair {
                    Some((edge, 0))
                } else if c[0] == pair[1] && c[1] == pair[0] {
                    Some((edge, 1))
                } else {
                    None
                }
            })
            .ok_or(FaceletError::UnknownEdge { slot })?;
        cube.ep[slot] = Edge::ALL[edge];
        cube.eo[slot] = ori;
    }
    Ok(cube)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::moves::{parse_moves, Move};

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn test_solved_round_trip() {
        assert_eq!(CubieCube::from_facelets(SOLVED), Ok(CubieCube::IDENTITY));
        assert_eq!(CubieCube::IDENTITY.to_facelets(), SOLVED);
    }

    #[test]
    fn test_single_move_facelets() {
        let mut cube = CubieCube::IDENTITY;
        cube.apply_move(Move::U1);
        assert_eq!(
            cube.to_facelets(),
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"
        );
        let mut cube = CubieCube::IDENTITY;
        cube.apply_move(Move::R1);
        assert_eq!(
            cube.to_facelets(),
            "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"
        );
    }

    #[test]
    fn test_scrambled_round_trip() {
        let moves = parse_moves("D2 R' F L2 B U' R2 D F' L B2 U").unwrap();
        let cube = CubieCube::from_moves(&moves);
        let facelets = cube.to_facelets();
        assert_eq!(facelets.parse::<CubieCube>(), Ok(cube));
    }

    #[test]
    fn test_known_facelet_strings_are_valid() {
        for text in [
            "BBFRURDDLBFRDRFDLDFLUDFRFDFLBLUDBRULDURULFBLUURRLBFBBU",
            "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL",
        ] {
            let cube = CubieCube::from_facelets(text).unwrap();
            assert!(cube.is_valid());
            assert_eq!(cube.to_facelets(), text);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            CubieCube::from_facelets("UUU"),
            Err(FaceletError::WrongLength { length: 3 })
        );
    }

    #[test]
    fn test_rejects_unknown_color() {
        let text = SOLVED.replacen('R', "X", 1);
        assert_eq!(
            CubieCube::from_facelets(&text),
            Err(FaceletError::UnknownColor {
                found: 'X',
                position: 9
            })
        );
    }

    #[test]
    fn test_rejects_wrong_color_count() {
        let text = SOLVED.replacen('R', "U", 1);
        assert_eq!(
            CubieCube::from_facelets(&text),
            Err(FaceletError::WrongColorCount {
                color: 'U',
                count: 10
            })
        );
    }

    #[test]
    fn test_rejects_twisted_corner() {
        // URF twisted in place: U9 R1 F3 rotated
        let mut colors: Vec<char> = SOLVED.chars().collect();
        colors[facelet(U, 9)] = 'F';
        colors[facelet(R, 1)] = 'U';
        colors[facelet(F, 3)] = 'R';
        let text: String = colors.into_iter().collect();
        assert_eq!(
            CubieCube::from_facelets(&text),
            Err(FaceletError::InvalidCube)
        );
    }

    #[test]
    fn test_rejects_swapped_edges() {
        let mut cube = CubieCube::IDENTITY;
        cube.ep.swap(0, 1);
        assert_eq!(
            CubieCube::from_facelets(&cube.to_facelets()),
            Err(FaceletError::ParityMismatch)
        );
    }

    #[test]
    fn test_rejects_impossible_edge() {
        // an edge whose stickers are U and D
        let mut colors: Vec<char> = SOLVED.chars().collect();
        colors.swap(facelet(R, 2), facelet(D, 2));
        let text: String = colors.into_iter().collect();
        assert!(matches!(
            CubieCube::from_facelets(&text),
            Err(FaceletError::UnknownEdge { .. })
        ));
    }
}
