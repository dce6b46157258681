// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cubie model of the cube.
//!
//! This module contains the leaf types every other module builds on:
//! - Face, Corner, Edge: names of faces and cubies
//! - Move: the 18 face turns, their notation and move sets
//! - CubieCube: permutation/orientation representation and its group product
//! - Coordinate ranking functions on CubieCube
//! - Facelet string conversion
//!
//! Nothing here depends on precomputed tables.

pub mod constants;
pub mod coordinates;
pub mod cube;
pub mod errors;
pub mod facelets;
pub mod moves;
pub mod pieces;

// Re-export for convenience
pub use constants::*;
pub use cube::{CubieCube, BASIC_MOVES, MOVE_CUBES};
pub use errors::{FaceletError, MoveParseError};
pub use facelets::N_FACELETS;
pub use moves::{format_moves, invert_moves, parse_moves, Move, MoveSet};
pub use pieces::{Corner, Edge, Face};
