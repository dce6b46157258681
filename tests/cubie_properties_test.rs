// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for the cubie model and its coordinates.

use cube_search::cubie::constants::*;
use cube_search::cubie::{format_moves, invert_moves, parse_moves, CubieCube, Move};
use proptest::prelude::*;

fn moves(max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(0..N_MOVES, 0..max_len)
        .prop_map(|indices| indices.into_iter().filter_map(Move::from_index).collect())
}

proptest! {
    /// A sequence followed by its inverse sequence is the identity.
    #[test]
    fn prop_inverse_sequence(sequence in moves(40)) {
        let mut cube = CubieCube::from_moves(&sequence);
        cube.apply_moves(&invert_moves(&sequence));
        prop_assert_eq!(cube, CubieCube::IDENTITY);
    }

    /// The group inverse agrees with the inverse sequence.
    #[test]
    fn prop_group_inverse(sequence in moves(40)) {
        let cube = CubieCube::from_moves(&sequence);
        prop_assert_eq!(cube.inverse(), CubieCube::from_moves(&invert_moves(&sequence)));
        prop_assert_eq!(cube.multiply(&cube.inverse()), CubieCube::IDENTITY);
        prop_assert_eq!(cube.inverse().multiply(&cube), CubieCube::IDENTITY);
    }

    /// Every reachable cube is valid with consistent parity.
    #[test]
    fn prop_reachable_is_valid(sequence in moves(60)) {
        let cube = CubieCube::from_moves(&sequence);
        prop_assert!(cube.is_valid());
        prop_assert!(cube.has_consistent_parity());
    }

    #[test]
    fn prop_facelet_round_trip(sequence in moves(40)) {
        let cube = CubieCube::from_moves(&sequence);
        let facelets = cube.to_facelets();
        prop_assert_eq!(facelets.len(), 54);
        prop_assert_eq!(CubieCube::from_facelets(&facelets), Ok(cube));
    }

    #[test]
    fn prop_notation_round_trip(sequence in moves(30)) {
        prop_assert_eq!(parse_moves(&format_moves(&sequence)), Ok(sequence));
    }

    #[test]
    fn prop_orientation_coordinates(twist in 0..N_TWIST, flip in 0..N_FLIP) {
        let mut cube = CubieCube::IDENTITY;
        cube.set_corner_orientations(twist);
        cube.set_edge_orientations(flip);
        prop_assert!(cube.is_valid());
        prop_assert_eq!(cube.corner_orientations(), twist);
        prop_assert_eq!(cube.edge_orientations(), flip);
    }

    #[test]
    fn prop_slice_coordinates(slice in 0..N_SLICE, sorted in 0..N_SLICE_SORTED) {
        let mut cube = CubieCube::IDENTITY;
        cube.set_e_slice(slice);
        prop_assert_eq!(cube.e_slice(), slice);
        let mut cube = CubieCube::IDENTITY;
        cube.set_e_sorted_slice(sorted);
        prop_assert_eq!(cube.e_sorted_slice(), sorted);
        prop_assert_eq!(cube.e_slice(), sorted / 24);
    }

    #[test]
    fn prop_permutation_coordinates(
        corners in 0..N_CORNER_PERMUTATIONS,
        ud6 in 0..N_UD6_EDGES,
        ud7 in 0..N_UD7_EDGES,
    ) {
        let mut cube = CubieCube::IDENTITY;
        cube.set_corner_permutations(corners);
        prop_assert_eq!(cube.corner_permutations(), corners);
        cube.set_ud6_edges(ud6);
        prop_assert_eq!(cube.ud6_edges(), ud6);
        cube.set_ud7_edges(ud7);
        prop_assert_eq!(cube.ud7_edges(), ud7);
        prop_assert!(cube.is_valid());
    }

    /// Coordinates of a reachable cube survive a rebuild from coordinates.
    #[test]
    fn prop_coordinates_determine_cube(sequence in moves(40)) {
        let cube = CubieCube::from_moves(&sequence);
        let mut rebuilt = CubieCube::IDENTITY;
        rebuilt.set_corner_orientations(cube.corner_orientations());
        rebuilt.set_corner_permutations(cube.corner_permutations());
        rebuilt.set_edge_orientations(cube.edge_orientations());
        prop_assert_eq!(rebuilt.cp, cube.cp);
        prop_assert_eq!(rebuilt.co, cube.co);
        prop_assert_eq!(rebuilt.eo, cube.eo);
    }
}
