// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbit and conjugation tables.

mod common;

use common::{cache_dir, scrambles, tables};
use cube_search::cubie::constants::*;
use cube_search::cubie::CubieCube;
use cube_search::memo::TableCache;
use cube_search::state::CoordCube;
use cube_search::symmetry::SymmetryTables;
use std::collections::HashSet;
use std::fs;

#[test]
fn test_class_counts() {
    let symmetry = &tables().symmetry;
    let flipslice: HashSet<usize> = (0..N_FLIPSLICE)
        .map(|raw| symmetry.flipslice.class_of(raw))
        .collect();
    assert_eq!(flipslice.len(), N_FLIPSLICE_CLASSES);
    assert!(flipslice.iter().all(|&class| class < N_FLIPSLICE_CLASSES));

    let corners: HashSet<usize> = (0..N_CORNER_PERMUTATIONS)
        .map(|raw| symmetry.corners.class_of(raw))
        .collect();
    assert_eq!(corners.len(), N_CORNER_CLASSES);
}

#[test]
fn test_representatives_map_to_themselves() {
    let symmetry = &tables().symmetry;
    for class in 0..N_FLIPSLICE_CLASSES {
        let rep = symmetry.flipslice.representative(class);
        assert_eq!(symmetry.flipslice.reduce(rep), (class, 0));
    }
    for class in 0..N_CORNER_CLASSES {
        let rep = symmetry.corners.representative(class);
        assert_eq!(symmetry.corners.reduce(rep), (class, 0));
    }
    assert_eq!(symmetry.flipslice.reduce(0), (0, 0));
    assert_eq!(symmetry.corners.reduce(0), (0, 0));
}

#[test]
fn test_symmetry_maps_member_to_representative() {
    let symmetry = &tables().symmetry;
    let group = &symmetry.group;
    for raw in (0..N_FLIPSLICE).step_by(211) {
        let (class, sym) = symmetry.flipslice.reduce(raw);
        let mut cube = CubieCube::IDENTITY;
        cube.set_e_slice(raw / N_FLIP);
        cube.set_edge_orientations(raw % N_FLIP);
        let image = group.conjugate_edges(&cube, sym);
        assert_eq!(
            N_FLIP * image.e_slice() + image.edge_orientations(),
            symmetry.flipslice.representative(class)
        );
    }
    for raw in (0..N_CORNER_PERMUTATIONS).step_by(13) {
        let (class, sym) = symmetry.corners.reduce(raw);
        let mut cube = CubieCube::IDENTITY;
        cube.set_corner_permutations(raw);
        let image = group.conjugate_corners(&cube, sym);
        assert_eq!(image.corner_permutations(), symmetry.corners.representative(class));
    }
}

#[test]
fn test_conjugation_tables() {
    let symmetry = &tables().symmetry;
    for twist in 0..N_TWIST {
        assert_eq!(symmetry.twist_conj.conj(twist, 0), twist);
    }
    for ud7 in 0..N_UD7_PHASE2 {
        assert_eq!(symmetry.ud_edges_conj.conj(ud7, 0), ud7);
    }
    // The solved state is fixed by every symmetry.
    for sym in 0..N_SYM_D4H {
        assert_eq!(symmetry.twist_conj.conj(0, sym), 0);
        assert_eq!(symmetry.ud_edges_conj.conj(0, sym), 0);
    }
    let group = &symmetry.group;
    for twist in (0..N_TWIST).step_by(5) {
        for sym in 0..N_SYM_D4H {
            let image = symmetry.twist_conj.conj(twist, sym);
            assert_eq!(symmetry.twist_conj.conj(image, group.inverse(sym)), twist);
        }
    }
}

#[test]
fn test_pruning_is_symmetric() {
    let tables = tables();
    let group = &tables.symmetry.group;
    for scramble in scrambles(11, 20, 30) {
        let cube = CubieCube::from_moves(&scramble);
        let distance = tables.phase1_pruning(&CoordCube::from(&cube));
        for sym in 0..N_SYM_D4H {
            let image = group.conjugate(&cube, sym);
            assert!(image.is_valid());
            assert_eq!(
                tables.phase1_pruning(&CoordCube::from(&image)),
                distance,
                "symmetry {}",
                sym
            );
        }
    }
}

fn assert_same_tables(actual: &SymmetryTables, expected: &SymmetryTables) {
    assert!(actual.flipslice == expected.flipslice, "flipslice differs");
    assert!(actual.corners == expected.corners, "corners differ");
    assert!(actual.twist_conj == expected.twist_conj, "twist_conj differs");
    assert!(actual.ud_edges_conj == expected.ud_edges_conj, "ud_edges_conj differs");
}

#[test]
fn test_partial_symmetry_cache_is_rebuilt_in_full() {
    let expected = &tables().symmetry;
    let dir = tempfile::tempdir().unwrap();
    let group_dir = dir.path().join("symmetry");
    fs::create_dir_all(&group_dir).unwrap();
    for entry in fs::read_dir(cache_dir().join("symmetry")).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "bin") {
            let name = path.file_name().unwrap();
            fs::copy(&path, group_dir.join(name)).unwrap();
        }
    }
    let cache = TableCache::new(dir.path());
    assert_same_tables(&SymmetryTables::build(&cache), expected);

    // A well-sized table of garbage is only replaced if the whole set is rebuilt.
    let twist_conj = group_dir.join("twist_conj.bin");
    let twist_bytes = fs::read(&twist_conj).unwrap();
    fs::write(&twist_conj, vec![0xffu8; twist_bytes.len()]).unwrap();
    let corners_rep = group_dir.join("corners_rep.bin");
    let rep_bytes = fs::read(&corners_rep).unwrap();
    fs::write(&corners_rep, &rep_bytes[..rep_bytes.len() / 2]).unwrap();

    let rebuilt = SymmetryTables::build(&cache);
    assert_same_tables(&rebuilt, expected);
    assert_eq!(fs::read(&corners_rep).unwrap(), rep_bytes);
    assert_eq!(fs::read(&twist_conj).unwrap(), twist_bytes);
}
