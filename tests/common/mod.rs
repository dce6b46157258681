// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cube_search::cubie::{CubieCube, Move};
use cube_search::memo::{TableCache, Tables};
use cube_search::scramble::{random_scramble, seeded_rng};
use std::path::PathBuf;
use std::sync::OnceLock;

/// The tables, built once per test binary.
///
/// They are cached under the cargo target directory, so only the first
/// test binary to run pays for building them.
pub fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let _ = env_logger::builder().is_test(true).try_init();
        Tables::build(&TableCache::new(cache_dir()))
    })
}

pub fn cache_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("table-cache")
}

/// `count` reproducible scrambles of `length` moves.
pub fn scrambles(seed: u64, count: usize, length: usize) -> Vec<Vec<Move>> {
    let mut rng = seeded_rng(seed);
    (0..count).map(|_| random_scramble(&mut rng, length)).collect()
}

/// Whether `moves` takes `cube` to solved.
pub fn solves(cube: &CubieCube, moves: &[Move]) -> bool {
    let mut cube = *cube;
    cube.apply_moves(moves);
    cube == CubieCube::IDENTITY
}
