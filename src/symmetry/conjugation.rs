// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conjugation of a single coordinate by each D4h symmetry.

use crate::cubie::constants::N_SYM_D4H;
use crate::memo::TableCache;

/// `conj(x, s)` is the coordinate of `S_s * x * S_s^-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationTable {
    values: Vec<u16>,
}

impl ConjugationTable {
    /// `image(x, s)` computes one entry; values must fit in `u16`.
    pub fn build(n: usize, image: impl Fn(usize, usize) -> usize) -> Self {
        let mut values = Vec::with_capacity(n * N_SYM_D4H);
        for x in 0..n {
            for s in 0..N_SYM_D4H {
                let y = image(x, s);
                assert!(y < n, "conjugate of {} by {} is {}, out of range", x, s, y);
                values.push(y as u16);
            }
        }
        Self { values }
    }

    #[inline]
    pub fn conj(&self, x: usize, sym: usize) -> usize {
        self.values[N_SYM_D4H * x + sym] as usize
    }

    pub fn len(&self) -> usize {
        self.values.len() / N_SYM_D4H
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn load(cache: &TableCache, group: &str, name: &str, n: usize) -> Option<Self> {
        cache
            .load(group, name, n * N_SYM_D4H)
            .map(|values| Self { values })
    }

    pub fn store(&self, cache: &TableCache, group: &str, name: &str) {
        cache.store_or_warn(group, name, &self.values);
    }
}
