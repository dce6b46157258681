// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equivalence classes of a raw coordinate under D4h conjugation.
//!
//! For a raw coordinate value `x` the table records a class index `c` and a
//! symmetry `s` such that `x = S^-1 * rep(c) * S`, where `S` is the
//! symmetry cube `s`. Equivalently `rep(c) = S * x * S^-1`, which is the
//! direction the conjugation tables in [`super::conjugation`] use, so a
//! pruning lookup conjugates the remaining coordinate by the recorded `s`.
//!
//! Classes are numbered in order of their smallest member, which is the
//! representative; representatives therefore map to themselves with
//! symmetry 0.

use crate::cubie::constants::N_SYM_D4H;
use crate::memo::TableCache;

const UNVISITED: u16 = u16::MAX;

/// Class index, class symmetry and representatives of one raw coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitTable {
    /// Class of each raw value.
    classidx: Vec<u16>,
    /// Symmetry mapping the class representative to each raw value.
    sym: Vec<u8>,
    /// Representative raw value of each class.
    rep: Vec<u32>,
    /// Bitmask of the D4h symmetries fixing each representative.
    stabilizer: Vec<u16>,
}

impl OrbitTable {
    /// Scan `0..n_raw`, opening a new class at each unvisited value.
    ///
    /// `images(x)[s]` must be the raw value of `S_s^-1 * x * S_s`.
    ///
    /// # Panics
    ///
    /// Panics if the number of classes found is not `n_classes`.
    pub fn build(
        n_raw: usize,
        n_classes: usize,
        images: impl Fn(usize) -> [usize; N_SYM_D4H],
    ) -> Self {
        let mut classidx = vec![UNVISITED; n_raw];
        let mut sym = vec![0u8; n_raw];
        let mut rep = Vec::with_capacity(n_classes);
        let mut stabilizer = Vec::with_capacity(n_classes);

        for raw in 0..n_raw {
            if classidx[raw] != UNVISITED {
                continue;
            }
            let class = rep.len();
            assert!(class < n_classes, "more than {} classes", n_classes);
            classidx[raw] = class as u16;
            rep.push(raw as u32);

            let mut fixed = 1u16;
            for (s, member) in images(raw).into_iter().enumerate().skip(1) {
                if member == raw {
                    fixed |= 1 << s;
                } else if classidx[member] == UNVISITED {
                    classidx[member] = class as u16;
                    sym[member] = s as u8;
                }
            }
            stabilizer.push(fixed);
        }
        assert_eq!(rep.len(), n_classes, "wrong number of classes");

        Self {
            classidx,
            sym,
            rep,
            stabilizer,
        }
    }

    /// `(class, symmetry)` of a raw value.
    #[inline]
    pub fn reduce(&self, raw: usize) -> (usize, usize) {
        (self.classidx[raw] as usize, self.sym[raw] as usize)
    }

    #[inline]
    pub fn class_of(&self, raw: usize) -> usize {
        self.classidx[raw] as usize
    }

    #[inline]
    pub fn representative(&self, class: usize) -> usize {
        self.rep[class] as usize
    }

    /// Bitmask of symmetries `s` with `S_s * rep * S_s^-1 == rep`. Bit 0 is always set.
    #[inline]
    pub fn stabilizer(&self, class: usize) -> u16 {
        self.stabilizer[class]
    }

    pub fn n_classes(&self) -> usize {
        self.rep.len()
    }

    pub fn n_raw(&self) -> usize {
        self.classidx.len()
    }

    /// Load all four arrays of `prefix`, or nothing.
    pub fn load(
        cache: &TableCache,
        group: &str,
        prefix: &str,
        n_raw: usize,
        n_classes: usize,
    ) -> Option<Self> {
        Some(Self {
            classidx: cache.load(group, &format!("{}_classidx", prefix), n_raw)?,
            sym: cache.load(group, &format!("{}_sym", prefix), n_raw)?,
            rep: cache.load(group, &format!("{}_rep", prefix), n_classes)?,
            stabilizer: cache.load(group, &format!("{}_stabilizer", prefix), n_classes)?,
        })
    }

    pub fn store(&self, cache: &TableCache, group: &str, prefix: &str) {
        cache.store_or_warn(group, &format!("{}_classidx", prefix), &self.classidx);
        cache.store_or_warn(group, &format!("{}_sym", prefix), &self.sym);
        cache.store_or_warn(group, &format!("{}_rep", prefix), &self.rep);
        cache.store_or_warn(group, &format!("{}_stabilizer", prefix), &self.stabilizer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four points on a square under a symmetry group acting by rotation.
    fn rotation_images(raw: usize) -> [usize; N_SYM_D4H] {
        std::array::from_fn(|s| (raw + s) % 4 + 4 * (raw / 4))
    }

    #[test]
    fn test_toy_orbits() {
        // values 0..8 split into {0,1,2,3} and {4,5,6,7}
        let table = OrbitTable::build(8, 2, rotation_images);
        assert_eq!(table.n_classes(), 2);
        assert_eq!(table.representative(0), 0);
        assert_eq!(table.representative(1), 4);
        for raw in 0..8 {
            let (class, sym) = table.reduce(raw);
            assert_eq!(class, raw / 4);
            assert_eq!(rotation_images(table.representative(class))[sym], raw);
        }
        // s = 4, 8, 12 act trivially
        assert_eq!(table.stabilizer(0), 0b0001_0001_0001_0001);
    }

    #[test]
    #[should_panic(expected = "wrong number of classes")]
    fn test_wrong_class_count_panics() {
        OrbitTable::build(8, 3, rotation_images);
    }

    #[test]
    fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TableCache::new(dir.path());
        let table = OrbitTable::build(8, 2, rotation_images);
        table.store(&cache, "symmetry", "toy");
        assert_eq!(OrbitTable::load(&cache, "symmetry", "toy", 8, 2), Some(table));
        assert_eq!(OrbitTable::load(&cache, "symmetry", "other", 8, 2), None);
    }
}
