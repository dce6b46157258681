// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Persistent binary cache for precomputed tables.
//!
//! Each table lives in its own file, `<dir>/<group>/<name>.bin`, holding the
//! raw native-endian elements with no header. A file is accepted only if
//! its length is exactly the expected table size. Anything else (missing
//! file, wrong size, I/O failure) is a cache miss: the caller rebuilds the
//! table and stores it again. Failures never reach the user.
//!
//! Writes go to a temporary file in the same directory which is then
//! renamed into place, so a concurrent reader sees either the old file or
//! the complete new one.

use bytemuck::Pod;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing a cached table.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} holds {found} bytes, expected {expected}")]
    SizeMismatch {
        path: PathBuf,
        found: u64,
        expected: u64,
    },
}

/// Cache group of the move tables.
pub const MOVES_GROUP: &str = "moves";
/// Cache group of the symmetry tables.
pub const SYMMETRY_GROUP: &str = "symmetry";
/// Cache group of the pruning tables.
pub const PRUNING_GROUP: &str = "pruning";

/// Every group the tables are stored under. [`TableCache::clear`] removes
/// these and nothing else.
pub const CACHE_GROUPS: [&str; 3] = [MOVES_GROUP, SYMMETRY_GROUP, PRUNING_GROUP];

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> CacheError + '_ {
    move |source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CacheError> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(bytes).map_err(io_error(path))?;
    file.sync_all().map_err(io_error(path))
}

/// Location of the table cache, or no cache at all.
#[derive(Debug, Clone, Default)]
pub struct TableCache {
    dir: Option<PathBuf>,
}

impl TableCache {
    /// A cache rooted at `dir`, created on first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// A cache that never hits and never writes.
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// Path of the file holding `group/name`.
    pub fn path(&self, group: &str, name: &str) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(group).join(format!("{}.bin", name)))
    }

    /// Delete every cached table.
    ///
    /// Only the [`CACHE_GROUPS`] directories are removed; the cache
    /// directory itself and anything else in it are left alone.
    pub fn clear(&self) -> Result<(), CacheError> {
        let Some(dir) = &self.dir else {
            return Ok(());
        };
        for group in CACHE_GROUPS {
            let path = dir.join(group);
            match fs::remove_dir_all(&path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => {
                    return Err(io_error(&path)(err));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Read `group/name` if present. A missing file is `Ok(None)`.
    pub fn try_load<T: Pod>(
        &self,
        group: &str,
        name: &str,
        len: usize,
    ) -> Result<Option<Vec<T>>, CacheError> {
        let Some(path) = self.path(group, name) else {
            return Ok(None);
        };
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&path)(err)),
        };
        let found = file.metadata().map_err(io_error(&path))?.len();
        let expected = (len * std::mem::size_of::<T>()) as u64;
        if found != expected {
            return Err(CacheError::SizeMismatch {
                path,
                found,
                expected,
            });
        }
        let mut table = vec![T::zeroed(); len];
        file.read_exact(bytemuck::cast_slice_mut(&mut table))
            .map_err(io_error(&path))?;
        Ok(Some(table))
    }

    /// Read `group/name`, treating every failure as a miss.
    pub fn load<T: Pod>(&self, group: &str, name: &str, len: usize) -> Option<Vec<T>> {
        match self.try_load(group, name, len) {
            Ok(Some(table)) => {
                debug!("cache hit: {}/{}", group, name);
                Some(table)
            }
            Ok(None) => {
                debug!("cache miss: {}/{}", group, name);
                None
            }
            Err(err) => {
                debug!("cache miss: {}", err);
                None
            }
        }
    }

    /// Write `group/name` atomically.
    pub fn store<T: Pod>(&self, group: &str, name: &str, table: &[T]) -> Result<(), CacheError> {
        let Some(path) = self.path(group, name) else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let temp = path.with_extension(format!("{}.tmp", std::process::id()));
        let written = write_file(&temp, bytemuck::cast_slice(table))
            .and_then(|()| fs::rename(&temp, &path).map_err(io_error(&path)));
        if written.is_err() {
            let _ = fs::remove_file(&temp);
        }
        written?;
        debug!("cache store: {}", path.display());
        Ok(())
    }

    /// Store, logging rather than returning failures.
    pub fn store_or_warn<T: Pod>(&self, group: &str, name: &str, table: &[T]) {
        if let Err(err) = self.store(group, name, table) {
            warn!("could not cache {}/{}: {}", group, name, err);
        }
    }

    /// Load `group/name`, or build it and store the result.
    pub fn load_or_build<T: Pod>(
        &self,
        group: &str,
        name: &str,
        len: usize,
        build: impl FnOnce() -> Vec<T>,
    ) -> Vec<T> {
        if let Some(table) = self.load(group, name, len) {
            return table;
        }
        let table = build();
        assert_eq!(table.len(), len, "{}/{} built with wrong size", group, name);
        self.store_or_warn(group, name, &table);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TableCache::new(dir.path());
        let table: Vec<u32> = (0..1000).map(|i| i * 7).collect();
        cache.store("moves", "sample", &table).unwrap();
        assert_eq!(cache.load::<u32>("moves", "sample", 1000), Some(table));
        assert!(dir.path().join("moves").join("sample.bin").exists());
    }

    #[test]
    fn test_missing_file_is_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TableCache::new(dir.path());
        assert!(cache.try_load::<u8>("moves", "absent", 10).unwrap().is_none());
        assert_eq!(cache.load::<u8>("moves", "absent", 10), None);
    }

    #[test]
    fn test_wrong_size_is_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TableCache::new(dir.path());
        cache.store("pruning", "short", &[1u8, 2, 3]).unwrap();
        assert!(matches!(
            cache.try_load::<u8>("pruning", "short", 4),
            Err(CacheError::SizeMismatch {
                found: 3,
                expected: 4,
                ..
            })
        ));
        assert_eq!(cache.load::<u8>("pruning", "short", 4), None);
        // same bytes, different element type
        assert_eq!(cache.load::<u16>("pruning", "short", 3), None);
    }

    #[test]
    fn test_load_or_build_builds_once() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TableCache::new(dir.path());
        let mut builds = 0;
        for _ in 0..2 {
            let table = cache.load_or_build("group", "table", 3, || {
                builds += 1;
                vec![5u16, 6, 7]
            });
            assert_eq!(table, vec![5, 6, 7]);
        }
        assert_eq!(builds, 1);
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("cache");
        let cache = TableCache::new(&root);
        for group in CACHE_GROUPS {
            cache.store(group, "table", &[1u8]).unwrap();
        }
        cache.clear().unwrap();
        for group in CACHE_GROUPS {
            assert!(!root.join(group).exists());
            assert_eq!(cache.load::<u8>(group, "table", 1), None);
        }
        assert!(root.exists());
        // clearing twice is fine
        cache.clear().unwrap();
    }

    #[test]
    fn test_clear_keeps_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TableCache::new(dir.path());
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, b"keep me").unwrap();
        fs::create_dir(dir.path().join("other")).unwrap();
        cache.store(MOVES_GROUP, "table", &[1u8]).unwrap();

        cache.clear().unwrap();
        assert_eq!(fs::read(&notes).unwrap(), b"keep me");
        assert!(dir.path().join("other").is_dir());
        assert!(!dir.path().join(MOVES_GROUP).exists());
    }

    #[test]
    fn test_failed_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TableCache::new(dir.path());
        // a directory where the table file should go makes the rename fail
        let target = cache.path(MOVES_GROUP, "table").unwrap();
        fs::create_dir_all(target.join("occupied")).unwrap();

        assert!(cache.store(MOVES_GROUP, "table", &[1u8, 2]).is_err());
        let leftovers: Vec<_> = fs::read_dir(dir.path().join(MOVES_GROUP))
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "left behind {:?}", leftovers);
    }

    #[test]
    fn test_disabled_cache() {
        let cache = TableCache::disabled();
        cache.store("group", "table", &[1u8]).unwrap();
        assert_eq!(cache.load::<u8>("group", "table", 1), None);
        assert!(cache.path("group", "table").is_none());
    }

    #[test]
    fn test_unwritable_directory_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"not a directory").unwrap();
        let cache = TableCache::new(&blocker);
        assert!(cache.store("group", "table", &[1u8]).is_err());
        let table = cache.load_or_build("group", "table", 1, || vec![9u8]);
        assert_eq!(table, vec![9]);
    }
}
