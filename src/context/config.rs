// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.

use crate::cubie::constants::MAX_DEPTH;
use crate::cubie::{Face, Move, MoveSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{found}' is not a face letter (expected one of URFDLB)")]
    BadBlacklist { found: char },

    #[error("max depth {depth} is outside 1..={max}", max = MAX_DEPTH)]
    DepthOutOfRange { depth: usize },

    #[error("solution count {count} must be -1 (all), 0 (phase 1 only) or positive")]
    SolutionCount { count: i64 },
}

/// How many solutions a solve collects before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionLimit {
    /// Stop at the first phase-1 prefix; phase 2 is not run.
    Phase1Only,
    /// Every solution within the depth limit.
    All,
    AtMost(usize),
}

impl SolutionLimit {
    /// Interpret the command-line count: 0, -1 or a positive number.
    pub fn from_count(count: i64) -> Result<Self, ConfigError> {
        match count {
            0 => Ok(SolutionLimit::Phase1Only),
            -1 => Ok(SolutionLimit::All),
            n if n > 0 => Ok(SolutionLimit::AtMost(n as usize)),
            _ => Err(ConfigError::SolutionCount { count }),
        }
    }

    pub fn is_reached(self, found: usize) -> bool {
        match self {
            SolutionLimit::Phase1Only => found > 0,
            SolutionLimit::All => false,
            SolutionLimit::AtMost(n) => found >= n,
        }
    }
}

impl Default for SolutionLimit {
    fn default() -> Self {
        SolutionLimit::AtMost(1)
    }
}

/// Blacklist every turn of each face named in `letters`, e.g. `"LB"`.
pub fn parse_blacklist(letters: &str) -> Result<MoveSet, ConfigError> {
    let mut blacklist = MoveSet::EMPTY;
    for found in letters.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let face = Face::from_char(found.to_ascii_uppercase())
            .ok_or(ConfigError::BadBlacklist { found })?;
        blacklist.insert_face(face);
    }
    Ok(blacklist)
}

/// Read-only settings for every solve in a run.
///
/// Built from [`SolverConfig::default`] and the `with_*` methods, so
/// `max_depth` is always within `1..=MAX_DEPTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    max_depth: usize,
    solutions: SolutionLimit,
    blacklist: MoveSet,
    /// A scramble supplied up front, instead of a facelet string.
    scramble: Option<Vec<Move>>,
    cache_dir: PathBuf,
    /// Discard the table cache before building tables.
    rebuild_tables: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: 25,
            solutions: SolutionLimit::default(),
            blacklist: MoveSet::EMPTY,
            scramble: None,
            cache_dir: PathBuf::from("cache"),
            rebuild_tables: false,
        }
    }
}

impl SolverConfig {
    pub fn with_max_depth(mut self, depth: usize) -> Result<Self, ConfigError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange { depth });
        }
        self.max_depth = depth;
        Ok(self)
    }

    pub fn with_solutions(mut self, solutions: SolutionLimit) -> Self {
        self.solutions = solutions;
        self
    }

    pub fn with_blacklist(mut self, blacklist: MoveSet) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_scramble(mut self, scramble: Vec<Move>) -> Self {
        self.scramble = Some(scramble);
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_rebuild_tables(mut self, rebuild: bool) -> Self {
        self.rebuild_tables = rebuild;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn solutions(&self) -> SolutionLimit {
        self.solutions
    }

    pub fn blacklist(&self) -> MoveSet {
        self.blacklist
    }

    pub fn scramble(&self) -> Option<&[Move]> {
        self.scramble.as_deref()
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn rebuild_tables(&self) -> bool {
        self.rebuild_tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_depth, 25);
        assert_eq!(config.solutions, SolutionLimit::AtMost(1));
        assert!(config.blacklist.is_empty());
        assert_eq!(config.scramble, None);
    }

    #[test]
    fn test_solution_limit() {
        assert_eq!(SolutionLimit::from_count(0), Ok(SolutionLimit::Phase1Only));
        assert_eq!(SolutionLimit::from_count(-1), Ok(SolutionLimit::All));
        assert_eq!(SolutionLimit::from_count(3), Ok(SolutionLimit::AtMost(3)));
        assert_eq!(
            SolutionLimit::from_count(-2),
            Err(ConfigError::SolutionCount { count: -2 })
        );

        assert!(!SolutionLimit::AtMost(2).is_reached(1));
        assert!(SolutionLimit::AtMost(2).is_reached(2));
        assert!(SolutionLimit::Phase1Only.is_reached(1));
        assert!(!SolutionLimit::All.is_reached(1000));
    }

    #[test]
    fn test_blacklist() {
        let blacklist = parse_blacklist("Lb").unwrap();
        assert_eq!(blacklist.len(), 6);
        assert!(blacklist.contains(Move::L1));
        assert!(blacklist.contains(Move::B3));
        assert!(!blacklist.contains(Move::U1));
        assert_eq!(parse_blacklist("RX"), Err(ConfigError::BadBlacklist { found: 'X' }));
        assert!(parse_blacklist("").unwrap().is_empty());
    }

    #[test]
    fn test_max_depth() {
        let config = SolverConfig::default().with_max_depth(20).unwrap();
        assert_eq!(config.max_depth(), 20);
        assert_eq!(
            SolverConfig::default().with_max_depth(0),
            Err(ConfigError::DepthOutOfRange { depth: 0 })
        );
        assert!(SolverConfig::default().with_max_depth(MAX_DEPTH + 1).is_err());
        // a rejected depth leaves the previous one in place
        let config = SolverConfig::default();
        assert!(config.clone().with_max_depth(MAX_DEPTH + 1).is_err());
        assert_eq!(config.max_depth(), 25);
        assert!(config.max_depth() <= MAX_DEPTH);
    }

    #[test]
    fn test_accessors() {
        let config = SolverConfig::default()
            .with_scramble(vec![Move::R1, Move::U2])
            .with_cache_dir("tables")
            .with_rebuild_tables(true)
            .with_solutions(SolutionLimit::All);
        assert_eq!(config.scramble(), Some(&[Move::R1, Move::U2][..]));
        assert_eq!(config.cache_dir(), Path::new("tables"));
        assert!(config.rebuild_tables());
        assert_eq!(config.solutions(), SolutionLimit::All);
    }
}
