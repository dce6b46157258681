// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are accumulated in the solve context while the search runs.
//! At the end of each solve a [`SolveStats`] record is appended to the
//! process-wide [`StatsLog`], which can be dumped as CSV.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, Display, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Phase-1 nodes generated.
    Phase1Nodes,
    /// Phase-2 nodes generated.
    Phase2Nodes,
    /// Phase-1 prefixes found.
    Phase1Solutions,
    /// Phase-1 prefixes for which phase 2 found nothing within the depth budget.
    Phase2Failures,
    /// Complete solutions returned.
    Solutions,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add every counter of `other` into `self`.
    pub fn merge(&mut self, other: &Statistics) {
        for counter in Counters::iter() {
            self.add(counter, other.get(counter));
        }
    }
}

/// Depths, node counts and timings of one solve (or one solution of it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Whether a solution was found.
    pub solved: bool,
    pub phase1_depth: usize,
    pub phase2_depth: usize,
    pub solution_length: usize,
    pub phase1_nodes: u64,
    pub phase2_nodes: u64,
    pub phase1_time: Duration,
    pub phase2_time: Duration,
    pub total_time: Duration,
}

/// Column names of [`StatsLog::write_csv`].
pub const CSV_HEADER: &str = "solve,solved,phase1_depth,phase2_depth,solution_length,\
phase1_nodes,phase2_nodes,phase1_micros,phase2_micros,total_micros";

/// Append-only record of every solve in this process.
#[derive(Debug, Default, Clone)]
pub struct StatsLog {
    records: Vec<SolveStats>,
    totals: Statistics,
}

impl StatsLog {
    pub fn new() -> Self {
        StatsLog::default()
    }

    /// Append one solve's record and counters.
    pub fn record(&mut self, stats: SolveStats, counters: &Statistics) {
        self.records.push(stats);
        self.totals.merge(counters);
    }

    pub fn records(&self) -> &[SolveStats] {
        &self.records
    }

    /// Counters summed over every recorded solve.
    pub fn totals(&self) -> &Statistics {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn write_csv(&self, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "{}", CSV_HEADER)?;
        for (i, record) in self.records.iter().enumerate() {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{},{}",
                i,
                record.solved as u8,
                record.phase1_depth,
                record.phase2_depth,
                record.solution_length,
                record.phase1_nodes,
                record.phase2_nodes,
                record.phase1_time.as_micros(),
                record.phase2_time.as_micros(),
                record.total_time.as_micros()
            )?;
        }
        Ok(())
    }

    /// Write the CSV to `path`, creating parent directories.
    pub fn save_csv(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(path)?);
        self.write_csv(&mut out)?;
        out.flush()
    }
}
