// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, per solve).
//!
//! This module contains the state that changes while a solve runs:
//! - CoordCube: the cube as table indices, copied frame to frame by the search
//! - Statistics: counters and per-solve records

pub mod coord;
pub mod statistics;

pub use coord::CoordCube;
pub use statistics::{Counters, SolveStats, Statistics, StatsLog};
