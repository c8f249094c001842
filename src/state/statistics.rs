// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the run context and bumped once per probed index.
//! They are reset at the start of every run and by `reset()`.

use std::fmt;

use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Counters {
    Comparisons,
    Steps,
}

/// Comparison and step counts of the current (or last) run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    stats: [u64; Counters::COUNT],
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    /// Record one probe of an array index: one comparison and one step.
    pub fn record_probe(&mut self) {
        self.increment_counter(Counters::Comparisons);
        self.increment_counter(Counters::Steps);
    }

    /// Increment the specified counter by 1.
    fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn comparisons(&self) -> u64 {
        self.get(Counters::Comparisons)
    }

    pub fn steps(&self) -> u64 {
        self.get(Counters::Steps)
    }

    pub fn clear(&mut self) {
        self.stats = [0; Counters::COUNT];
    }

    pub fn is_zero(&self) -> bool {
        self.stats.iter().all(|&count| count == 0)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "steps {} / comparisons {}",
            self.steps(),
            self.comparisons()
        )
    }
}
