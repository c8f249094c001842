// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LinearSearch - probes every index from the first to the last.
//!
//! No ordering is assumed. Each index is marked `comparing`, counted, paused
//! on, then either marked `found` (ending the run) or reset to `default`.

use crate::context::RunContext;
use crate::engine::{Advance, Pause, StepError, StepGenerator};
use crate::model::{Probe, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Mark and count this index next.
    Probe(usize),
    /// The pause after probing this index is over; compare it.
    Compare(usize),
    Done,
}

#[derive(Debug)]
pub struct LinearSearch {
    phase: Phase,
}

impl LinearSearch {
    pub fn new() -> Self {
        Self {
            phase: Phase::Probe(0),
        }
    }
}

impl Default for LinearSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl StepGenerator for LinearSearch {
    fn advance(&mut self, ctx: &mut RunContext<'_>) -> Result<Advance, StepError> {
        loop {
            match self.phase {
                Phase::Probe(index) => {
                    if index >= ctx.len() {
                        self.phase = Phase::Done;
                        return Ok(Advance::NotFound);
                    }
                    ctx.begin_probe(index)?;
                    self.phase = Phase::Compare(index);
                    return Ok(Advance::Pause(Pause::Probe));
                }
                Phase::Compare(index) => {
                    if ctx.compare(index)? == Probe::Equal {
                        ctx.mark(index, Role::Found);
                        self.phase = Phase::Done;
                        return Ok(Advance::Found(index));
                    }
                    ctx.mark(index, Role::Default);
                    self.phase = Phase::Probe(index + 1);
                }
                Phase::Done => {
                    return Err(StepError::AdvancedAfterFinish {
                        generator: self.name().to_string(),
                    })
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testing::drive;
    use crate::model::{StepEvent, Target};

    #[test]
    fn test_finds_first_occurrence() {
        let mut search = LinearSearch::new();
        let trace = drive(&mut search, &[4, 8, 8, 2], Target::Value(8));
        assert_eq!(trace.outcome, Advance::Found(1));
        assert_eq!(
            trace.events,
            vec![
                StepEvent::Mark(0, Role::Comparing),
                StepEvent::Mark(0, Role::Default),
                StepEvent::Mark(1, Role::Comparing),
                StepEvent::Mark(1, Role::Found),
            ]
        );
        assert_eq!(trace.stats.comparisons(), 2);
        assert_eq!(trace.pauses, vec![Pause::Probe, Pause::Probe]);
    }

    #[test]
    fn test_unsorted_input_is_fine() {
        let mut search = LinearSearch::new();
        let trace = drive(&mut search, &[9, 3, 7, 1], Target::Value(1));
        assert_eq!(trace.outcome, Advance::Found(3));
        assert_eq!(trace.stats.steps(), 4);
    }

    #[test]
    fn test_absent_target_probes_everything() {
        let mut search = LinearSearch::new();
        let trace = drive(&mut search, &[1, 2, 3], Target::Value(7));
        assert_eq!(trace.outcome, Advance::NotFound);
        assert_eq!(trace.observer.marked(Role::Comparing), vec![0, 1, 2]);
        assert_eq!(trace.observer.marked(Role::Default), vec![0, 1, 2]);
        assert_eq!(trace.stats.comparisons(), 3);
    }

    #[test]
    fn test_empty_array() {
        let mut search = LinearSearch::new();
        let trace = drive(&mut search, &[], Target::Value(1));
        assert_eq!(trace.outcome, Advance::NotFound);
        assert!(trace.events.is_empty());
        assert!(trace.pauses.is_empty());
    }

    #[test]
    fn test_unusable_target_never_matches() {
        let mut search = LinearSearch::new();
        let trace = drive(&mut search, &[1, 2, 3, 4], Target::Unusable);
        assert_eq!(trace.outcome, Advance::NotFound);
        assert_eq!(trace.stats.comparisons(), 4);
    }

    #[test]
    fn test_advance_after_finish_is_an_error() {
        let mut search = LinearSearch::new();
        let _ = drive(&mut search, &[1], Target::Value(1));
        let mut stats = crate::state::Stats::new();
        let mut observer = crate::observer::NullObserver;
        let array = [1];
        let mut ctx = RunContext::new(&array, Target::Value(1), &mut stats, &mut observer);
        assert!(matches!(
            search.advance(&mut ctx),
            Err(StepError::AdvancedAfterFinish { .. })
        ));
    }
}
