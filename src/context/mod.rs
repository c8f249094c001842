// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run context handed to step generators.
//!
//! A [`RunContext`] borrows everything a generator may touch while it
//! advances: the array (read-only), the target, the statistics of the active
//! run and the observer. Generators never hold on to it between advances, so
//! the runner is free to reconfigure itself once a run is over.
//!
//! Every emitted event goes to the observer immediately; every probe bumps the
//! counters and reports the new totals.

use crate::engine::StepError;
use crate::model::{Probe, Role, StepEvent, Target};
use crate::observer::SearchObserver;
use crate::state::Stats;

pub struct RunContext<'a> {
    array: &'a [i64],
    target: Target,
    stats: &'a mut Stats,
    observer: &'a mut dyn SearchObserver,
}

impl<'a> RunContext<'a> {
    pub fn new(
        array: &'a [i64],
        target: Target,
        stats: &'a mut Stats,
        observer: &'a mut dyn SearchObserver,
    ) -> Self {
        Self {
            array,
            target,
            stats,
            observer,
        }
    }

    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn stats(&self) -> Stats {
        *self.stats
    }

    /// Read an element. Generators only probe indices inside the array, so an
    /// error here means a generator bug.
    pub fn value_at(&self, index: usize) -> Result<i64, StepError> {
        self.array
            .get(index)
            .copied()
            .ok_or(StepError::ProbeOutOfBounds {
                index,
                len: self.array.len(),
            })
    }

    /// Compare the element at `index` against the target.
    ///
    /// This only reads; counting happens in [`RunContext::record_probe`] when
    /// the index is marked as being compared.
    pub fn compare(&self, index: usize) -> Result<Probe, StepError> {
        Ok(self.target.probe(self.value_at(index)?))
    }

    /// Deliver an event to the observer.
    pub fn emit(&mut self, event: StepEvent) {
        tracing::trace!(%event, "step event");
        self.observer.on_step(&event);
    }

    pub fn set_range(&mut self, left: usize, right: usize) {
        self.emit(StepEvent::SetRange(left, right));
    }

    pub fn mark(&mut self, index: usize, role: Role) {
        self.emit(StepEvent::Mark(index, role));
    }

    /// Count one probe and report the new totals.
    pub fn record_probe(&mut self) {
        self.stats.record_probe();
        self.observer.on_stats_changed(self.stats);
    }

    /// Mark `index` as being compared and count it. Every generator starts a
    /// probe this way.
    pub fn begin_probe(&mut self, index: usize) -> Result<(), StepError> {
        self.value_at(index)?;
        self.mark(index, Role::Comparing);
        self.record_probe();
        Ok(())
    }
}
