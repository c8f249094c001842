// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Presentation callbacks.
//!
//! The runner never draws anything. It reports what happened through a
//! [`SearchObserver`], and adapters turn those reports into pixels, terminal
//! output, or (in tests) a plain log.
//!
//! All callbacks are invoked synchronously, in order, from the thread driving
//! the run. A `StepEvent` is always delivered before the pause that follows it.

pub mod board;

pub use board::RoleBoard;

use crate::model::StepEvent;
use crate::state::{ResultDisplay, RunState, Stats};

/// Receiver of everything a run reports. Every method defaults to a no-op.
pub trait SearchObserver {
    /// A visualization event, in emission order.
    fn on_step(&mut self, event: &StepEvent) {
        let _ = event;
    }

    /// Called after every counter change, including resets to zero.
    fn on_stats_changed(&mut self, stats: &Stats) {
        let _ = stats;
    }

    /// Called on every Idle/Running transition.
    fn on_run_state_changed(&mut self, state: RunState) {
        let _ = state;
    }

    /// Called whenever the result indicator changes.
    fn on_result_changed(&mut self, display: ResultDisplay) {
        let _ = display;
    }

    /// The runner was reconfigured; the array now has `len` elements.
    fn on_array_changed(&mut self, len: usize) {
        let _ = len;
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for Box<O> {
    fn on_step(&mut self, event: &StepEvent) {
        (**self).on_step(event)
    }

    fn on_stats_changed(&mut self, stats: &Stats) {
        (**self).on_stats_changed(stats)
    }

    fn on_run_state_changed(&mut self, state: RunState) {
        (**self).on_run_state_changed(state)
    }

    fn on_result_changed(&mut self, display: ResultDisplay) {
        (**self).on_result_changed(display)
    }

    fn on_array_changed(&mut self, len: usize) {
        (**self).on_array_changed(len)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// One callback received by a [`RecordingObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Step(StepEvent),
    Stats(Stats),
    RunState(RunState),
    Result(ResultDisplay),
    ArrayChanged(usize),
}

/// Observer that records every notification, for headless inspection.
///
/// # Example
///
/// ```
/// use search_visualizer::observer::{RecordingObserver, SearchObserver};
/// use search_visualizer::model::StepEvent;
///
/// let mut observer = RecordingObserver::new();
/// observer.on_step(&StepEvent::Result(true));
/// assert_eq!(observer.result(), Some(true));
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    notifications: Vec<Notification>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Step events only, in emission order.
    pub fn events(&self) -> Vec<StepEvent> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::Step(event) => Some(*event),
                _ => None,
            })
            .collect()
    }

    /// Indices that received a `Mark` with `role`, in emission order.
    pub fn marked(&self, role: crate::model::Role) -> Vec<usize> {
        self.events()
            .iter()
            .filter_map(|event| event.marked_index(role))
            .collect()
    }

    /// Every `SetRange` window, in emission order.
    pub fn ranges(&self) -> Vec<(usize, usize)> {
        self.events()
            .iter()
            .filter_map(|event| match *event {
                StepEvent::SetRange(left, right) => Some((left, right)),
                _ => None,
            })
            .collect()
    }

    /// The last `Result` event, if any.
    pub fn result(&self) -> Option<bool> {
        self.events().iter().rev().find_map(|event| match *event {
            StepEvent::Result(found) => Some(found),
            _ => None,
        })
    }

    /// Every run-state transition, in order.
    pub fn run_states(&self) -> Vec<RunState> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::RunState(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// The most recent stats snapshot, if any.
    pub fn last_stats(&self) -> Option<Stats> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::Stats(stats) => Some(*stats),
            _ => None,
        })
    }

    /// The most recent result indicator, if any.
    pub fn last_result_display(&self) -> Option<ResultDisplay> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::Result(display) => Some(*display),
            _ => None,
        })
    }
}

impl SearchObserver for RecordingObserver {
    fn on_step(&mut self, event: &StepEvent) {
        self.notifications.push(Notification::Step(*event));
    }

    fn on_stats_changed(&mut self, stats: &Stats) {
        self.notifications.push(Notification::Stats(*stats));
    }

    fn on_run_state_changed(&mut self, state: RunState) {
        self.notifications.push(Notification::RunState(state));
    }

    fn on_result_changed(&mut self, display: ResultDisplay) {
        self.notifications.push(Notification::Result(display));
    }

    fn on_array_changed(&mut self, len: usize) {
        self.notifications.push(Notification::ArrayChanged(len));
    }
}
