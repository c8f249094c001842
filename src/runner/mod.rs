// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The search runner: configuration, the run gate and run lifecycle.
//!
//! A [`SearchRunner`] owns the array, target and algorithm of one
//! visualization, plus its [`RunState`]. Only one run can be active at a
//! time. While it is, every operation that needs an idle runner (`configure`,
//! `reset`, starting another run) is refused with
//! [`RunnerError::InvalidState`] and changes nothing.
//!
//! # Lifecycle
//!
//! 1. `start()`: Idle → Running; markers cleared, stats zeroed, result pending
//! 2. `step()`: advance to the next pause, or finish (Running → Idle)
//! 3. `run()`: `start()` plus `step()` until finished, pausing through the
//!    runner's [`Pacer`]
//!
//! The Running → Idle transition is made by a drop guard, so it also happens
//! when step generation fails or a callback panics.
//!
//! # Example
//!
//! ```
//! use search_visualizer::config::SearchConfig;
//! use search_visualizer::model::AlgorithmKind;
//! use search_visualizer::runner::SearchRunner;
//!
//! let config = SearchConfig {
//!     algorithm: AlgorithmKind::Binary,
//!     ..SearchConfig::default()
//! };
//! let mut runner = SearchRunner::headless(&config);
//! let outcome = runner.run().unwrap();
//! assert_eq!(outcome.found_index, Some(49));
//! assert_eq!(outcome.stats.comparisons(), 1);
//! ```

pub mod errors;

pub use errors::RunnerError;

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::config::SearchConfig;
use crate::context::RunContext;
use crate::engine::{Resumption, SearchEngine};
use crate::model::{is_sorted_ascending, AlgorithmKind, Role, StepEvent, Target};
use crate::observer::{NullObserver, RecordingObserver, SearchObserver};
use crate::pacing::{Pacer, PacingConfig, ThreadPacer, VirtualPacer};
use crate::state::{ResultDisplay, RunState, Stats};

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: AlgorithmKind,
    pub target: Target,
    /// Index of the match, if the target was found.
    pub found_index: Option<usize>,
    pub stats: Stats,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.found_index.is_some()
    }
}

/// Result of a single [`SearchRunner::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Wait this long, then step again.
    Paused(Duration),
    /// The run is over and the runner is idle.
    Finished(SearchOutcome),
}

pub struct SearchRunner<O = NullObserver, P = ThreadPacer> {
    array: Vec<i64>,
    target: Target,
    algorithm: AlgorithmKind,
    pacing: PacingConfig,
    state: RunState,
    stats: Stats,
    result: ResultDisplay,
    active: Option<SearchEngine>,
    last_outcome: Option<SearchOutcome>,
    observer: O,
    pacer: P,
}

impl SearchRunner<RecordingObserver, VirtualPacer> {
    /// Runner that records every notification and never really sleeps.
    pub fn headless(config: &SearchConfig) -> Self {
        Self::new(config, RecordingObserver::new(), VirtualPacer::new())
    }
}

impl<O: SearchObserver, P: Pacer> SearchRunner<O, P> {
    pub fn new(config: &SearchConfig, observer: O, pacer: P) -> Self {
        warn_if_unsorted(&config.array, config.algorithm);
        Self {
            array: config.array.clone(),
            target: config.target,
            algorithm: config.algorithm,
            pacing: config.pacing,
            state: RunState::Idle,
            stats: Stats::new(),
            result: ResultDisplay::Unset,
            active: None,
            last_outcome: None,
            observer,
            pacer,
        }
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn pacing(&self) -> PacingConfig {
        self.pacing
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn result(&self) -> ResultDisplay {
        self.result
    }

    /// Outcome of the most recent finished run.
    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.last_outcome
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Replace array, target and algorithm, then clear the display.
    pub fn configure(
        &mut self,
        array: Vec<i64>,
        target: Target,
        algorithm: AlgorithmKind,
    ) -> Result<(), RunnerError> {
        self.ensure_idle("configure")?;
        warn_if_unsorted(&array, algorithm);
        self.array = array;
        self.target = target;
        self.algorithm = algorithm;
        debug!(len = self.array.len(), %target, %algorithm, "runner configured");
        self.observer.on_array_changed(self.array.len());
        self.clear_display();
        Ok(())
    }

    /// Change only the target, then clear the display.
    pub fn set_target(&mut self, target: Target) -> Result<(), RunnerError> {
        self.ensure_idle("configure")?;
        let array = std::mem::take(&mut self.array);
        self.configure(array, target, self.algorithm)
    }

    /// Change only the algorithm, then clear the display.
    pub fn set_algorithm(&mut self, algorithm: AlgorithmKind) -> Result<(), RunnerError> {
        self.ensure_idle("configure")?;
        let array = std::mem::take(&mut self.array);
        self.configure(array, self.target, algorithm)
    }

    pub fn set_pacing(&mut self, pacing: PacingConfig) -> Result<(), RunnerError> {
        self.ensure_idle("change pacing")?;
        self.pacing = pacing;
        Ok(())
    }

    /// Zero the stats, unset the result and mark every index default.
    pub fn reset(&mut self) -> Result<(), RunnerError> {
        self.ensure_idle("reset")?;
        self.clear_display();
        Ok(())
    }

    /// Begin a run without advancing it.
    pub fn start(&mut self) -> Result<(), RunnerError> {
        self.ensure_idle("run")?;
        self.state = RunState::Running;
        // Until the engine is in place, a panicking callback must not leave
        // the runner stuck in Running.
        let mut guard = RunGuard::new(self);
        guard.observer.on_run_state_changed(RunState::Running);
        guard.clear_markers();
        guard.set_result(ResultDisplay::Pending);
        guard.stats.clear();
        let stats = guard.stats;
        guard.observer.on_stats_changed(&stats);
        let engine = SearchEngine::for_kind(guard.algorithm);
        debug!(
            generator = engine.generator_name(),
            target = %guard.target,
            len = guard.array.len(),
            "run started"
        );
        guard.active = Some(engine);
        Ok(())
    }

    /// Advance the active run to its next pause, or finish it.
    pub fn step(&mut self) -> Result<StepStatus, RunnerError> {
        let engine = match self.active.take() {
            Some(engine) => engine,
            None => return Err(self.refuse("step")),
        };
        let mut guard = RunGuard::new(self);
        guard.advance(engine)
    }

    /// Run the configured search from start to finish.
    ///
    /// Returns `InvalidState` without touching anything if a run is already
    /// active.
    pub fn run(&mut self) -> Result<SearchOutcome, RunnerError> {
        self.start()?;
        let mut guard = RunGuard::new(self);
        loop {
            match guard.step()? {
                StepStatus::Paused(duration) => guard.pacer.pause(duration),
                StepStatus::Finished(outcome) => return Ok(outcome),
            }
        }
    }

    fn advance(&mut self, engine: SearchEngine) -> Result<StepStatus, RunnerError> {
        let resumed = {
            let mut ctx =
                RunContext::new(&self.array, self.target, &mut self.stats, &mut self.observer);
            engine.resume(&mut ctx)
        };
        match resumed {
            Ok(Resumption::Suspended(engine, pause)) => {
                self.active = Some(engine);
                Ok(StepStatus::Paused(self.pacing.duration(pause)))
            }
            Ok(Resumption::Finished(found_index)) => {
                let outcome = SearchOutcome {
                    algorithm: self.algorithm,
                    target: self.target,
                    found_index,
                    stats: self.stats,
                };
                self.last_outcome = Some(outcome);
                self.set_result(ResultDisplay::from(outcome.found()));
                debug!(
                    found = outcome.found(),
                    comparisons = outcome.stats.comparisons(),
                    "run finished"
                );
                self.finish_run();
                Ok(StepStatus::Finished(outcome))
            }
            Err(err) => {
                error!(%err, algorithm = %self.algorithm, "search run failed");
                self.finish_run();
                Err(RunnerError::Step(err))
            }
        }
    }

    fn ensure_idle(&self, operation: &'static str) -> Result<(), RunnerError> {
        if self.state.is_running() {
            return Err(self.refuse(operation));
        }
        Ok(())
    }

    fn refuse(&self, operation: &'static str) -> RunnerError {
        debug!(operation, state = %self.state, "operation ignored");
        RunnerError::InvalidState {
            operation,
            state: self.state,
        }
    }

    fn clear_display(&mut self) {
        self.stats.clear();
        self.observer.on_stats_changed(&self.stats);
        self.set_result(ResultDisplay::Unset);
        self.clear_markers();
    }

    fn clear_markers(&mut self) {
        for index in 0..self.array.len() {
            self.observer.on_step(&StepEvent::Mark(index, Role::Default));
        }
    }

    fn set_result(&mut self, display: ResultDisplay) {
        self.result = display;
        self.observer.on_result_changed(display);
    }

    fn set_run_state(&mut self, state: RunState) {
        self.state = state;
        self.observer.on_run_state_changed(state);
    }

    /// Return to Idle. A no-op if already idle.
    fn finish_run(&mut self) {
        self.active = None;
        if self.state.is_running() {
            self.set_run_state(RunState::Idle);
        }
    }
}

/// Scoped cleanup for an active run: whatever happens, the runner is idle
/// once the guard is gone, unless the run was left suspended on purpose.
struct RunGuard<'r, O: SearchObserver, P: Pacer> {
    runner: &'r mut SearchRunner<O, P>,
}

impl<'r, O: SearchObserver, P: Pacer> RunGuard<'r, O, P> {
    fn new(runner: &'r mut SearchRunner<O, P>) -> Self {
        Self { runner }
    }
}

impl<O: SearchObserver, P: Pacer> Deref for RunGuard<'_, O, P> {
    type Target = SearchRunner<O, P>;

    fn deref(&self) -> &Self::Target {
        self.runner
    }
}

impl<O: SearchObserver, P: Pacer> DerefMut for RunGuard<'_, O, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.runner
    }
}

impl<O: SearchObserver, P: Pacer> Drop for RunGuard<'_, O, P> {
    fn drop(&mut self) {
        // A suspended run keeps its engine and stays Running.
        if self.runner.active.is_some() && !std::thread::panicking() {
            return;
        }
        if self.runner.state.is_running() {
            if std::thread::panicking() {
                error!(algorithm = %self.runner.algorithm, "search run panicked");
            }
            self.runner.finish_run();
        }
    }
}

fn warn_if_unsorted(array: &[i64], algorithm: AlgorithmKind) {
    if algorithm.requires_sorted() && !is_sorted_ascending(array) {
        warn!(%algorithm, "array is not sorted ascending; results will be unreliable");
    }
}
