// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Suspend/resume engine for step generators.
//!
//! The engine owns one [`StepGenerator`] and advances it on request. Each
//! resumption either suspends again, handing the engine back together with the
//! [`Pause`] to apply, or finishes, in which case the engine emits the
//! terminal `Result` event and is consumed.
//!
//! The consuming API makes misuse impossible: a suspended engine can be
//! resumed, a finished one no longer exists.
//!
//! # Example
//!
//! ```
//! use search_visualizer::context::RunContext;
//! use search_visualizer::engine::{Resumption, SearchEngine};
//! use search_visualizer::model::{default_array, AlgorithmKind, Target};
//! use search_visualizer::observer::RecordingObserver;
//! use search_visualizer::state::Stats;
//!
//! let array = default_array();
//! let mut stats = Stats::new();
//! let mut observer = RecordingObserver::new();
//! let mut ctx = RunContext::new(&array, Target::Value(50), &mut stats, &mut observer);
//!
//! let mut engine = SearchEngine::for_kind(AlgorithmKind::Binary);
//! let found = loop {
//!     match engine.resume(&mut ctx).unwrap() {
//!         Resumption::Suspended(next, _pause) => engine = next,
//!         Resumption::Finished(found) => break found,
//!     }
//! };
//! assert_eq!(found, Some(49));
//! ```

pub mod errors;
pub mod generator;

pub use errors::StepError;
pub use generator::{Advance, Pause, StepGenerator};

use crate::context::RunContext;
use crate::generators;
use crate::model::{AlgorithmKind, StepEvent};

/// Outcome of one resumption.
#[derive(Debug)]
pub enum Resumption {
    /// The generator paused; apply the pause, then resume the engine again.
    Suspended(SearchEngine, Pause),
    /// The search is over. Holds the matching index, if any.
    Finished(Option<usize>),
}

/// Drives a step generator from one suspension point to the next.
#[derive(Debug)]
pub struct SearchEngine {
    generator: Box<dyn StepGenerator>,

    /// Statistics: number of resume calls.
    resume_count: u64,

    /// Statistics: number of suspensions.
    pause_count: u64,
}

impl SearchEngine {
    pub fn new(generator: Box<dyn StepGenerator>) -> Self {
        Self {
            generator,
            resume_count: 0,
            pause_count: 0,
        }
    }

    /// Engine for one of the built-in algorithms.
    pub fn for_kind(kind: AlgorithmKind) -> Self {
        Self::new(generators::generator_for(kind))
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Advance the generator to its next suspension point.
    ///
    /// Consumes the engine and returns:
    /// - `Suspended(engine, pause)` if the generator paused
    /// - `Finished(index)` once the search is over; `Result(found)` has been
    ///   emitted by then
    pub fn resume(mut self, ctx: &mut RunContext<'_>) -> Result<Resumption, StepError> {
        self.resume_count += 1;
        match self.generator.advance(ctx)? {
            Advance::Pause(pause) => {
                self.pause_count += 1;
                Ok(Resumption::Suspended(self, pause))
            }
            Advance::Found(index) => {
                tracing::debug!(
                    generator = self.generator.name(),
                    index,
                    resumes = self.resume_count,
                    pauses = self.pause_count,
                    "target found"
                );
                ctx.emit(StepEvent::Result(true));
                Ok(Resumption::Finished(Some(index)))
            }
            Advance::NotFound => {
                tracing::debug!(
                    generator = self.generator.name(),
                    resumes = self.resume_count,
                    pauses = self.pause_count,
                    "target not found"
                );
                ctx.emit(StepEvent::Result(false));
                Ok(Resumption::Finished(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, Target};
    use crate::observer::RecordingObserver;
    use crate::state::Stats;

    /// Generator that pauses `n` times and then reports a fixed outcome.
    #[derive(Debug)]
    struct CountDown {
        remaining: usize,
        outcome: Advance,
    }

    impl StepGenerator for CountDown {
        fn advance(&mut self, _ctx: &mut RunContext<'_>) -> Result<Advance, StepError> {
            if self.remaining == 0 {
                return Ok(self.outcome);
            }
            self.remaining -= 1;
            Ok(Advance::Pause(Pause::Range))
        }

        fn name(&self) -> &str {
            "CountDown"
        }
    }

    /// Generator that reads past the end of the array.
    #[derive(Debug)]
    struct Overreach;

    impl StepGenerator for Overreach {
        fn advance(&mut self, ctx: &mut RunContext<'_>) -> Result<Advance, StepError> {
            let len = ctx.len();
            ctx.begin_probe(len)?;
            Ok(Advance::Pause(Pause::Probe))
        }
    }

    #[test]
    fn test_suspend_then_finish() {
        let array = [1, 2, 3];
        let mut stats = Stats::new();
        let mut observer = RecordingObserver::new();
        let mut ctx = RunContext::new(&array, Target::Value(2), &mut stats, &mut observer);

        let engine = SearchEngine::new(Box::new(CountDown {
            remaining: 1,
            outcome: Advance::Found(1),
        }));
        let engine = match engine.resume(&mut ctx).unwrap() {
            Resumption::Suspended(engine, pause) => {
                assert_eq!(pause, Pause::Range);
                engine
            }
            Resumption::Finished(_) => panic!("expected a suspension"),
        };
        assert_eq!((engine.resume_count, engine.pause_count), (1, 1));
        assert_eq!(engine.generator_name(), "CountDown");

        match engine.resume(&mut ctx).unwrap() {
            Resumption::Finished(found) => assert_eq!(found, Some(1)),
            Resumption::Suspended(..) => panic!("expected the run to finish"),
        }
        drop(ctx);
        assert_eq!(observer.events(), vec![StepEvent::Result(true)]);
    }

    #[test]
    fn test_every_suspension_is_counted() {
        let array: [i64; 0] = [];
        let mut stats = Stats::new();
        let mut observer = RecordingObserver::new();
        let mut ctx = RunContext::new(&array, Target::Value(2), &mut stats, &mut observer);

        let mut engine = SearchEngine::new(Box::new(CountDown {
            remaining: 3,
            outcome: Advance::NotFound,
        }));
        let mut pauses = Vec::new();
        let found = loop {
            match engine.resume(&mut ctx).unwrap() {
                Resumption::Suspended(next, pause) => {
                    assert_eq!(next.pause_count, next.resume_count);
                    pauses.push(pause);
                    engine = next;
                }
                Resumption::Finished(found) => break found,
            }
        };
        assert_eq!(found, None);
        assert_eq!(pauses, vec![Pause::Range; 3]);
        drop(ctx);
        assert_eq!(observer.result(), Some(false));
    }

    #[test]
    fn test_generator_error_propagates() {
        let array = [5];
        let mut stats = Stats::new();
        let mut observer = RecordingObserver::new();
        let mut ctx = RunContext::new(&array, Target::Value(5), &mut stats, &mut observer);

        let result = SearchEngine::new(Box::new(Overreach)).resume(&mut ctx);
        assert!(matches!(
            result,
            Err(StepError::ProbeOutOfBounds { index: 1, len: 1 })
        ));
        drop(ctx);
        assert!(observer.marked(Role::Comparing).is_empty());
        assert_eq!(observer.result(), None);
    }
}
