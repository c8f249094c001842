// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StepGenerator trait for cooperative, time-paced searches.
//!
//! A search that must pause between comparisons is written as a state machine.
//! Each call to [`StepGenerator::advance`] runs until the next suspension
//! point, emits whatever events belong before it, and returns the pause the
//! caller should apply before advancing again. The last call returns the
//! outcome instead.
//!
//! # Example
//!
//! ```
//! use search_visualizer::context::RunContext;
//! use search_visualizer::engine::{Advance, Pause, StepError, StepGenerator};
//!
//! /// Probes index 0 once and reports whether it matched.
//! #[derive(Debug, Default)]
//! struct FirstOnly {
//!     probed: bool,
//! }
//!
//! impl StepGenerator for FirstOnly {
//!     fn advance(&mut self, ctx: &mut RunContext<'_>) -> Result<Advance, StepError> {
//!         if ctx.is_empty() {
//!             return Ok(Advance::NotFound);
//!         }
//!         if !self.probed {
//!             self.probed = true;
//!             ctx.begin_probe(0)?;
//!             return Ok(Advance::Pause(Pause::Probe));
//!         }
//!         match ctx.compare(0)? {
//!             search_visualizer::model::Probe::Equal => Ok(Advance::Found(0)),
//!             _ => Ok(Advance::NotFound),
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FirstOnly"
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::context::RunContext;
use crate::engine::StepError;

/// A suspension point requested by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pause {
    /// After showing a new search window (400 ms by default).
    Range,
    /// After marking an index as being compared (600 ms by default).
    Probe,
}

/// Result of advancing a generator.
///
/// - `Pause`: suspended; advance again after the pause
/// - `Found`: the target sits at this index; the run is over
/// - `NotFound`: the search is exhausted; the run is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Pause(Pause),
    Found(usize),
    NotFound,
}

/// A search algorithm written as a resumable sequence of steps.
///
/// # Contract
///
/// - Events are emitted through `ctx` as they happen, never buffered.
/// - Each probed index is marked `comparing` and counted exactly once via
///   [`RunContext::begin_probe`], followed by a `Pause::Probe`.
/// - A probed index that does not match is re-marked `default` before the
///   generator moves on.
/// - The final `Mark(i, found)` is emitted by the generator; the terminal
///   `Result` event is emitted by the engine.
/// - After returning `Found` or `NotFound` the generator is not advanced again.
pub trait StepGenerator: Debug {
    /// Run until the next suspension point or the end of the search.
    fn advance(&mut self, ctx: &mut RunContext<'_>) -> Result<Advance, StepError>;

    /// Optional: Get a name for this generator (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
