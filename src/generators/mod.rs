// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step generators for the three searches.
//!
//! # Organization
//!
//! - `linear`: scans indices in increasing order
//! - `binary`: halves a sorted window around its midpoint
//! - `interpolation`: estimates the position from the values at the window ends
//!
//! Each is a small state machine over a `Phase` enum. The phase records what
//! the generator must do when it is next advanced, which is always "right
//! after a pause".

pub mod binary;
pub mod interpolation;
pub mod linear;

pub use binary::BinarySearch;
pub use interpolation::InterpolationSearch;
pub use linear::LinearSearch;

use crate::engine::StepGenerator;
use crate::model::AlgorithmKind;

/// Fresh generator for `kind`, positioned before its first step.
pub fn generator_for(kind: AlgorithmKind) -> Box<dyn StepGenerator> {
    match kind {
        AlgorithmKind::Linear => Box::new(LinearSearch::new()),
        AlgorithmKind::Binary => Box::new(BinarySearch::new()),
        AlgorithmKind::Interpolation => Box::new(InterpolationSearch::new()),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Drive a generator to completion without an engine, collecting events.

    use crate::context::RunContext;
    use crate::engine::{Advance, Pause, StepGenerator};
    use crate::model::{StepEvent, Target};
    use crate::observer::RecordingObserver;
    use crate::state::Stats;

    pub struct Trace {
        pub outcome: Advance,
        pub pauses: Vec<Pause>,
        pub events: Vec<StepEvent>,
        pub stats: Stats,
        pub observer: RecordingObserver,
    }

    pub fn drive(generator: &mut dyn StepGenerator, array: &[i64], target: Target) -> Trace {
        let mut stats = Stats::new();
        let mut observer = RecordingObserver::new();
        let mut pauses = Vec::new();
        let outcome = {
            let mut ctx = RunContext::new(array, target, &mut stats, &mut observer);
            loop {
                match generator.advance(&mut ctx).unwrap() {
                    Advance::Pause(pause) => pauses.push(pause),
                    outcome => break outcome,
                }
            }
        };
        Trace {
            outcome,
            pauses,
            events: observer.events(),
            stats,
            observer,
        }
    }
}
