// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! InterpolationSearch - probes where the target "should" be.
//!
//! The array must be sorted ascending. Each iteration first checks that the
//! target still lies within `[A[left], A[right]]`; if it does not, the search
//! ends at once without probing. Otherwise the window is shown and the
//! position is estimated linearly from the values at its ends:
//!
//! ```text
//! pos = left + floor((t - A[left]) / (A[right] - A[left]) * (right - left))
//! ```
//!
//! The ratio is taken in `f64` before scaling, so rounding can put the probe
//! one below the exact position: on `1..=100` the targets 28, 55 and 60 take
//! two probes. The estimate is clamped to the window. Two cases avoid the
//! division entirely:
//!
//! - a one-element window is compared directly and ends the search either way
//! - a wider window whose end values are equal (duplicates) probes the
//!   midpoint instead

use crate::context::RunContext;
use crate::engine::{Advance, Pause, StepError, StepGenerator};
use crate::generators::binary::midpoint;
use crate::model::{Probe, Role, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Check the bracket and show the window.
    Range,
    /// The range pause is over; estimate and probe.
    Probe,
    /// Compare the estimated position and narrow the window.
    Compare(usize),
    /// Compare the only index left; this ends the search.
    CompareLast(usize),
    Done,
}

#[derive(Debug)]
pub struct InterpolationSearch {
    phase: Phase,
    low: usize,
    /// One past the right end of the window; `None` until the array length
    /// is known.
    high: Option<usize>,
}

impl InterpolationSearch {
    pub fn new() -> Self {
        Self {
            phase: Phase::Range,
            low: 0,
            high: None,
        }
    }
}

impl Default for InterpolationSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimated index of `target` in the inclusive window `[left, right]`.
///
/// Requires `left <= right` and `low_value <= target <= high_value`.
pub(crate) fn estimate_position(
    left: usize,
    right: usize,
    low_value: i64,
    high_value: i64,
    target: Target,
) -> usize {
    let t = match target {
        Target::Value(t) if high_value != low_value => t,
        _ => return midpoint(left, right),
    };
    let span = (right - left) as f64;
    let ratio = (t as f64 - low_value as f64) / (high_value as f64 - low_value as f64);
    let offset = (ratio * span).floor();
    if !offset.is_finite() {
        // Distinct ends that collapse to the same f64.
        return midpoint(left, right);
    }
    left + offset.clamp(0.0, span) as usize
}

impl StepGenerator for InterpolationSearch {
    fn advance(&mut self, ctx: &mut RunContext<'_>) -> Result<Advance, StepError> {
        let mut high = *self.high.get_or_insert(ctx.len());
        let result = loop {
            match self.phase {
                Phase::Range => {
                    if self.low >= high {
                        self.phase = Phase::Done;
                        break Ok(Advance::NotFound);
                    }
                    let right = high - 1;
                    let low_value = ctx.value_at(self.low)?;
                    let high_value = ctx.value_at(right)?;
                    if !ctx.target().within(low_value, high_value) {
                        self.phase = Phase::Done;
                        break Ok(Advance::NotFound);
                    }
                    ctx.set_range(self.low, right);
                    self.phase = Phase::Probe;
                    break Ok(Advance::Pause(Pause::Range));
                }
                Phase::Probe => {
                    let right = high - 1;
                    if self.low == right {
                        ctx.begin_probe(right)?;
                        self.phase = Phase::CompareLast(right);
                        break Ok(Advance::Pause(Pause::Probe));
                    }
                    let pos = estimate_position(
                        self.low,
                        right,
                        ctx.value_at(self.low)?,
                        ctx.value_at(right)?,
                        ctx.target(),
                    );
                    ctx.begin_probe(pos)?;
                    self.phase = Phase::Compare(pos);
                    break Ok(Advance::Pause(Pause::Probe));
                }
                Phase::CompareLast(index) => {
                    self.phase = Phase::Done;
                    if ctx.compare(index)? == Probe::Equal {
                        ctx.mark(index, Role::Found);
                        break Ok(Advance::Found(index));
                    }
                    ctx.mark(index, Role::Default);
                    break Ok(Advance::NotFound);
                }
                Phase::Compare(pos) => {
                    match ctx.compare(pos)? {
                        Probe::Equal => {
                            ctx.mark(pos, Role::Found);
                            self.phase = Phase::Done;
                            break Ok(Advance::Found(pos));
                        }
                        Probe::Less => {
                            ctx.mark(pos, Role::Default);
                            self.low = pos + 1;
                        }
                        Probe::Greater | Probe::Unordered => {
                            ctx.mark(pos, Role::Default);
                            high = pos;
                        }
                    }
                    self.phase = Phase::Range;
                }
                Phase::Done => {
                    break Err(StepError::AdvancedAfterFinish {
                        generator: self.name().to_string(),
                    })
                }
            }
        };
        self.high = Some(high);
        result
    }

    fn name(&self) -> &str {
        "Interpolation"
    }
}
