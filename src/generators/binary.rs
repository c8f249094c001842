// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! BinarySearch - probes the midpoint of a shrinking window.
//!
//! The array must be sorted ascending; this is assumed, not checked.
//!
//! Each iteration shows the window (`SetRange`, range pause), probes
//! `floor((left + right) / 2)` (probe pause), then either stops on a match or
//! discards the half that cannot hold the target. An unusable target compares
//! as "greater", so the window only ever moves left.
//!
//! Internally the window is half-open, `[low, high)`, so that discarding the
//! left-most index cannot underflow. Events report it inclusively.

use crate::context::RunContext;
use crate::engine::{Advance, Pause, StepError, StepGenerator};
use crate::model::{Probe, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Check the window and show it.
    Range,
    /// The range pause is over; probe the midpoint.
    Probe,
    /// The probe pause is over; compare this index.
    Compare(usize),
    Done,
}

#[derive(Debug)]
pub struct BinarySearch {
    phase: Phase,
    low: usize,
    /// One past the right end of the window; `None` until the array length
    /// is known.
    high: Option<usize>,
}

impl BinarySearch {
    pub fn new() -> Self {
        Self {
            phase: Phase::Range,
            low: 0,
            high: None,
        }
    }
}

impl Default for BinarySearch {
    fn default() -> Self {
        Self::new()
    }
}

/// `floor((left + right) / 2)` for `left <= right`, without overflow.
pub(crate) fn midpoint(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}

impl StepGenerator for BinarySearch {
    fn advance(&mut self, ctx: &mut RunContext<'_>) -> Result<Advance, StepError> {
        let mut high = *self.high.get_or_insert(ctx.len());
        let result = loop {
            match self.phase {
                Phase::Range => {
                    if self.low >= high {
                        self.phase = Phase::Done;
                        break Ok(Advance::NotFound);
                    }
                    ctx.set_range(self.low, high - 1);
                    self.phase = Phase::Probe;
                    break Ok(Advance::Pause(Pause::Range));
                }
                Phase::Probe => {
                    let mid = midpoint(self.low, high - 1);
                    ctx.begin_probe(mid)?;
                    self.phase = Phase::Compare(mid);
                    break Ok(Advance::Pause(Pause::Probe));
                }
                Phase::Compare(mid) => {
                    match ctx.compare(mid)? {
                        Probe::Equal => {
                            ctx.mark(mid, Role::Found);
                            self.phase = Phase::Done;
                            break Ok(Advance::Found(mid));
                        }
                        Probe::Less => {
                            ctx.mark(mid, Role::Default);
                            self.low = mid + 1;
                        }
                        Probe::Greater | Probe::Unordered => {
                            ctx.mark(mid, Role::Default);
                            high = mid;
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
        "Binary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testing::drive;
    use crate::model::{default_array, StepEvent, Target};

    #[test]
    fn test_midpoint_is_lower_biased() {
        assert_eq!(midpoint(0, 99), 49);
        assert_eq!(midpoint(0, 1), 0);
        assert_eq!(midpoint(5, 5), 5);
        assert_eq!(midpoint(usize::MAX - 1, usize::MAX), usize::MAX - 1);
    }

    #[test]
    fn test_first_probe_hits_fifty() {
        let mut search = BinarySearch::new();
        let trace = drive(&mut search, &default_array(), Target::Value(50));
        assert_eq!(trace.outcome, Advance::Found(49));
        assert_eq!(
            trace.events,
            vec![
                StepEvent::SetRange(0, 99),
                StepEvent::Mark(49, Role::Comparing),
                StepEvent::Mark(49, Role::Found),
            ]
        );
        assert_eq!(trace.pauses, vec![Pause::Range, Pause::Probe]);
        assert_eq!(trace.stats.comparisons(), 1);
    }

    #[test]
    fn test_windows_for_target_on_the_right() {
        let mut search = BinarySearch::new();
        let trace = drive(&mut search, &[1, 2, 3, 4, 5, 6, 7], Target::Value(6));
        assert_eq!(trace.outcome, Advance::Found(5));
        assert_eq!(trace.observer.ranges(), vec![(0, 6), (4, 6)]);
        assert_eq!(trace.observer.marked(Role::Comparing), vec![3, 5]);
    }

    #[test]
    fn test_absent_target_below_everything() {
        let mut search = BinarySearch::new();
        let trace = drive(&mut search, &[10, 20, 30, 40], Target::Value(5));
        assert_eq!(trace.outcome, Advance::NotFound);
        assert_eq!(trace.observer.marked(Role::Comparing), vec![1, 0]);
        assert_eq!(trace.observer.ranges(), vec![(0, 3), (0, 0)]);
    }

    #[test]
    fn test_absent_target_above_everything() {
        let mut search = BinarySearch::new();
        let trace = drive(&mut search, &default_array(), Target::Value(101));
        assert_eq!(trace.outcome, Advance::NotFound);
        assert_eq!(
            trace.observer.marked(Role::Comparing),
            vec![49, 74, 87, 93, 96, 98, 99]
        );
    }

    #[test]
    fn test_unusable_target_walks_left() {
        let mut search = BinarySearch::new();
        let trace = drive(&mut search, &default_array(), Target::Unusable);
        assert_eq!(trace.outcome, Advance::NotFound);
        assert_eq!(
            trace.observer.marked(Role::Comparing),
            vec![49, 24, 11, 5, 2, 0]
        );
    }

    #[test]
    fn test_empty_array() {
        let mut search = BinarySearch::new();
        let trace = drive(&mut search, &[], Target::Value(3));
        assert_eq!(trace.outcome, Advance::NotFound);
        assert!(trace.events.is_empty());
        assert_eq!(trace.stats.comparisons(), 0);
    }
}
