// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visualization events emitted by step generators.

use std::fmt;

use super::Role;

/// One visualization action, delivered to observers in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The inclusive index window still under consideration.
    SetRange(usize, usize),
    /// Apply `role` to a single index.
    Mark(usize, Role),
    /// Terminal event of every run.
    Result(bool),
}

impl StepEvent {
    /// Index of a `Mark` event carrying the given role.
    pub fn marked_index(&self, role: Role) -> Option<usize> {
        match *self {
            StepEvent::Mark(index, r) if r == role => Some(index),
            _ => None,
        }
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::SetRange(left, right) => write!(f, "range [{}, {}]", left, right),
            StepEvent::Mark(index, role) => write!(f, "mark {} {}", index, role),
            StepEvent::Result(true) => write!(f, "found"),
            StepEvent::Result(false) => write!(f, "not found"),
        }
    }
}
