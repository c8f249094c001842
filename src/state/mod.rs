// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable session state: the run gate, the result display and statistics.

pub mod statistics;

pub use statistics::{Counters, Stats};

use strum_macros::Display;

/// Mutual-exclusion gate for runs.
///
/// `Idle` permits reconfiguration; `Running` forbids it and drops further
/// run requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// What the result indicator currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ResultDisplay {
    #[default]
    #[strum(serialize = "-")]
    Unset,
    #[strum(serialize = "...")]
    Pending,
    #[strum(serialize = "✓")]
    Found,
    #[strum(serialize = "✗")]
    NotFound,
}

impl From<bool> for ResultDisplay {
    fn from(found: bool) -> Self {
        if found {
            ResultDisplay::Found
        } else {
            ResultDisplay::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_display_markers() {
        assert_eq!(ResultDisplay::Unset.to_string(), "-");
        assert_eq!(ResultDisplay::Pending.to_string(), "...");
        assert_eq!(ResultDisplay::from(true), ResultDisplay::Found);
        assert_eq!(ResultDisplay::from(false).to_string(), "✗");
    }

    #[test]
    fn test_run_state() {
        assert_eq!(RunState::default(), RunState::Idle);
        assert!(RunState::Running.is_running());
        assert_eq!(RunState::Running.to_string(), "running");
    }
}
