// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the search runner.

use crate::engine::StepError;
use crate::state::RunState;

/// Errors returned by [`SearchRunner`](super::SearchRunner) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunnerError {
    /// The operation needs a different run state. The runner is unchanged;
    /// adapters are expected to ignore this.
    #[error("cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: RunState,
    },

    /// Step generation failed. The run was abandoned and the runner is idle.
    #[error("search run failed: {0}")]
    Step(#[from] StepError),
}

impl RunnerError {
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, RunnerError::InvalidState { .. })
    }
}
