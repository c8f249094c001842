// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for step generation.

/// Errors that can occur while a step generator advances.
///
/// None of these are expected on well-formed input; they indicate a generator
/// bug and are fatal for the run that hit them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// A generator tried to read an index outside the array.
    #[error("probe of index {index} is outside the array (length {len})")]
    ProbeOutOfBounds { index: usize, len: usize },

    /// A generator was advanced again after it had already finished.
    #[error("{generator} was advanced after finishing")]
    AdvancedAfterFinish { generator: String },
}
