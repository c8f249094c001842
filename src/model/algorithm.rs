// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three search algorithms a run can animate.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// Which step generator a run uses.
///
/// Parses from and displays as the lower-case names used on the command line
/// and in config files: `linear`, `binary`, `interpolation`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    #[default]
    Linear,
    Binary,
    Interpolation,
}

impl AlgorithmKind {
    /// Human-readable title.
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmKind::Linear => "Linear Search",
            AlgorithmKind::Binary => "Binary Search",
            AlgorithmKind::Interpolation => "Interpolation Search",
        }
    }

    /// One-sentence explanation shown next to the animation.
    pub fn description(self) -> &'static str {
        match self {
            AlgorithmKind::Linear => {
                "Scans the array from the first element to the last. \
                 Needs no sorting but takes O(n) time."
            }
            AlgorithmKind::Binary => {
                "Compares against the middle of a sorted array and halves the \
                 search range each time, giving O(log n) lookups."
            }
            AlgorithmKind::Interpolation => {
                "Predicts the position from the ratio of values on uniformly \
                 distributed data. At best it runs in O(log log n)."
            }
        }
    }

    /// Typical-case complexity class.
    pub fn complexity(self) -> &'static str {
        match self {
            AlgorithmKind::Linear => "O(n)",
            AlgorithmKind::Binary => "O(log n)",
            AlgorithmKind::Interpolation => "O(log log n)",
        }
    }

    /// Whether the algorithm is only meaningful on an ascending array.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, AlgorithmKind::Linear)
    }
}
