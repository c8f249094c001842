// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain data shared by the runner, the step generators and the adapters.
//!
//! Nothing in this module knows about time or observers; it is the vocabulary
//! the rest of the crate speaks.

pub mod algorithm;
pub mod event;
pub mod role;
pub mod target;

pub use algorithm::AlgorithmKind;
pub use event::StepEvent;
pub use role::Role;
pub use target::{parse_target, Probe, Target};

/// Number of elements in the default array.
pub const DEFAULT_ARRAY_LEN: usize = 100;

/// Target used when nothing else is configured.
pub const DEFAULT_TARGET: i64 = 50;

/// The default session array: `1..=100`, sorted ascending.
pub fn default_array() -> Vec<i64> {
    (1..=DEFAULT_ARRAY_LEN as i64).collect()
}

/// True if `array` is sorted ascending (duplicates allowed).
///
/// Binary and interpolation search assume this but never re-check it during a
/// run; configuration uses it to warn early.
pub fn is_sorted_ascending(array: &[i64]) -> bool {
    array.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_array() {
        let array = default_array();
        assert_eq!(array.len(), 100);
        assert_eq!(array[0], 1);
        assert_eq!(array[99], 100);
        assert!(is_sorted_ascending(&array));
    }

    #[test]
    fn test_is_sorted_ascending() {
        assert!(is_sorted_ascending(&[]));
        assert!(is_sorted_ascending(&[7]));
        assert!(is_sorted_ascending(&[1, 2, 2, 3]));
        assert!(!is_sorted_ascending(&[3, 1, 2]));
    }
}
