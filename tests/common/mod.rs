// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use search_visualizer::observer::RecordingObserver;
use search_visualizer::pacing::VirtualPacer;
use search_visualizer::{AlgorithmKind, SearchConfig, SearchOutcome, SearchRunner, Target};

pub type HeadlessRunner = SearchRunner<RecordingObserver, VirtualPacer>;

/// A headless runner over `array` with default pacing.
pub fn runner_for(array: &[i64], target: Target, algorithm: AlgorithmKind) -> HeadlessRunner {
    let config = SearchConfig {
        array: array.to_vec(),
        algorithm,
        ..SearchConfig::default()
    };
    let mut runner = SearchRunner::headless(&config);
    runner
        .set_target(target)
        .expect("a fresh runner is idle");
    runner
}

/// Run one search to completion and hand back the runner for inspection.
pub fn run_search(
    array: &[i64],
    target: Target,
    algorithm: AlgorithmKind,
) -> (SearchOutcome, HeadlessRunner) {
    let mut runner = runner_for(array, target, algorithm);
    let outcome = runner.run().expect("runner is idle");
    (outcome, runner)
}

/// Sorted arrays with distinct elements.
pub fn distinct_sorted_arrays() -> Vec<Vec<i64>> {
    vec![
        (1..=100).collect(),
        (1..=100).map(|i| i * 2).collect(),
        (0..10).map(|i| 1i64 << i).collect(),
        vec![-40, -7, 0, 3, 19, 20, 21, 500],
        vec![42],
    ]
}
