// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the runner's run gate and display resets.

mod common;

use std::io::Write;
use std::time::Duration;

use common::runner_for;
use search_visualizer::model::default_array;
use search_visualizer::observer::RoleBoard;
use search_visualizer::runner::StepStatus;
use search_visualizer::state::ResultDisplay;
use search_visualizer::{
    AlgorithmKind, Role, RunState, RunnerError, SearchConfig, SearchRunner, StepEvent, Target,
};

#[test]
fn test_run_while_running_is_refused_without_side_effects() {
    let mut runner = runner_for(&default_array(), Target::Value(3), AlgorithmKind::Linear);
    runner.start().unwrap();
    assert_eq!(
        runner.step().unwrap(),
        StepStatus::Paused(Duration::from_millis(600))
    );
    let before = runner.observer().notifications().len();
    let stats = runner.stats();

    let err = runner.run().unwrap_err();
    assert!(err.is_invalid_state());
    assert!(matches!(runner.start(), Err(RunnerError::InvalidState { .. })));
    assert!(runner.reset().is_err());
    assert!(runner.set_target(Target::Value(9)).is_err());
    assert!(runner.set_algorithm(AlgorithmKind::Binary).is_err());

    assert_eq!(runner.observer().notifications().len(), before);
    assert_eq!(runner.stats(), stats);
    assert_eq!(runner.state(), RunState::Running);
    assert_eq!(runner.target(), Target::Value(3));
    assert_eq!(runner.algorithm(), AlgorithmKind::Linear);

    // The first run carries on undisturbed.
    let outcome = loop {
        match runner.step().unwrap() {
            StepStatus::Paused(_) => {}
            StepStatus::Finished(outcome) => break outcome,
        }
    };
    assert_eq!(outcome.found_index, Some(2));
    assert_eq!(runner.state(), RunState::Idle);
    assert!(runner.step().unwrap_err().is_invalid_state());
}

#[test]
fn test_reset_marks_every_index_default() {
    let mut runner = runner_for(&default_array(), Target::Value(50), AlgorithmKind::Binary);
    runner.run().unwrap();
    runner.observer_mut().clear();

    runner.reset().unwrap();
    let marked = runner.observer().marked(Role::Default);
    assert_eq!(marked, (0..100).collect::<Vec<_>>());
    assert_eq!(runner.observer().events().len(), 100);
    assert!(runner.stats().is_zero());
    assert_eq!(runner.result(), ResultDisplay::Unset);
    assert_eq!(
        runner.observer().last_result_display(),
        Some(ResultDisplay::Unset)
    );
}

#[test]
fn test_each_run_starts_from_a_clean_display() {
    let mut runner = runner_for(&default_array(), Target::Value(101), AlgorithmKind::Linear);
    runner.run().unwrap();
    runner.set_algorithm(AlgorithmKind::Binary).unwrap();
    runner.set_target(Target::Value(50)).unwrap();
    runner.observer_mut().clear();

    let outcome = runner.run().unwrap();
    assert_eq!(outcome.stats.comparisons(), 1);

    let cleared: Vec<StepEvent> = (0..100).map(|i| StepEvent::Mark(i, Role::Default)).collect();
    let events = runner.observer().events();
    assert_eq!(&events[..100], &cleared[..]);
    assert_eq!(
        runner.observer().run_states(),
        vec![RunState::Running, RunState::Idle]
    );
}

#[test]
fn test_board_replay_after_binary_run() {
    let mut runner = runner_for(&default_array(), Target::Value(50), AlgorithmKind::Binary);
    runner.run().unwrap();

    let mut board = RoleBoard::new(100);
    for event in runner.observer().events() {
        board.apply(&event);
    }
    assert_eq!(board.role(49), Some(Role::Found));
    assert_eq!(board.count(Role::Found), 1);
    assert_eq!(board.count(Role::InRange), 99);
    assert_eq!(board.count(Role::Comparing), 0);
}

#[test]
fn test_board_replay_after_linear_miss() {
    let mut runner = runner_for(&[3, 1, 2], Target::Value(7), AlgorithmKind::Linear);
    runner.run().unwrap();

    let mut board = RoleBoard::new(3);
    for event in runner.observer().events() {
        board.apply(&event);
    }
    assert_eq!(board.render(), "...");
}

#[test]
fn test_board_replay_keeps_earlier_windows() {
    let mut runner = runner_for(&default_array(), Target::Value(90), AlgorithmKind::Binary);
    runner.run().unwrap();

    let mut board = RoleBoard::new(100);
    for event in runner.observer().events() {
        board.apply(&event);
    }
    // The first window covered everything; probed indices fell back to default.
    assert_eq!(board.role(89), Some(Role::Found));
    assert_eq!(board.role(49), Some(Role::Default));
    assert_eq!(board.role(0), Some(Role::InRange));
}

#[test]
fn test_runner_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "array": [10, 20, 30, 40],
            "target": 30,
            "algorithm": "interpolation",
            "pacing": {{"range_pause_ms": 0, "probe_pause_ms": 0}}
        }}"#
    )
    .unwrap();

    let config = SearchConfig::load(Some(file.path()), &Default::default()).unwrap();
    let mut runner = SearchRunner::headless(&config);
    let outcome = runner.run().unwrap();
    assert_eq!(outcome.algorithm, AlgorithmKind::Interpolation);
    assert_eq!(outcome.found_index, Some(2));
    assert_eq!(outcome.stats.comparisons(), 1);
    assert_eq!(runner.pacer().elapsed(), Duration::ZERO);
    assert_eq!(runner.pacer().pauses().len(), 2);
}
