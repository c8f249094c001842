// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step-by-step animation of three classic searches over a numeric array:
//! linear, binary and interpolation search.
//!
//! # Architecture
//!
//! Each algorithm is a [`StepGenerator`](engine::StepGenerator): a small
//! state machine that does the work up to its next visual pause and then
//! returns, so a run can be suspended and resumed without threads.
//!
//! ## Generators
//!
//! Generators read the array through a [`RunContext`](context::RunContext),
//! which also owns the counters and forwards every [`StepEvent`] to the
//! observer. They never sleep or draw.
//!
//! ## Runner
//!
//! The [`SearchRunner`] gates runs (only one at a time), clears the display
//! before each run, drives the [`SearchEngine`](engine::SearchEngine) and
//! waits between steps through a [`Pacer`](pacing::Pacer).
//!
//! ## Presentation
//!
//! Everything visible goes through [`SearchObserver`]. The crate ships a
//! recording observer for headless use, a [`RoleBoard`](observer::RoleBoard)
//! model of the bars, and a terminal [`TextRenderer`](render::TextRenderer).
//!
//! # Example
//!
//! ```
//! use search_visualizer::{AlgorithmKind, SearchConfig, SearchRunner, Target};
//!
//! let mut runner = SearchRunner::headless(&SearchConfig::default());
//! runner.set_algorithm(AlgorithmKind::Linear).unwrap();
//! runner.set_target(Target::Value(101)).unwrap();
//! let outcome = runner.run().unwrap();
//! assert!(!outcome.found());
//! assert_eq!(outcome.stats.comparisons(), 100);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod generators;
pub mod logging;
pub mod model;
pub mod observer;
pub mod pacing;
pub mod render;
pub mod runner;
pub mod state;

// Re-export commonly used types
pub use config::SearchConfig;
pub use model::{AlgorithmKind, Role, StepEvent, Target};
pub use observer::SearchObserver;
pub use runner::{RunnerError, SearchOutcome, SearchRunner};
pub use state::statistics::Stats;
pub use state::RunState;
