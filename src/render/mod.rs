// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Terminal rendering of a run.
//!
//! [`TextRenderer`] keeps a [`RoleBoard`] in step with the events it
//! receives and writes one frame per visible change:
//!
//! ```text
//! ------------------------------------------------?---------...  range [0, 99]   steps 1 / comparisons 1
//! ```
//!
//! `Mark(_, default)` events update the board silently; they happen in bulk
//! on every reset, and after a failed comparison the next frame shows them
//! anyway.
//!
//! Observer callbacks cannot fail, so the first write error is kept and
//! reported by [`TextRenderer::take_error`].

use std::io::{self, Write};

use crate::model::{AlgorithmKind, Role, StepEvent};
use crate::observer::{RoleBoard, SearchObserver};
use crate::runner::SearchOutcome;
use crate::state::{ResultDisplay, RunState, Stats};

const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

pub struct TextRenderer<W: Write> {
    out: W,
    board: RoleBoard,
    stats: Stats,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, len: usize, color: bool) -> Self {
        Self {
            out,
            board: RoleBoard::new(len),
            stats: Stats::new(),
            color,
            error: None,
        }
    }

    pub fn board(&self) -> &RoleBoard {
        &self.board
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Resize the board and clear every role.
    pub fn resize(&mut self, len: usize) {
        self.board.reset(len);
    }

    /// Print the title block for `algorithm`.
    pub fn describe(&mut self, algorithm: AlgorithmKind) {
        let text = format!(
            "{} [{}]\n{}\n",
            algorithm.display_name(),
            algorithm.complexity(),
            algorithm.description()
        );
        self.write(&text);
    }

    /// Print the one-line verdict for a finished run.
    pub fn summarize(&mut self, outcome: &SearchOutcome) {
        let verdict = match outcome.found_index {
            Some(index) => format!("found {} at index {}", outcome.target, index),
            None => format!("{} not found", outcome.target),
        };
        let text = format!(
            "{}: {} ({})\n\n",
            outcome.algorithm.display_name(),
            verdict,
            outcome.stats
        );
        self.write(&text);
    }

    fn frame(&self, event: &StepEvent) -> String {
        let mut line = String::with_capacity(self.board.len() + 64);
        for &role in self.board.roles() {
            let glyph = role.glyph();
            match (self.color, role) {
                (true, Role::Comparing) => {
                    line.push_str(YELLOW);
                    line.push(glyph);
                    line.push_str(RESET);
                }
                (true, Role::Found) => {
                    line.push_str(GREEN);
                    line.push(glyph);
                    line.push_str(RESET);
                }
                _ => line.push(glyph),
            }
        }
        line.push_str(&format!("  {:<16} {}\n", event.to_string(), self.stats));
        line
    }

    fn write(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(%err, "cannot write frame");
            self.error = Some(err);
        }
    }
}

impl<W: Write> SearchObserver for TextRenderer<W> {
    fn on_step(&mut self, event: &StepEvent) {
        self.board.apply(event);
        if event.marked_index(Role::Default).is_some() {
            return;
        }
        let frame = self.frame(event);
        self.write(&frame);
    }

    fn on_stats_changed(&mut self, stats: &Stats) {
        self.stats = *stats;
    }

    fn on_run_state_changed(&mut self, state: RunState) {
        tracing::trace!(%state, "renderer saw run state");
    }

    fn on_array_changed(&mut self, len: usize) {
        self.resize(len);
    }

    fn on_result_changed(&mut self, display: ResultDisplay) {
        match display {
            ResultDisplay::Found | ResultDisplay::NotFound => {
                let text = format!("result: {}  ({})\n", display, self.stats);
                self.write(&text);
            }
            ResultDisplay::Unset | ResultDisplay::Pending => {}
        }
    }
}
