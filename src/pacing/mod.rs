// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Timing between steps.
//!
//! Generators only say *which* pause they want ([`Pause::Range`] or
//! [`Pause::Probe`]). [`PacingConfig`] turns that into a duration, and a
//! [`Pacer`] spends it: [`ThreadPacer`] really sleeps, [`VirtualPacer`] just
//! adds it up so tests and `--instant` runs finish immediately.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::Pause;

/// Default pause after showing a search window.
pub const DEFAULT_RANGE_PAUSE_MS: u64 = 400;

/// Default pause after marking an index as being compared.
pub const DEFAULT_PROBE_PAUSE_MS: u64 = 600;

/// Pause lengths, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    pub range_pause_ms: u64,
    pub probe_pause_ms: u64,
}

impl PacingConfig {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            range_pause_ms: 0,
            probe_pause_ms: 0,
        }
    }

    pub fn duration(&self, pause: Pause) -> Duration {
        match pause {
            Pause::Range => Duration::from_millis(self.range_pause_ms),
            Pause::Probe => Duration::from_millis(self.probe_pause_ms),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            range_pause_ms: DEFAULT_RANGE_PAUSE_MS,
            probe_pause_ms: DEFAULT_PROBE_PAUSE_MS,
        }
    }
}

/// Something that waits between steps.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }
}

/// Blocks the current thread for the requested time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records simulated time without waiting.
#[derive(Debug, Default, Clone)]
pub struct VirtualPacer {
    elapsed: Duration,
    pauses: Vec<Duration>,
}

impl VirtualPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time spent pausing.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Every pause, in order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }
}

impl Pacer for VirtualPacer {
    fn pause(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.pauses.push(duration);
    }
}
