// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Headless model of the array bars.
//!
//! A [`RoleBoard`] holds one [`Role`] per index and applies step events the
//! way the bar display does:
//!
//! - `SetRange(l, r)` promotes every `default` index in `[l, r]` to
//!   `in-range`. Indices outside the window keep whatever they had, so an
//!   earlier, wider window stays visible until the next reset.
//! - `Mark(i, role)` replaces the role of index `i`.
//! - `Result` changes nothing.
//!
//! Because a probed index is re-marked `default`, the board cannot tell it
//! apart from one never visited. That is intended; no visited set is kept.

use crate::model::{Role, StepEvent};
use crate::observer::SearchObserver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBoard {
    roles: Vec<Role>,
}

impl RoleBoard {
    /// A board of `len` indices, all `default`.
    pub fn new(len: usize) -> Self {
        Self {
            roles: vec![Role::Default; len],
        }
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn role(&self, index: usize) -> Option<Role> {
        self.roles.get(index).copied()
    }

    /// Resize to `len` indices and clear every role to `default`.
    pub fn reset(&mut self, len: usize) {
        self.roles.clear();
        self.roles.resize(len, Role::Default);
    }

    /// Number of indices currently carrying `role`.
    pub fn count(&self, role: Role) -> usize {
        self.roles.iter().filter(|&&r| r == role).count()
    }

    /// Apply one event. Out-of-range indices are ignored.
    pub fn apply(&mut self, event: &StepEvent) {
        match *event {
            StepEvent::SetRange(left, right) => {
                let end = right.min(self.roles.len().saturating_sub(1));
                if left > end || self.roles.is_empty() {
                    return;
                }
                for role in &mut self.roles[left..=end] {
                    if *role == Role::Default {
                        *role = Role::InRange;
                    }
                }
            }
            StepEvent::Mark(index, role) => {
                if let Some(slot) = self.roles.get_mut(index) {
                    *slot = role;
                }
            }
            StepEvent::Result(_) => {}
        }
    }

    /// The board as a string of role glyphs.
    pub fn render(&self) -> String {
        self.roles.iter().map(|r| r.glyph()).collect()
    }
}

impl SearchObserver for RoleBoard {
    fn on_step(&mut self, event: &StepEvent) {
        self.apply(event);
    }

    fn on_array_changed(&mut self, len: usize) {
        self.reset(len);
    }
}
