// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visualization roles of array indices.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// Visualization tag applied to one array index.
///
/// `InRange` is never carried by a [`StepEvent::Mark`](super::StepEvent::Mark);
/// adapters derive it from `SetRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCountMacro)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    #[default]
    Default,
    InRange,
    Comparing,
    Found,
}

impl Role {
    /// Single-character glyph used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Role::Default => '.',
            Role::InRange => '-',
            Role::Comparing => '?',
            Role::Found => '*',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_role_names() {
        assert_eq!(Role::InRange.to_string(), "in-range");
        assert_eq!(Role::Comparing.to_string(), "comparing");
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: HashSet<char> = Role::iter().map(Role::glyph).collect();
        assert_eq!(glyphs.len(), Role::COUNT);
    }
}
