// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The value being searched for.
//!
//! A target typed by a user may not be a number at all. Rather than reject it,
//! such input becomes [`Target::Unusable`], which is unordered with respect to
//! every element: it is never equal, never less and never greater. Each
//! algorithm then reports "not found" in its own way.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value searched for by a run.
///
/// In config files a target is either a JSON number or a string, which is
/// parsed with [`parse_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TargetRepr", into = "TargetRepr")]
pub enum Target {
    Value(i64),
    Unusable,
}

/// Outcome of comparing one array element against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The element equals the target.
    Equal,
    /// The element is smaller than the target; search to the right.
    Less,
    /// The element is larger than the target; search to the left.
    Greater,
    /// The target is unusable and cannot be ordered against the element.
    Unordered,
}

impl Target {
    /// Compare `element` against this target.
    pub fn probe(self, element: i64) -> Probe {
        match self {
            Target::Value(t) if element == t => Probe::Equal,
            Target::Value(t) if element < t => Probe::Less,
            Target::Value(_) => Probe::Greater,
            Target::Unusable => Probe::Unordered,
        }
    }

    /// True if `low <= target <= high`. Always false for an unusable target.
    pub fn within(self, low: i64, high: i64) -> bool {
        match self {
            Target::Value(t) => low <= t && t <= high,
            Target::Unusable => false,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Value(t) => write!(f, "{}", t),
            Target::Unusable => write!(f, "NaN"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TargetRepr {
    Number(i64),
    Text(String),
}

impl From<TargetRepr> for Target {
    fn from(repr: TargetRepr) -> Self {
        match repr {
            TargetRepr::Number(t) => Target::Value(t),
            TargetRepr::Text(text) => parse_target(&text),
        }
    }
}

impl From<Target> for TargetRepr {
    fn from(target: Target) -> Self {
        match target {
            Target::Value(t) => TargetRepr::Number(t),
            Target::Unusable => TargetRepr::Text(target.to_string()),
        }
    }
}

/// Leniently parse user input into a target.
///
/// Leading whitespace and a single sign are accepted, then as many decimal
/// digits as follow; anything after the digits is ignored, so `"42abc"` is 42.
/// Input without leading digits, or whose digits overflow `i64`, is
/// [`Target::Unusable`].
pub fn parse_target(input: &str) -> Target {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Target::Unusable;
    }
    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{}", digits).parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.map(Target::Value).unwrap_or(Target::Unusable)
}
