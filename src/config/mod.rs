// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration for a visualization session.
//!
//! Values are layered, lowest priority first:
//!
//! 1. [`SearchConfig::default`]: the array `1..=100`, target 50, linear search
//! 2. an optional JSON file
//! 3. `SEARCHVIZ_ALGORITHM` / `SEARCHVIZ_TARGET` environment variables
//! 4. command-line flags (see [`cli`])
//!
//! # Example
//!
//! ```
//! use search_visualizer::config::SearchConfig;
//! use search_visualizer::model::{AlgorithmKind, Target};
//!
//! let config = SearchConfig::from_json_str(r#"{"algorithm": "binary", "target": 7}"#, "inline")
//!     .unwrap();
//! assert_eq!(config.algorithm, AlgorithmKind::Binary);
//! assert_eq!(config.target, Target::Value(7));
//! assert_eq!(config.array.len(), 100);
//! ```

pub mod cli;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{default_array, parse_target, AlgorithmKind, Target, DEFAULT_TARGET};
use crate::pacing::PacingConfig;

/// Environment variable selecting the algorithm.
pub const ENV_ALGORITHM: &str = "SEARCHVIZ_ALGORITHM";

/// Environment variable selecting the target.
pub const ENV_TARGET: &str = "SEARCHVIZ_TARGET";

/// Environment variable with log filter directives; takes priority over
/// `RUST_LOG`.
pub const ENV_LOG: &str = "SEARCHVIZ_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Everything needed to set up a [`SearchRunner`](crate::runner::SearchRunner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub array: Vec<i64>,
    pub target: Target,
    pub algorithm: AlgorithmKind,
    pub pacing: PacingConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            array: default_array(),
            target: Target::Value(DEFAULT_TARGET),
            algorithm: AlgorithmKind::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Parse a JSON document. Missing fields take their defaults; unknown
    /// fields are rejected. `origin` names the source in error messages.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, &path.display().to_string())
    }

    /// Apply `SEARCHVIZ_*` overrides from `env`.
    pub fn apply_env(&mut self, env: &HashMap<String, String>) -> Result<(), ConfigError> {
        if let Some(value) = env.get(ENV_ALGORITHM) {
            self.algorithm =
                AlgorithmKind::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
                    field: ENV_ALGORITHM.to_string(),
                    value: value.clone(),
                    reason: "expected linear, binary or interpolation".to_string(),
                })?;
        }
        if let Some(value) = env.get(ENV_TARGET) {
            self.target = parse_target(value);
            if self.target == Target::Unusable {
                tracing::warn!(%value, "{} is not a number; nothing will match", ENV_TARGET);
            }
        }
        Ok(())
    }

    /// Defaults, then the file at `path` (if any), then the environment.
    pub fn load(path: Option<&Path>, env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                config
            }
            None => Self::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }
}
