// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line flags for the `searchviz` binary.
//!
//! Flags take their value either as the next argument (`--target 42`) or
//! inline (`--target=42`). The target is kept as raw text; the runner parses
//! it leniently, so `--target abc` is accepted and simply never matches.

use std::path::PathBuf;
use std::str::FromStr;

use crate::model::AlgorithmKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),

    #[error("{flag} needs a value")]
    MissingValue { flag: String },

    #[error("unknown algorithm {value:?} (expected linear, binary or interpolation)")]
    InvalidAlgorithm { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CliCommand {
    #[default]
    Run,
    Help,
    Version,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliInput {
    pub command: CliCommand,
    pub algorithm: Option<AlgorithmKind>,
    pub target: Option<String>,
    pub config_path: Option<PathBuf>,
    /// Run every algorithm in turn.
    pub all: bool,
    /// Skip all pauses.
    pub instant: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,
}

pub fn usage() -> &'static str {
    "usage: searchviz [--algorithm linear|binary|interpolation] [--target N] [--all]\n\
     \x20                [--config FILE] [--instant] [-v|--verbose] [-q|--quiet] [--no-color]\n\
     \x20      searchviz --help | --version"
}

/// Parse arguments (without the program name).
pub fn parse_cli_args<I>(args: I) -> Result<CliInput, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut input = CliInput::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };
        let mut value = |flag: &str| -> Result<String, CliError> {
            match inline.clone() {
                Some(value) => Ok(value),
                None => args.next().ok_or_else(|| CliError::MissingValue {
                    flag: flag.to_string(),
                }),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => input.command = CliCommand::Help,
            "-V" | "--version" => input.command = CliCommand::Version,
            "-a" | "--algorithm" => {
                let name = value(&flag)?;
                let kind = AlgorithmKind::from_str(&name)
                    .map_err(|_| CliError::InvalidAlgorithm { value: name })?;
                input.algorithm = Some(kind);
            }
            "-t" | "--target" => input.target = Some(value(&flag)?),
            "-c" | "--config" => input.config_path = Some(PathBuf::from(value(&flag)?)),
            "--all" => input.all = true,
            "--instant" => input.instant = true,
            "-v" | "--verbose" => input.verbose = true,
            "-q" | "--quiet" => input.quiet = true,
            "--no-color" => input.no_color = true,
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }
    Ok(input)
}
