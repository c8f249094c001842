// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `searchviz`: animate a search in the terminal.

use std::collections::HashMap;
use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use strum::IntoEnumIterator;
use tracing::info;

use search_visualizer::config::cli::{parse_cli_args, usage, CliCommand, CliInput};
use search_visualizer::logging::{init_subscriber, Verbosity};
use search_visualizer::model::parse_target;
use search_visualizer::pacing::{PacingConfig, ThreadPacer};
use search_visualizer::render::TextRenderer;
use search_visualizer::{AlgorithmKind, SearchConfig, SearchRunner};

fn main() -> ExitCode {
    let input = match parse_cli_args(std::env::args().skip(1)) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("searchviz: {}\n{}", err, usage());
            return ExitCode::from(2);
        }
    };

    match input.command {
        CliCommand::Help => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        CliCommand::Version => {
            println!("searchviz {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        CliCommand::Run => {}
    }

    init_subscriber(
        Verbosity::from_flags(input.verbose, input.quiet),
        input.no_color,
    );

    match run(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("searchviz: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(input: &CliInput) -> anyhow::Result<()> {
    let env: HashMap<String, String> = std::env::vars().collect();
    let mut config = SearchConfig::load(input.config_path.as_deref(), &env)
        .context("cannot load configuration")?;
    if let Some(algorithm) = input.algorithm {
        config.algorithm = algorithm;
    }
    if input.instant {
        config.pacing = PacingConfig::instant();
    }

    let stdout = std::io::stdout();
    let color = !input.no_color && stdout.is_terminal();
    let renderer = TextRenderer::new(stdout, config.array.len(), color);
    let mut runner = SearchRunner::new(&config, renderer, ThreadPacer);
    if let Some(text) = &input.target {
        runner.set_target(parse_target(text))?;
    }

    let algorithms: Vec<AlgorithmKind> = if input.all {
        AlgorithmKind::iter().collect()
    } else {
        vec![config.algorithm]
    };

    info!(target = %runner.target(), len = runner.array().len(), "starting");
    for algorithm in algorithms {
        runner.set_algorithm(algorithm)?;
        runner.observer_mut().describe(algorithm);
        let outcome = runner.run()?;
        runner.observer_mut().summarize(&outcome);
        if let Some(err) = runner.observer_mut().take_error() {
            return Err(err).context("cannot write to stdout");
        }
    }
    Ok(())
}
