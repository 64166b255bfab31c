// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Grapple command-line entry point

mod cli;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if let Some(level) = args.log_level {
        builder.filter_level(level.to_level_filter());
    }
    builder.init();

    let outcome = match args.command {
        Commands::Query {
            pattern,
            graph,
            format,
            steps,
        } => cli::handle_query(graph, &pattern, format, steps),
        Commands::Repl { graph, format } => cli::handle_repl(graph, format),
    };

    if let Err(e) = outcome {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
