// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions for Grapple

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Grapple CLI - pattern queries over property graphs
#[derive(Parser)]
#[command(name = "grapple")]
#[command(about = "Grapple - a compact pattern-matching query language for property graphs")]
#[command(version)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Execute a single pattern query
    Query {
        /// The pattern to execute, e.g. '(p:Person)-[e:visited]->(v)'
        pattern: String,

        /// Graph file to query (JSON)
        #[arg(short, long)]
        graph: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Show the parsed step list
        #[arg(long)]
        steps: bool,
    },

    /// Interactive query console (REPL)
    Repl {
        /// Graph file to query (JSON)
        #[arg(short, long)]
        graph: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
