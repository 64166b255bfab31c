// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for Grapple
//!
//! Provides command-line interface for one-off pattern queries and an
//! interactive console over a JSON graph file.

pub mod commands;
pub mod console;
pub mod output;

pub use commands::{Cli, Commands};
pub use console::{handle_query, handle_repl};
