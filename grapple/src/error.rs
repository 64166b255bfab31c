// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for query parsing and execution

use thiserror::Error;

/// Errors surfaced to the query caller.
///
/// Syntax errors are detected eagerly while parsing, before any traversal
/// begins, so a failed query has no partial effects and returns no partial
/// bindings.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Malformed pattern text or a filter clause outside the literal grammar
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A variable was bound more than once while rebinding is forbidden
    #[error("variable `{0}` is bound more than once")]
    DuplicateBinding(String),
}
