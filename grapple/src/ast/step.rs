// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Step descriptors produced by the pattern parser

use serde::Serialize;

use crate::filter::Filter;

/// Traversal direction of an edge step, taken from the arrow form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// `-...->`: follow edges away from the current frontier
    Outgoing,
    /// `<-...-`: follow edges pointing at the current frontier
    Incoming,
}

/// One parsed element of a pattern.
///
/// A pattern alternates vertex and edge steps, starting with a vertex
/// step. The trailing vertex slot may be elided (`(:Person)-[e]->`), so a
/// pattern can end on either kind.
#[derive(Debug, Clone)]
pub enum Step {
    Vertex {
        /// Binding name, `None` for anonymous steps
        variable: Option<String>,
        /// Type label restriction
        label: Option<String>,
        /// Compiled filter clause
        filter: Option<Filter>,
        /// `?`-marked: bind from the following edge step's traversal
        delayed: bool,
    },
    Edge {
        variable: Option<String>,
        label: Option<String>,
        filter: Option<Filter>,
        direction: Direction,
    },
}

impl Step {
    pub fn variable(&self) -> Option<&str> {
        match self {
            Step::Vertex { variable, .. } | Step::Edge { variable, .. } => variable.as_deref(),
        }
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, Step::Vertex { .. })
    }
}
