// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Query results: named variable bindings

use std::collections::HashMap;
use std::sync::Arc;

use crate::ast::Step;
use crate::error::QueryError;
use crate::storage::{Edge, Vertex};

/// The entities recorded for one variable.
#[derive(Debug, Clone)]
pub enum Binding {
    Vertices(Vec<Arc<Vertex>>),
    Edges(Vec<Arc<Edge>>),
}

impl Binding {
    pub fn len(&self) -> usize {
        match self {
            Binding::Vertices(items) => items.len(),
            Binding::Edges(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_vertices(&self) -> Option<&[Arc<Vertex>]> {
        match self {
            Binding::Vertices(items) => Some(items),
            Binding::Edges(_) => None,
        }
    }

    pub fn as_edges(&self) -> Option<&[Arc<Edge>]> {
        match self {
            Binding::Edges(items) => Some(items),
            Binding::Vertices(_) => None,
        }
    }
}

/// Variable bindings produced by executing a pattern.
#[derive(Debug, Default)]
pub struct QueryResult {
    bindings: HashMap<String, Binding>,
    /// Parsed step list, populated when the query ran with debug enabled
    pub steps: Option<Vec<Step>>,
}

impl QueryResult {
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Vertex sequence bound to `name`, `None` if absent or edge-bound.
    pub fn vertices(&self, name: &str) -> Option<&[Arc<Vertex>]> {
        self.bindings.get(name).and_then(Binding::as_vertices)
    }

    /// Edge sequence bound to `name`, `None` if absent or vertex-bound.
    pub fn edges(&self, name: &str) -> Option<&[Arc<Edge>]> {
        self.bindings.get(name).and_then(Binding::as_edges)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Record a binding, honoring the rebind policy.
    pub(crate) fn record(
        &mut self,
        name: &str,
        binding: Binding,
        forbid_rebinding: bool,
    ) -> Result<(), QueryError> {
        if forbid_rebinding && self.bindings.contains_key(name) {
            return Err(QueryError::DuplicateBinding(name.to_string()));
        }
        self.bindings.insert(name.to_string(), binding);
        Ok(())
    }
}
