// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Vertex and edge records
//!
//! Entities are handed out as `Arc` handles so the same underlying vertex
//! or edge compares by a stable identity across repeated lookups within a
//! query. Vertex ids are caller-supplied strings; edge ids are assigned by
//! the store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use super::value::Value;

/// Property bag attached to a vertex or edge.
pub type Properties = BTreeMap<String, Value>;

/// A labeled vertex with a property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Stable identity, unique within a store
    pub id: String,
    /// Type label, e.g. `Person`
    pub label: String,
    /// Named properties
    #[serde(default)]
    pub properties: Properties,
}

impl Vertex {
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// A directed, labeled edge between two vertices.
///
/// Endpoints are held as vertex handles rather than bare ids so traversal
/// can move between vertices and edges without going back to the store.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Stable identity, assigned sequentially by the store
    pub id: u64,
    /// Type label, e.g. `visited`
    pub label: String,
    /// Vertex the edge points away from
    pub origin: Arc<Vertex>,
    /// Vertex the edge points at
    pub target: Arc<Vertex>,
    /// Named properties
    pub properties: Properties,
}

impl Edge {
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// Errors raised by graph store mutation.
#[derive(Error, Debug)]
pub enum StorageError {
    /// An edge endpoint refers to a vertex the store does not contain
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
}
