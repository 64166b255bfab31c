// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph store interface consumed by the execution engine

use std::sync::Arc;

use super::types::{Edge, Vertex};

/// Read-only view of a property graph.
///
/// The execution engine needs exactly three lookups: label-filtered vertex
/// enumeration and per-vertex adjacency in both directions. Implementations
/// must return the same `Arc` handle for the same underlying entity across
/// calls, since the engine deduplicates by identity. The store is never
/// mutated during a query; guarding against concurrent writers is the
/// caller's responsibility.
pub trait GraphStore {
    /// All vertices, optionally restricted to a type label, in a stable
    /// enumeration order with no duplicates.
    fn vertices(&self, label: Option<&str>) -> Vec<Arc<Vertex>>;

    /// Edges whose origin is the given vertex, in insertion order.
    /// Unknown ids yield an empty sequence.
    fn out_edges(&self, vertex_id: &str) -> Vec<Arc<Edge>>;

    /// Edges whose target is the given vertex, in insertion order.
    /// Unknown ids yield an empty sequence.
    fn in_edges(&self, vertex_id: &str) -> Vec<Arc<Edge>>;
}
