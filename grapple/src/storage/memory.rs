// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory graph storage with adjacency lists
//!
//! `MemoryGraph` keeps vertices in insertion order and indexes edges by
//! endpoint in both directions, which makes the three `GraphStore` lookups
//! cheap without any external storage backend.

use std::collections::HashMap;
use std::sync::Arc;

use super::store::GraphStore;
use super::types::{Edge, Properties, StorageError, Vertex};

/// An in-memory property graph.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    /// Vertices in insertion order
    vertices: Vec<Arc<Vertex>>,
    /// Vertex id to position in `vertices`
    index: HashMap<String, usize>,
    /// Outgoing adjacency: origin id to edges, insertion order
    outgoing: HashMap<String, Vec<Arc<Edge>>>,
    /// Incoming adjacency: target id to edges, insertion order
    incoming: HashMap<String, Vec<Arc<Edge>>>,
    next_edge_id: u64,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, replacing any existing vertex with the same id.
    ///
    /// Replacement swaps the stored handle; edges inserted before the
    /// replacement keep their original endpoint handles.
    pub fn insert_vertex(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        properties: Properties,
    ) -> Arc<Vertex> {
        let vertex = Arc::new(Vertex {
            id: id.into(),
            label: label.into(),
            properties,
        });
        match self.index.get(&vertex.id) {
            Some(&pos) => self.vertices[pos] = Arc::clone(&vertex),
            None => {
                self.index.insert(vertex.id.clone(), self.vertices.len());
                self.vertices.push(Arc::clone(&vertex));
            }
        }
        vertex
    }

    /// Insert a directed edge between two existing vertices.
    pub fn insert_edge(
        &mut self,
        origin: &str,
        target: &str,
        label: impl Into<String>,
        properties: Properties,
    ) -> Result<Arc<Edge>, StorageError> {
        let origin = self
            .vertex(origin)
            .ok_or_else(|| StorageError::UnknownVertex(origin.to_string()))?;
        let target = self
            .vertex(target)
            .ok_or_else(|| StorageError::UnknownVertex(target.to_string()))?;

        self.next_edge_id += 1;
        let edge = Arc::new(Edge {
            id: self.next_edge_id,
            label: label.into(),
            origin: Arc::clone(&origin),
            target: Arc::clone(&target),
            properties,
        });
        self.outgoing
            .entry(origin.id.clone())
            .or_default()
            .push(Arc::clone(&edge));
        self.incoming
            .entry(target.id.clone())
            .or_default()
            .push(Arc::clone(&edge));
        Ok(edge)
    }

    /// Look up a vertex handle by id.
    pub fn vertex(&self, id: &str) -> Option<Arc<Vertex>> {
        self.index.get(id).map(|&pos| Arc::clone(&self.vertices[pos]))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.next_edge_id as usize
    }
}

impl GraphStore for MemoryGraph {
    fn vertices(&self, label: Option<&str>) -> Vec<Arc<Vertex>> {
        self.vertices
            .iter()
            .filter(|v| label.map_or(true, |l| v.label == l))
            .cloned()
            .collect()
    }

    fn out_edges(&self, vertex_id: &str) -> Vec<Arc<Edge>> {
        self.outgoing.get(vertex_id).cloned().unwrap_or_default()
    }

    fn in_edges(&self, vertex_id: &str) -> Vec<Arc<Edge>> {
        self.incoming.get(vertex_id).cloned().unwrap_or_default()
    }
}
