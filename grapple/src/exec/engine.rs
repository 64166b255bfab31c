// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Step execution engine
//!
//! Folds a parsed step list over an evolving frontier of vertices. Vertex
//! steps narrow the frontier (deduplication, label filter, predicate
//! filter) and record bindings; edge steps expand it through the store's
//! adjacency lists, producing the far-side endpoints as the next
//! frontier. A `?`-marked vertex variable is not bound by its own step:
//! its name is parked in a single-slot pending resolver that the next
//! edge step consumes, binding the deduplicated near-side endpoints the
//! traversal actually passed through.

use std::collections::HashSet;
use std::sync::Arc;

use crate::ast::{Direction, Step};
use crate::error::QueryError;
use crate::filter::{Candidate, Filter};
use crate::storage::{Edge, GraphStore, Vertex};

use super::result::{Binding, QueryResult};

/// Knobs for a single query invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    /// Attach the parsed step list to the result
    pub debug: bool,
    /// Fail with `DuplicateBinding` when a variable name is reused,
    /// instead of silently overwriting the earlier binding
    pub forbid_rebinding: bool,
}

/// Executes parsed patterns against a graph store.
pub struct StepExecutor<'a> {
    graph: &'a dyn GraphStore,
    options: QueryOptions,
}

impl<'a> StepExecutor<'a> {
    pub fn new(graph: &'a dyn GraphStore) -> Self {
        Self::with_options(graph, QueryOptions::default())
    }

    pub fn with_options(graph: &'a dyn GraphStore, options: QueryOptions) -> Self {
        Self { graph, options }
    }

    /// Run the step sequence and return the recorded bindings.
    pub fn execute(&self, pattern: &[Step]) -> Result<QueryResult, QueryError> {
        let mut result = QueryResult::default();
        let mut frontier: Option<Vec<Arc<Vertex>>> = None;
        let mut pending: Option<String> = None;

        for step in pattern {
            frontier = Some(match step {
                Step::Vertex {
                    variable,
                    label,
                    filter,
                    delayed,
                } => self.vertex_step(
                    variable.as_deref(),
                    label.as_deref(),
                    filter.as_ref(),
                    *delayed,
                    frontier,
                    &mut result,
                    &mut pending,
                )?,
                Step::Edge {
                    variable,
                    label,
                    filter,
                    direction,
                } => self.edge_step(
                    variable.as_deref(),
                    label.as_deref(),
                    filter.as_ref(),
                    *direction,
                    frontier.unwrap_or_default(),
                    &mut result,
                    &mut pending,
                )?,
            });
        }

        if let Some(name) = pending {
            log::warn!(
                "delayed variable `{name}` was never resolved: no edge step follows its vertex step"
            );
        }
        Ok(result)
    }

    #[allow(clippy::too_many_arguments)]
    fn vertex_step(
        &self,
        variable: Option<&str>,
        label: Option<&str>,
        filter: Option<&Filter>,
        delayed: bool,
        frontier: Option<Vec<Arc<Vertex>>>,
        result: &mut QueryResult,
        pending: &mut Option<String>,
    ) -> Result<Vec<Arc<Vertex>>, QueryError> {
        let mut current = match frontier {
            // initial step: enumerate the store
            None => self.graph.vertices(label),
            // subsequent step: dedup by id, first occurrence wins
            Some(candidates) => {
                let mut seen = HashSet::new();
                candidates
                    .into_iter()
                    .filter(|v| {
                        seen.insert(v.id.clone()) && label.map_or(true, |l| v.label == l)
                    })
                    .collect()
            }
        };

        if let Some(filter) = filter {
            current.retain(|v| filter.matches(&Candidate::Vertex(v)));
        }
        log::debug!(
            "vertex step (label {label:?}): {} candidates after filtering",
            current.len()
        );

        if let Some(name) = variable {
            if delayed {
                *pending = Some(name.to_string());
            } else {
                result.record(
                    name,
                    Binding::Vertices(current.clone()),
                    self.options.forbid_rebinding,
                )?;
            }
        }
        Ok(current)
    }

    #[allow(clippy::too_many_arguments)]
    fn edge_step(
        &self,
        variable: Option<&str>,
        label: Option<&str>,
        filter: Option<&Filter>,
        direction: Direction,
        frontier: Vec<Arc<Vertex>>,
        result: &mut QueryResult,
        pending: &mut Option<String>,
    ) -> Result<Vec<Arc<Vertex>>, QueryError> {
        // expand through adjacency, keeping duplicates: a vertex reached
        // over two parallel edges legitimately appears twice
        let mut edges: Vec<Arc<Edge>> = Vec::new();
        for vertex in &frontier {
            edges.extend(match direction {
                Direction::Outgoing => self.graph.out_edges(&vertex.id),
                Direction::Incoming => self.graph.in_edges(&vertex.id),
            });
        }

        if let Some(label) = label {
            edges.retain(|e| e.label == label);
        }
        if let Some(filter) = filter {
            edges.retain(|e| filter.matches(&Candidate::Edge(e)));
        }
        log::debug!(
            "edge step (label {label:?}, {direction:?}): {} edges after filtering",
            edges.len()
        );

        // a pending delayed variable binds the near-side endpoints the
        // surviving edges actually came from; the slot fires exactly once
        if let Some(name) = pending.take() {
            let mut seen = HashSet::new();
            let mut near_side = Vec::new();
            for edge in &edges {
                let vertex = match direction {
                    Direction::Outgoing => &edge.origin,
                    Direction::Incoming => &edge.target,
                };
                if seen.insert(vertex.id.clone()) {
                    near_side.push(Arc::clone(vertex));
                }
            }
            result.record(
                &name,
                Binding::Vertices(near_side),
                self.options.forbid_rebinding,
            )?;
        }

        if let Some(name) = variable {
            result.record(
                name,
                Binding::Edges(edges.clone()),
                self.options.forbid_rebinding,
            )?;
        }

        Ok(edges
            .iter()
            .map(|edge| match direction {
                Direction::Outgoing => Arc::clone(&edge.target),
                Direction::Incoming => Arc::clone(&edge.origin),
            })
            .collect())
    }
}
