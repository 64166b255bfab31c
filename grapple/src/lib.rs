// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Grapple - a compact pattern-matching query language for property graphs
//!
//! A query is a path pattern like `(p:Person)-[e:visited]->(place:Place)`.
//! It is parsed into an alternating list of vertex and edge steps, then
//! folded left-to-right over a graph store: vertex steps narrow the
//! working frontier (type label, filter clause, deduplication by id) and
//! edge steps expand it through adjacency in the arrow's direction. Steps
//! that declare a variable record the frontier under that name, and the
//! result is the map of all recorded bindings.
//!
//! ```no_run
//! use grapple::{query, MemoryGraph, Param, Properties};
//!
//! let mut g = MemoryGraph::new();
//! g.insert_vertex("foo", "Person", Properties::new());
//! g.insert_vertex("bar", "Person", Properties::new());
//! g.insert_edge("foo", "bar", "friend", Properties::new()).unwrap();
//!
//! let result = query(&g, &["(p:Person)-[e:friend]->(q)"], vec![]).unwrap();
//! assert_eq!(result.vertices("p").unwrap().len(), 2);
//! assert_eq!(result.edges("e").unwrap().len(), 1);
//! ```
//!
//! Filter clauses are restricted to pure literals (`{name:"foo"}`); host
//! code can go beyond that by interpolating predicate closures with
//! [`Param::predicate`], which never touch the text form.

pub mod ast;
pub mod binder;
pub mod error;
pub mod exec;
pub mod filter;
pub mod storage;

pub use ast::{Direction, Step};
pub use binder::{interpolate, Param, QueryState};
pub use error::QueryError;
pub use exec::{Binding, QueryOptions, QueryResult, StepExecutor};
pub use filter::{Candidate, Filter, HostPredicate};
pub use storage::{Edge, GraphStore, MemoryGraph, Properties, StorageError, Value, Vertex};

/// Run a query with default options.
///
/// `fragments` and `params` have tagged-template shape: the text is
/// `fragments[0] + params[0] + fragments[1] + ...`, with one more fragment
/// than params. A query without interpolation is a single fragment.
pub fn query(
    graph: &dyn GraphStore,
    fragments: &[&str],
    params: Vec<Param>,
) -> Result<QueryResult, QueryError> {
    query_with_options(graph, fragments, params, QueryOptions::default())
}

/// Run a query with explicit options (debug step capture, rebind policy).
pub fn query_with_options(
    graph: &dyn GraphStore,
    fragments: &[&str],
    params: Vec<Param>,
    options: QueryOptions,
) -> Result<QueryResult, QueryError> {
    let (text, state) = binder::interpolate(fragments, params);
    let pattern = ast::parse_pattern(&text, &state)?;
    let mut result = StepExecutor::with_options(graph, options).execute(&pattern)?;
    if options.debug {
        result.steps = Some(pattern);
    }
    Ok(result)
}
