// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Filter compilation and evaluation
//!
//! A step's filter clause is either a literal document compiled from the
//! restricted grammar (`literal`) and matched structurally (`matcher`), or
//! an opaque host predicate injected through the parameter binder. Both
//! forms evaluate against a `Candidate`, the engine's read-only view of a
//! vertex or edge.

mod literal;
mod matcher;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::QueryError;
use crate::storage::{Edge, Properties, Value, Vertex};

pub use matcher::is_match;

/// An opaque boolean function supplied by the host over a candidate.
pub type HostPredicate = Arc<dyn Fn(&Candidate<'_>) -> bool + Send + Sync>;

/// The entity a filter is being evaluated against.
pub enum Candidate<'a> {
    Vertex(&'a Vertex),
    Edge(&'a Edge),
}

impl<'a> Candidate<'a> {
    pub fn label(&self) -> &str {
        match self {
            Candidate::Vertex(v) => &v.label,
            Candidate::Edge(e) => &e.label,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Candidate::Vertex(v) => &v.properties,
            Candidate::Edge(e) => &e.properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties().get(name)
    }

    /// Edge origin, `None` for vertices.
    pub fn origin(&self) -> Option<&Arc<Vertex>> {
        match self {
            Candidate::Vertex(_) => None,
            Candidate::Edge(e) => Some(&e.origin),
        }
    }

    /// Edge target, `None` for vertices.
    pub fn target(&self) -> Option<&Arc<Vertex>> {
        match self {
            Candidate::Vertex(_) => None,
            Candidate::Edge(e) => Some(&e.target),
        }
    }

    /// Document view used for structural matching.
    ///
    /// A vertex is its property bag. An edge exposes its endpoint ids plus
    /// the property bag one level down under `properties`, which is why
    /// edge filter clauses are nested under that key at compile time.
    fn document(&self) -> Value {
        match self {
            Candidate::Vertex(v) => Value::Map(v.properties.clone()),
            Candidate::Edge(e) => {
                let mut doc = BTreeMap::new();
                doc.insert("origin".to_string(), Value::String(e.origin.id.clone()));
                doc.insert("target".to_string(), Value::String(e.target.id.clone()));
                doc.insert("properties".to_string(), Value::Map(e.properties.clone()));
                Value::Map(doc)
            }
        }
    }
}

/// A compiled step filter.
#[derive(Clone)]
pub enum Filter {
    /// Structural match document from the literal grammar
    Literal(Value),
    /// Host-supplied predicate resolved through the query state
    Hosted(HostPredicate),
}

impl Filter {
    /// Compile a textual clause into a structural filter.
    ///
    /// `nest_under` wraps the parsed document under the given key; edge
    /// steps pass `"properties"` so their clauses match the property bag
    /// rather than the edge's direct fields.
    pub fn compile_literal(clause: &str, nest_under: Option<&str>) -> Result<Self, QueryError> {
        let mut doc = literal::parse_object_literal(clause)?;
        if let Some(key) = nest_under {
            let mut outer = BTreeMap::new();
            outer.insert(key.to_string(), doc);
            doc = Value::Map(outer);
        }
        Ok(Filter::Literal(doc))
    }

    /// Evaluate the filter against a candidate.
    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        match self {
            Filter::Literal(doc) => is_match(doc, &candidate.document()),
            Filter::Hosted(predicate) => predicate(candidate),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Literal(doc) => f.debug_tuple("Literal").field(doc).finish(),
            Filter::Hosted(_) => f.write_str("Hosted(<predicate>)"),
        }
    }
}
