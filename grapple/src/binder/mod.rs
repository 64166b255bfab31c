// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Parameter interpolation
//!
//! Queries are written as literal text fragments with host values spliced
//! between them. The binder merges both into a single query string: plain
//! values are serialized to JSON and substituted in place, while
//! predicates cannot appear in text and are parked in a `QueryState`
//! side-table under a synthetic placeholder key (`$p1`, `$p2`, ...) whose
//! marker token `{$p1}` is substituted instead. Keys are scoped to one
//! invocation; there is no process-wide placeholder namespace.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::filter::{Candidate, HostPredicate};
use crate::storage::Value;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// A value spliced into query text.
pub enum Param {
    /// A literal value, serialized into the text as JSON
    Value(Value),
    /// A host predicate, referenced from the text by placeholder
    Predicate(HostPredicate),
}

impl Param {
    pub fn value(value: impl Into<Value>) -> Self {
        Param::Value(value.into())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Candidate<'_>) -> bool + Send + Sync + 'static,
    {
        Param::Predicate(std::sync::Arc::new(predicate))
    }
}

/// Per-invocation table of interpolated host predicates.
#[derive(Default)]
pub struct QueryState {
    predicates: HashMap<String, HostPredicate>,
}

impl QueryState {
    /// Look up a predicate by placeholder key.
    pub fn predicate(&self, key: &str) -> Option<HostPredicate> {
        self.predicates.get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn with_predicate(key: &str, predicate: HostPredicate) -> Self {
        let mut state = Self::default();
        state.predicates.insert(key.to_string(), predicate);
        state
    }
}

/// Merge text fragments and interpolated values into `(query, state)`.
///
/// Fragment count must be exactly one more than the value count, the same
/// shape a tagged template produces. All whitespace is collapsed so
/// queries can be written across multiple lines.
pub fn interpolate(fragments: &[&str], params: Vec<Param>) -> (String, QueryState) {
    assert_eq!(
        fragments.len(),
        params.len() + 1,
        "expected one more fragment than interpolated values"
    );

    let mut state = QueryState::default();
    let mut text = String::from(fragments[0]);
    for (idx, param) in params.into_iter().enumerate() {
        match param {
            Param::Predicate(predicate) => {
                let key = format!("$p{}", idx + 1);
                text.push('{');
                text.push_str(&key);
                text.push('}');
                state.predicates.insert(key, predicate);
            }
            Param::Value(value) => {
                let json = serde_json::to_string(&value)
                    .expect("literal values always serialize to JSON");
                text.push_str(&json);
            }
        }
        text.push_str(fragments[idx + 1]);
    }
    (WHITESPACE.replace_all(&text, "").into_owned(), state)
}
