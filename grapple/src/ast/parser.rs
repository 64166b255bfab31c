// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Pattern parser
//!
//! Splits a query string on edge tokens (`-[...]->`, `<-[...]-`, or the
//! bare arrows) and parses the alternating vertex/edge tokens into step
//! descriptors. Splitting keeps the separators: tokens at even index are
//! vertex text, odd index edge text. Empty vertex slots (as in the
//! trailing position of `(:Person)-[e]->`) are dropped, so a pattern can
//! end on an edge step.

use once_cell::sync::Lazy;
use regex::Regex;

use super::step::{Direction, Step};
use crate::binder::QueryState;
use crate::error::QueryError;
use crate::filter::Filter;

static EDGE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<-(?:\[.*?\])?-|-(?:\[.*?\])?->").expect("static regex"));
static VERTEX_BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.*?)\)").expect("static regex"));
static EDGE_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:-\[(.*?)\]->|<-\[(.*?)\]-)$").expect("static regex"));
static FILTER_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{.*\}$").expect("static regex"));
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(\$p\d+)\}$").expect("static regex"));

/// Marker stripped from a vertex variable to request delayed binding.
const DELAYED_MARKER: char = '?';

/// Parse a whole query string into an ordered step list.
pub fn parse_pattern(query: &str, state: &QueryState) -> Result<Vec<Step>, QueryError> {
    split_tokens(query)
        .into_iter()
        .enumerate()
        .map(|(idx, token)| {
            if idx % 2 == 0 {
                parse_vertex_token(token, state)
            } else {
                parse_edge_token(token, state)
            }
        })
        .collect()
}

/// Interleave vertex text and edge tokens, dropping empty vertex slots.
fn split_tokens(query: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for separator in EDGE_TOKEN.find_iter(query) {
        if separator.start() > last {
            tokens.push(&query[last..separator.start()]);
        }
        tokens.push(separator.as_str());
        last = separator.end();
    }
    if last < query.len() {
        tokens.push(&query[last..]);
    }
    tokens
}

fn parse_vertex_token(token: &str, state: &QueryState) -> Result<Step, QueryError> {
    let body = VERTEX_BODY
        .captures(token)
        .ok_or_else(|| QueryError::Syntax(format!("bad vertex string: {token}")))?
        .get(1)
        .map(|m| m.as_str())
        .unwrap_or("");

    let (rest, clause) = split_filter(body);
    let (mut variable, label) = split_name_and_label(rest);
    let delayed = variable.starts_with(DELAYED_MARKER);
    if delayed {
        variable = &variable[DELAYED_MARKER.len_utf8()..];
    }

    Ok(Step::Vertex {
        variable: non_empty(variable),
        label: non_empty(label),
        filter: resolve_filter(clause, state, None)?,
        delayed,
    })
}

fn parse_edge_token(token: &str, state: &QueryState) -> Result<Step, QueryError> {
    let direction = if token.ends_with('>') {
        Direction::Outgoing
    } else {
        Direction::Incoming
    };

    let spec = EDGE_SPEC
        .captures(token)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str());

    let (variable, label, filter) = match spec {
        // bare arrow: no variable, no label, no filter
        None => (None, None, None),
        Some(spec) => {
            let (rest, clause) = split_filter(spec);
            let (variable, label) = split_name_and_label(rest);
            (
                non_empty(variable),
                non_empty(label),
                resolve_filter(clause, state, Some("properties"))?,
            )
        }
    };

    Ok(Step::Edge {
        variable,
        label,
        filter,
        direction,
    })
}

/// Split off a trailing brace-delimited filter clause, if any.
fn split_filter(body: &str) -> (&str, Option<&str>) {
    match FILTER_SUFFIX.find(body) {
        Some(m) => (&body[..m.start()], Some(m.as_str())),
        None => (body, None),
    }
}

/// Split `name:label` on the first `:`; anything past a second `:` is
/// ignored, matching the permissive split of the query grammar.
fn split_name_and_label(rest: &str) -> (&str, &str) {
    let mut parts = rest.split(':');
    (parts.next().unwrap_or(""), parts.next().unwrap_or(""))
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Resolve a filter clause to a compiled filter.
///
/// A placeholder marker (`{$p1}`) resolves through the query state to the
/// interpolated host predicate; anything else is compiled by the literal
/// grammar. Edge clauses are nested under `properties`.
fn resolve_filter(
    clause: Option<&str>,
    state: &QueryState,
    nest_under: Option<&str>,
) -> Result<Option<Filter>, QueryError> {
    let Some(clause) = clause else {
        return Ok(None);
    };
    if let Some(caps) = PLACEHOLDER.captures(clause) {
        let key = &caps[1];
        return state
            .predicate(key)
            .map(|predicate| Some(Filter::Hosted(predicate)))
            .ok_or_else(|| QueryError::Syntax(format!("unknown parameter placeholder: {key}")));
    }
    Filter::compile_literal(clause, nest_under).map(Some)
}
