// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use comfy_table::{presets::UTF8_FULL, Table};
use grapple::{Binding, QueryResult, Vertex};
use serde_json::json;

use super::commands::OutputFormat;

/// Renders query results for the terminal.
pub struct ResultFormatter;

impl ResultFormatter {
    pub fn format(result: &QueryResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::table(result),
            OutputFormat::Json => Self::json(result),
        }
    }

    fn table(result: &QueryResult) -> String {
        if result.is_empty() {
            return "(no bindings)".to_string();
        }
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["variable", "kind", "count", "entities"]);

        let mut names: Vec<_> = result.names().collect();
        names.sort_unstable();
        for name in names {
            match result.get(name) {
                Some(Binding::Vertices(vertices)) => {
                    let cells: Vec<_> = vertices.iter().map(|v| Self::vertex_cell(v)).collect();
                    table.add_row(vec![
                        name.to_string(),
                        "vertices".to_string(),
                        vertices.len().to_string(),
                        cells.join(", "),
                    ]);
                }
                Some(Binding::Edges(edges)) => {
                    let cells: Vec<_> = edges
                        .iter()
                        .map(|e| format!("{}-[{}]->{}", e.origin.id, e.label, e.target.id))
                        .collect();
                    table.add_row(vec![
                        name.to_string(),
                        "edges".to_string(),
                        edges.len().to_string(),
                        cells.join(", "),
                    ]);
                }
                None => {}
            }
        }
        table.to_string()
    }

    fn vertex_cell(vertex: &Vertex) -> String {
        format!("{}({})", vertex.id, vertex.label)
    }

    fn json(result: &QueryResult) -> String {
        let mut doc = serde_json::Map::new();
        let mut names: Vec<_> = result.names().collect();
        names.sort_unstable();
        for name in names {
            let value = match result.get(name) {
                Some(Binding::Vertices(vertices)) => json!(vertices
                    .iter()
                    .map(|v| json!({
                        "id": v.id,
                        "label": v.label,
                        "properties": v.properties,
                    }))
                    .collect::<Vec<_>>()),
                Some(Binding::Edges(edges)) => json!(edges
                    .iter()
                    .map(|e| json!({
                        "id": e.id,
                        "label": e.label,
                        "origin": e.origin.id,
                        "target": e.target.id,
                        "properties": e.properties,
                    }))
                    .collect::<Vec<_>>()),
                None => continue,
            };
            doc.insert(name.to_string(), value);
        }
        serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string())
    }
}
