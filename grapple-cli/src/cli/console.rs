// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for Grapple

use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use grapple::{query_with_options, MemoryGraph, Properties, QueryOptions};

use super::commands::OutputFormat;
use super::output::ResultFormatter;

/// On-disk graph document: plain JSON lists of vertices and edges.
#[derive(Deserialize)]
struct GraphFile {
    #[serde(default)]
    vertices: Vec<VertexSpec>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
}

#[derive(Deserialize)]
struct VertexSpec {
    id: String,
    label: String,
    #[serde(default)]
    properties: Properties,
}

#[derive(Deserialize)]
struct EdgeSpec {
    origin: String,
    target: String,
    label: String,
    #[serde(default)]
    properties: Properties,
}

/// Load a graph file into an in-memory store.
fn load_graph(path: &Path) -> Result<MemoryGraph, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read graph file {:?}: {}", path, e))?;
    let file: GraphFile =
        serde_json::from_str(&text).map_err(|e| format!("malformed graph file: {}", e))?;

    let mut graph = MemoryGraph::new();
    for v in file.vertices {
        graph.insert_vertex(v.id, v.label, v.properties);
    }
    for e in file.edges {
        graph.insert_edge(&e.origin, &e.target, e.label, e.properties)?;
    }
    Ok(graph)
}

/// Handle the query command: one pattern, print, exit.
pub fn handle_query(
    graph_path: PathBuf,
    pattern: &str,
    format: OutputFormat,
    show_steps: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(&graph_path)?;
    run_pattern(&graph, pattern, format, show_steps)
}

/// Handle the repl command: read patterns until exit.
pub fn handle_repl(
    graph_path: PathBuf,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(&graph_path)?;

    println!("{}", "Grapple".bold().green());
    println!(
        "Loaded {} vertices and {} edges from {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        graph_path
    );
    println!("Enter a pattern like (p:Person)-[e]->(v); 'exit' or 'quit' to leave");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("grapple> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                let _ = editor.add_history_entry(line);
                if let Err(e) = run_pattern(&graph, line, format, false) {
                    println!("{} {}", "error:".red().bold(), e);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn run_pattern(
    graph: &MemoryGraph,
    pattern: &str,
    format: OutputFormat,
    show_steps: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = QueryOptions {
        debug: show_steps,
        ..QueryOptions::default()
    };
    let result = query_with_options(graph, &[pattern], vec![], options)?;
    if let Some(steps) = &result.steps {
        println!("{}", "parsed steps:".yellow());
        for (idx, step) in steps.iter().enumerate() {
            println!("  {}: {:?}", idx, step);
        }
    }
    println!("{}", ResultFormatter::format(&result, format));
    Ok(())
}
