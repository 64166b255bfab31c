// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph storage for in-memory graph data
//!
//! This module provides:
//! - Value type system for graph properties
//! - Vertex and edge records behind stable `Arc` handles
//! - The `GraphStore` trait consumed by the execution engine
//! - An in-memory store with adjacency lists

pub mod value;
pub mod types;
mod store;
mod memory;

pub use value::Value;
pub use types::{Edge, Properties, StorageError, Vertex};
pub use store::GraphStore;
pub use memory::MemoryGraph;
