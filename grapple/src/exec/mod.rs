// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Query execution engine
//!
//! This module provides the engine that folds a parsed step list over the
//! graph store to produce variable bindings.

pub mod engine;
pub mod result;

// Re-export the main types for convenience
pub use engine::{QueryOptions, StepExecutor};
pub use result::{Binding, QueryResult};
