// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Deep structural matching of literal documents against candidates

use crate::storage::Value;

/// Report whether `actual` structurally satisfies `expected`.
///
/// Maps match partially: every field named in `expected` must be present
/// in `actual` with a matching value, extra fields in `actual` are
/// ignored, and the comparison recurses. Lists match element-wise with
/// equal lengths. Scalars compare by equality, with numbers compared
/// numerically so `2` matches `2.0`.
pub fn is_match(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Map(expected), Value::Map(actual)) => expected
            .iter()
            .all(|(key, want)| actual.get(key).is_some_and(|have| is_match(want, have))),
        (Value::List(expected), Value::List(actual)) => {
            expected.len() == actual.len()
                && expected.iter().zip(actual).all(|(want, have)| is_match(want, have))
        }
        _ => match (expected.as_number(), actual.as_number()) {
            (Some(want), Some(have)) => want == have,
            _ => expected == actual,
        },
    }
}
