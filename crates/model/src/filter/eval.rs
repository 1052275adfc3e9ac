//! In-memory evaluation of filter expressions against [`Metadata`].

use super::FilterExpr;
use crate::core::{metadata::Metadata, value::Value};
use std::cmp::Ordering;

impl FilterExpr {
    /// Tests whether `metadata` satisfies this filter.
    ///
    /// A positive leaf on a missing key never matches; `NotEq` and `NotIn` on
    /// a missing key always match. Values of incomparable kinds (a string
    /// against a number, for instance) do not match.
    pub fn matches(&self, metadata: &Metadata) -> bool {
        match self {
            FilterExpr::Eq { key, value } => metadata.get(key).is_some_and(|v| v.equal(value)),
            FilterExpr::NotEq { key, value } => !metadata.get(key).is_some_and(|v| v.equal(value)),
            FilterExpr::Gt { key, value } => compare_is(metadata, key, value, |o| o.is_gt()),
            FilterExpr::Gte { key, value } => compare_is(metadata, key, value, |o| o.is_ge()),
            FilterExpr::Lt { key, value } => compare_is(metadata, key, value, |o| o.is_lt()),
            FilterExpr::Lte { key, value } => compare_is(metadata, key, value, |o| o.is_le()),
            FilterExpr::In { key, values } => is_member(metadata, key, values),
            FilterExpr::NotIn { key, values } => !is_member(metadata, key, values),
            FilterExpr::Contains { key, value } => match (metadata.get(key), value) {
                (Some(Value::String(haystack)), Value::String(needle)) => {
                    haystack.contains(needle.as_str())
                }
                _ => false,
            },
            FilterExpr::And { left, right } => left.matches(metadata) && right.matches(metadata),
            FilterExpr::Or { left, right } => left.matches(metadata) || right.matches(metadata),
            FilterExpr::Not { expr } => !expr.matches(metadata),
        }
    }
}

fn compare_is(
    metadata: &Metadata,
    key: &str,
    value: &Value,
    accept: impl Fn(Ordering) -> bool,
) -> bool {
    metadata
        .get(key)
        .and_then(|actual| actual.compare(value))
        .is_some_and(accept)
}

fn is_member(metadata: &Metadata, key: &str, values: &[Value]) -> bool {
    metadata
        .get(key)
        .is_some_and(|actual| values.iter().any(|v| actual.equal(v)))
}
