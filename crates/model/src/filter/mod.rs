//! Store-agnostic metadata filter expressions.
//!
//! A [`FilterExpr`] is an owned, acyclic tree built by callers and handed to
//! a backend-specific compiler (or evaluated in memory via
//! [`FilterExpr::matches`]). The JSON form is tagged by `op`:
//!
//! ```json
//! {"op": "and",
//!  "left":  {"op": "eq", "key": "color", "value": "red"},
//!  "right": {"op": "gte", "key": "price", "value": 10}}
//! ```

use crate::{core::value::Value, error::ModelError};
use serde::{Deserialize, Serialize};

pub mod eval;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterExpr {
    Eq { key: String, value: Value },
    NotEq { key: String, value: Value },
    Gt { key: String, value: Value },
    Gte { key: String, value: Value },
    Lt { key: String, value: Value },
    Lte { key: String, value: Value },
    In { key: String, values: Vec<Value> },
    NotIn { key: String, values: Vec<Value> },
    /// Substring match on string metadata.
    Contains { key: String, value: Value },

    And {
        left: Box<FilterExpr>,
        right: Box<FilterExpr>,
    },
    Or {
        left: Box<FilterExpr>,
        right: Box<FilterExpr>,
    },
    Not { expr: Box<FilterExpr> },
}

impl FilterExpr {
    pub fn eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::Eq {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn not_eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::NotEq {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn gt(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::Gt {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn gte(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::Gte {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn lt(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::Lt {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn lte(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::Lte {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_in<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        FilterExpr::In {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn not_in<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        FilterExpr::NotIn {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FilterExpr::Contains {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn and(self, other: FilterExpr) -> Self {
        FilterExpr::And {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    pub fn or(self, other: FilterExpr) -> Self {
        FilterExpr::Or {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    pub fn negate(self) -> Self {
        FilterExpr::Not {
            expr: Box::new(self),
        }
    }

    /// Operator tag, identical to the `op` field of the JSON form.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterExpr::Eq { .. } => "eq",
            FilterExpr::NotEq { .. } => "not_eq",
            FilterExpr::Gt { .. } => "gt",
            FilterExpr::Gte { .. } => "gte",
            FilterExpr::Lt { .. } => "lt",
            FilterExpr::Lte { .. } => "lte",
            FilterExpr::In { .. } => "in",
            FilterExpr::NotIn { .. } => "not_in",
            FilterExpr::Contains { .. } => "contains",
            FilterExpr::And { .. } => "and",
            FilterExpr::Or { .. } => "or",
            FilterExpr::Not { .. } => "not",
        }
    }

    /// Metadata key of a leaf; `None` for logical nodes.
    pub fn key(&self) -> Option<&str> {
        match self {
            FilterExpr::Eq { key, .. }
            | FilterExpr::NotEq { key, .. }
            | FilterExpr::Gt { key, .. }
            | FilterExpr::Gte { key, .. }
            | FilterExpr::Lt { key, .. }
            | FilterExpr::Lte { key, .. }
            | FilterExpr::In { key, .. }
            | FilterExpr::NotIn { key, .. }
            | FilterExpr::Contains { key, .. } => Some(key),
            FilterExpr::And { .. } | FilterExpr::Or { .. } | FilterExpr::Not { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.key().is_some()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            FilterExpr::And { left, right } | FilterExpr::Or { left, right } => {
                1 + left.depth().max(right.depth())
            }
            FilterExpr::Not { expr } => 1 + expr.depth(),
            _ => 1,
        }
    }

    /// Distinct keys referenced anywhere in the tree, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        match self {
            FilterExpr::And { left, right } | FilterExpr::Or { left, right } => {
                left.collect_keys(keys);
                right.collect_keys(keys);
            }
            FilterExpr::Not { expr } => expr.collect_keys(keys),
            leaf => keys.extend(leaf.key()),
        }
    }

    /// Checks the tree invariants: every leaf key is non-empty and every
    /// membership leaf carries at least one value.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            FilterExpr::And { left, right } | FilterExpr::Or { left, right } => {
                left.validate()?;
                right.validate()
            }
            FilterExpr::Not { expr } => expr.validate(),
            FilterExpr::In { key, values } | FilterExpr::NotIn { key, values } => {
                if key.is_empty() {
                    return Err(ModelError::EmptyKey);
                }
                if values.is_empty() {
                    return Err(ModelError::EmptyValues { key: key.clone() });
                }
                Ok(())
            }
            leaf => match leaf.key() {
                Some("") => Err(ModelError::EmptyKey),
                _ => Ok(()),
            },
        }
    }

    /// Decodes a filter from its JSON form and validates it.
    pub fn from_json_str(source: &str) -> Result<Self, ModelError> {
        let expr: FilterExpr = serde_json::from_str(source)?;
        expr.validate()?;
        Ok(expr)
    }

    /// Like [`FilterExpr::from_json_str`], but a JSON `null` document decodes
    /// to `None` (no filter).
    pub fn from_json_str_optional(source: &str) -> Result<Option<Self>, ModelError> {
        let expr: Option<FilterExpr> = serde_json::from_str(source)?;
        if let Some(expr) = &expr {
            expr.validate()?;
        }
        Ok(expr)
    }
}

impl std::ops::Not for FilterExpr {
    type Output = FilterExpr;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_compose() {
        let expr = FilterExpr::eq("color", "red")
            .and(FilterExpr::gte("price", 10))
            .or(!FilterExpr::is_in("tag", ["a", "b"]));

        assert_eq!(expr.kind(), "or");
        assert_eq!(expr.depth(), 3);
        assert_eq!(expr.keys(), vec!["color", "price", "tag"]);
        assert!(!expr.is_leaf());
    }

    #[test]
    fn test_json_round_trip_shape() {
        let expr = FilterExpr::eq("color", "red").and(FilterExpr::not_in("size", [1, 2]));
        let json = serde_json::to_value(&expr).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "op": "and",
                "left": {"op": "eq", "key": "color", "value": "red"},
                "right": {"op": "not_in", "key": "size", "values": [1, 2]}
            })
        );
    }

    #[test]
    fn test_from_json_str() {
        let expr = FilterExpr::from_json_str(
            r#"{"op": "not", "expr": {"op": "lt", "key": "price", "value": 9.5}}"#,
        )
        .unwrap();

        assert_eq!(expr, FilterExpr::lt("price", 9.5).negate());
    }

    #[test]
    fn test_from_json_str_unknown_op() {
        let err = FilterExpr::from_json_str(r#"{"op": "like", "key": "a", "value": 1}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_from_json_str_optional_null() {
        assert_eq!(FilterExpr::from_json_str_optional("null").unwrap(), None);
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let expr = FilterExpr::eq("a", 1).and(FilterExpr::eq("", 2));
        assert!(matches!(expr.validate(), Err(ModelError::EmptyKey)));
    }

    #[test]
    fn test_validate_rejects_empty_membership() {
        let expr = FilterExpr::not_in("tag", Vec::<Value>::new()).negate();
        match expr.validate() {
            Err(ModelError::EmptyValues { key }) => assert_eq!(key, "tag"),
            other => panic!("unexpected result: {other:?}"),
        }

        let err = FilterExpr::from_json_str(r#"{"op": "in", "key": "tag", "values": []}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::EmptyValues { .. }));
    }
}
