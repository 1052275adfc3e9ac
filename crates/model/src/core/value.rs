use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Scalar carried by a filter leaf or stored as a metadata entry.
///
/// Deserializes from plain JSON scalars: `true`, `42`, `4.2`, `"red"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::String(_) => None,
            Value::Boolean(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Orders two values of compatible kinds. Integers and floats compare
    /// numerically with each other; any other mixed pair is unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)),
            (String(a), String(b)) => Some(a.cmp(b)),
            (Boolean(a), Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn equal(&self, other: &Value) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// Raw rendering: no quoting or escaping is applied, strings are written
/// verbatim and floats use the shortest representation that round-trips.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw() {
        assert_eq!(Value::from(10).to_string(), "10");
        assert_eq!(Value::from(-3).to_string(), "-3");
        assert_eq!(Value::from(10.5).to_string(), "10.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from("red apple").to_string(), "red apple");
        assert_eq!(Value::from("say \"hi\"").to_string(), "say \"hi\"");
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(
            Value::Int(2).compare(&Value::Float(2.5)),
            Some(Ordering::Less)
        );
        assert!(Value::Float(3.0).equal(&Value::Int(3)));
        assert_eq!(Value::Int(1).compare(&Value::from("1")), None);
        assert_eq!(Value::from(true).compare(&Value::Int(1)), None);
    }

    #[test]
    fn test_deserialize_untagged_scalars() {
        let values: Vec<Value> = serde_json::from_str(r#"[true, 42, 4.25, "red"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Boolean(true),
                Value::Int(42),
                Value::Float(4.25),
                Value::String("red".to_string()),
            ]
        );
    }
}
