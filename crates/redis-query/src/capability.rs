//! Which predicate classes each field type can express.

use crate::error::FilterError;
use model::schema::FieldType;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `Eq` / `NotEq`
    Equality,
    /// `Gt` / `Gte` / `Lt` / `Lte`
    Range,
    /// `In` / `NotIn`
    Membership,
}

impl OperatorClass {
    pub const ALL: [OperatorClass; 3] = [
        OperatorClass::Equality,
        OperatorClass::Range,
        OperatorClass::Membership,
    ];
}

impl fmt::Display for OperatorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorClass::Equality => f.write_str("equality"),
            OperatorClass::Range => f.write_str("range"),
            OperatorClass::Membership => f.write_str("membership"),
        }
    }
}

/// Operator classes the query grammar can express for `field_type`.
pub fn supported_operators(field_type: FieldType) -> &'static [OperatorClass] {
    match field_type {
        FieldType::Numeric => &[OperatorClass::Equality, OperatorClass::Range],
        FieldType::Tag | FieldType::Text => &[OperatorClass::Equality, OperatorClass::Membership],
        FieldType::Geo | FieldType::Vector => &[],
    }
}

pub fn supports(field_type: FieldType, operator: OperatorClass) -> bool {
    supported_operators(field_type).contains(&operator)
}

/// Fails with [`FilterError::UnsupportedFieldType`] when `key` (resolved to
/// `field_type`) cannot take an `operator` predicate.
pub fn require(key: &str, field_type: FieldType, operator: OperatorClass) -> Result<(), FilterError> {
    if supports(field_type, operator) {
        Ok(())
    } else {
        Err(unsupported(key, field_type, operator))
    }
}

pub fn unsupported(key: &str, field_type: FieldType, operator: OperatorClass) -> FilterError {
    FilterError::UnsupportedFieldType {
        key: key.to_string(),
        field_type,
        operator,
    }
}
