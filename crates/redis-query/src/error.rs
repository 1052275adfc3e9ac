use crate::capability::OperatorClass;
use model::schema::FieldType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The expression contains a node kind the query grammar has no form for.
    #[error("Unsupported filter kind: {kind}")]
    UnsupportedFilterKind { kind: String },

    /// A predicate was applied to a field whose type cannot express it.
    #[error("Unsupported {operator} filter on field '{key}' of type {field_type}")]
    UnsupportedFieldType {
        key: String,
        field_type: FieldType,
        operator: OperatorClass,
    },
}
