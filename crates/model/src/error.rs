use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("filter key must not be empty")]
    EmptyKey,

    #[error("membership filter on '{key}' has no values")]
    EmptyValues { key: String },

    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),

    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
