use model::error::ModelError;
use redis_query::FilterError;
use sse::SseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Model(#[from] ModelError),

    #[error("Failed to compile filter: {0}")]
    Compile(#[from] FilterError),

    #[error("Failed to parse event stream: {0}")]
    Stream(#[from] SseError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
