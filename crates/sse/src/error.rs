use thiserror::Error;

#[derive(Error, Debug)]
pub enum SseError {
    #[error("Failed to read event stream: {0}")]
    Io(#[from] std::io::Error),
}
