use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Invalid unified request: {0}")]
    Validation(String),

    #[error("Invalid parameter config: {0}")]
    Config(String),

    #[error("Malformed stream chunk: {0}")]
    ChunkParse(String),

    #[error("No stream transform for provider: {0}")]
    UnsupportedStream(String),

    #[error("Unknown value transform: {0}")]
    UnknownTransform(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
