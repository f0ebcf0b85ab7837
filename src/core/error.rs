use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaCheckError {
    #[error("Record error at line {line}: {message}")]
    Record { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaCheckError>;
