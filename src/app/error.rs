use thiserror::Error;

#[derive(Error, Debug)]
pub enum TldwatchError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Schema init error: {0}")]
    SchemaInit(String),

    #[error("Prepare error: {0}")]
    Prepare(rusqlite::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TldwatchError>;
