use thiserror::Error;

/// Errors on the knowledge-base load path. Query resolution itself never
/// fails: missing data degrades to placeholder text or the fallback answer.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Knowledge base parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
