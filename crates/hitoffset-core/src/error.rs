use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input events are not sorted by time (first violation at index {index})")]
    UnsortedEvents { index: usize },

    #[error("Targets are not sorted by time (first violation at index {index})")]
    UnsortedTargets { index: usize },

    #[error("No difficulty value available and no fallback configured")]
    MissingDifficulty,

    #[error("Invalid difficulty value: {0}")]
    InvalidDifficulty(f64),

    #[error("Unknown mod: {0}")]
    UnknownMod(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
