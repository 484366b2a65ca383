use thiserror::Error;

/// Common error type for arc slider components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid range: min ({min}) must be lower than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid step: {0} (must be a positive number)")]
    InvalidStep(f64),

    #[error("Unknown slider: {0}")]
    UnknownSlider(String),

    #[error("Slider already registered: {0}")]
    DuplicateSlider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the arc slider Error.
pub type Result<T> = std::result::Result<T, Error>;
