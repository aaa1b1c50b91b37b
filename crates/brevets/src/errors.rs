use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrevetError {
    #[error("Invalid control distance: {0} km")]
    InvalidDistance(f64),

    #[error("Invalid brevet distance: {0} km (expected 200, 300, 400, 600 or 1000)")]
    InvalidBrevetClass(f64),

    #[error("Malformed timestamp {input:?}: {reason}")]
    MalformedTimestamp { input: String, reason: String },

    #[error("Timestamp formatting error: {0}")]
    Format(#[from] time::error::Format),

    #[error("Control time out of range")]
    OutOfRange,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
