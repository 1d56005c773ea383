use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StudioError {
    #[error("Model error: {0}")]
    Model(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        StudioError::Serialization(e.to_string())
    }
}
