use thiserror::Error;

#[derive(Error, Debug)]
pub enum KingmanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KingmanResult<T> = Result<T, KingmanError>;
