use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("session JSON serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("session YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("session validation failed: {0}")]
    Core(#[from] CoreError),
}
