//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid props JSON: {0}")]
    InvalidPropsJson(serde_json::Error),

    #[error("Props must be a JSON object")]
    PropsNotAnObject,

    #[error("Invalid site config: {0}")]
    InvalidConfig(serde_json::Error),

    #[error("Serialization failed: {0}")]
    Serialize(serde_json::Error),
}
