use thiserror::Error;

/// A serialization error.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
    /// The data to be deserialized was malformed.
    #[error("parse error: {0}")]
    Parse(&'static str),

    /// A JSON document did not match the expected shape.
    #[error("json error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SerializationError {
    fn from(error: serde_json::Error) -> Self {
        SerializationError::Json(error.to_string())
    }
}
