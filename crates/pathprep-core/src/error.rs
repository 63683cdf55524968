use thiserror::Error;

/// Top-level error type shared by the pathprep crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathprepError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Missing attribute {name} on {element}")]
    MissingAttribute { element: String, name: String },
}

pub type Result<T> = std::result::Result<T, PathprepError>;
