//! Error types for the pathprep-generate crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Graph error: {0}")]
    Graph(#[from] pathprep_graph::GraphError),

    #[error("Attribute error: {0}")]
    Attribute(#[from] pathprep_core::PathprepError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
