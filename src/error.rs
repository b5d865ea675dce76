use thiserror::Error;

use crate::id_generator::ShapeId;

/// Errors raised by [`crate::ShapeCollection`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// The shape was expected in the collection but is held elsewhere (or was dropped)
    #[error("Shape {0} is not in the collection")]
    NotFound(ShapeId),
}

/// Errors that can occur while loading the application config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_json::Error),
}
