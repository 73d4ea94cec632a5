//! Error types for page tree operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockModelError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Page document has no body root")]
    MissingRoot,

    #[error("Page document has a second body root: {0}")]
    DuplicateRoot(String),

    #[error("The root block cannot be removed")]
    RootRemoval,

    #[error("Block cannot have children: {0}")]
    CannotHaveChildren(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlockModelError>;
