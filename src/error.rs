//! Error types for postmd.

use thiserror::Error;

/// Result type for postmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around rendering.
///
/// Parsing and rendering themselves never fail; only reading input and
/// looking posts up can.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No post body is registered under the requested identifier.
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// A post file name could not be turned into an identifier.
    #[error("Invalid post path: {0}")]
    InvalidPostPath(String),
}
