use super::models::BookId;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by catalog operations.
///
/// `Validation` and `NotFound` are recovered by the interface as a message
/// to the user. `Persistence` means the data file itself could not be used.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),

    #[error("book with ID {0} not found")]
    NotFound(BookId),

    #[error("storage error for '{}': {reason}", .path.display())]
    Persistence { path: PathBuf, reason: String },
}

impl CatalogError {
    pub fn persistence(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CatalogError::Persistence {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
