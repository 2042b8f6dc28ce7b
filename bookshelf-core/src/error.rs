//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all bookshelf operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShelfError {
    /// Returned when a caller tries to mutate the read-only view
    /// handed out by [`BookShelf::books`](crate::shelf::BookShelf::books).
    #[error("shelf view is read-only and cannot be modified")]
    ReadOnlyView,
}
