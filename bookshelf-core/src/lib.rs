//! Bookshelf Core Library
//!
//! This crate provides an in-memory book catalog: a [`BookShelf`] holding
//! [`Book`] entries, with stable sorting, grouping by derived keys, title
//! search combined with composable [`BookFilter`] predicates, and a
//! reading-progress summary.

pub mod error;
pub mod filter;
pub mod shelf;
pub mod types;

pub use error::{Result, ShelfError};
pub use filter::{BookFilter, CompositeFilter, PublishedYearFilter};
pub use shelf::{BookShelf, ShelfView};
pub use types::{Book, Progress};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_shelf_creation() {
        let mut shelf = BookShelf::new();
        let date = NaiveDate::from_ymd_opt(2008, 5, 8).unwrap();
        shelf.add([Book::new("Effective Java", "Joshua Bloch", date)]);
        assert_eq!(shelf.books().len(), 1);
        assert_eq!(shelf.books()[0].title(), "Effective Java");
    }
}
