//! The BookShelf collection and its queries

use crate::error::{Result, ShelfError};
use crate::filter::BookFilter;
use crate::types::{Book, Progress};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Deref;

/// An insertion-ordered collection of books
///
/// The shelf owns its books and never mutates them; queries that reorder
/// or narrow the collection return fresh snapshots, leaving the stored
/// insertion order intact. Duplicates are allowed and nothing is ever
/// removed.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookShelf {
    books: Vec<Book>,
}

impl BookShelf {
    /// Create an empty shelf
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Get a read-only view of the shelf in insertion order
    ///
    /// The view rejects mutation attempts with
    /// [`ShelfError::ReadOnlyView`]; the shelf itself is unaffected.
    pub fn books(&self) -> ShelfView<'_> {
        ShelfView { books: &self.books }
    }

    /// Append zero or more books, in argument order
    pub fn add<I>(&mut self, books: I)
    where
        I: IntoIterator<Item = Book>,
    {
        for book in books {
            tracing::debug!(title = book.title(), "adding book to shelf");
            self.books.push(book);
        }
    }

    /// Get the shelf's books sorted lexicographically by title
    ///
    /// Returns a new sequence; the stored insertion order is untouched.
    pub fn arrange(&self) -> Vec<Book> {
        self.arrange_by(|a, b| a.title().cmp(b.title()))
    }

    /// Get the shelf's books sorted by a caller-supplied criteria
    ///
    /// The sort is stable: books the criteria considers equal keep their
    /// insertion order relative to each other.
    pub fn arrange_by<F>(&self, criteria: F) -> Vec<Book>
    where
        F: Fn(&Book, &Book) -> Ordering,
    {
        let mut arranged = self.books.clone();
        arranged.sort_by(|a, b| criteria(a, b));
        arranged
    }

    /// Partition the shelf's books by a derived key
    ///
    /// Every book lands in exactly one bucket; within a bucket, books keep
    /// their insertion order. Keys no book maps to are absent.
    pub fn group_by<K, F>(&self, key_fn: F) -> HashMap<K, Vec<Book>>
    where
        K: Eq + Hash,
        F: Fn(&Book) -> K,
    {
        let mut groups: HashMap<K, Vec<Book>> = HashMap::new();
        for book in &self.books {
            groups.entry(key_fn(book)).or_default().push(book.clone());
        }
        groups
    }

    /// Partition the shelf's books by publication year
    pub fn group_by_publication_year(&self) -> HashMap<i32, Vec<Book>> {
        self.group_by(|book| book.published_on().year())
    }

    /// Summarize reading progress over the current books
    ///
    /// With no read books at all (including the empty shelf) the summary
    /// is 0% completed, 100% to-read. Both percentages truncate toward
    /// zero independently, so they need not sum to 100.
    pub fn progress(&self) -> Progress {
        let read = self.books.iter().filter(|book| book.is_read()).count();
        if read == 0 {
            return Progress::new(0, 100, 0);
        }
        let total = self.books.len();
        let completed = read * 100 / total;
        let to_read = (total - read) * 100 / total;
        Progress::new(completed as u32, to_read as u32, 0)
    }

    /// Find books whose title contains the given text, case-insensitively
    /// on the title side
    ///
    /// Titles are lowercased before matching; the query is used verbatim.
    pub fn find_books_by_title(&self, title: &str) -> Vec<Book> {
        self.find_books_by_title_matching(title, &|_: &Book| true)
    }

    /// Find books whose title contains the given text and which a filter
    /// accepts
    ///
    /// The filter only sees books whose title already matched.
    pub fn find_books_by_title_matching<F>(&self, title: &str, filter: &F) -> Vec<Book>
    where
        F: BookFilter + ?Sized,
    {
        self.books
            .iter()
            .filter(|book| book.title().to_lowercase().contains(title))
            .filter(|book| filter.apply(book))
            .cloned()
            .collect()
    }
}

/// Read-only view over a shelf's books
///
/// Dereferences to a slice for reading; the mutating entry points always
/// fail without touching the underlying shelf.
#[derive(Debug, Clone, Copy)]
pub struct ShelfView<'a> {
    books: &'a [Book],
}

impl<'a> ShelfView<'a> {
    /// The books as a plain slice, borrowed from the shelf itself
    pub fn as_slice(&self) -> &'a [Book] {
        self.books
    }

    /// Rejected: the view cannot grow
    pub fn push(&mut self, _book: Book) -> Result<()> {
        Err(ShelfError::ReadOnlyView)
    }

    /// Rejected: the view cannot shrink
    pub fn remove(&mut self, _index: usize) -> Result<Book> {
        Err(ShelfError::ReadOnlyView)
    }
}

impl Deref for ShelfView<'_> {
    type Target = [Book];

    fn deref(&self) -> &Self::Target {
        self.books
    }
}

impl<'a> IntoIterator for ShelfView<'a> {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_shelf_is_empty() {
        let shelf = BookShelf::new();
        assert!(shelf.books().is_empty());
    }

    #[test]
    fn test_add_preserves_argument_order() {
        let first = Book::new("Effective Java", "Joshua Bloch", date(2008, 5, 8));
        let second = Book::new("Code Complete", "Steve McConnel", date(2004, 6, 9));

        let mut shelf = BookShelf::new();
        shelf.add([first.clone(), second.clone()]);

        assert_eq!(shelf.books().as_slice(), &[first, second]);
    }

    #[test]
    fn test_shelf_serialization() {
        let mut shelf = BookShelf::new();
        shelf.add([Book::new("Refactoring", "Martin Fowler", date(2002, 3, 9))]);

        let json = serde_json::to_string(&shelf).unwrap();
        let deserialized: BookShelf = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.books().as_slice(), shelf.books().as_slice());
    }
}
