//! AND-combination of several filters

use super::BookFilter;
use crate::types::Book;
use std::fmt;

/// Filter combining several member filters with AND semantics
///
/// Every member is evaluated on every call, even after one has already
/// rejected the book, so member side effects are always observed. An
/// empty composite accepts every book (vacuous AND).
#[derive(Default)]
pub struct CompositeFilter {
    filters: Vec<Box<dyn BookFilter>>,
}

impl CompositeFilter {
    /// Create a composite with no member filters
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a member filter
    pub fn add_filter<F>(&mut self, filter: F)
    where
        F: BookFilter + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Number of member filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether this composite has no members
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl BookFilter for CompositeFilter {
    fn apply(&self, book: &Book) -> bool {
        // Run every member before combining, no short-circuit.
        self.filters.iter().fold(true, |all_matched, filter| {
            let matched = filter.apply(book);
            all_matched && matched
        })
    }
}

impl fmt::Debug for CompositeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}
