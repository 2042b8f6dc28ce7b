//! The Book type - a single catalog entry

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single book on a shelf
///
/// Constructed once with its bibliographic fields; the two reading dates
/// are filled in later, each by its own mutating call. A book counts as
/// read only when both reading dates are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier for this copy
    id: Uuid,

    /// Book title
    title: String,

    /// Author name
    author: String,

    /// Publication date
    published_on: NaiveDate,

    /// Date the reader started this book, if they have
    started_reading_on: Option<NaiveDate>,

    /// Date the reader finished this book, if they have
    finished_reading_on: Option<NaiveDate>,
}

impl Book {
    /// Create a new book with the given title, author and publication date
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            published_on,
            started_reading_on: None,
            finished_reading_on: None,
        }
    }

    /// Unique identifier for this copy
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the book title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the author name
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the publication date
    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }

    /// Date the reader started this book, if set
    pub fn started_reading_on(&self) -> Option<NaiveDate> {
        self.started_reading_on
    }

    /// Date the reader finished this book, if set
    pub fn finished_reading_on(&self) -> Option<NaiveDate> {
        self.finished_reading_on
    }

    /// Record the date reading started
    pub fn start_reading_on(&mut self, date: NaiveDate) {
        self.started_reading_on = Some(date);
    }

    /// Record the date reading finished
    pub fn finish_reading_on(&mut self, date: NaiveDate) {
        self.finished_reading_on = Some(date);
    }

    /// Whether this book has been read (both reading dates recorded)
    pub fn is_read(&self) -> bool {
        self.started_reading_on.is_some() && self.finished_reading_on.is_some()
    }
}
