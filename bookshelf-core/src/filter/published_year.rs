//! Publication-date threshold filter

use super::BookFilter;
use crate::types::Book;
use chrono::NaiveDate;

/// Filter that accepts books by their publication date relative to a year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedYearFilter {
    start_date: NaiveDate,
}

impl PublishedYearFilter {
    /// Build a filter accepting books published strictly after the given
    /// year, i.e. after December 31 of that year. A book published in the
    /// year itself is rejected.
    pub fn after(year: i32) -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

impl BookFilter for PublishedYearFilter {
    fn apply(&self, book: &Book) -> bool {
        book.published_on() > self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_accepts_book_published_after_year() {
        let filter = PublishedYearFilter::after(2007);
        let clean_code = Book::new("Clean Code", "Robert C. Martin", date(2008, 8, 1));
        assert!(filter.apply(&clean_code));
    }

    #[test]
    fn test_rejects_book_published_before_year() {
        let filter = PublishedYearFilter::after(2007);
        let code_complete = Book::new("Code Complete", "Steve McConnel", date(2004, 6, 9));
        assert!(!filter.apply(&code_complete));
    }

    #[test]
    fn test_rejects_book_published_in_the_year_itself() {
        let filter = PublishedYearFilter::after(2008);
        let clean_code = Book::new("Clean Code", "Robert C. Martin", date(2008, 8, 1));
        assert!(!filter.apply(&clean_code));
    }
}
