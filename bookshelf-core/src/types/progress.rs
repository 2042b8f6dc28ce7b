//! Reading progress summary for a shelf

use serde::{Deserialize, Serialize};

/// Percentage summary of a shelf's reading progress
///
/// Derived from the shelf contents on each query, never stored. The
/// `completed` and `to_read` fields are truncated independently, so they
/// may sum to less than 100. `in_progress` is reserved for books that
/// have been started but not finished and is always zero for now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Percentage of books read (started and finished)
    pub completed: u32,

    /// Percentage of books not yet read
    pub to_read: u32,

    /// Percentage of books currently being read (reserved, always zero)
    pub in_progress: u32,
}

impl Progress {
    /// Create a progress summary from its three percentage parts
    pub fn new(completed: u32, to_read: u32, in_progress: u32) -> Self {
        Self {
            completed,
            to_read,
            in_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_creation() {
        let progress = Progress::new(40, 60, 0);
        assert_eq!(progress.completed, 40);
        assert_eq!(progress.to_read, 60);
        assert_eq!(progress.in_progress, 0);
    }

    #[test]
    fn test_progress_serialization() {
        let progress = Progress::new(33, 66, 0);
        let json = serde_json::to_string(&progress).unwrap();
        let deserialized: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(progress, deserialized);
    }
}
