//! Read/unread statistics over the book collection

use super::Book;

/// Counts of read and unread books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
}

/// Read/unread split as percentages of the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportion {
    pub read: f64,
    pub unread: f64,
}

impl LibraryStats {
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|b| b.read_status).count();
        LibraryStats {
            total,
            read,
            unread: total - read,
        }
    }

    /// Percentages for charting, or `None` for an empty library.
    pub fn proportion(&self) -> Option<Proportion> {
        if self.total == 0 {
            return None;
        }
        let total = self.total as f64;
        Some(Proportion {
            read: self.read as f64 * 100.0 / total,
            unread: self.unread as f64 * 100.0 / total,
        })
    }
}
