//! Offset cursor for the paged alert registry.
//!
//! The registry endpoint decides the page size itself; the client only
//! chooses where the next page starts. After every page the cursor adopts
//! the server-reported `offset`, `length` and `total` (the total may move
//! while paging) and asks for the page at `offset + length`.
//!
//! Invariants:
//! - A fresh cursor reports `total = 1` so the first page is always fetched.
//! - Paging ends once `offset + length >= total`.
//! - A page that does not move the end of the fetched range forward while
//!   records are still outstanding is rejected with
//!   [`ClientError::PaginationStalled`]; looping on it would never finish.

use crate::error::{ClientError, Result};
use crate::models::QueryMeta;

/// Position within the alert registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    offset: usize,
    length: usize,
    total: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    /// Cursor positioned before the first page.
    pub fn new() -> Self {
        Self {
            offset: 0,
            length: 0,
            total: 1,
        }
    }

    /// Whether another page must be requested.
    pub fn has_more(&self) -> bool {
        self.end() < self.total
    }

    /// Offset to request next.
    pub fn next_offset(&self) -> usize {
        self.end()
    }

    /// Latest total reported by the server.
    pub fn total(&self) -> usize {
        self.total
    }

    fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// Adopt the metadata of the page just received.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::PaginationStalled`] when records remain but the
    /// page is empty or ends at or before the previously fetched range.
    pub fn advance(&mut self, query: &QueryMeta) -> Result<()> {
        let previous_end = self.end();
        let next = Self {
            offset: query.offset,
            length: query.length,
            total: query.total,
        };

        if next.has_more() && (next.length == 0 || next.end() <= previous_end) {
            return Err(ClientError::PaginationStalled {
                offset: next.offset,
                length: next.length,
                total: next.total,
            });
        }

        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(offset: usize, length: usize, total: usize) -> QueryMeta {
        QueryMeta {
            offset,
            length,
            found: None,
            total,
        }
    }

    #[test]
    fn test_fresh_cursor_requests_first_page() {
        let cursor = PageCursor::new();
        assert!(cursor.has_more());
        assert_eq!(cursor.next_offset(), 0);
    }

    #[test]
    fn test_single_page_completes() {
        let mut cursor = PageCursor::new();
        cursor.advance(&meta(0, 3, 3)).unwrap();
        assert!(!cursor.has_more());
    }

    #[test]
    fn test_empty_registry_completes() {
        let mut cursor = PageCursor::new();
        cursor.advance(&meta(0, 0, 0)).unwrap();
        assert!(!cursor.has_more());
    }

    #[test]
    fn test_multi_page_advances_offset() {
        let mut cursor = PageCursor::new();
        cursor.advance(&meta(0, 100, 250)).unwrap();
        assert_eq!(cursor.next_offset(), 100);
        cursor.advance(&meta(100, 100, 250)).unwrap();
        assert_eq!(cursor.next_offset(), 200);
        cursor.advance(&meta(200, 50, 250)).unwrap();
        assert!(!cursor.has_more());
    }

    #[test]
    fn test_total_shrinking_mid_run_completes() {
        let mut cursor = PageCursor::new();
        cursor.advance(&meta(0, 100, 250)).unwrap();
        cursor.advance(&meta(100, 50, 150)).unwrap();
        assert!(!cursor.has_more());
        assert_eq!(cursor.total(), 150);
    }

    #[test]
    fn test_zero_length_before_total_is_stalled() {
        let mut cursor = PageCursor::new();
        cursor.advance(&meta(0, 100, 250)).unwrap();
        let err = cursor.advance(&meta(100, 0, 250)).unwrap_err();
        assert!(matches!(
            err,
            ClientError::PaginationStalled {
                offset: 100,
                length: 0,
                total: 250
            }
        ));
        // The rejected page is not adopted.
        assert_eq!(cursor.next_offset(), 100);
    }

    #[test]
    fn test_zero_length_first_page_is_stalled() {
        let mut cursor = PageCursor::new();
        assert!(cursor.advance(&meta(0, 0, 5)).is_err());
    }

    #[test]
    fn test_repeated_page_is_stalled() {
        let mut cursor = PageCursor::new();
        cursor.advance(&meta(0, 100, 250)).unwrap();
        assert!(cursor.advance(&meta(0, 100, 250)).is_err());
    }
}
