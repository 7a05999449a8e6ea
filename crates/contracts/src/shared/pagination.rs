use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page descriptor attached to list responses.
///
/// Pages are 1-based. The total count arrives under a resource-specific key
/// (`totalUsers`, `totalTickets`, ...), all accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default, alias = "totalUsers", alias = "totalTickets", alias = "total")]
    pub total_count: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_prev_page: bool,
}

fn first_page() -> u32 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            limit: 20,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

impl Pagination {
    /// Descriptor for `total_count` items split into pages of `limit`,
    /// positioned on `page` (clamped into range).
    pub fn from_total(total_count: u64, page: u32, limit: u32) -> Self {
        let limit = limit.max(1);
        let total_pages = total_count.div_ceil(limit as u64).max(1) as u32;
        Self {
            current_page: page,
            total_pages,
            total_count,
            limit,
            has_next_page: false,
            has_prev_page: false,
        }
        .normalized()
    }

    /// Restores the descriptor invariants regardless of what the server sent:
    /// `1 <= current_page <= total_pages`, `has_next_page` iff there is a
    /// later page, `has_prev_page` iff there is an earlier one.
    pub fn normalized(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
        self.has_next_page = self.current_page < self.total_pages;
        self.has_prev_page = self.current_page > 1;
        self
    }

    /// Index range of the current page inside a fully loaded list of `len` items.
    pub fn slice_range(&self, len: usize) -> Range<usize> {
        let limit = self.limit.max(1) as usize;
        let start = ((self.current_page.max(1) - 1) as usize * limit).min(len);
        let end = (start + limit).min(len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_clamps_current_page() {
        let p = Pagination {
            current_page: 7,
            total_pages: 3,
            total_count: 55,
            limit: 20,
            has_next_page: true,
            has_prev_page: false,
        }
        .normalized();
        assert_eq!(p.current_page, 3);
        assert!(!p.has_next_page);
        assert!(p.has_prev_page);
    }

    #[test]
    fn test_normalized_empty_result() {
        let p = Pagination {
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            limit: 20,
            has_next_page: true,
            has_prev_page: true,
        }
        .normalized();
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.current_page, 1);
        assert!(!p.has_next_page);
        assert!(!p.has_prev_page);
    }

    #[test]
    fn test_invariants_hold_for_any_input() {
        for current in 0..6u32 {
            for total in 0..6u32 {
                let p = Pagination {
                    current_page: current,
                    total_pages: total,
                    ..Pagination::default()
                }
                .normalized();
                assert!(p.current_page <= p.total_pages);
                assert_eq!(p.has_next_page, p.current_page < p.total_pages);
            }
        }
    }

    #[test]
    fn test_from_total() {
        let p = Pagination::from_total(45, 2, 20);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.current_page, 2);
        assert!(p.has_next_page && p.has_prev_page);
        assert_eq!(p.slice_range(45), 20..40);

        let last = Pagination::from_total(45, 3, 20);
        assert_eq!(last.slice_range(45), 40..45);
    }

    #[test]
    fn test_total_count_aliases() {
        let json = r#"{"currentPage":1,"totalPages":4,"totalUsers":80,"limit":20,"hasNextPage":true,"hasPrevPage":false}"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.total_count, 80);

        let json = r#"{"currentPage":2,"totalPages":2,"totalTickets":30,"limit":20}"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.total_count, 30);
    }
}
