//! Pagination metadata returned by list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination metadata accompanying a page of results.
///
/// Invariants (see [`PageInfo::is_consistent`]):
/// - `has_next_page == current_page < total_pages`
/// - `has_previous_page == current_page > 1`
/// - `total_pages == max(1, ceil(total_items / items_per_page))`; an empty
///   result set still displays as one (empty) page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based page number of this result.
    pub current_page: u32,
    /// Total number of pages, floored at 1 for display.
    pub total_pages: u32,
    /// Total matching items across all pages.
    pub total_items: u64,
    /// Page size the result was computed with.
    pub items_per_page: u32,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_previous_page: bool,
}

impl PageInfo {
    /// Compute consistent metadata for a page position.
    ///
    /// A zero `items_per_page` is treated as a single page.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // page count clamped to u32::MAX
    pub const fn compute(current_page: u32, total_items: u64, items_per_page: u32) -> Self {
        let total_pages = if items_per_page == 0 {
            1
        } else {
            let pages = total_items.div_ceil(items_per_page as u64);
            if pages == 0 {
                1
            } else if pages > u32::MAX as u64 {
                u32::MAX
            } else {
                pages as u32
            }
        };
        let current_page = if current_page == 0 { 1 } else { current_page };
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }

    /// Whether the boundary flags and page count match their definitions.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        let expected_pages = if self.items_per_page == 0 {
            1
        } else {
            let pages = self.total_items.div_ceil(self.items_per_page as u64);
            if pages == 0 { 1 } else { pages }
        };
        (self.total_pages as u64) == expected_pages
            && self.has_next_page == (self.current_page < self.total_pages)
            && self.has_previous_page == (self.current_page > 1)
    }
}

/// One page of an admin list result, ordered per the issuing query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The page of items.
    pub items: Vec<T>,
    /// Position metadata.
    pub page: PageInfo,
}

impl<T> Paginated<T> {
    /// An empty first page for a given page size.
    #[must_use]
    pub const fn empty(items_per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            page: PageInfo::compute(1, 0, items_per_page),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_result_is_a_single_empty_page() {
        let info = PageInfo::compute(1, 0, 10);
        assert_eq!(info.total_pages, 1);
        assert!(!info.has_next_page);
        assert!(!info.has_previous_page);
        assert!(info.is_consistent());
    }

    #[test]
    fn boundary_flags_match_position() {
        let first = PageInfo::compute(1, 35, 10);
        assert_eq!(first.total_pages, 4);
        assert!(first.has_next_page);
        assert!(!first.has_previous_page);

        let middle = PageInfo::compute(2, 35, 10);
        assert!(middle.has_next_page);
        assert!(middle.has_previous_page);

        let last = PageInfo::compute(4, 35, 10);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let info = PageInfo::compute(3, 30, 10);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next_page);
    }

    #[test]
    fn zero_page_size_collapses_to_one_page() {
        let info = PageInfo::compute(1, 42, 0);
        assert_eq!(info.total_pages, 1);
        assert!(info.is_consistent());
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let info: PageInfo = serde_json::from_str(
            r#"{
                "currentPage": 2,
                "totalPages": 5,
                "totalItems": 48,
                "itemsPerPage": 10,
                "hasNextPage": true,
                "hasPreviousPage": true
            }"#,
        )
        .unwrap();
        assert_eq!(info.current_page, 2);
        assert_eq!(info.total_items, 48);
        assert!(info.is_consistent());
    }

    proptest! {
        #[test]
        fn computed_metadata_is_always_consistent(
            current in 0u32..1_000,
            total in 0u64..100_000,
            per_page in 0u32..500,
        ) {
            let info = PageInfo::compute(current, total, per_page);
            prop_assert!(info.is_consistent());
            prop_assert!(info.total_pages >= 1);
            prop_assert!(info.current_page >= 1);
        }
    }
}
