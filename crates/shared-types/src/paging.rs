//! Pure page math for the client-side transaction pager.
//!
//! The dashboard never asks the backend for pages — it slices the full
//! transaction list locally, 1-based.

/// Transactions shown per dashboard page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Number of pages needed for `total_items` at `per_page` items each.
///
/// Zero items yield zero pages (the pager renders nothing).
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Half-open index range `[start, end)` of the items visible on `page`
/// (1-based). Out-of-range pages clamp to an empty slice at the end.
pub fn page_bounds(total_items: usize, page: usize, per_page: usize) -> (usize, usize) {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    (start, end)
}

/// Slice of `items` visible on `page` (1-based).
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let (start, end) = page_bounds(items.len(), page, per_page);
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn twenty_three_items_split_into_three_pages() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(page_bounds(23, 1, 10), (0, 10));
        assert_eq!(page_bounds(23, 2, 10), (10, 20));
        assert_eq!(page_bounds(23, 3, 10), (20, 23));
        assert_eq!(page_slice(&items, 3, 10), &[20, 21, 22]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(page_slice(&items, 4, 10), &[] as &[usize]);
        assert_eq!(page_slice(&items, 99, 10), &[] as &[usize]);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let items: Vec<usize> = (0..5).collect();
        assert_eq!(page_slice(&items, 0, 10), items.as_slice());
    }

    #[test]
    fn zero_per_page_yields_nothing() {
        assert_eq!(total_pages(23, 0), 0);
        assert_eq!(page_bounds(23, 1, 0), (0, 0));
    }
}
