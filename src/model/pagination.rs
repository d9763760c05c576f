//! Fixed-size pagination over row sets

/// Number of pages needed for `len` rows
///
/// An empty row set still has one (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    if len == 0 {
        1
    } else {
        (len + page_size - 1) / page_size
    }
}

/// Advance one page, staying on the last page
pub fn next_page(page: usize, total_pages: usize) -> usize {
    if page + 1 < total_pages {
        page + 1
    } else {
        page.min(total_pages.saturating_sub(1))
    }
}

/// Go back one page, staying on the first page
pub fn prev_page(page: usize) -> usize {
    page.saturating_sub(1)
}

/// One page worth of rows, with enough context to describe it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    pub index: usize,
    pub total_pages: usize,
    /// Offset of the first row on this page
    pub start: usize,
    /// One past the last row on this page
    pub end: usize,
    pub total_rows: usize,
}

impl<T> Page<'_, T> {
    /// `Page 2/5 (11-20 of 47 rows)` followed by `hints`
    pub fn status_line(&self, hints: &str) -> String {
        status_line(self.index, self.total_pages, self.start, self.end, self.total_rows, hints)
    }
}

/// Slice out page `page` of `rows`
///
/// Pages past the end come back empty rather than failing.
pub fn paginate<T>(rows: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let len = rows.len();
    let start = page.saturating_mul(page_size).min(len);
    let end = page
        .saturating_add(1)
        .saturating_mul(page_size)
        .min(len);

    Page {
        rows: &rows[start..end],
        index: page,
        total_pages: total_pages(len, page_size),
        start,
        end,
        total_rows: len,
    }
}

/// `Page {page+1}/{total_pages} ({start+1}-{end} of {total_rows} rows)` followed by `hints`
///
/// A page with no rows to number has no `start-end` range: it reads
/// `Page 1/1 (0 rows)` for an empty table and `Page 2/2 (13 rows)` when the
/// page holds nothing but a truncation marker.
pub fn status_line(
    page: usize,
    total_pages: usize,
    start: usize,
    end: usize,
    total_rows: usize,
    hints: &str,
) -> String {
    if start >= end {
        return format!("Page {}/{} ({} rows){}", page + 1, total_pages, total_rows, hints);
    }
    format!(
        "Page {}/{} ({}-{} of {} rows){}",
        page + 1,
        total_pages,
        start + 1,
        end,
        total_rows,
        hints
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_paginate_last_page_is_short() {
        let rows: Vec<u32> = (0..25).collect();
        let page = paginate(&rows, 10, 2);
        assert_eq!(page.rows, &[20, 21, 22, 23, 24]);
        assert_eq!(page.start, 20);
        assert_eq!(page.end, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let rows: Vec<u32> = (0..5).collect();
        let page = paginate(&rows, 10, 3);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_navigation_clamps() {
        assert_eq!(prev_page(0), 0);
        assert_eq!(prev_page(prev_page(0)), 0);
        assert_eq!(next_page(2, 3), 2);
        assert_eq!(next_page(next_page(2, 3), 3), 2);
        assert_eq!(next_page(0, 3), 1);
        assert_eq!(next_page(0, 1), 0);
        assert_eq!(next_page(0, 0), 0);
    }

    #[test]
    fn test_status_line() {
        let rows: Vec<u32> = (0..47).collect();
        let page = paginate(&rows, 10, 1);
        assert_eq!(
            page.status_line("  n: next"),
            "Page 2/5 (11-20 of 47 rows)  n: next"
        );
    }

    #[test]
    fn test_status_line_without_range() {
        assert_eq!(status_line(1, 2, 13, 13, 13, ""), "Page 2/2 (13 rows)");
    }

    #[test]
    fn test_status_line_empty() {
        let rows: Vec<u32> = Vec::new();
        assert_eq!(paginate(&rows, 10, 0).status_line(""), "Page 1/1 (0 rows)");
    }

    proptest! {
        #[test]
        fn pages_cover_rows_exactly(
            rows in prop::collection::vec(any::<u16>(), 0..200),
            page_size in 1usize..40,
        ) {
            let pages = total_pages(rows.len(), page_size);
            let mut joined = Vec::new();
            for p in 0..pages {
                joined.extend_from_slice(paginate(&rows, page_size, p).rows);
            }
            prop_assert_eq!(joined, rows.clone());
            let expected = if rows.is_empty() { 1 } else { rows.len().div_ceil(page_size) };
            prop_assert_eq!(pages, expected);
        }
    }
}
