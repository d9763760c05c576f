//! Viewport windowing for scrollable lists

/// Bounds `(start, end)` of the slice to render around `selected`
///
/// The window is as close to centered on `selected` as the list allows and
/// always spans `min(window_size, total)` items. An empty list yields
/// `(0, 0)`. `window_size` must be positive.
pub fn window(selected: usize, total: usize, window_size: usize) -> (usize, usize) {
    debug_assert!(window_size > 0, "window size must be positive");

    if total == 0 {
        return (0, 0);
    }

    let mut start = selected.saturating_sub(window_size / 2);
    let mut end = start + window_size;

    if end > total {
        end = total;
        start = end.saturating_sub(window_size);
    }

    (start, end)
}
