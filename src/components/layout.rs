//! Overlay placement
//!
//! Centers a block on the screen and composites it over the background.

use crate::components::canvas::Canvas;
use crate::model::popup::SCREEN_MARGIN;
use ratatui::{
    layout::{Rect, Size},
    text::Text,
};

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Area an overlay of `requested` size gets on `screen`
///
/// Each dimension is clamped to the screen minus [`SCREEN_MARGIN`] so the
/// box never touches the terminal edges.
pub fn overlay_area(requested: Size, screen: Size) -> Rect {
    let width = requested.width.min(screen.width.saturating_sub(SCREEN_MARGIN));
    let height = requested.height.min(screen.height.saturating_sub(SCREEN_MARGIN));
    centered_popup(Rect::new(0, 0, screen.width, screen.height), width, height)
}

/// Composite an optional overlay over the background
///
/// Without an overlay the background comes back unchanged.
pub fn composite(
    canvas: &dyn Canvas,
    background: &Text<'static>,
    overlay: Option<&Text<'static>>,
    requested: Size,
    screen: Size,
) -> Text<'static> {
    match overlay {
        None => background.clone(),
        Some(block) => canvas.place(background, block, overlay_area(requested, screen), screen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::canvas::{to_plain, TextCanvas};

    #[test]
    fn test_centered_popup() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn test_centered_popup_larger_than_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_popup(area, 40, 30), Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_overlay_area_clamps_to_margin() {
        let area = overlay_area(Size::new(200, 100), Size::new(80, 24));
        assert_eq!(area, Rect::new(2, 2, 76, 20));
    }

    #[test]
    fn test_overlay_area_small_request() {
        let area = overlay_area(Size::new(20, 6), Size::new(80, 24));
        assert_eq!(area, Rect::new(30, 9, 20, 6));
    }

    #[test]
    fn test_composite_without_overlay_is_identity() {
        let background = Text::from("row one\nrow two");
        let out = composite(
            &TextCanvas,
            &background,
            None,
            Size::new(10, 2),
            Size::new(80, 24),
        );
        assert_eq!(out, background);
    }

    #[test]
    fn test_composite_centers_block() {
        let background = Text::from(vec![".........."; 8].join("\n"));
        let block = Text::from("AB\nCD");
        let out = composite(
            &TextCanvas,
            &background,
            Some(&block),
            Size::new(2, 2),
            Size::new(10, 8),
        );
        let plain = to_plain(&out);
        let rows: Vec<&str> = plain.lines().collect();
        assert_eq!(rows[2], "..........");
        assert_eq!(rows[3], "....AB....");
        assert_eq!(rows[4], "....CD....");
    }
}
