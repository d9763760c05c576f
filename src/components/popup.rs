//! Popup component
//!
//! Renders the modal box and owns its input contract: while visible the
//! popup swallows every key, reacting only to dismiss and page keys.

use crate::action::Action;
use crate::component::Component;
use crate::components::canvas::Canvas;
use crate::components::table::{build_table_lines, TableLayout, POPUP_COLUMN_CEILING};
use crate::keymap::KeyMap;
use crate::model::{paginate, pagination, Popup};
use crate::theme::Theme;
use ratatui::{
    layout::Size,
    text::{Line, Text},
};

/// Border plus one column of breathing room on each side
const BOX_CHROME_WIDTH: usize = 4;
const BOX_CHROME_HEIGHT: usize = 2;

impl Popup {
    /// Feed a key to the popup
    ///
    /// A hidden popup ignores the key. A visible one consumes it either way;
    /// keys it has no use for change nothing.
    pub fn capture(self, key: &str, keymap: &KeyMap) -> Self {
        match self.handle_key(key, keymap) {
            Some(action) => self.update(&action),
            None => self,
        }
    }

    fn body_lines(&self, canvas: &dyn Canvas, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = match self.table() {
            Some(table) => {
                let page = paginate(&table.rows, self.page_size(), self.page());
                let layout = TableLayout {
                    columns: &table.columns,
                    ceiling: POPUP_COLUMN_CEILING,
                    col_offset: 0,
                };
                let mut lines = build_table_lines(canvas, theme, &layout, page.rows, None);

                // Row numbers count data rows only
                let data_before = |i: usize| {
                    table.rows[..i].iter().filter(|r| !r.is_truncated()).count()
                };
                let status = pagination::status_line(
                    page.index,
                    page.total_pages,
                    data_before(page.start),
                    data_before(page.end),
                    table.data_row_count(),
                    self.hints(),
                );
                lines.push(Line::default());
                lines.push(Line::from(canvas.paint(status, theme.secondary_style())));
                lines
            }
            None => self
                .content()
                .lines()
                .map(|l| Line::from(canvas.paint(l.to_string(), theme.text_style())))
                .collect(),
        };

        if !self.footer().is_empty() {
            lines.push(Line::from(
                canvas.paint(self.footer().to_string(), theme.secondary_style()),
            ));
        }

        // One column of padding inside the border
        lines
            .into_iter()
            .map(|line| {
                let mut spans = vec![canvas.paint(" ".to_string(), line.style)];
                spans.extend(line.spans);
                Line::from(spans).style(line.style)
            })
            .collect()
    }

    /// Size the box asks for before the screen clamps it
    fn requested_size(&self, canvas: &dyn Canvas, lines: &[Line<'static>]) -> Size {
        let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let title_width = canvas.measure(self.title()) + 2;
        let width = content_width.max(title_width) + BOX_CHROME_WIDTH - 1;
        let height = lines.len() + BOX_CHROME_HEIGHT;
        Size::new(
            width.min(u16::MAX as usize) as u16,
            height.min(u16::MAX as usize) as u16,
        )
    }
}

impl Component for Popup {
    /// Only the fixed dismiss and page keys reach an open popup; custom
    /// bindings never change it.
    fn handle_key(&self, key: &str, _keymap: &KeyMap) -> Option<Action> {
        if !self.is_visible() {
            return None;
        }
        if KeyMap::is_dismiss(key) {
            return Some(Action::Dismiss);
        }
        KeyMap::popup_page(key)
    }

    fn update(self, action: &Action) -> Self {
        match action {
            Action::Dismiss => self.hide(),
            Action::NextPage => self.next_page(),
            Action::PrevPage => self.prev_page(),
            Action::Resize(w, h) => self.resize(*w, *h),
            _ => self,
        }
    }

    /// The framed box, already clamped to the popup's size limits
    fn view(&self, canvas: &dyn Canvas, theme: &Theme) -> Text<'static> {
        if !self.is_visible() {
            return Text::default();
        }

        let lines = self.body_lines(canvas, theme);
        let requested = self.requested_size(canvas, &lines);
        let size = Size::new(
            requested.width.min(self.max_width()),
            requested.height.min(self.max_height()),
        );

        let title = Line::from(canvas.paint(format!(" {} ", self.title()), theme.title_style()));
        canvas.frame(Text::from(lines), title, theme.border_style(), size)
    }
}
