//! Table line rendering
//!
//! Turns columns and rows into fixed-width styled lines. Every cell is
//! padded to its column width, styled by the kind of value it holds, and
//! truncated with `...` when it doesn't fit.

use crate::components::canvas::Canvas;
use crate::model::table::{truncate_to_width, Column, Row, COLUMN_PADDING};
use crate::model::source::TRUNCATION_MARKER;
use crate::model::{classify, CellKind};
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Widest a column may get inside a popup
pub const POPUP_COLUMN_CEILING: usize = 40;

/// Widest a column may get in the results grid
pub const GRID_COLUMN_CEILING: usize = 50;

const COLUMN_SEPARATOR: &str = "│";

/// What to draw and how
pub struct TableLayout<'a> {
    pub columns: &'a [Column],
    /// Upper bound applied to every column width
    pub ceiling: usize,
    /// Index of the first column to draw
    pub col_offset: usize,
}

impl TableLayout<'_> {
    fn visible_columns(&self) -> &[Column] {
        let start = self.col_offset.min(self.columns.len());
        &self.columns[start..]
    }

    fn widths(&self) -> Vec<usize> {
        self.visible_columns()
            .iter()
            .map(|c| c.effective_width(self.ceiling))
            .collect()
    }
}

/// Pad `text` to fill a column of `width` cells, padding included
fn fit_cell(canvas: &dyn Canvas, text: &str, width: usize, right_align: bool) -> String {
    let inner = width.saturating_sub(COLUMN_PADDING);
    let text = truncate_to_width(text, inner);
    let fill = " ".repeat(inner.saturating_sub(canvas.measure(&text)));
    if right_align {
        format!(" {}{} ", fill, text)
    } else {
        format!(" {}{} ", text, fill)
    }
}

fn join_cells(canvas: &dyn Canvas, theme: &Theme, cells: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            spans.push(canvas.paint(COLUMN_SEPARATOR.to_string(), theme.border_style()));
        }
        spans.push(cell);
    }
    Line::from(spans)
}

pub fn header_line(canvas: &dyn Canvas, theme: &Theme, layout: &TableLayout) -> Line<'static> {
    let cells = layout
        .visible_columns()
        .iter()
        .zip(layout.widths())
        .map(|(column, width)| {
            canvas.paint(
                fit_cell(canvas, &column.name, width, false),
                theme.header_style(),
            )
        })
        .collect();
    join_cells(canvas, theme, cells)
}

pub fn separator_line(canvas: &dyn Canvas, theme: &Theme, layout: &TableLayout) -> Line<'static> {
    let separator = layout
        .widths()
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("┼");
    Line::from(canvas.paint(separator, theme.border_style()))
}

/// One data row, or the muted marker for a truncation row
pub fn row_line(
    canvas: &dyn Canvas,
    theme: &Theme,
    layout: &TableLayout,
    row: &Row,
) -> Line<'static> {
    let cells = match row {
        Row::Truncated => {
            return Line::from(canvas.paint(format!(" {}", TRUNCATION_MARKER), theme.muted_style()));
        }
        Row::Cells(cells) => cells,
    };

    let spans = cells
        .iter()
        .skip(layout.col_offset)
        .zip(layout.widths())
        .map(|(cell, width)| {
            let kind = classify(cell);
            // Nulls from an empty string would otherwise render as nothing
            let shown = if kind == CellKind::Null && cell.is_empty() {
                "NULL"
            } else {
                cell.as_str()
            };
            canvas.paint(
                fit_cell(canvas, shown, width, kind.is_right_aligned()),
                theme.cell_style(kind),
            )
        })
        .collect();
    join_cells(canvas, theme, spans)
}

/// Header, separator and one line per row; `selected` indexes into `rows`
pub fn build_table_lines(
    canvas: &dyn Canvas,
    theme: &Theme,
    layout: &TableLayout,
    rows: &[Row],
    selected: Option<usize>,
) -> Vec<Line<'static>> {
    if layout.columns.is_empty() {
        return vec![Line::from(canvas.paint("No data".to_string(), theme.muted_style()))];
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line(canvas, theme, layout));
    lines.push(separator_line(canvas, theme, layout));

    for (i, row) in rows.iter().enumerate() {
        let mut line = row_line(canvas, theme, layout, row);
        if selected == Some(i) {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::canvas::TextCanvas;
    use crate::model::source::from_preview;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_build_table_lines() {
        let table = from_preview("id | name\n1 | Alice\n2 | NULL");
        let layout = TableLayout {
            columns: &table.columns,
            ceiling: POPUP_COLUMN_CEILING,
            col_offset: 0,
        };
        let lines = build_table_lines(&TextCanvas, &Theme::default(), &layout, &table.rows, None);

        assert_eq!(lines.len(), 4);
        assert_eq!(plain(&lines[0]), " id   │ name  ");
        assert_eq!(plain(&lines[1]), "──────┼───────");
        assert_eq!(plain(&lines[2]), "    1 │ Alice ");
        assert_eq!(plain(&lines[3]), "    2 │ NULL  ");
    }

    #[test]
    fn test_cells_styled_by_kind() {
        let theme = Theme::default();
        let table = from_preview("n | b | s\n3.5 | true | x");
        let layout = TableLayout {
            columns: &table.columns,
            ceiling: POPUP_COLUMN_CEILING,
            col_offset: 0,
        };
        let line = row_line(&TextCanvas, &theme, &layout, &table.rows[0]);
        assert_eq!(line.spans[0].style, theme.cell_style(CellKind::Numeric));
        assert_eq!(line.spans[2].style, theme.cell_style(CellKind::Boolean));
        assert_eq!(line.spans[4].style, theme.cell_style(CellKind::Text));
    }

    #[test]
    fn test_truncation_marker_is_muted() {
        let theme = Theme::default();
        let table = from_preview("a | b\n...");
        let layout = TableLayout {
            columns: &table.columns,
            ceiling: POPUP_COLUMN_CEILING,
            col_offset: 0,
        };
        let line = row_line(&TextCanvas, &theme, &layout, &table.rows[0]);
        assert_eq!(plain(&line), " ...");
        assert_eq!(line.spans[0].style, theme.muted_style());
    }

    #[test]
    fn test_long_cells_truncated_at_ceiling() {
        let long = "x".repeat(80);
        let table = from_preview(&format!("c\n{}", long));
        let layout = TableLayout {
            columns: &table.columns,
            ceiling: 10,
            col_offset: 0,
        };
        let line = row_line(&TextCanvas, &Theme::default(), &layout, &table.rows[0]);
        assert_eq!(plain(&line), " xxxxx... ");
    }

    #[test]
    fn test_col_offset_skips_columns() {
        let table = from_preview("a | b\n1 | two");
        let layout = TableLayout {
            columns: &table.columns,
            ceiling: POPUP_COLUMN_CEILING,
            col_offset: 1,
        };
        let lines = build_table_lines(&TextCanvas, &Theme::default(), &layout, &table.rows, None);
        assert_eq!(plain(&lines[0]), " b    ");
        assert_eq!(plain(&lines[2]), " two  ");
    }

    #[test]
    fn test_selected_row_reversed() {
        let table = from_preview("a\n1\n2");
        let layout = TableLayout {
            columns: &table.columns,
            ceiling: POPUP_COLUMN_CEILING,
            col_offset: 0,
        };
        let lines = build_table_lines(&TextCanvas, &Theme::default(), &layout, &table.rows, Some(1));
        assert!(!lines[2].style.add_modifier.contains(Modifier::REVERSED));
        assert!(lines[3].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_no_columns() {
        let table = from_preview("");
        let layout = TableLayout {
            columns: &table.columns,
            ceiling: POPUP_COLUMN_CEILING,
            col_offset: 0,
        };
        let lines = build_table_lines(&TextCanvas, &Theme::default(), &layout, &table.rows, None);
        assert_eq!(plain(&lines[0]), "No data");
    }
}
