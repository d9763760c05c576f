//! Table data model
//!
//! `TableData` is the single shape every table source converges on.
//! Rows are normalized to the column count when the table is assembled,
//! so renderers can index cells by column position without checking.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Padding added to the widest value of every column
pub const COLUMN_PADDING: usize = 2;

/// No column is rendered narrower than this
pub const MIN_COLUMN_WIDTH: usize = 6;

/// Regex to match ANSI escape codes
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap()
});

/// Strip ANSI escape codes from a string
pub fn strip_ansi_codes(s: &str) -> String {
    ANSI_REGEX.replace_all(s, "").to_string()
}

/// Width of a string in terminal cells, ignoring escape codes
pub fn display_width(s: &str) -> usize {
    if s.contains('\x1b') {
        strip_ansi_codes(s).width()
    } else {
        s.width()
    }
}

/// Cut a string down to `width` cells, marking the cut with `...`
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }

    let budget = width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute the raw display width of every column
///
/// Each width is the widest of the header and every cell in that column,
/// plus [`COLUMN_PADDING`]. Rows shorter than the header list are fine;
/// the missing cells simply don't contribute. No clamping happens here.
pub fn column_widths<R: AsRef<[String]>>(headers: &[String], rows: &[R]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();

    for row in rows {
        for (i, cell) in row.as_ref().iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(display_width(cell));
            }
        }
    }

    widths.into_iter().map(|w| w + COLUMN_PADDING).collect()
}

/// Same as [`column_widths`], keyed by header name
///
/// When a header repeats, the wider of the two columns wins.
pub fn width_map<R: AsRef<[String]>>(headers: &[String], rows: &[R]) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (header, width) in headers.iter().zip(column_widths(headers, rows)) {
        let entry = map.entry(header.clone()).or_insert(0);
        *entry = (*entry).max(width);
    }
    map
}

/// Apply a floor and a ceiling to a raw column width
pub fn clamp_width(raw: usize, floor: usize, ceiling: usize) -> usize {
    raw.max(floor).min(ceiling.max(floor))
}

/// A display column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub width: usize,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width: width.max(1),
            max_width: None,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Width to render with under a caller-specific ceiling
    pub fn effective_width(&self, ceiling: usize) -> usize {
        let cap = self.max_width.map_or(ceiling, |m| m.min(ceiling));
        clamp_width(self.width, MIN_COLUMN_WIDTH, cap)
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Cells(Vec<String>),
    /// Upstream cut the data short here
    Truncated,
}

impl Row {
    pub fn cells(&self) -> &[String] {
        match self {
            Row::Cells(cells) => cells,
            Row::Truncated => &[],
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Row::Truncated)
    }
}

impl AsRef<[String]> for Row {
    fn as_ref(&self) -> &[String] {
        self.cells()
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Row::Cells(cells)
    }
}

/// Columns plus rows, every data row exactly as wide as the column list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl TableData {
    /// Assemble a table, padding short rows and dropping surplus cells
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let count = headers.len();
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|row| match row {
                Row::Cells(mut cells) => {
                    if cells.len() != count {
                        tracing::trace!(
                            expected = count,
                            got = cells.len(),
                            "normalizing ragged row"
                        );
                        cells.resize(count, String::new());
                    }
                    Row::Cells(cells)
                }
                Row::Truncated => Row::Truncated,
            })
            .collect();

        let widths = column_widths(&headers, &rows);
        let columns = headers
            .into_iter()
            .zip(widths)
            .map(|(name, width)| Column::new(name, width.max(MIN_COLUMN_WIDTH)))
            .collect();

        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Cap every column at `max_width`
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.columns = self
            .columns
            .into_iter()
            .map(|c| c.with_max_width(max_width))
            .collect();
        self
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// A table without columns has nothing to show
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows carrying cells (truncation markers excluded)
    pub fn data_row_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_truncated()).count()
    }

    /// Keep rows where any cell contains `query`, ignoring case
    ///
    /// Columns keep their widths so the grid doesn't jump while filtering.
    pub fn filtered(&self, query: &str) -> TableData {
        let needle = query.to_lowercase();
        let rows = self
            .rows
            .iter()
            .filter(|row| match row {
                Row::Cells(cells) => cells.iter().any(|c| c.to_lowercase().contains(&needle)),
                Row::Truncated => true,
            })
            .cloned()
            .collect();

        TableData {
            columns: self.columns.clone(),
            rows,
        }
    }
}
