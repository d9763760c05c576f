//! Results grid component
//!
//! The background view: the current result set with a selected row,
//! horizontal column scrolling and an optional row filter. Only the rows
//! around the selection are rendered.

use crate::action::Action;
use crate::component::Component;
use crate::components::canvas::Canvas;
use crate::components::table::{build_table_lines, TableLayout, GRID_COLUMN_CEILING};
use crate::keymap::KeyMap;
use crate::model::{source, viewport, TableData};
use crate::theme::Theme;
use ratatui::text::{Line, Text};

/// Header, separator and status line
pub const GRID_CHROME_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    source: TableData,
    shown: TableData,
    filter: Option<String>,
    selected: usize,
    col_offset: usize,
    /// Data rows that fit on screen
    height: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(TableData::empty())
    }
}

impl TableView {
    pub fn new(table: TableData) -> Self {
        Self {
            shown: table.clone(),
            source: table,
            filter: None,
            selected: 0,
            col_offset: 0,
            height: 10,
        }
        .snap_selection()
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height.max(1);
        self
    }

    /// Replace the data, keeping the current filter
    pub fn set_table(self, table: TableData) -> Self {
        let filter = self.filter.clone();
        Self {
            source: table,
            ..self
        }
        .with_filter(filter)
    }

    /// Filter rows by a case-insensitive substring; `None` or empty shows all
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|f| !f.is_empty());
        self.shown = match &self.filter {
            Some(query) => self.source.filtered(query),
            None => self.source.clone(),
        };
        self.selected = self.selected.min(self.shown.rows.len().saturating_sub(1));
        tracing::trace!(filter = ?self.filter, rows = self.shown.rows.len(), "grid filter applied");
        self.snap_selection()
    }

    fn is_data(&self, index: usize) -> bool {
        matches!(self.shown.rows.get(index), Some(row) if !row.is_truncated())
    }

    /// Move off a truncation marker, preferring the row above
    fn snap_selection(mut self) -> Self {
        if !self.is_data(self.selected) {
            let len = self.shown.rows.len();
            if let Some(i) = (0..self.selected)
                .rev()
                .find(|&i| self.is_data(i))
                .or_else(|| (self.selected..len).find(|&i| self.is_data(i)))
            {
                self.selected = i;
            }
        }
        self
    }

    pub fn table(&self) -> &TableData {
        &self.shown
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    // Truncation markers are never selected

    pub fn move_up(mut self) -> Self {
        if let Some(i) = (0..self.selected).rev().find(|&i| self.is_data(i)) {
            self.selected = i;
        }
        self
    }

    pub fn move_down(mut self) -> Self {
        let len = self.shown.rows.len();
        if let Some(i) = (self.selected + 1..len).find(|&i| self.is_data(i)) {
            self.selected = i;
        }
        self
    }

    pub fn page_down(mut self) -> Self {
        let len = self.shown.rows.len();
        let target = (self.selected + self.height).min(len.saturating_sub(1));
        if let Some(i) = (self.selected + 1..=target)
            .rev()
            .find(|&i| self.is_data(i))
            .or_else(|| (target + 1..len).find(|&i| self.is_data(i)))
        {
            self.selected = i;
        }
        self
    }

    pub fn page_up(mut self) -> Self {
        let target = self.selected.saturating_sub(self.height);
        if let Some(i) = (target..self.selected)
            .find(|&i| self.is_data(i))
            .or_else(|| (0..target).rev().find(|&i| self.is_data(i)))
        {
            self.selected = i;
        }
        self
    }

    pub fn scroll_left(mut self) -> Self {
        self.col_offset = self.col_offset.saturating_sub(1);
        self
    }

    pub fn scroll_right(mut self) -> Self {
        if self.col_offset + 1 < self.shown.columns.len() {
            self.col_offset += 1;
        }
        self
    }

    /// Scroll so the named column comes first
    pub fn jump_to_column(mut self, name: &str) -> Self {
        if let Some(index) = self.shown.columns.iter().position(|c| c.name == name) {
            self.col_offset = index;
        }
        self
    }

    pub fn column_names(&self) -> Vec<String> {
        self.shown.headers()
    }

    /// The selected row as a `Column | Value` table, if there is one
    pub fn selected_record(&self) -> Option<TableData> {
        match self.shown.rows.get(self.selected) {
            Some(row) if !row.is_truncated() => Some(source::from_record(&self.shown, self.selected)),
            _ => None,
        }
    }

    fn status_line(&self) -> String {
        let rows = self.shown.data_row_count();
        let mut status = if rows == 0 {
            "No rows".to_string()
        } else {
            let position = (0..=self.selected).filter(|&i| self.is_data(i)).count();
            format!("Row {}/{}", position, rows)
        };
        if self.shown.columns.len() > 1 {
            status.push_str(&format!(
                "  Col {}/{}",
                self.col_offset + 1,
                self.shown.columns.len()
            ));
        }
        if let Some(filter) = &self.filter {
            status.push_str(&format!("  filter: {}", filter));
        }
        status
    }
}

impl Component for TableView {
    fn handle_key(&self, key: &str, keymap: &KeyMap) -> Option<Action> {
        match key {
            "enter" => Some(Action::Confirm),
            "tab" => Some(Action::OpenSuggestions),
            _ => keymap.resolve(key),
        }
    }

    fn update(self, action: &Action) -> Self {
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::NextPage => self.page_down(),
            Action::PrevPage => self.page_up(),
            Action::ScrollLeft => self.scroll_left(),
            Action::ScrollRight => self.scroll_right(),
            Action::Resize(_, h) => {
                let height = (*h as usize).saturating_sub(GRID_CHROME_ROWS);
                self.with_height(height)
            }
            _ => self,
        }
    }

    fn view(&self, canvas: &dyn Canvas, theme: &Theme) -> Text<'static> {
        let (start, end) = viewport::window(self.selected, self.shown.rows.len(), self.height);
        let layout = TableLayout {
            columns: &self.shown.columns,
            ceiling: GRID_COLUMN_CEILING,
            col_offset: self.col_offset,
        };

        let selected = self.is_data(self.selected).then(|| self.selected - start);
        let mut lines = build_table_lines(
            canvas,
            theme,
            &layout,
            &self.shown.rows[start..end],
            selected,
        );
        lines.push(Line::from(
            canvas.paint(self.status_line(), theme.secondary_style()),
        ));

        Text::from(lines)
    }
}
