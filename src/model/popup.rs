//! Popup state
//!
//! A single modal overlay. It either shows free text or a table it pages
//! through itself. Size limits follow the screen and are pushed in through
//! [`Popup::resize`].

use super::pagination;
use super::table::TableData;

/// Gap kept between an overlay and the terminal edges, in cells
pub const SCREEN_MARGIN: u16 = 4;

/// Rows a table popup spends on anything but data:
/// two borders, header, separator, spacer, status line and footer
pub const POPUP_CHROME_ROWS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    visible: bool,
    title: String,
    content: String,
    footer: String,
    /// Navigation hints appended to the page status line
    hints: String,
    table: Option<TableData>,
    page: usize,
    total_pages: usize,
    max_width: u16,
    max_height: u16,
}

impl Default for Popup {
    fn default() -> Self {
        Self {
            visible: false,
            title: String::new(),
            content: String::new(),
            footer: String::new(),
            hints: String::new(),
            table: None,
            page: 0,
            total_pages: 0,
            max_width: 80 - SCREEN_MARGIN,
            max_height: 24 - SCREEN_MARGIN,
        }
    }
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn hints(&self) -> &str {
        &self.hints
    }

    pub fn with_hints(mut self, hints: impl Into<String>) -> Self {
        self.hints = hints.into();
        self
    }

    pub fn table(&self) -> Option<&TableData> {
        self.table.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn max_width(&self) -> u16 {
        self.max_width
    }

    pub fn max_height(&self) -> u16 {
        self.max_height
    }

    /// Table rows that fit on one page at the current height
    pub fn page_size(&self) -> usize {
        (self.max_height as usize)
            .saturating_sub(POPUP_CHROME_ROWS)
            .max(1)
    }

    /// Show free text, starting from the first page
    pub fn show(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        self.visible = true;
        self.title = title.into();
        self.content = content.into();
        self.footer = footer.into();
        self.table = None;
        self.page = 0;
        tracing::debug!(title = %self.title, "popup shown");
        self
    }

    /// Show a table, paging it by the popup's own height
    pub fn show_table(
        mut self,
        title: impl Into<String>,
        table: TableData,
        footer: impl Into<String>,
    ) -> Self {
        self.total_pages = pagination::total_pages(table.rows.len(), self.page_size());
        self.visible = true;
        self.title = title.into();
        self.content = String::new();
        self.footer = footer.into();
        self.table = Some(table);
        self.page = 0;
        tracing::debug!(title = %self.title, pages = self.total_pages, "table popup shown");
        self
    }

    pub fn hide(mut self) -> Self {
        self.visible = false;
        tracing::debug!(title = %self.title, "popup hidden");
        self
    }

    /// Set the page count directly; keeping `page` in range is up to the caller
    pub fn set_total_pages(mut self, total_pages: usize) -> Self {
        self.total_pages = total_pages;
        self
    }

    /// Set the page directly; keeping it in range is up to the caller
    pub fn set_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn next_page(mut self) -> Self {
        self.page = pagination::next_page(self.page, self.total_pages);
        tracing::trace!(page = self.page, total = self.total_pages, "popup next page");
        self
    }

    pub fn prev_page(mut self) -> Self {
        self.page = pagination::prev_page(self.page);
        tracing::trace!(page = self.page, total = self.total_pages, "popup previous page");
        self
    }

    /// Follow a new screen size
    ///
    /// A table popup re-pages itself and pulls `page` back into range.
    pub fn resize(mut self, width: u16, height: u16) -> Self {
        self.max_width = width.saturating_sub(SCREEN_MARGIN);
        self.max_height = height.saturating_sub(SCREEN_MARGIN);

        if let Some(table) = &self.table {
            self.total_pages = pagination::total_pages(table.rows.len(), self.page_size());
            self.page = self.page.min(self.total_pages.saturating_sub(1));
        }
        self
    }
}
