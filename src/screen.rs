//! Root screen
//!
//! Owns the results grid, the suggestion list and the popup, routes keys
//! between them and composites their views into one frame. The screen is
//! lean: it decides who gets a key, the components decide what it means.

use crate::action::Action;
use crate::component::Component;
use crate::components::canvas::{to_ansi, Canvas, TextCanvas};
use crate::components::layout::composite;
use crate::components::results::TableView;
use crate::config::Config;
use crate::keymap::KeyMap;
use crate::model::{Popup, SuggestionList, TableData};
use crate::theme::Theme;
use ratatui::{
    layout::{Rect, Size},
    text::{Line, Text},
};

/// Rows kept below the grid for the filter prompt or key hints
const PROMPT_ROWS: u16 = 1;

// ═══════════════════════════════════════════════════════════════════════════════
// Screen Struct
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    grid: TableView,
    suggestions: SuggestionList,
    popup: Popup,
    /// Query being typed while the filter prompt is open
    filter_input: Option<String>,
    theme: Theme,
    keymap: KeyMap,
    size: Size,
    should_quit: bool,
}

impl Screen {
    /// Without a keymap the built-in bindings apply
    pub fn new(table: TableData, theme: Theme, keymap: Option<KeyMap>) -> Self {
        let keymap = KeyMap::or_fallback(keymap);
        Self {
            grid: TableView::new(table),
            suggestions: SuggestionList::new(),
            popup: Popup::new().with_hints(KeyMap::page_hints()),
            filter_input: None,
            theme,
            keymap,
            size: Size::new(0, 0),
            should_quit: false,
        }
        .resize(80, 24)
    }

    pub fn from_config(table: TableData, config: &Config) -> Self {
        Self::new(table, config.theme.clone(), Some(config.keymap.clone()))
    }

    pub fn grid(&self) -> &TableView {
        &self.grid
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn filter_input(&self) -> Option<&str> {
        self.filter_input.as_deref()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Host-driven updates
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_table(mut self, table: TableData) -> Self {
        self.grid = self.grid.set_table(table);
        self
    }

    pub fn show_popup(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        self.popup = self.popup.show(title, content, footer);
        self
    }

    pub fn show_table_popup(
        mut self,
        title: impl Into<String>,
        table: TableData,
        footer: impl Into<String>,
    ) -> Self {
        self.popup = self.popup.show_table(title, table, footer);
        self
    }

    /// Replace the suggestion items and show the list
    pub fn set_suggestions(mut self, items: Vec<String>) -> Self {
        self.suggestions = self.suggestions.set_items(items).set_loading(false).show();
        self
    }

    pub fn set_suggestions_loading(mut self, loading: bool) -> Self {
        self.suggestions = self.suggestions.set_loading(loading);
        if loading {
            self.suggestions = self.suggestions.show();
        }
        self
    }

    /// Follow a terminal resize; every size-dependent piece re-derives
    pub fn resize(mut self, width: u16, height: u16) -> Self {
        self.size = Size::new(width, height);
        self.grid = self
            .grid
            .update(&Action::Resize(width, height.saturating_sub(PROMPT_ROWS)));
        self.popup = self.popup.update(&Action::Resize(width, height));
        tracing::debug!(width, height, "screen resized");
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key routing
    // ─────────────────────────────────────────────────────────────────────────

    /// Feed one key string to whichever part of the screen has focus
    ///
    /// A visible popup takes every key. After that come the filter prompt,
    /// the suggestion list and finally the grid.
    pub fn handle_key(mut self, key: &str) -> Self {
        if key == "ctrl+c" {
            return self.update(Action::Quit);
        }

        if self.popup.is_visible() {
            self.popup = self.popup.capture(key, &self.keymap);
            return self;
        }

        if self.filter_input.is_some() {
            return match filter_action(key) {
                Some(action) => self.update(action),
                None => self,
            };
        }

        if self.suggestions.is_visible() {
            return match self.suggestions.handle_key(key, &self.keymap) {
                Some(Action::Confirm) => self.accept_suggestion(),
                Some(action) => {
                    self.suggestions = self.suggestions.update(&action);
                    self
                }
                None => self,
            };
        }

        if key == "q" {
            return self.update(Action::Quit);
        }

        match self.grid.handle_key(key, &self.keymap) {
            Some(action) => self.update(action),
            None => self,
        }
    }

    fn update(mut self, action: Action) -> Self {
        tracing::trace!(%action, "screen action");
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Resize(w, h) => return self.resize(w, h),
            Action::Confirm if self.filter_input.is_some() => {
                self.filter_input = None;
            }
            Action::Confirm => return self.open_record(),
            Action::Dismiss if self.filter_input.is_some() => {
                self.filter_input = None;
                self.grid = self.grid.with_filter(None);
            }
            Action::OpenSuggestions => {
                let columns = self.grid.column_names();
                return self.set_suggestions(columns);
            }
            Action::Filter => {
                self.filter_input = Some(self.grid.filter().unwrap_or_default().to_string());
            }
            Action::FilterInput(c) => {
                if let Some(query) = self.filter_input.as_mut() {
                    query.push(c);
                }
                return self.apply_filter_input();
            }
            Action::FilterBackspace => {
                if let Some(query) = self.filter_input.as_mut() {
                    query.pop();
                }
                return self.apply_filter_input();
            }
            other => {
                self.grid = self.grid.update(&other);
            }
        }
        self
    }

    fn apply_filter_input(mut self) -> Self {
        self.grid = self.grid.with_filter(self.filter_input.clone());
        self
    }

    fn accept_suggestion(mut self) -> Self {
        if let Some(name) = self.suggestions.selected_item().map(str::to_string) {
            self.grid = self.grid.jump_to_column(&name);
        }
        self.suggestions = self.suggestions.hide();
        self
    }

    fn open_record(self) -> Self {
        match self.grid.selected_record() {
            Some(record) => {
                let title = format!("Row {}", self.grid.selected() + 1);
                self.show_table_popup(title, record, "")
            }
            None => self,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn prompt_line(&self, canvas: &dyn Canvas) -> Line<'static> {
        match &self.filter_input {
            Some(query) => Line::from(canvas.paint(format!("/{}", query), self.theme.text_style())),
            None => Line::from(canvas.paint(
                "enter: row  tab: columns  /: filter  q: quit".to_string(),
                self.theme.muted_style(),
            )),
        }
    }

    /// The whole frame: grid, prompt, suggestions and popup on top
    ///
    /// With nothing overlaid the result is exactly the grid and prompt.
    pub fn view(&self) -> Text<'static> {
        let canvas = TextCanvas;
        let mut frame = canvas.stack(vec![
            self.grid.view(&canvas, &self.theme),
            Text::from(self.prompt_line(&canvas)),
        ]);

        let list = self.suggestions.view(&canvas, &self.theme);
        if list.height() > 0 {
            // Anchored above the prompt line
            let height = list.height().min(u16::MAX as usize) as u16;
            let width = list.width().min(self.size.width as usize) as u16;
            let y = self.size.height.saturating_sub(height + PROMPT_ROWS);
            frame = canvas.place(&frame, &list, Rect::new(0, y, width, height), self.size);
        }

        let overlay = self
            .popup
            .is_visible()
            .then(|| self.popup.view(&canvas, &self.theme));
        let requested = overlay
            .as_ref()
            .map(|t| Size::new(t.width() as u16, t.height() as u16))
            .unwrap_or(self.size);

        composite(&canvas, &frame, overlay.as_ref(), requested, self.size)
    }

    /// The frame as one ANSI-styled string
    pub fn render(&self) -> String {
        to_ansi(&self.view())
    }
}

/// Keys the filter prompt understands
fn filter_action(key: &str) -> Option<Action> {
    match key {
        "esc" => Some(Action::Dismiss),
        "enter" => Some(Action::Confirm),
        "backspace" => Some(Action::FilterBackspace),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Action::FilterInput(c)),
                _ => None,
            }
        }
    }
}
