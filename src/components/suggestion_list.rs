//! Suggestion list component

use crate::action::Action;
use crate::component::Component;
use crate::components::canvas::Canvas;
use crate::keymap::KeyMap;
use crate::model::SuggestionList;
use crate::theme::Theme;
use ratatui::text::{Line, Text};

const LOADING_TEXT: &str = "Loading...";

impl Component for SuggestionList {
    fn handle_key(&self, key: &str, keymap: &KeyMap) -> Option<Action> {
        if !self.is_visible() {
            return None;
        }
        match key {
            "esc" => Some(Action::Dismiss),
            "enter" | "tab" => Some(Action::Confirm),
            _ => match keymap.resolve(key) {
                Some(action @ (Action::MoveUp | Action::MoveDown)) => Some(action),
                _ => None,
            },
        }
    }

    fn update(self, action: &Action) -> Self {
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::Dismiss => self.hide(),
            _ => self,
        }
    }

    fn view(&self, canvas: &dyn Canvas, theme: &Theme) -> Text<'static> {
        if !self.is_visible() {
            return Text::default();
        }

        if self.is_loading() {
            return Text::from(Line::from(
                canvas.paint(LOADING_TEXT.to_string(), theme.warning_style()),
            ));
        }

        let items = self.items();
        let (start, end) = self.visible_window();

        let mut lines: Vec<Line<'static>> = items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                if start + offset == self.selected() {
                    Line::from(canvas.paint(format!("> {}", item), theme.selected_style()))
                } else {
                    Line::from(canvas.paint(format!("  {}", item), theme.text_style()))
                }
            })
            .collect();

        if items.len() > self.max_show() {
            lines.push(Line::from(canvas.paint(
                format!("  ({}/{})", self.selected() + 1, items.len()),
                theme.muted_style(),
            )));
        }

        Text::from(lines)
    }
}
