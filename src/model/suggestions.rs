//! Suggestion list state
//!
//! Every transition consumes the list and returns the next one, so a
//! value captured before a key press is never affected by it.

use super::viewport;

/// Items shown at once unless configured otherwise
pub const DEFAULT_MAX_SHOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<String>,
    selected: usize,
    visible: bool,
    loading: bool,
    max_show: usize,
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            visible: false,
            loading: false,
            max_show: DEFAULT_MAX_SHOW,
        }
    }

    pub fn with_max_show(mut self, max_show: usize) -> Self {
        self.max_show = max_show.max(1);
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn max_show(&self) -> usize {
        self.max_show
    }

    pub fn show(mut self) -> Self {
        self.visible = true;
        self
    }

    /// Hide the list and forget the selection
    pub fn hide(mut self) -> Self {
        self.visible = false;
        self.selected = 0;
        self
    }

    /// Replace the items, keeping the selection inside the new range
    pub fn set_items(mut self, items: Vec<String>) -> Self {
        self.selected = match items.len() {
            0 => 0,
            len => self.selected.min(len - 1),
        };
        tracing::trace!(count = items.len(), selected = self.selected, "suggestions replaced");
        self.items = items;
        self
    }

    pub fn set_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn move_up(mut self) -> Self {
        self.selected = self.selected.saturating_sub(1);
        self
    }

    pub fn move_down(mut self) -> Self {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
        self
    }

    /// Bounds of the items currently on screen
    pub fn visible_window(&self) -> (usize, usize) {
        viewport::window(self.selected, self.items.len(), self.max_show)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Vec<String> {
        ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_move_down_twice() {
        let list = SuggestionList::new().set_items(five()).move_down().move_down();
        assert_eq!(list.selected(), 2);
        assert_eq!(list.selected_item(), Some("c"));
    }

    #[test]
    fn test_move_down_clamps() {
        let list = (0..10).fold(SuggestionList::new().set_items(five()), |l, _| l.move_down());
        assert_eq!(list.selected(), 4);
    }

    #[test]
    fn test_move_up_clamps() {
        let list = SuggestionList::new().set_items(five()).move_up().move_up();
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn test_set_items_reclamps() {
        let list = SuggestionList::new()
            .set_items(five())
            .move_down()
            .move_down()
            .move_down()
            .set_items(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(list.selected(), 1);

        let list = list.set_items(Vec::new());
        assert_eq!(list.selected(), 0);
        assert_eq!(list.selected_item(), None);
    }

    #[test]
    fn test_hide_resets_selection() {
        let list = SuggestionList::new().set_items(five()).show().move_down().hide();
        assert!(!list.is_visible());
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn test_loading_is_independent() {
        let list = SuggestionList::new().set_loading(true);
        assert!(list.is_loading());
        assert!(!list.is_visible());

        let list = list.show().set_loading(false);
        assert!(list.is_visible());
        assert!(!list.is_loading());
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let before = SuggestionList::new().set_items(five());
        let after = before.clone().move_down();
        assert_eq!(before.selected(), 0);
        assert_eq!(after.selected(), 1);
    }

    #[test]
    fn test_visible_window_follows_selection() {
        let items: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let list = (0..10).fold(SuggestionList::new().set_items(items), |l, _| l.move_down());
        assert_eq!(list.visible_window(), (8, 13));
    }
}
