//! Component trait - Interface for UI components
//!
//! Each component is a plain value: it turns keys into Actions, turns
//! Actions into a new value of itself, and renders without side effects.

use crate::action::Action;
use crate::components::canvas::Canvas;
use crate::keymap::KeyMap;
use crate::theme::Theme;
use ratatui::text::Text;

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key` - Convert a key string to an Action
/// 2. `update` - Consume the current value and return the next one
/// 3. `view` - Render the component
pub trait Component: Sized {
    /// Handle a key, returning an optional Action
    ///
    /// The component should not change here - just return
    /// the appropriate Action.
    fn handle_key(&self, key: &str, keymap: &KeyMap) -> Option<Action> {
        let _ = (key, keymap);
        None
    }

    /// Apply an Action
    ///
    /// Actions a component doesn't understand leave it unchanged.
    fn update(self, action: &Action) -> Self {
        let _ = action;
        self
    }

    /// Render the component
    ///
    /// This method should be pure rendering - no state changes.
    fn view(&self, canvas: &dyn Canvas, theme: &Theme) -> Text<'static>;
}
