//! Color theme
//!
//! A theme maps semantic roles to colors. It is supplied once at startup
//! and never changes afterwards; renderers only ask it for styles.

use crate::model::CellKind;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Theme {
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_faint: Color,
    pub border: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_faint: Color::DarkGray,
            border: Color::DarkGray,
            highlight: Color::LightCyan,
            success: Color::Green,
            warning: Color::Yellow,
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    /// Style for a table cell of the given kind
    pub fn cell_style(&self, kind: CellKind) -> Style {
        match kind {
            CellKind::Null => Style::default()
                .fg(self.text_faint)
                .add_modifier(Modifier::ITALIC),
            CellKind::Numeric => Style::default().fg(self.accent),
            CellKind::Boolean => Style::default().fg(self.success),
            CellKind::Text => Style::default().fg(self.text_primary),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Truncation markers and other de-emphasized text
    pub fn muted_style(&self) -> Style {
        Style::default()
            .fg(self.text_faint)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}
