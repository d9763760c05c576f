//! querygrid - terminal display engine for tabular query results
//!
//! Result sets, schema metadata and previews become [`TableData`]; a
//! [`Screen`] shows them as a scrollable grid with a paginated popup and a
//! suggestion list on top, and renders the whole frame as one ANSI string.

pub mod action;
pub mod component;
pub mod components;
pub mod config;
pub mod keymap;
pub mod logging;
pub mod model;
pub mod screen;
pub mod theme;
pub mod tui;

pub use action::Action;
pub use component::Component;
pub use config::Config;
pub use keymap::KeyMap;
pub use model::TableData;
pub use screen::Screen;
pub use theme::Theme;
