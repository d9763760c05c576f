//! UI Components
//!
//! Each component turns keys into Actions, Actions into a new value of
//! itself, and renders through a [`Canvas`](canvas::Canvas).

pub mod canvas;
pub mod layout;
pub mod popup;
pub mod results;
pub mod suggestion_list;
pub mod table;

pub use canvas::{to_ansi, to_plain, Canvas, TextCanvas};
pub use layout::{centered_popup, composite, overlay_area};
pub use results::TableView;
pub use table::{build_table_lines, TableLayout};
