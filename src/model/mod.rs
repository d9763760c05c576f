//! Model layer - data shapes and state
//!
//! This module contains:
//! - `TableData` and the adapters that build it from each input shape
//! - The pure layout helpers: classification, viewport windows, pagination
//! - `SuggestionList` and `Popup`, the two state containers

pub mod pagination;
pub mod popup;
pub mod source;
pub mod suggestions;
pub mod table;
pub mod value;
pub mod viewport;

// Re-export commonly used types
pub use pagination::{paginate, Page};
pub use popup::Popup;
pub use source::{ColumnInfo, Constraint};
pub use suggestions::SuggestionList;
pub use table::{Column, Row, TableData};
pub use value::{classify, CellKind};
