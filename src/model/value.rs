//! Cell value classification
//!
//! Decides how a single cell should be styled by looking at its text.
//! The mapping from [`CellKind`] to an actual style lives on the theme.

/// Display category of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Null,
    Numeric,
    Boolean,
    Text,
}

impl CellKind {
    /// Numbers read better right-aligned in a column
    pub fn is_right_aligned(&self) -> bool {
        matches!(self, CellKind::Numeric)
    }
}

/// Classify a cell's text
///
/// Rules are checked in order: null markers, then anything `f64` accepts,
/// then booleans, and everything else is plain text.
pub fn classify(text: &str) -> CellKind {
    if text.is_empty() || text.eq_ignore_ascii_case("null") || text == "<nil>" {
        return CellKind::Null;
    }

    if text.parse::<f64>().is_ok() {
        return CellKind::Numeric;
    }

    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
        return CellKind::Boolean;
    }

    CellKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_null_markers() {
        assert_eq!(classify(""), CellKind::Null);
        assert_eq!(classify("NULL"), CellKind::Null);
        assert_eq!(classify("null"), CellKind::Null);
        assert_eq!(classify("<nil>"), CellKind::Null);
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify("3.14"), CellKind::Numeric);
        assert_eq!(classify("-42"), CellKind::Numeric);
        assert_eq!(classify("1e10"), CellKind::Numeric);
        assert_eq!(classify("0"), CellKind::Numeric);
    }

    #[test]
    fn test_classify_booleans() {
        assert_eq!(classify("true"), CellKind::Boolean);
        assert_eq!(classify("FALSE"), CellKind::Boolean);
        assert_eq!(classify("True"), CellKind::Boolean);
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify("hello"), CellKind::Text);
        assert_eq!(classify(" 42"), CellKind::Text);
        assert_eq!(classify("<NIL>"), CellKind::Text);
        assert_eq!(classify("yes"), CellKind::Text);
    }

    #[test]
    fn test_only_numbers_right_align() {
        assert!(CellKind::Numeric.is_right_aligned());
        assert!(!CellKind::Text.is_right_aligned());
        assert!(!CellKind::Null.is_right_aligned());
    }
}
