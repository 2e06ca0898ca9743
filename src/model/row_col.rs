use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell address: a zero-based (row, column) position within a grid.
/// Column 0 is the label, columns 1 through 4 are the amounts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RowCol {
    row: usize,
    col: usize,
}

impl RowCol {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for RowCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_display() {
        let at = RowCol::new(0, 1);
        assert_eq!(at.to_string(), "row 0, column 1");

        let at = RowCol::new(42, 3);
        assert_eq!(at.to_string(), "row 42, column 3");
    }

    #[test]
    fn test_row_col_roundtrip() {
        let original = RowCol::new(42, 3);
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: RowCol = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
