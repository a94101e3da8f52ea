//! Table layout: the fixed size categories the user enters quantities against.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A row of a standard table: fixed length, quantity entered as a piece count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRow {
    /// Unique row id used by form inputs.
    pub id: String,
    /// Piece length in feet.
    pub length: f64,
    /// First column text (wood label).
    pub label: String,
    /// Second column text (size).
    pub size: String,
}

impl StandardRow {
    /// Create a row with labels derived from the block label and length.
    pub fn new(block_id: &str, block_label: &str, length: f64) -> Self {
        Self {
            id: format!("{}-{}", block_id, length),
            length,
            label: block_label.to_string(),
            size: format!("{} ft", length),
        }
    }
}

/// A standard table block: every row shares one width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub id: String,
    pub label: String,
    /// Piece width in inches.
    pub width: f64,
    pub rows: Vec<StandardRow>,
}

impl TableBlock {
    /// Create a block with one row per length.
    pub fn with_lengths(id: &str, label: &str, width: f64, lengths: &[f64]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            width,
            rows: lengths
                .iter()
                .map(|&len| StandardRow::new(id, label, len))
                .collect(),
        }
    }
}

/// A row of the running-feet table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RftRow {
    pub id: String,
    /// Width in inches.
    pub width: f64,
    pub label: String,
}

impl RftRow {
    pub fn new(width: f64) -> Self {
        Self {
            id: format!("rft-{}", width),
            width,
            label: format!("{}\"", width),
        }
    }
}

/// Location of a row inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef {
    /// Standard row: (block index, row index).
    Standard(usize, usize),
    /// Running-feet row index.
    Rft(usize),
}

/// Complete table layout of the calculator sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub blocks: Vec<TableBlock>,
    #[serde(default)]
    pub rft_rows: Vec<RftRow>,
}

/// Row lengths (feet) of the built-in standard blocks.
const DEFAULT_LENGTHS: &[f64] = &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            blocks: vec![
                TableBlock::with_lengths("6in", "6\"", 6.0, DEFAULT_LENGTHS),
                TableBlock::with_lengths("5in", "5\"", 5.0, DEFAULT_LENGTHS),
                TableBlock::with_lengths("2x3", "2x3 Dasa", 3.0, DEFAULT_LENGTHS),
            ],
            rft_rows: vec![RftRow::new(2.0), RftRow::new(3.0), RftRow::new(4.0)],
        }
    }
}

impl SheetLayout {
    /// Load and validate a layout from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let layout: SheetLayout = crate::error::read_json(path)?;
        layout.validate()?;
        tracing::debug!(
            "Loaded layout with {} block(s) and {} RFT row(s)",
            layout.blocks.len(),
            layout.rft_rows.len()
        );
        Ok(layout)
    }

    /// Check ids are unique and all dimensions are positive.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let invalid = |message: String| -> Result<()> { Err(CalcError::InvalidLayout { message }) };

        for block in &self.blocks {
            if !(block.width.is_finite() && block.width > 0.0) {
                return invalid(format!("block '{}' has width {}", block.id, block.width));
            }
            for row in &block.rows {
                if !(row.length.is_finite() && row.length > 0.0) {
                    return invalid(format!("row '{}' has length {}", row.id, row.length));
                }
                if !seen.insert(row.id.as_str()) {
                    return invalid(format!("duplicate row id '{}'", row.id));
                }
            }
        }

        for row in &self.rft_rows {
            if !(row.width.is_finite() && row.width > 0.0) {
                return invalid(format!("RFT row '{}' has width {}", row.id, row.width));
            }
            if !seen.insert(row.id.as_str()) {
                return invalid(format!("duplicate row id '{}'", row.id));
            }
        }

        Ok(())
    }

    /// Find a row by id.
    pub fn find_row(&self, id: &str) -> Option<RowRef> {
        for (b, block) in self.blocks.iter().enumerate() {
            if let Some(r) = block.rows.iter().position(|row| row.id == id) {
                return Some(RowRef::Standard(b, r));
            }
        }
        self.rft_rows
            .iter()
            .position(|row| row.id == id)
            .map(RowRef::Rft)
    }

    /// Total number of input rows.
    pub fn row_count(&self) -> usize {
        self.blocks.iter().map(|b| b.rows.len()).sum::<usize>() + self.rft_rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout() {
        let layout = SheetLayout::default();
        assert_eq!(layout.blocks.len(), 3);
        assert_eq!(layout.blocks[0].width, 6.0);
        assert_eq!(layout.blocks[2].label, "2x3 Dasa");
        assert_eq!(layout.rft_rows.len(), 3);
        assert_eq!(layout.row_count(), 3 * 11 + 3);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_row_ids_and_labels() {
        let layout = SheetLayout::default();
        let row = &layout.blocks[0].rows[4];
        assert_eq!(row.id, "6in-10");
        assert_eq!(row.size, "10 ft");
        assert_eq!(row.label, "6\"");
        assert_eq!(layout.rft_rows[1].id, "rft-3");
        assert_eq!(layout.rft_rows[1].label, "3\"");
    }

    #[test]
    fn test_find_row() {
        let layout = SheetLayout::default();
        assert_eq!(layout.find_row("5in-6"), Some(RowRef::Standard(1, 0)));
        assert_eq!(layout.find_row("rft-4"), Some(RowRef::Rft(2)));
        assert_eq!(layout.find_row("9in-6"), None);
    }

    #[test]
    fn test_validate_duplicate_id() {
        let mut layout = SheetLayout::default();
        layout.rft_rows[0].id = "6in-6".to_string();
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate row id '6in-6'"));
    }

    #[test]
    fn test_validate_non_positive_dimensions() {
        let mut layout = SheetLayout::default();
        layout.blocks[1].width = 0.0;
        assert!(layout.validate().is_err());

        let mut layout = SheetLayout::default();
        layout.blocks[0].rows[0].length = -2.0;
        assert!(layout.validate().is_err());

        let mut layout = SheetLayout::default();
        layout.rft_rows[2].width = f64::NAN;
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_layout_json_defaults_rft_rows() {
        let json = r#"{"blocks":[{"id":"4in","label":"4\"","width":4.0,"rows":[
            {"id":"4in-8","length":8.0,"label":"4\"","size":"8 ft"}]}]}"#;
        let layout: SheetLayout = serde_json::from_str(json).unwrap();
        assert!(layout.rft_rows.is_empty());
        assert_eq!(layout.find_row("4in-8"), Some(RowRef::Standard(0, 0)));
    }
}
