//! Computed sheet: every derived field written back to the page.

use crate::config::{display, WoodType, CFT_DECIMALS, PRICE_DECIMALS};
use serde::{Deserialize, Serialize};

/// Derived values of one standard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRowResult {
    pub id: String,
    pub label: String,
    pub size: String,
    pub length: f64,
    /// Quantity as entered.
    pub quantity_input: String,
    /// Parsed quantity (0 when the input does not parse).
    pub quantity: f64,
    pub cft: f64,
    /// CFT field text, `0.000` for an empty row.
    pub cft_display: String,
    /// Row is left out of the print view.
    pub hide_in_print: bool,
}

/// Derived values of one running-feet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RftRowResult {
    pub id: String,
    pub label: String,
    pub width: f64,
    /// Running feet as entered.
    pub running_feet_input: String,
    pub running_feet: f64,
    pub cft: f64,
    pub cft_display: String,
    pub hide_in_print: bool,
}

/// Summary of a standard block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockResult {
    pub id: String,
    pub label: String,
    pub width: f64,
    pub rows: Vec<StandardRowResult>,
    pub sum_quantity: f64,
    pub sum_cft: f64,
    /// Sum of length x quantity.
    pub total_running_feet: f64,
    pub sum_quantity_display: String,
    pub sum_cft_display: String,
    pub total_running_feet_display: String,
}

/// Summary of the running-feet table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RftResult {
    pub rows: Vec<RftRowResult>,
    pub total_running_feet: f64,
    pub total_cft: f64,
    pub total_running_feet_display: String,
    pub total_cft_display: String,
}

/// Totals across the whole sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandTotals {
    /// Pieces from standard blocks only.
    pub quantity: f64,
    pub cft: f64,
    pub price: f64,
    pub quantity_display: String,
    pub cft_display: String,
    pub price_display: String,
}

impl GrandTotals {
    pub fn new(quantity: f64, cft: f64, price: f64) -> Self {
        Self {
            quantity,
            cft,
            price,
            quantity_display: display::count(quantity),
            cft_display: display::fixed(cft, CFT_DECIMALS),
            price_display: display::fixed(price, PRICE_DECIMALS),
        }
    }
}

/// Result of a recalculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedSheet {
    pub wood_type: WoodType,
    /// Base thickness plus the wood-type offset (0 when the thickness does not parse).
    pub effective_thickness: f64,
    pub unit_price: f64,
    pub blocks: Vec<BlockResult>,
    pub rft: RftResult,
    pub grand: GrandTotals,
}

impl ComputedSheet {
    /// Find a standard row result by id.
    pub fn standard_row(&self, id: &str) -> Option<&StandardRowResult> {
        self.blocks
            .iter()
            .flat_map(|b| b.rows.iter())
            .find(|r| r.id == id)
    }

    /// Find a running-feet row result by id.
    pub fn rft_row(&self, id: &str) -> Option<&RftRowResult> {
        self.rft.rows.iter().find(|r| r.id == id)
    }

    /// Number of rows that appear in the print view.
    pub fn visible_row_count(&self) -> usize {
        let standard = self
            .blocks
            .iter()
            .flat_map(|b| b.rows.iter())
            .filter(|r| !r.hide_in_print)
            .count();
        standard + self.rft.rows.iter().filter(|r| !r.hide_in_print).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::engine::recalculate;
    use crate::model::{FormState, SheetLayout};

    #[test]
    fn test_empty_sheet_zero_representation() {
        let sheet = recalculate(&SheetLayout::default(), &FormState::default());

        for block in &sheet.blocks {
            assert_eq!(block.sum_quantity_display, "0");
            assert_eq!(block.sum_cft_display, "0.000");
            assert_eq!(block.total_running_feet_display, "0.00");
            assert!(block.rows.iter().all(|r| r.cft_display == "0.000"));
        }
        assert_eq!(sheet.rft.total_running_feet_display, "0.00");
        assert_eq!(sheet.rft.total_cft_display, "0.000");
        assert!(sheet.rft.rows.iter().all(|r| r.cft_display == "0.000"));
        assert_eq!(sheet.grand.quantity_display, "0");
        assert_eq!(sheet.grand.cft_display, "0.000");
        assert_eq!(sheet.grand.price_display, "0.00");
        assert_eq!(sheet.visible_row_count(), 0);
    }

    #[test]
    fn test_row_lookup() {
        let sheet = recalculate(&SheetLayout::default(), &FormState::default());
        assert_eq!(sheet.standard_row("2x3-12").map(|r| r.length), Some(12.0));
        assert_eq!(sheet.rft_row("rft-4").map(|r| r.width), Some(4.0));
        assert!(sheet.standard_row("rft-4").is_none());
    }
}
