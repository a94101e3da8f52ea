//! Print view: the sheet as printed, with empty rows left out.

use crate::config::{display, CFT_DECIMALS, CREDIT_TEXT, PRICE_DECIMALS};
use crate::model::ComputedSheet;
use std::fmt::Write;

/// Render the print view of a computed sheet.
///
/// Rows flagged `hide_in_print` are skipped; block headers and totals are
/// always printed. `year` fills the footer line.
pub fn render_print_view(sheet: &ComputedSheet, year: i32) -> String {
    let mut output = String::new();

    writeln!(output, "WOOD CALCULATION").unwrap();
    writeln!(
        output,
        "Type: {}  Thickness: {} in  Price: {}",
        sheet.wood_type,
        display::fixed(sheet.effective_thickness, CFT_DECIMALS),
        display::fixed(sheet.unit_price, PRICE_DECIMALS)
    )
    .unwrap();

    for block in &sheet.blocks {
        writeln!(output).unwrap();
        writeln!(output, "[{}]", block.label).unwrap();
        for row in block.rows.iter().filter(|r| !r.hide_in_print) {
            writeln!(
                output,
                "  {:<10} {:>8} {:>10}",
                row.size, row.quantity_input, row.cft_display
            )
            .unwrap();
        }
        writeln!(
            output,
            "  Qty: {}  CFT: {}  RFT: {}",
            block.sum_quantity_display, block.sum_cft_display, block.total_running_feet_display
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "[RFT]").unwrap();
    for row in sheet.rft.rows.iter().filter(|r| !r.hide_in_print) {
        writeln!(
            output,
            "  {:<10} {:>8} {:>10}",
            row.label, row.running_feet_input, row.cft_display
        )
        .unwrap();
    }
    writeln!(
        output,
        "  RFT: {}  CFT: {}",
        sheet.rft.total_running_feet_display, sheet.rft.total_cft_display
    )
    .unwrap();

    writeln!(output).unwrap();
    writeln!(output, "Grand Qty: {}", sheet.grand.quantity_display).unwrap();
    writeln!(output, "Grand CFT: {}", sheet.grand.cft_display).unwrap();
    writeln!(output, "Grand Price: {}", sheet.grand.price_display).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "{} {}", CREDIT_TEXT, year).unwrap();

    output
}
