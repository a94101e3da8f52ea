//! Full recalculation pass over the sheet.

use crate::config::{display, numeric, CFT_DECIMALS, RFT_DECIMALS};
use crate::model::{
    BlockResult, ComputedSheet, FormState, GrandTotals, RftResult, RftRowResult, SheetLayout,
    StandardRowResult,
};

use super::thickness::{effective_thickness, running_feet_cft, standard_cft};

/// Recompute every derived field from the layout and the form snapshot.
///
/// The pass is pure: the same inputs always produce the same sheet. Inputs
/// that do not parse count as 0, and any NaN result is shown as 0.
pub fn recalculate(layout: &SheetLayout, form: &FormState) -> ComputedSheet {
    // An unparseable thickness poisons every CFT with NaN, which then displays as 0.
    let base = numeric::parse_prefix(&form.thickness).unwrap_or(f64::NAN);
    let thickness = effective_thickness(base, form.wood_type);

    let mut grand_quantity = 0.0;
    let mut grand_cft = 0.0;

    // 1) standard blocks
    let blocks: Vec<BlockResult> = layout
        .blocks
        .iter()
        .map(|block| {
            let mut sum_quantity = 0.0;
            let mut sum_cft = 0.0;
            let mut total_running_feet = 0.0;

            let rows = block
                .rows
                .iter()
                .map(|row| {
                    let input = form.quantity(&row.id);
                    let quantity = numeric::parse_or_zero(input);
                    let cft = numeric::finite_or_zero(standard_cft(
                        block.width,
                        thickness,
                        row.length,
                        quantity,
                    ));

                    sum_quantity += quantity;
                    sum_cft += cft;
                    total_running_feet += row.length * quantity;

                    StandardRowResult {
                        id: row.id.clone(),
                        label: row.label.clone(),
                        size: row.size.clone(),
                        length: row.length,
                        quantity_input: input.to_string(),
                        quantity,
                        cft,
                        cft_display: display::fixed(cft, CFT_DECIMALS),
                        hide_in_print: quantity == 0.0,
                    }
                })
                .collect();

            grand_quantity += sum_quantity;
            grand_cft += sum_cft;

            BlockResult {
                id: block.id.clone(),
                label: block.label.clone(),
                width: block.width,
                rows,
                sum_quantity,
                sum_cft,
                total_running_feet,
                sum_quantity_display: display::count(sum_quantity),
                sum_cft_display: display::fixed(sum_cft, CFT_DECIMALS),
                total_running_feet_display: display::fixed(total_running_feet, RFT_DECIMALS),
            }
        })
        .collect();

    // 2) running-feet table
    let mut total_running_feet = 0.0;
    let mut total_cft = 0.0;
    let rft_rows = layout
        .rft_rows
        .iter()
        .map(|row| {
            let input = form.running_feet(&row.id);
            let running_feet = numeric::parse_or_zero(input);
            let cft = numeric::finite_or_zero(running_feet_cft(row.width, thickness, running_feet));

            total_running_feet += running_feet;
            total_cft += cft;

            RftRowResult {
                id: row.id.clone(),
                label: row.label.clone(),
                width: row.width,
                running_feet_input: input.to_string(),
                running_feet,
                cft,
                cft_display: display::fixed(cft, CFT_DECIMALS),
                hide_in_print: running_feet == 0.0,
            }
        })
        .collect();

    // Running feet carry no piece count, so only CFT joins the grand totals.
    grand_cft += total_cft;

    let rft = RftResult {
        rows: rft_rows,
        total_running_feet,
        total_cft,
        total_running_feet_display: display::fixed(total_running_feet, RFT_DECIMALS),
        total_cft_display: display::fixed(total_cft, CFT_DECIMALS),
    };

    // 3) grand totals and price
    let unit_price = numeric::parse_or_zero(&form.price);
    let grand_price = numeric::finite_or_zero(grand_cft * unit_price);

    tracing::debug!(
        "Recalculated: thickness={} qty={} cft={:.3} price={:.2}",
        thickness,
        grand_quantity,
        grand_cft,
        grand_price
    );

    ComputedSheet {
        wood_type: form.wood_type,
        effective_thickness: numeric::finite_or_zero(thickness),
        unit_price,
        blocks,
        rft,
        grand: GrandTotals::new(grand_quantity, grand_cft, grand_price),
    }
}
