//! CSV export of the non-empty rows.

use crate::config::{CSV_HEADER, EXPORT_FILENAME, RFT_SIZE_MARKER};
use crate::error::Result;
use crate::model::ComputedSheet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Build the CSV document for a computed sheet.
///
/// Only rows with a non-zero quantity or running-feet value are written. Values
/// are taken as displayed: the entered quantity text and the formatted CFT.
/// Fields are not quoted; row content is labels and plain numbers.
pub fn generate_csv(sheet: &ComputedSheet) -> String {
    let mut output = String::new();
    writeln!(output, "{}", CSV_HEADER).unwrap();

    // Standard tables
    for row in sheet.blocks.iter().flat_map(|b| b.rows.iter()) {
        if row.quantity != 0.0 {
            writeln!(
                output,
                "{},{},{},{}",
                row.label, row.size, row.quantity_input, row.cft_display
            )
            .unwrap();
        }
    }

    // Running-feet table
    for row in &sheet.rft.rows {
        if row.running_feet != 0.0 {
            writeln!(
                output,
                "{},{},{},{}",
                row.label, RFT_SIZE_MARKER, row.running_feet_input, row.cft_display
            )
            .unwrap();
        }
    }

    output
}

/// Resolve the export target: a directory receives `wood_calc.csv`.
pub fn export_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(EXPORT_FILENAME)
    } else {
        target.to_path_buf()
    }
}

/// Write the CSV document and return the path written.
pub fn write_csv(sheet: &ComputedSheet, target: &Path) -> Result<PathBuf> {
    let path = export_path(target);
    let csv = generate_csv(sheet);
    std::fs::write(&path, &csv)?;
    tracing::info!(
        "Exported {} row(s) to {}",
        csv.lines().count().saturating_sub(1),
        path.display()
    );
    Ok(path)
}
