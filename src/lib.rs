//! wood-calc - Lumber quantity, board-footage and price calculator.
//!
//! Users enter piece counts per fixed size category, or running feet per
//! width, and the calculator derives CFT (cubic feet, width x thickness x
//! length / 144) per row, per block and for the whole sheet, plus the price
//! total. The sheet exports to CSV and renders a print view.
//!
//! # Example
//!
//! ```no_run
//! use wood_calc::{Calculator, FormEvent, SheetLayout, WoodType};
//!
//! let mut calc = Calculator::new(SheetLayout::default()).unwrap();
//! calc.set_input("6in-10", "2").unwrap();
//! calc.apply(FormEvent::WoodType(WoodType::Purchase)).unwrap();
//! println!("{}", calc.export_csv());
//! ```

pub mod calculator;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod guard;
pub mod license;
pub mod model;

// Re-exports for convenience
pub use calculator::{Calculator, FormEvent};
pub use config::WoodType;
pub use engine::{effective_thickness, recalculate};
pub use error::{BlockReason, CalcError, Result};
pub use export::{generate_csv, render_print_view};
pub use license::{check_license, LicenseGate, PageMetadata};
pub use model::{ComputedSheet, FormState, SheetLayout};

use std::path::Path;

/// Build a calculator from optional form and layout files.
///
/// Without a form file the sheet starts fresh, as on page load. A form file
/// restores its snapshot as saved, price included.
pub fn load_calculator(form_path: Option<&Path>, layout_path: Option<&Path>) -> Result<Calculator> {
    let layout = match layout_path {
        Some(path) => SheetLayout::from_file(path)?,
        None => SheetLayout::default(),
    };

    match form_path {
        Some(path) => {
            let form = FormState::from_file(path)?;
            Calculator::with_form(layout, form)
        }
        None => Calculator::new(layout),
    }
}
