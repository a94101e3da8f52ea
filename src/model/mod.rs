//! Data model types for the wood calculator.

mod form;
mod layout;
mod sheet;

pub use form::{default_price_text, FormState};
pub use layout::{RftRow, RowRef, SheetLayout, StandardRow, TableBlock};
pub use sheet::{BlockResult, ComputedSheet, GrandTotals, RftResult, RftRowResult, StandardRowResult};
