//! Calculator session: applies input events and keeps the sheet current.

use crate::config::WoodType;
use crate::engine::recalculate;
use crate::error::{CalcError, Result};
use crate::export;
use crate::model::{default_price_text, ComputedSheet, FormState, RowRef, SheetLayout};
use std::path::{Path, PathBuf};

/// An edit to one input of the sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Quantity of a standard row.
    Quantity { id: String, value: String },
    /// Running feet of an RFT row.
    RunningFeet { id: String, value: String },
    /// Unit price field.
    Price(String),
    /// Thickness selector.
    Thickness(String),
    /// Wood type selector; also resets the price.
    WoodType(WoodType),
}

/// Calculator state: layout, entered values and the last computed sheet.
///
/// Every event runs a full recalculation pass, so the sheet always matches
/// the current form.
#[derive(Debug, Clone)]
pub struct Calculator {
    layout: SheetLayout,
    form: FormState,
    sheet: ComputedSheet,
}

impl Calculator {
    /// Start a fresh sheet, as on page load: price set to the default and a first pass.
    pub fn new(layout: SheetLayout) -> Result<Self> {
        let mut calc = Self::with_form(layout, FormState::default())?;
        let wood_type = calc.form.wood_type;
        calc.change_wood_type(wood_type);
        Ok(calc)
    }

    /// Restore a saved form snapshot without touching its price.
    pub fn with_form(layout: SheetLayout, form: FormState) -> Result<Self> {
        layout.validate()?;
        for id in form.quantities.keys() {
            if !matches!(layout.find_row(id), Some(RowRef::Standard(..))) {
                return Err(CalcError::UnknownRow { id: id.clone() });
            }
        }
        for id in form.running_feet.keys() {
            if !matches!(layout.find_row(id), Some(RowRef::Rft(_))) {
                return Err(CalcError::UnknownRow { id: id.clone() });
            }
        }

        let sheet = recalculate(&layout, &form);
        Ok(Self {
            layout,
            form,
            sheet,
        })
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn sheet(&self) -> &ComputedSheet {
        &self.sheet
    }

    /// Run a full recalculation pass.
    pub fn recalculate(&mut self) -> &ComputedSheet {
        self.sheet = recalculate(&self.layout, &self.form);
        &self.sheet
    }

    /// Apply one input event and recalculate.
    pub fn apply(&mut self, event: FormEvent) -> Result<&ComputedSheet> {
        match event {
            FormEvent::Quantity { id, value } => {
                if !matches!(self.layout.find_row(&id), Some(RowRef::Standard(..))) {
                    return Err(CalcError::UnknownRow { id });
                }
                set_field(&mut self.form.quantities, id, value);
            }
            FormEvent::RunningFeet { id, value } => {
                if !matches!(self.layout.find_row(&id), Some(RowRef::Rft(_))) {
                    return Err(CalcError::UnknownRow { id });
                }
                set_field(&mut self.form.running_feet, id, value);
            }
            FormEvent::Price(value) => self.form.price = value,
            FormEvent::Thickness(value) => self.form.thickness = value,
            FormEvent::WoodType(wood_type) => return Ok(self.change_wood_type(wood_type)),
        }
        Ok(self.recalculate())
    }

    /// Set the input of any row by id, quantity or running feet as the layout says.
    pub fn set_input(&mut self, id: &str, value: &str) -> Result<&ComputedSheet> {
        let event = match self.layout.find_row(id) {
            Some(RowRef::Standard(..)) => FormEvent::Quantity {
                id: id.to_string(),
                value: value.to_string(),
            },
            Some(RowRef::Rft(_)) => FormEvent::RunningFeet {
                id: id.to_string(),
                value: value.to_string(),
            },
            None => return Err(CalcError::UnknownRow { id: id.to_string() }),
        };
        self.apply(event)
    }

    /// Switch wood type: the price goes back to the default, quantities stay.
    pub fn change_wood_type(&mut self, wood_type: WoodType) -> &ComputedSheet {
        self.form.wood_type = wood_type;
        self.form.price = default_price_text();
        tracing::debug!("Wood type set to {}, price reset", wood_type);
        self.recalculate()
    }

    /// Clear every input and restore the default selectors and price.
    ///
    /// The pass that follows writes `0.000` into every CFT field.
    pub fn reset(&mut self) -> &ComputedSheet {
        self.form.clear_inputs();
        self.form.restore_defaults();
        tracing::info!("Sheet reset");
        self.recalculate()
    }

    /// CSV document of the current sheet.
    pub fn export_csv(&self) -> String {
        export::generate_csv(&self.sheet)
    }

    /// Write the CSV export; a directory target receives `wood_calc.csv`.
    pub fn write_csv(&self, target: &Path) -> Result<PathBuf> {
        export::write_csv(&self.sheet, target)
    }

    /// Print view of the current sheet.
    pub fn print_view(&self, year: i32) -> String {
        export::render_print_view(&self.sheet, year)
    }
}

fn set_field(fields: &mut std::collections::BTreeMap<String, String>, id: String, value: String) {
    if value.is_empty() {
        fields.remove(&id);
    } else {
        fields.insert(id, value);
    }
}
