//! Form state: the raw values the user has entered.

use crate::config::{WoodType, DEFAULT_PRICE, DEFAULT_THICKNESS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Snapshot of every input field on the sheet.
///
/// Numeric fields are kept as entered text; the engine parses them leniently
/// on every pass so malformed content never becomes an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    /// Wood type selector.
    pub wood_type: WoodType,
    /// Thickness selector value (inches).
    pub thickness: String,
    /// Unit price field.
    pub price: String,
    /// Quantity inputs of standard rows, by row id.
    pub quantities: BTreeMap<String, String>,
    /// Running-feet inputs of the RFT table, by row id.
    pub running_feet: BTreeMap<String, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            wood_type: WoodType::Sale,
            thickness: DEFAULT_THICKNESS.to_string(),
            price: default_price_text(),
            quantities: BTreeMap::new(),
            running_feet: BTreeMap::new(),
        }
    }
}

/// Price field text written on wood-type change and reset.
pub fn default_price_text() -> String {
    format!("{}", DEFAULT_PRICE)
}

impl FormState {
    /// Load a form snapshot from a JSON file.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        crate::error::read_json(path)
    }

    /// Entered quantity of a standard row ("" when untouched).
    pub fn quantity(&self, id: &str) -> &str {
        self.quantities.get(id).map(String::as_str).unwrap_or("")
    }

    /// Entered running feet of an RFT row ("" when untouched).
    pub fn running_feet(&self, id: &str) -> &str {
        self.running_feet.get(id).map(String::as_str).unwrap_or("")
    }

    /// Empty every quantity and running-feet input.
    pub fn clear_inputs(&mut self) {
        self.quantities.clear();
        self.running_feet.clear();
    }

    /// Restore selectors and price to their defaults.
    pub fn restore_defaults(&mut self) {
        self.wood_type = WoodType::Sale;
        self.thickness = DEFAULT_THICKNESS.to_string();
        self.price = default_price_text();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_form() {
        let form = FormState::default();
        assert_eq!(form.wood_type, WoodType::Sale);
        assert_eq!(form.thickness, "1");
        assert_eq!(form.price, "470");
        assert_eq!(form.quantity("6in-10"), "");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let form: FormState =
            serde_json::from_str(r#"{"wood_type":"purchase","quantities":{"6in-10":"2"}}"#)
                .unwrap();
        assert_eq!(form.wood_type, WoodType::Purchase);
        assert_eq!(form.thickness, "1");
        assert_eq!(form.price, "470");
        assert_eq!(form.quantity("6in-10"), "2");
        assert_eq!(form.running_feet("rft-2"), "");
    }

    #[test]
    fn test_clear_and_restore() {
        let mut form = FormState {
            wood_type: WoodType::Purchase,
            thickness: "2".into(),
            price: "500".into(),
            ..Default::default()
        };
        form.quantities.insert("6in-10".into(), "3".into());
        form.running_feet.insert("rft-2".into(), "10".into());

        form.clear_inputs();
        assert!(form.quantities.is_empty());
        assert!(form.running_feet.is_empty());
        assert_eq!(form.wood_type, WoodType::Purchase);

        form.restore_defaults();
        assert_eq!(form, FormState::default());
    }
}
