//! Configuration constants and settings for the calculator.

/// Thickness offset added for sale transactions (inches).
pub const SALE_THICKNESS_OFFSET: f64 = 0.25;

/// Thickness offset added for purchase transactions (inches).
pub const PURCHASE_THICKNESS_OFFSET: f64 = 0.125;

/// Square inches per square foot; divides width(in) x thickness(in) x length(ft).
pub const BOARD_FOOT_DIVISOR: f64 = 144.0;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Unit price restored on wood-type change and reset.
pub const DEFAULT_PRICE: f64 = 470.0;

/// Thickness selector value restored on reset.
pub const DEFAULT_THICKNESS: &str = "1";

/// Options offered by the thickness selector (inches).
pub const THICKNESS_OPTIONS: &[&str] = &["0.5", "0.75", "1", "1.25", "1.5", "2", "2.5", "3", "4"];

/// Decimal places for CFT fields.
pub const CFT_DECIMALS: usize = 3;

/// Decimal places for running-feet totals.
pub const RFT_DECIMALS: usize = 2;

/// Decimal places for the price total.
pub const PRICE_DECIMALS: usize = 2;

/// File name of the CSV download.
pub const EXPORT_FILENAME: &str = "wood_calc.csv";

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Wood Type,Size / Width,Quantity / RFT,CFT";

/// Size column marker for rows of the running-feet table.
pub const RFT_SIZE_MARKER: &str = "RFT input";

/// License registry location.
pub const LICENSE_REGISTRY_URL: &str = "https://itsmilonbro.github.io/app-license/license-db.json";

/// Registry status of a usable license.
pub const LICENSE_ACTIVE_STATUS: &str = "active";

/// Fragment the credit footer text must contain.
pub const CREDIT_TEXT: &str = "All right reserved copyright ©";

/// Exact target of the credit link.
pub const CREDIT_LINK_HREF: &str = "https://itsmilonbro.blogspot.com";

/// Fragment the credit link text must contain.
pub const CREDIT_LINK_TEXT: &str = "Freelancer Milon";

/// Window width delta above which developer tools are assumed open.
pub const DEVTOOLS_WIDTH_THRESHOLD: i32 = 150;

/// Interval of the developer tools poll in milliseconds.
pub const DEVTOOLS_POLL_INTERVAL_MS: u64 = 1000;

/// Key code swallowed by the inspection guard (F12).
pub const BLOCKED_KEY_CODE: u32 = 123;

/// Text shown when developer tools are detected.
pub const DEVTOOLS_WARNING: &str = "⚠ Developer Tools Detected";

use serde::{Deserialize, Serialize};

/// Sale or purchase; decides the thickness offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    #[default]
    Sale,
    Purchase,
}

impl WoodType {
    /// Parse the selector value ("sale" / "purchase").
    pub fn from_selector_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sale" => Some(WoodType::Sale),
            "purchase" => Some(WoodType::Purchase),
            _ => None,
        }
    }

    /// Thickness offset added to the base thickness.
    pub fn thickness_offset(&self) -> f64 {
        match self {
            WoodType::Sale => SALE_THICKNESS_OFFSET,
            WoodType::Purchase => PURCHASE_THICKNESS_OFFSET,
        }
    }
}

impl std::fmt::Display for WoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WoodType::Sale => write!(f, "sale"),
            WoodType::Purchase => write!(f, "purchase"),
        }
    }
}

impl std::str::FromStr for WoodType {
    type Err = crate::error::CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector_str(s).ok_or_else(|| crate::error::CalcError::InvalidWoodType {
            value: s.to_string(),
        })
    }
}

/// Formatting helpers for displayed values.
pub mod display {
    /// Digits of the exact expansion inspected when rounding.
    const EXACT_DIGITS: usize = 80;

    /// Format a value to a fixed number of decimals, never showing "-0".
    ///
    /// Exact ties round away from zero (0.46875 -> "0.469"), unlike `{:.3}`
    /// which rounds them to even.
    pub fn fixed(value: f64, decimals: usize) -> String {
        let value = super::numeric::finite_or_zero(value);
        if value.is_infinite() {
            return infinity(value);
        }

        let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
        let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        let mut digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes().take(decimals))
            .collect();

        if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
            let mut i = digits.len();
            loop {
                if i == 0 {
                    digits.insert(0, b'1');
                    break;
                }
                i -= 1;
                if digits[i] == b'9' {
                    digits[i] = b'0';
                } else {
                    digits[i] += 1;
                    break;
                }
            }
        }

        let negative = value < 0.0 && digits.iter().any(|&d| d != b'0');
        let split = digits.len() - decimals;
        let mut text = String::with_capacity(digits.len() + 2);
        if negative {
            text.push('-');
        }
        text.extend(digits[..split].iter().map(|&d| d as char));
        if decimals > 0 {
            text.push('.');
            text.extend(digits[split..].iter().map(|&d| d as char));
        }
        text
    }

    /// Format a piece count: whole numbers without decimals, fractions in shortest form.
    #[inline]
    pub fn count(value: f64) -> String {
        let value = super::numeric::finite_or_zero(value);
        if value.is_infinite() {
            infinity(value)
        } else if value == 0.0 {
            "0".to_string()
        } else if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        }
    }

    fn infinity(value: f64) -> String {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    }
}

/// Lenient numeric parsing for form fields.
pub mod numeric {
    /// Replace NaN with 0.
    #[inline]
    pub fn finite_or_zero(value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }

    /// Parse the longest numeric prefix of a field, like a browser `parseFloat`.
    ///
    /// Returns `None` when no prefix is a number.
    pub fn parse_prefix(text: &str) -> Option<f64> {
        let s = text.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;

        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        if s[end..].starts_with("Infinity") {
            let negative = bytes.first() == Some(&b'-');
            return Some(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }

        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;

        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            digits += frac_end - frac_start;
            if digits > 0 {
                end = frac_end;
            }
        }

        if digits == 0 {
            return None;
        }

        // Exponent only counts when followed by at least one digit.
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        s[..end].parse::<f64>().ok()
    }

    /// Parse a field with a 0 fallback for empty, non-numeric and NaN content.
    #[inline]
    pub fn parse_or_zero(text: &str) -> f64 {
        parse_prefix(text).map(finite_or_zero).unwrap_or(0.0)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wood_type_from_selector() {
        assert_eq!(WoodType::from_selector_str("sale"), Some(WoodType::Sale));
        assert_eq!(WoodType::from_selector_str(" Purchase "), Some(WoodType::Purchase));
        assert_eq!(WoodType::from_selector_str("rent"), None);
        assert!("rent".parse::<WoodType>().is_err());
    }

    #[test]
    fn test_wood_type_offsets() {
        assert_eq!(WoodType::Sale.thickness_offset(), 0.25);
        assert_eq!(WoodType::Purchase.thickness_offset(), 0.125);
        assert_eq!(WoodType::default(), WoodType::Sale);
        assert_eq!(WoodType::Purchase.to_string(), "purchase");
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(numeric::parse_prefix("12"), Some(12.0));
        assert_eq!(numeric::parse_prefix("  2.5"), Some(2.5));
        assert_eq!(numeric::parse_prefix("12abc"), Some(12.0));
        assert_eq!(numeric::parse_prefix(".5"), Some(0.5));
        assert_eq!(numeric::parse_prefix("5."), Some(5.0));
        assert_eq!(numeric::parse_prefix("-3"), Some(-3.0));
        assert_eq!(numeric::parse_prefix("1e2"), Some(100.0));
        assert_eq!(numeric::parse_prefix("1e"), Some(1.0));
        assert_eq!(numeric::parse_prefix(""), None);
        assert_eq!(numeric::parse_prefix("abc"), None);
        assert_eq!(numeric::parse_prefix("."), None);
        assert_eq!(numeric::parse_prefix("-"), None);
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(numeric::parse_or_zero(""), 0.0);
        assert_eq!(numeric::parse_or_zero("x"), 0.0);
        assert_eq!(numeric::parse_or_zero("470"), 470.0);
    }

    #[test]
    fn test_display_fixed() {
        assert_eq!(display::fixed(1.0416666, 3), "1.042");
        assert_eq!(display::fixed(f64::NAN, 3), "0.000");
        assert_eq!(display::fixed(-0.0, 2), "0.00");
        assert_eq!(display::fixed(-0.0001, 3), "0.000");
        assert_eq!(display::fixed(-1.5, 2), "-1.50");
        assert_eq!(display::fixed(f64::INFINITY, 3), "Infinity");
        assert_eq!(display::fixed(0.46875, 3), "0.469");
        assert_eq!(display::fixed(0.0625, 3), "0.063");
        assert_eq!(display::fixed(9.9995, 3), "9.999");
        assert_eq!(display::fixed(9.9996, 3), "10.000");
        assert_eq!(display::fixed(520.8333, 2), "520.83");
        assert_eq!(display::fixed(12.5, 0), "13");
    }

    #[test]
    fn test_display_count() {
        assert_eq!(display::count(0.0), "0");
        assert_eq!(display::count(-0.0), "0");
        assert_eq!(display::count(12.0), "12");
        assert_eq!(display::count(2.5), "2.5");
        assert_eq!(display::count(f64::NAN), "0");
    }
}
