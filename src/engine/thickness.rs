//! Effective thickness and board-footage formulas.

use crate::config::{WoodType, BOARD_FOOT_DIVISOR};

/// Base thickness plus the wood-type offset.
#[inline]
pub fn effective_thickness(base: f64, wood_type: WoodType) -> f64 {
    base + wood_type.thickness_offset()
}

/// CFT of `quantity` pieces of `width` x `thickness` inches, `length` feet long.
#[inline]
pub fn standard_cft(width: f64, thickness: f64, length: f64, quantity: f64) -> f64 {
    (width * thickness * length * quantity) / BOARD_FOOT_DIVISOR
}

/// CFT of `running_feet` of stock `width` x `thickness` inches.
#[inline]
pub fn running_feet_cft(width: f64, thickness: f64, running_feet: f64) -> f64 {
    (width * thickness * running_feet) / BOARD_FOOT_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    #[test]
    fn test_effective_thickness_sale() {
        assert!(approx_eq(effective_thickness(1.0, WoodType::Sale), 1.25));
        assert!(approx_eq(effective_thickness(2.0, WoodType::Sale), 2.25));
    }

    #[test]
    fn test_effective_thickness_purchase() {
        assert!(approx_eq(effective_thickness(1.0, WoodType::Purchase), 1.125));
        assert!(approx_eq(effective_thickness(0.5, WoodType::Purchase), 0.625));
    }

    #[test]
    fn test_effective_thickness_nan_propagates() {
        assert!(effective_thickness(f64::NAN, WoodType::Sale).is_nan());
    }

    #[test]
    fn test_standard_cft() {
        // 6 x 1.25 x 10 x 2 / 144
        assert!(approx_eq(standard_cft(6.0, 1.25, 10.0, 2.0), 150.0 / 144.0));
        assert_eq!(standard_cft(6.0, 1.25, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_running_feet_cft() {
        // 3 x 1.125 x 20 / 144
        assert!(approx_eq(running_feet_cft(3.0, 1.125, 20.0), 67.5 / 144.0));
    }
}
