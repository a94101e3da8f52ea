//! Calculation engine: effective thickness and the recalculation pass.

mod recalc;
mod thickness;

pub use recalc::recalculate;
pub use thickness::{effective_thickness, running_feet_cft, standard_cft};
