//! Output renderers: CSV export and print view.

mod csv;
mod print;

pub use csv::{export_path, generate_csv, write_csv};
pub use print::render_print_view;
