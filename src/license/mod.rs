//! License gate and registry access.

mod gate;
mod registry;

pub use gate::{
    check_license, parse_expiry, render_block_page, sha256_hex, CreditBlock, CreditLink,
    LicenseGate, PageMetadata,
};
pub use registry::{
    registry_source, AppEntry, FileRegistry, HttpRegistry, LicenseRegistry, RegistrySource,
};
