//! License gate: page metadata checked against the registry.
//!
//! The whole check runs on the client with a secret the client holds, so it
//! only detects casual tampering. It is not an enforcement boundary.

use super::registry::{AppEntry, RegistrySource};
use crate::config::{CREDIT_LINK_HREF, CREDIT_LINK_TEXT, CREDIT_TEXT, LICENSE_ACTIVE_STATUS};
use crate::error::{BlockReason, CalcError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Link inside the credit footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditLink {
    pub href: String,
    pub text: String,
}

/// Credit footer of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditBlock {
    pub text: String,
    #[serde(default)]
    pub link: Option<CreditLink>,
}

/// Metadata the page carries for the license check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(rename = "app-id", default)]
    pub app_id: Option<String>,
    #[serde(rename = "app-secret", default)]
    pub app_secret: Option<String>,
    #[serde(rename = "app-integrity", default)]
    pub app_integrity: Option<String>,
    #[serde(default)]
    pub credit: Option<CreditBlock>,
}

impl PageMetadata {
    /// Load page metadata from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        crate::error::read_json(path)
    }
}

/// Lowercase hex SHA-256 of a string.
pub fn sha256_hex(message: &str) -> String {
    hex::encode(Sha256::digest(message.as_bytes()))
}

/// Parse a registry expiry: RFC 3339, or a plain date meaning midnight UTC.
pub fn parse_expiry(expiry: &str) -> Option<DateTime<Utc>> {
    let expiry = expiry.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(expiry) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(expiry, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn credit_intact(credit: Option<&CreditBlock>) -> bool {
    let Some(credit) = credit else {
        return false;
    };
    let Some(link) = &credit.link else {
        return false;
    };
    credit.text.contains(CREDIT_TEXT)
        && link.href == CREDIT_LINK_HREF
        && link.text.contains(CREDIT_LINK_TEXT)
}

/// Check an application entry against the page metadata.
fn check_entry(
    entry: &AppEntry,
    secret: &str,
    integrity: &str,
    meta: &PageMetadata,
    now: DateTime<Utc>,
) -> std::result::Result<(), BlockReason> {
    if sha256_hex(secret) != entry.secret_hash {
        return Err(BlockReason::InvalidSecret);
    }
    if integrity != entry.checksum {
        return Err(BlockReason::IntegrityFailed);
    }
    if entry.status != LICENSE_ACTIVE_STATUS {
        return Err(BlockReason::LicenseDisabled);
    }
    match parse_expiry(&entry.expiry) {
        Some(expiry) if now > expiry => return Err(BlockReason::LicenseExpired),
        Some(_) => {}
        None => return Err(BlockReason::ServerError),
    }
    if !credit_intact(meta.credit.as_ref()) {
        return Err(BlockReason::CreditModified);
    }
    Ok(())
}

/// Run the license check at a given instant.
///
/// Returns `CalcError::LicenseBlocked` with the cause on any failure. A
/// registry that cannot be fetched or parsed blocks as a server error.
pub fn check_license(
    meta: &PageMetadata,
    source: &dyn RegistrySource,
    now: DateTime<Utc>,
) -> Result<()> {
    let (Some(app_id), Some(secret), Some(integrity)) = (
        non_empty(&meta.app_id),
        non_empty(&meta.app_secret),
        non_empty(&meta.app_integrity),
    ) else {
        return Err(blocked(BlockReason::MetadataMissing));
    };

    let registry = source.fetch().map_err(|e| {
        tracing::warn!("License registry {} unavailable: {}", source.location(), e);
        blocked(BlockReason::ServerError)
    })?;

    let entry = registry
        .find(app_id)
        .ok_or_else(|| blocked(BlockReason::InvalidLicense))?;

    check_entry(entry, secret, integrity, meta, now).map_err(blocked)?;

    tracing::info!("License valid for {}", app_id);
    Ok(())
}

fn blocked(reason: BlockReason) -> CalcError {
    tracing::warn!("License check blocked: {}", reason);
    CalcError::blocked(reason)
}

/// License gate bound to a registry source, checking against the current time.
pub struct LicenseGate {
    source: Box<dyn RegistrySource>,
}

impl LicenseGate {
    pub fn new(source: Box<dyn RegistrySource>) -> Self {
        Self { source }
    }

    /// Check the metadata now.
    pub fn check(&self, meta: &PageMetadata) -> Result<()> {
        check_license(meta, self.source.as_ref(), Utc::now())
    }
}

/// The page shown in place of the application when blocked.
pub fn render_block_page(reason: BlockReason) -> String {
    format!(
        "<h2 style='color:red;text-align:center;margin-top:100px'>{}</h2>",
        reason.message()
    )
}
