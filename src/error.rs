//! Error types for the wood calculator.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for calculator processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Malformed input document (-3)
    ParseError = -3,
    /// Layout definition rejected (E100)
    InvalidLayout = 100,
    /// Input refers to a row the layout does not have (E101)
    UnknownRow = 101,
    /// Selector value outside the allowed set (E102)
    InvalidSelector = 102,
    /// License gate blocked the application (E300)
    LicenseBlocked = 300,
    /// License registry could not be fetched (E301)
    RegistryUnavailable = 301,
}

/// Cause of a license gate block; each maps to its own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    MetadataMissing,
    ServerError,
    InvalidLicense,
    InvalidSecret,
    IntegrityFailed,
    LicenseDisabled,
    LicenseExpired,
    CreditModified,
}

impl BlockReason {
    /// Message shown in place of the application.
    pub fn message(&self) -> &'static str {
        match self {
            BlockReason::MetadataMissing => "License Metadata Missing",
            BlockReason::ServerError => "License Server Error",
            BlockReason::InvalidLicense => "Invalid License",
            BlockReason::InvalidSecret => "Invalid Secret",
            BlockReason::IntegrityFailed => "Integrity Failed",
            BlockReason::LicenseDisabled => "License Disabled",
            BlockReason::LicenseExpired => "License Expired",
            BlockReason::CreditModified => "Credit Modified",
        }
    }
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid layout: {message}")]
    InvalidLayout { message: String },

    #[error("Unknown row id '{id}'")]
    UnknownRow { id: String },

    #[error("Invalid wood type '{value}': expected 'sale' or 'purchase'")]
    InvalidWoodType { value: String },

    #[error("{reason}")]
    LicenseBlocked { reason: BlockReason },

    #[error("Registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CalcError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CalcError::Json { .. } => ErrorCode::ParseError,
            CalcError::InvalidLayout { .. } => ErrorCode::InvalidLayout,
            CalcError::UnknownRow { .. } => ErrorCode::UnknownRow,
            CalcError::InvalidWoodType { .. } => ErrorCode::InvalidSelector,
            CalcError::LicenseBlocked { .. } => ErrorCode::LicenseBlocked,
            CalcError::Http(_) => ErrorCode::RegistryUnavailable,
            CalcError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    pub(crate) fn blocked(reason: BlockReason) -> Self {
        CalcError::LicenseBlocked { reason }
    }
}

/// Read and deserialize a JSON document, mapping failures to calculator errors.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    if !path.exists() {
        return Err(CalcError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CalcError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CalcError::UnknownRow { id: "6x99".into() };
        assert_eq!(err.code(), ErrorCode::UnknownRow);
        assert_eq!(err.code_value(), 101);
        assert_eq!(err.to_string(), "Unknown row id '6x99'");

        let err = CalcError::blocked(BlockReason::LicenseExpired);
        assert_eq!(err.code_value(), 300);
        assert_eq!(err.to_string(), "License Expired");
    }

    #[test]
    fn test_read_json_missing_file() {
        let err = read_json::<serde_json::Value>(std::path::Path::new("/nonexistent/form.json"))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::FileNotFound);
    }
}
