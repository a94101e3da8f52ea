//! License registry document and the sources it is read from.

use crate::config::LICENSE_REGISTRY_URL;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One licensed application in the registry.
///
/// Missing fields default to empty so that a malformed entry only fails the
/// checks of its own application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppEntry {
    pub app_id: String,
    /// Lowercase hex SHA-256 of the application secret.
    pub secret_hash: String,
    pub checksum: String,
    pub status: String,
    /// Expiry as a date (`2026-12-31`) or an RFC 3339 timestamp.
    pub expiry: String,
}

/// Registry document: `{ "apps": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseRegistry {
    pub apps: Vec<AppEntry>,
}

impl LicenseRegistry {
    /// Find the entry of an application.
    pub fn find(&self, app_id: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|a| a.app_id == app_id)
    }
}

/// Where the registry comes from.
pub trait RegistrySource {
    /// Fetch and parse the registry.
    fn fetch(&self) -> Result<LicenseRegistry>;

    /// Human-readable location for logs.
    fn location(&self) -> String;
}

/// Registry served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    url: String,
}

impl HttpRegistry {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpRegistry {
    fn default() -> Self {
        Self::new(LICENSE_REGISTRY_URL)
    }
}

impl RegistrySource for HttpRegistry {
    fn fetch(&self) -> Result<LicenseRegistry> {
        let body = reqwest::blocking::get(&self.url)?
            .error_for_status()?
            .text()?;
        serde_json::from_str(&body).map_err(|source| crate::error::CalcError::Json {
            path: PathBuf::from(&self.url),
            source,
        })
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Registry read from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegistrySource for FileRegistry {
    fn fetch(&self) -> Result<LicenseRegistry> {
        crate::error::read_json(&self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a `--registry` value: URLs go over HTTP, anything else is a file.
pub fn registry_source(location: &str) -> Box<dyn RegistrySource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpRegistry::new(location))
    } else {
        Box::new(FileRegistry::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REGISTRY_JSON: &str = r#"{"apps":[{"appId":"wood-calc","secretHash":"ab","checksum":"c1","status":"active","expiry":"2030-01-01"}]}"#;

    #[test]
    fn test_registry_parse_and_find() {
        let registry: LicenseRegistry = serde_json::from_str(REGISTRY_JSON).unwrap();
        let entry = registry.find("wood-calc").unwrap();
        assert_eq!(entry.checksum, "c1");
        assert_eq!(entry.expiry, "2030-01-01");
        assert!(registry.find("other").is_none());
    }

    #[test]
    fn test_malformed_entry_does_not_spoil_registry() {
        let json = r#"{"apps":[{"appId":"legacy","status":"active"},{"appId":"wood-calc","secretHash":"ab","checksum":"c1","status":"active","expiry":"2030-01-01"}]}"#;
        let registry: LicenseRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.apps.len(), 2);
        assert_eq!(registry.find("wood-calc").unwrap().checksum, "c1");

        let legacy = registry.find("legacy").unwrap();
        assert_eq!(legacy.status, "active");
        assert_eq!(legacy.secret_hash, "");
        assert_eq!(legacy.expiry, "");
    }

    #[test]
    fn test_file_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("license-db.json");
        std::fs::write(&path, REGISTRY_JSON).unwrap();

        let registry = FileRegistry::new(&path).fetch().unwrap();
        assert_eq!(registry.apps.len(), 1);

        std::fs::write(&path, "{not json").unwrap();
        assert!(FileRegistry::new(&path).fetch().is_err());
    }

    #[test]
    fn test_registry_source_selection() {
        assert_eq!(
            registry_source("https://example.com/db.json").location(),
            "https://example.com/db.json"
        );
        assert_eq!(registry_source("db.json").location(), "db.json");
    }
}
