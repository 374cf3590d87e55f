//! Package metadata as projected from the PyPI JSON index.

use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// One release version together with its most recent upload timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableVersion {
    pub version: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Summary record for a package: its default (latest) version plus every
/// dated version, sorted by upload timestamp descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    /// The version with the most recent upload timestamp.
    pub version: String,
    pub available_versions: Vec<AvailableVersion>,
}

/// One release row in the detailed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub version: String,
    /// Absent when the release has no uploaded files.
    pub uploaded_at: Option<DateTime<Utc>>,
    pub requires_python: Option<String>,
}

/// Full metadata for a package, the richer shape backing `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDetail {
    pub name: String,
    pub version: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Dated releases first (newest upload first), undated releases last.
    pub releases: Vec<ReleaseEntry>,
}

/// A package pinned to one version within the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPackage {
    pub name: String,
    pub version: String,
    /// Versions offered when the pin is changed; empty for packages added
    /// with an explicit `name==version` specifier.
    pub available_versions: Vec<AvailableVersion>,
}

impl SelectedPackage {
    /// Pin a package without version alternatives.
    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into(), available_versions: Vec::new() }
    }

    /// Select the index-reported latest version of a fetched record.
    pub fn from_record(record: PackageRecord) -> Self {
        Self {
            name: record.name,
            version: record.version,
            available_versions: record.available_versions,
        }
    }

    /// The `name==version` dependency specifier for this selection.
    pub fn specifier(&self) -> String {
        format!("{}=={}", self.name, self.version)
    }
}

/// Split a CLI dependency argument into name and optional pinned version.
///
/// Accepts `name` (resolve latest against the index) or `name==version`.
pub fn parse_specifier(spec: &str) -> Result<(String, Option<String>), AppError> {
    let spec = spec.trim();
    match spec.split_once("==") {
        Some((name, version)) => {
            let name = name.trim();
            let version = version.trim();
            if name.is_empty() || version.is_empty() {
                return Err(AppError::InvalidSpecifier(spec.to_string()));
            }
            Ok((name.to_string(), Some(version.to_string())))
        }
        None => {
            if spec.is_empty() || spec.contains('=') {
                return Err(AppError::InvalidSpecifier(spec.to_string()));
            }
            Ok((spec.to_string(), None))
        }
    }
}
