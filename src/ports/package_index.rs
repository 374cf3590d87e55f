//! Package index port definition.

use crate::domain::{AppError, PackageDetail, PackageRecord};

/// Port for package metadata lookups against an index such as PyPI.
pub trait PackageIndex {
    /// Fetch the summary record for a package: its latest version (most
    /// recent upload timestamp wins) and every dated version sorted by
    /// upload timestamp descending.
    fn fetch_latest(&self, name: &str) -> Result<PackageRecord, AppError>;

    /// Fetch the full metadata document: summary, description, and the
    /// per-release upload timestamps and Python requirements.
    fn fetch_detail(&self, name: &str) -> Result<PackageDetail, AppError>;
}

/// In-memory index for testing without network access.
#[derive(Debug, Clone, Default)]
pub struct MockPackageIndex {
    records: Vec<PackageRecord>,
    details: Vec<PackageDetail>,
}

impl MockPackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: PackageRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_detail(mut self, detail: PackageDetail) -> Self {
        self.details.push(detail);
        self
    }
}

impl PackageIndex for MockPackageIndex {
    fn fetch_latest(&self, name: &str) -> Result<PackageRecord, AppError> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .cloned()
            .ok_or_else(|| AppError::PackageNotFound(name.to_string()))
    }

    fn fetch_detail(&self, name: &str) -> Result<PackageDetail, AppError> {
        self.details
            .iter()
            .find(|detail| detail.name == name)
            .cloned()
            .ok_or_else(|| AppError::PackageNotFound(name.to_string()))
    }
}
