//! Package lookup: fetch the detailed metadata and format a report.

use std::fmt::Write;

use crate::domain::{AppError, PackageDetail};
use crate::ports::PackageIndex;

/// How many releases the report lists before eliding the rest.
const REPORT_RELEASE_LIMIT: usize = 10;

pub fn execute(index: &dyn PackageIndex, name: &str) -> Result<PackageDetail, AppError> {
    index.fetch_detail(name)
}

/// Human-readable report: summary line, latest version, and the most
/// recent releases with upload dates and Python requirements.
pub fn report(detail: &PackageDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", detail.name, detail.version);
    if let Some(summary) = &detail.summary {
        let _ = writeln!(out, "{summary}");
    }

    let _ = writeln!(out, "\nReleases:");
    for release in detail.releases.iter().take(REPORT_RELEASE_LIMIT) {
        let uploaded = release
            .uploaded_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let requires = release.requires_python.as_deref().unwrap_or("not specified");
        let _ = writeln!(out, "  {:<20} {uploaded}  requires-python: {requires}", release.version);
    }
    if detail.releases.len() > REPORT_RELEASE_LIMIT {
        let _ = writeln!(out, "  ... {} more", detail.releases.len() - REPORT_RELEASE_LIMIT);
    }
    out
}
