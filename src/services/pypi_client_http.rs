//! PyPI JSON API client implementation using reqwest.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{
    AppError, AvailableVersion, PackageDetail, PackageRecord, ReleaseEntry,
};
use crate::ports::PackageIndex;

/// Connection settings for the package index.
#[derive(Debug, Clone)]
pub struct PypiConfig {
    pub base_url: Url,
    pub timeout_secs: u64,
}

impl Default for PypiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://pypi.org/").expect("hardcoded index URL is valid"),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the PyPI JSON API.
#[derive(Debug, Clone)]
pub struct HttpPackageIndex {
    base_url: Url,
    client: Client,
}

impl HttpPackageIndex {
    /// Create a new client with the given connection settings.
    pub fn new(config: &PypiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { base_url: config.base_url.clone(), client })
    }

    fn fetch_document(&self, name: &str) -> Result<ProjectDocument, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Network("index base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["pypi", name, "json"]);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::PackageNotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "index returned {} for '{name}'",
                response.status()
            )));
        }

        response
            .json::<ProjectDocument>()
            .map_err(|e| AppError::Network(format!("unexpected index response for '{name}': {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct ProjectDocument {
    info: ProjectInfo,
    #[serde(default)]
    releases: BTreeMap<String, Vec<ReleaseUpload>>,
}

#[derive(Debug, Deserialize)]
struct ProjectInfo {
    name: String,
    version: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReleaseUpload {
    #[serde(default)]
    upload_time_iso_8601: Option<String>,
    #[serde(default)]
    requires_python: Option<String>,
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.with_timezone(&Utc))
}

/// Per-version timestamp is the most recent upload of that version; the
/// returned list is sorted by that timestamp descending. Versions whose
/// uploads carry no parsable timestamp come back separately.
fn split_versions(
    releases: &BTreeMap<String, Vec<ReleaseUpload>>,
) -> (Vec<AvailableVersion>, Vec<String>) {
    let mut dated = Vec::new();
    let mut undated = Vec::new();

    for (version, uploads) in releases {
        let latest_upload = uploads
            .iter()
            .filter_map(|upload| upload.upload_time_iso_8601.as_deref())
            .filter_map(parse_timestamp)
            .max();
        match latest_upload {
            Some(uploaded_at) => {
                dated.push(AvailableVersion { version: version.clone(), uploaded_at });
            }
            None => undated.push(version.clone()),
        }
    }

    dated.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    (dated, undated)
}

fn latest_version(dated: &[AvailableVersion], fallback: &str) -> String {
    dated.first().map(|v| v.version.clone()).unwrap_or_else(|| fallback.to_string())
}

impl PackageIndex for HttpPackageIndex {
    fn fetch_latest(&self, name: &str) -> Result<PackageRecord, AppError> {
        let doc = self.fetch_document(name)?;
        let (dated, _) = split_versions(&doc.releases);
        let version = latest_version(&dated, &doc.info.version);

        Ok(PackageRecord { name: doc.info.name, version, available_versions: dated })
    }

    fn fetch_detail(&self, name: &str) -> Result<PackageDetail, AppError> {
        let doc = self.fetch_document(name)?;
        let (dated, undated) = split_versions(&doc.releases);
        let version = latest_version(&dated, &doc.info.version);

        let requires_python = |wanted: &str| {
            doc.releases
                .get(wanted)
                .into_iter()
                .flatten()
                .filter_map(|upload| upload.requires_python.clone())
                .next()
        };

        let mut entries: Vec<ReleaseEntry> = dated
            .iter()
            .map(|available| ReleaseEntry {
                version: available.version.clone(),
                uploaded_at: Some(available.uploaded_at),
                requires_python: requires_python(&available.version),
            })
            .collect();
        // Releases without a dated upload sort last.
        entries.extend(undated.into_iter().map(|version| ReleaseEntry {
            requires_python: requires_python(&version),
            version,
            uploaded_at: None,
        }));

        Ok(PackageDetail {
            name: doc.info.name,
            version,
            summary: doc.info.summary,
            description: doc.info.description,
            releases: entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> HttpPackageIndex {
        let config = PypiConfig {
            base_url: Url::parse(&server.url()).unwrap(),
            timeout_secs: 1,
        };
        HttpPackageIndex::new(&config).unwrap()
    }

    fn demo_document() -> String {
        serde_json::json!({
            "info": {
                "name": "demo",
                "version": "0.2.0",
                "summary": "A demo package",
                "description": "# demo\nLong text"
            },
            "releases": {
                "0.1.0": [
                    {"upload_time_iso_8601": "2023-01-10T00:00:00Z", "requires_python": ">=3.8"}
                ],
                "0.2.0": [
                    {"upload_time_iso_8601": "2023-05-01T00:00:00Z", "requires_python": ">=3.9"},
                    {"upload_time_iso_8601": "2023-05-02T12:00:00Z", "requires_python": ">=3.9"}
                ],
                "0.1.1": [
                    {"upload_time_iso_8601": "2023-03-15T00:00:00Z", "requires_python": ">=3.8"}
                ],
                "0.0.1": []
            }
        })
        .to_string()
    }

    #[test]
    fn fetch_latest_orders_versions_by_upload_time() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/pypi/demo/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(demo_document())
            .create();

        let record = client_for(&server).fetch_latest("demo").unwrap();

        assert_eq!(record.name, "demo");
        assert_eq!(record.version, "0.2.0");
        let versions: Vec<&str> =
            record.available_versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(versions, vec!["0.2.0", "0.1.1", "0.1.0"]);
    }

    #[test]
    fn version_with_multiple_uploads_uses_most_recent_timestamp() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/pypi/demo/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(demo_document())
            .create();

        let record = client_for(&server).fetch_latest("demo").unwrap();

        let latest = &record.available_versions[0];
        assert_eq!(latest.version, "0.2.0");
        assert_eq!(latest.uploaded_at, parse_timestamp("2023-05-02T12:00:00Z").unwrap());
    }

    #[test]
    fn fetch_detail_carries_summary_and_requires_python() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/pypi/demo/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(demo_document())
            .create();

        let detail = client_for(&server).fetch_detail("demo").unwrap();

        assert_eq!(detail.summary.as_deref(), Some("A demo package"));
        assert_eq!(detail.version, "0.2.0");
        assert_eq!(detail.releases[0].requires_python.as_deref(), Some(">=3.9"));
        // The upload-less release sorts last with no timestamp.
        let last = detail.releases.last().unwrap();
        assert_eq!(last.version, "0.0.1");
        assert_eq!(last.uploaded_at, None);
    }

    #[test]
    fn missing_package_maps_to_not_found() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/pypi/nope/json").with_status(404).create();

        let err = client_for(&server).fetch_latest("nope").expect_err("should fail");
        assert!(matches!(err, AppError::PackageNotFound(name) if name == "nope"));
    }

    #[test]
    fn malformed_body_maps_to_network_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/pypi/demo/json")
            .with_status(200)
            .with_body("not json")
            .create();

        let err = client_for(&server).fetch_latest("demo").expect_err("should fail");
        assert!(matches!(err, AppError::Network(_)));
    }

    #[test]
    fn server_error_maps_to_network_error() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/pypi/demo/json").with_status(500).create();

        let err = client_for(&server).fetch_latest("demo").expect_err("should fail");
        assert!(matches!(err, AppError::Network(_)));
    }
}
