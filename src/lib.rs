//! fastapi-init: scaffold FastAPI project skeletons with dependencies
//! pinned against the PyPI index.
//!
//! The pipeline is: gather a package selection (CLI flags or interactive
//! prompts), project it into a [`ProjectStructure`], assemble the
//! in-memory file tree, serialize it to a zip archive, and write the
//! archive to disk.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;
pub mod templates;

use std::path::PathBuf;

pub use app::commands::new::{DEFAULT_PACKAGES, NewOptions};
pub use domain::{
    AppError, AvailableVersion, FileSet, PROJECT_PATHS, PackageDetail, PackageRecord,
    ProjectStructure, PythonVersion, ReleaseEntry, RenderMode, SelectedPackage, SessionState,
    TemplateData, TemplateValue, assemble, parse_specifier, render,
};
pub use ports::{MockPackageIndex, PackageIndex};
pub use services::{HttpPackageIndex, PypiConfig, build_archive, write_archive};

use app::commands::{new, search};

/// Create a project archive against the live PyPI index.
///
/// Returns the written archive path, or `None` when the user cancelled an
/// interactive prompt.
pub fn create_project(options: NewOptions) -> Result<Option<PathBuf>, AppError> {
    let index = HttpPackageIndex::new(&PypiConfig::default())?;

    match new::execute(&index, options)? {
        Some(path) => {
            println!("✅ Created project archive at {}", path.display());
            Ok(Some(path))
        }
        None => {
            println!("Cancelled.");
            Ok(None)
        }
    }
}

/// Look up a package on the live PyPI index and print its report.
pub fn search_package(name: &str) -> Result<PackageDetail, AppError> {
    let index = HttpPackageIndex::new(&PypiConfig::default())?;

    let detail = search::execute(&index, name)?;
    print!("{}", search::report(&detail));
    Ok(detail)
}
