use std::io;

use thiserror::Error;

/// Library-wide error type for fastapi-init operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Project name is empty or whitespace-only.
    #[error("Project name must not be empty")]
    InvalidProject,

    /// Strict rendering found a placeholder with no matching data key.
    #[error("No value supplied for placeholder '{0}'")]
    MissingPlaceholder(String),

    /// Package index lookup found no such package.
    #[error("Package '{0}' not found on the index")]
    PackageNotFound(String),

    /// Package is already part of the selection.
    #[error("Package '{0}' is already selected")]
    PackageAlreadySelected(String),

    /// Package is not part of the selection.
    #[error("Package '{0}' is not selected")]
    PackageNotSelected(String),

    /// Dependency specifier is malformed.
    #[error("Invalid specifier '{0}': expected 'name' or 'name==version'")]
    InvalidSpecifier(String),

    /// Python version string is not one of the supported releases.
    #[error("Invalid Python version '{0}': must be one of 3.9, 3.10, 3.11, 3.12, 3.13")]
    InvalidPythonVersion(String),

    /// Network transport or unexpected index response.
    #[error("Package index request failed: {0}")]
    Network(String),

    /// Archive serialization failed.
    #[error("Failed to build project archive: {0}")]
    Archive(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers matching on failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidProject
            | AppError::MissingPlaceholder(_)
            | AppError::InvalidSpecifier(_)
            | AppError::InvalidPythonVersion(_) => io::ErrorKind::InvalidInput,
            AppError::PackageNotFound(_) | AppError::PackageNotSelected(_) => {
                io::ErrorKind::NotFound
            }
            AppError::PackageAlreadySelected(_) => io::ErrorKind::AlreadyExists,
            AppError::Network(_) | AppError::Archive(_) | AppError::Prompt(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
