//! Immutable selection state updated through pure reducers.
//!
//! The interactive flow threads one `SessionState` value through each user
//! action; every reducer consumes the state and returns a new one. The
//! renderer and assembler never see this type, only the final
//! `ProjectStructure` projection.

use crate::domain::package::SelectedPackage;
use crate::domain::project::{ProjectStructure, PythonVersion};
use crate::domain::AppError;

/// Accumulated form state for one scaffolding session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub name: String,
    pub description: String,
    pub python_version: PythonVersion,
    pub selected: Vec<SelectedPackage>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_python_version(mut self, version: PythonVersion) -> Self {
        self.python_version = version;
        self
    }

    /// Append a package; a name already in the selection is rejected.
    pub fn with_package(mut self, package: SelectedPackage) -> Result<Self, AppError> {
        if self.selected.iter().any(|existing| existing.name == package.name) {
            return Err(AppError::PackageAlreadySelected(package.name));
        }
        self.selected.push(package);
        Ok(self)
    }

    /// Drop a package from the selection by name.
    pub fn without_package(mut self, name: &str) -> Result<Self, AppError> {
        let before = self.selected.len();
        self.selected.retain(|package| package.name != name);
        if self.selected.len() == before {
            return Err(AppError::PackageNotSelected(name.to_string()));
        }
        Ok(self)
    }

    /// Re-pin an already selected package to a different version.
    pub fn with_package_version(
        mut self,
        name: &str,
        version: impl Into<String>,
    ) -> Result<Self, AppError> {
        match self.selected.iter_mut().find(|package| package.name == name) {
            Some(package) => {
                package.version = version.into();
                Ok(self)
            }
            None => Err(AppError::PackageNotSelected(name.to_string())),
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|package| package.name == name)
    }

    /// Project the session into the record assembly consumes, with
    /// `name==version` specifiers in selection order.
    pub fn into_project(self) -> ProjectStructure {
        ProjectStructure {
            name: self.name,
            description: self.description,
            python_version: self.python_version,
            packages: self.selected.iter().map(SelectedPackage::specifier).collect(),
        }
    }
}
