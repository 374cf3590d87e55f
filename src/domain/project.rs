//! Project structure and assembly into an in-memory file tree.

use std::fmt;
use std::str::FromStr;

use crate::domain::render::{RenderMode, TemplateData, TemplateValue, render};
use crate::domain::{AppError, FileSet};
use crate::templates::{TemplateKind, template};

/// Python releases offered by the scaffolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PythonVersion {
    V3_9,
    V3_10,
    V3_11,
    #[default]
    V3_12,
    V3_13,
}

impl PythonVersion {
    pub const ALL: [PythonVersion; 5] = [
        PythonVersion::V3_9,
        PythonVersion::V3_10,
        PythonVersion::V3_11,
        PythonVersion::V3_12,
        PythonVersion::V3_13,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PythonVersion::V3_9 => "3.9",
            PythonVersion::V3_10 => "3.10",
            PythonVersion::V3_11 => "3.11",
            PythonVersion::V3_12 => "3.12",
            PythonVersion::V3_13 => "3.13",
        }
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PythonVersion {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PythonVersion::ALL
            .into_iter()
            .find(|version| version.as_str() == value)
            .ok_or_else(|| AppError::InvalidPythonVersion(value.to_string()))
    }
}

/// Everything assembly needs: gathered by the caller, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub name: String,
    pub description: String,
    pub python_version: PythonVersion,
    /// Ordered `name==version` specifiers; order is preserved verbatim.
    pub packages: Vec<String>,
}

/// Relative paths of the generated project, in archive order.
pub const PROJECT_PATHS: [&str; 6] = [
    "README.md",
    "requirements.txt",
    "setup_env.sh",
    "app/main.py",
    "app/__init__.py",
    ".gitignore",
];

/// Build the project file tree from the gathered structure.
///
/// The only validation performed here is the non-empty name check; every
/// other field is taken as-is. Output is deterministic for a given input.
pub fn assemble(project: &ProjectStructure) -> Result<FileSet, AppError> {
    if project.name.trim().is_empty() {
        return Err(AppError::InvalidProject);
    }

    let mut readme_data = TemplateData::new();
    readme_data.insert("project_name".to_string(), TemplateValue::from(project.name.as_str()));
    readme_data.insert(
        "project_description".to_string(),
        TemplateValue::from(project.description.as_str()),
    );

    let mut requirements_data = TemplateData::new();
    requirements_data
        .insert("packages".to_string(), TemplateValue::List(project.packages.clone()));

    let mut setup_data = TemplateData::new();
    setup_data.insert(
        "python_version".to_string(),
        TemplateValue::from(project.python_version.as_str()),
    );

    let mut files = FileSet::new();
    files.insert(
        "README.md",
        render(template(TemplateKind::Readme), &readme_data, RenderMode::Strict)?,
    );
    files.insert(
        "requirements.txt",
        render(template(TemplateKind::Requirements), &requirements_data, RenderMode::Strict)?,
    );
    files.insert(
        "setup_env.sh",
        render(template(TemplateKind::SetupScript), &setup_data, RenderMode::Strict)?,
    );
    files.insert("app/main.py", template(TemplateKind::MainEntry));
    files.insert("app/__init__.py", "");
    files.insert(".gitignore", template(TemplateKind::Ignore));
    Ok(files)
}
