pub mod error;
pub mod fileset;
pub mod package;
pub mod project;
pub mod render;
pub mod session;

pub use error::AppError;
pub use fileset::FileSet;
pub use package::{
    AvailableVersion, PackageDetail, PackageRecord, ReleaseEntry, SelectedPackage,
    parse_specifier,
};
pub use project::{PROJECT_PATHS, ProjectStructure, PythonVersion, assemble};
pub use render::{RenderMode, TemplateData, TemplateValue, render};
pub use session::SessionState;
