//! Project creation: gather the selection, assemble, archive, write.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::{
    AppError, PythonVersion, SelectedPackage, SessionState, assemble, parse_specifier,
};
use crate::ports::PackageIndex;
use crate::services::{build_archive, write_archive};

/// Packages seeded into every new selection unless `--no-defaults` is set.
pub const DEFAULT_PACKAGES: [&str; 2] = ["fastapi", "uvicorn"];

/// Inputs for the `new` command. A missing `name` switches the command
/// into the interactive flow.
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub python: Option<PythonVersion>,
    /// `name` or `name==version` specifiers; bare names resolve to the
    /// latest version via the index.
    pub packages: Vec<String>,
    pub output: Option<PathBuf>,
    pub no_defaults: bool,
}

/// Create the project archive. Returns the written path, or `None` when
/// the user cancelled an interactive prompt.
pub fn execute(
    index: &dyn PackageIndex,
    options: NewOptions,
) -> Result<Option<PathBuf>, AppError> {
    let Some(state) = gather(index, &options)? else {
        return Ok(None);
    };

    let project = state.into_project();
    let files = assemble(&project)?;
    let bytes = build_archive(&files)?;

    let output_dir = options.output.unwrap_or_else(|| PathBuf::from("."));
    let destination = output_dir.join(format!("{}.zip", project.name.trim()));
    write_archive(&bytes, &destination)?;
    Ok(Some(destination))
}

fn gather(
    index: &dyn PackageIndex,
    options: &NewOptions,
) -> Result<Option<SessionState>, AppError> {
    let interactive = options.name.is_none();
    let mut state = SessionState::new();

    let python = match options.python {
        Some(version) => Some(version),
        None if interactive => prompt_python_version()?,
        None => Some(PythonVersion::default()),
    };
    let Some(python) = python else {
        return Ok(None);
    };
    state = state.with_python_version(python);

    // Explicit specifiers win over the seeded defaults of the same name.
    let mut requested = Vec::new();
    for spec in &options.packages {
        requested.push(parse_specifier(spec)?);
    }

    if !options.no_defaults {
        for name in DEFAULT_PACKAGES {
            if requested.iter().any(|(requested_name, _)| requested_name == name) {
                continue;
            }
            let record = index.fetch_latest(name)?;
            state = state.with_package(SelectedPackage::from_record(record))?;
        }
    }

    for (name, version) in requested {
        let package = match version {
            Some(version) => SelectedPackage::pinned(name, version),
            None => SelectedPackage::from_record(index.fetch_latest(&name)?),
        };
        state = state.with_package(package)?;
    }

    let name = match &options.name {
        Some(name) => name.clone(),
        None => match prompt_project_name()? {
            Some(name) => name,
            None => return Ok(None),
        },
    };
    state = state.with_name(name);

    let description = match &options.description {
        Some(description) => description.clone(),
        None if interactive => match prompt_project_description()? {
            Some(description) => description,
            None => return Ok(None),
        },
        None => String::new(),
    };
    state = state.with_description(description);

    if interactive {
        state = match prompt_additional_packages(index, state)? {
            Some(state) => state,
            None => return Ok(None),
        };
    }
    Ok(Some(state))
}

fn prompt_project_name() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Project name").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read project name: {err}"))),
    }
}

fn prompt_project_description() -> Result<Option<String>, AppError> {
    let prompt = Input::<String>::new().with_prompt("Project description").allow_empty(true);
    match prompt.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read description: {err}"))),
    }
}

fn prompt_python_version() -> Result<Option<PythonVersion>, AppError> {
    let items: Vec<&str> = PythonVersion::ALL.iter().map(PythonVersion::as_str).collect();
    let default = PythonVersion::ALL
        .iter()
        .position(|version| *version == PythonVersion::default())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Python version")
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select Python version: {err}")))?;

    Ok(selection.map(|index| PythonVersion::ALL[index]))
}

/// Search-and-add loop: fetch a package, pick one of its versions, repeat.
/// Lookup failures and duplicates are reported and the loop continues.
fn prompt_additional_packages(
    index: &dyn PackageIndex,
    mut state: SessionState,
) -> Result<Option<SessionState>, AppError> {
    loop {
        let add_more = Confirm::new()
            .with_prompt("Add another package?")
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to read confirmation: {err}")))?;
        match add_more {
            Some(true) => {}
            Some(false) => return Ok(Some(state)),
            None => return Ok(None),
        }

        let name = match Input::<String>::new().with_prompt("Package name").interact_text() {
            Ok(value) => value,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                return Ok(None);
            }
            Err(err) => {
                return Err(AppError::Prompt(format!("Failed to read package name: {err}")));
            }
        };

        let record = match index.fetch_latest(name.trim()) {
            Ok(record) => record,
            Err(err @ (AppError::PackageNotFound(_) | AppError::Network(_))) => {
                eprintln!("{err}");
                continue;
            }
            Err(err) => return Err(err),
        };

        let mut package = SelectedPackage::from_record(record);
        if !package.available_versions.is_empty() {
            let items: Vec<&str> =
                package.available_versions.iter().map(|v| v.version.as_str()).collect();
            let selection = Select::new()
                .with_prompt(format!("Version of {}", package.name))
                .items(&items)
                .default(0)
                .interact_opt()
                .map_err(|err| AppError::Prompt(format!("Failed to select version: {err}")))?;
            match selection {
                Some(chosen) => package.version = items[chosen].to_string(),
                None => return Ok(None),
            }
        }

        if state.is_selected(&package.name) {
            eprintln!("{}", AppError::PackageAlreadySelected(package.name));
            continue;
        }
        state = state.with_package(package)?;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{AvailableVersion, PackageRecord};
    use crate::ports::MockPackageIndex;

    fn record(name: &str, version: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            version: version.to_string(),
            available_versions: vec![AvailableVersion {
                version: version.to_string(),
                uploaded_at: Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap(),
            }],
        }
    }

    fn seeded_index() -> MockPackageIndex {
        MockPackageIndex::new()
            .with_record(record("fastapi", "0.100.0"))
            .with_record(record("uvicorn", "0.23.0"))
    }

    #[test]
    fn defaults_are_resolved_to_their_latest_versions() {
        let dir = tempfile::tempdir().unwrap();
        let options = NewOptions {
            name: Some("demo".to_string()),
            output: Some(dir.path().to_path_buf()),
            ..NewOptions::default()
        };

        let path = execute(&seeded_index(), options).unwrap().expect("should write");
        assert!(path.ends_with("demo.zip"));
        assert!(path.exists());
    }

    #[test]
    fn pinned_specifiers_skip_the_index() {
        let dir = tempfile::tempdir().unwrap();
        let options = NewOptions {
            name: Some("demo".to_string()),
            packages: vec!["flask==3.0.0".to_string()],
            output: Some(dir.path().to_path_buf()),
            no_defaults: true,
            ..NewOptions::default()
        };

        // Empty index: a pinned specifier must not trigger a fetch.
        let path = execute(&MockPackageIndex::new(), options).unwrap().expect("should write");
        assert!(path.exists());
    }

    #[test]
    fn explicit_specifier_overrides_the_seeded_default() {
        let dir = tempfile::tempdir().unwrap();
        let options = NewOptions {
            name: Some("demo".to_string()),
            packages: vec!["fastapi==0.95.0".to_string()],
            output: Some(dir.path().to_path_buf()),
            ..NewOptions::default()
        };

        let path = execute(&seeded_index(), options).unwrap().expect("should write");
        assert!(path.exists());
    }

    #[test]
    fn duplicate_explicit_specifiers_are_rejected() {
        let options = NewOptions {
            name: Some("demo".to_string()),
            packages: vec!["flask==3.0.0".to_string(), "flask==2.0.0".to_string()],
            no_defaults: true,
            ..NewOptions::default()
        };

        let err = execute(&MockPackageIndex::new(), options).expect_err("should reject");
        assert!(matches!(err, AppError::PackageAlreadySelected(name) if name == "flask"));
    }

    #[test]
    fn bare_specifier_for_unknown_package_fails() {
        let options = NewOptions {
            name: Some("demo".to_string()),
            packages: vec!["no-such-package".to_string()],
            no_defaults: true,
            ..NewOptions::default()
        };

        let err = execute(&MockPackageIndex::new(), options).expect_err("should fail");
        assert!(matches!(err, AppError::PackageNotFound(_)));
    }

    #[test]
    fn blank_name_is_rejected_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let options = NewOptions {
            name: Some("   ".to_string()),
            output: Some(dir.path().to_path_buf()),
            no_defaults: true,
            ..NewOptions::default()
        };

        let err = execute(&MockPackageIndex::new(), options).expect_err("should reject");
        assert!(matches!(err, AppError::InvalidProject));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
