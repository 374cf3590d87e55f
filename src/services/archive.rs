//! Zip serialization of an assembled file tree.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

use crate::domain::{AppError, FileSet};

/// Serialize every entry of the file set into one deflate-compressed zip.
///
/// Directories are implied by the forward-slash path separators; no
/// explicit directory entries are written. Pure with respect to the file
/// set: no global state, no I/O.
pub fn build_archive(files: &FileSet) -> Result<Vec<u8>, AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, content) in files.entries() {
        writer
            .start_file(path, options)
            .map_err(|e| AppError::Archive(format!("{path}: {e}")))?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| AppError::Archive(format!("{path}: {e}")))?;
    }

    let cursor = writer.finish().map_err(|e| AppError::Archive(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Write the archive blob to disk. The only side-effecting step of the
/// pipeline; callers must not reach it when `build_archive` failed.
pub fn write_archive(bytes: &[u8], destination: &Path) -> Result<(), AppError> {
    std::fs::write(destination, bytes)?;
    Ok(())
}
