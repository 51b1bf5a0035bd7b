//! Whole-file writes for generated sources.
//!
//! The text goes to a `tempfile` next to the destination, which is
//! then persisted over it. Readers see either the old file or the new one.

use crate::debug_println;
use crate::error::{AstGenError, ErrorKind};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Replace `path` with `contents`, creating parent directories as needed
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), AstGenError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        AstGenError::new(
            ErrorKind::IoError,
            format!("'{}' does not name a file", path.display()),
        )
    })?;

    fs::create_dir_all(&parent).map_err(|e| io_error("create directory", &parent, e))?;

    // Deleted on drop unless persisted
    let mut temp = Builder::new()
        .prefix(&format!(".{}.", file_name.to_string_lossy()))
        .suffix(".tmp")
        .tempfile_in(&parent)
        .map_err(|e| io_error("create temporary file in", &parent, e))?;
    debug_println!("writing {}", temp.path().display());

    write_file(&mut temp, contents).map_err(|e| io_error("write", temp.path(), e))?;

    temp.persist(path).map_err(|e| io_error("replace", path, e.error))?;

    debug_println!("replaced {}", path.display());
    Ok(())
}

fn write_file(temp: &mut NamedTempFile, contents: &str) -> std::io::Result<()> {
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> AstGenError {
    AstGenError::new(
        ErrorKind::IoError,
        format!("failed to {} '{}': {}", action, path.display(), err),
    )
}
