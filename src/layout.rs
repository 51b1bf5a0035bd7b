//! Where generated files go.
//!
//! Relative output directories are anchored at the Cargo workspace root,
//! so the generator writes to the same place whatever directory it runs from.

use crate::config::Config;
use crate::debug_println;
use crate::error::AstGenError;
use crate::spec::CategorySpec;
use std::path::{Path, PathBuf};

/// Extension of every generated file
pub const GENERATED_EXTENSION: &str = "rs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve `config.output_dir`, relative paths against the workspace root
    pub fn from_config(config: &Config) -> Result<Self, AstGenError> {
        let output_dir = Path::new(&config.output_dir);
        if output_dir.is_absolute() {
            return Ok(Self::new(output_dir));
        }
        Ok(Self::new(workspace_root()?.join(output_dir)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/<category lowercased>.rs`
    pub fn path_for(&self, category: &CategorySpec) -> PathBuf {
        self.dir
            .join(format!("{}.{}", category.file_stem(), GENERATED_EXTENSION))
    }
}

/// Root of the enclosing Cargo workspace, or the current directory outside one
pub fn workspace_root() -> Result<PathBuf, AstGenError> {
    match cargo_metadata::MetadataCommand::new().no_deps().exec() {
        Ok(metadata) => Ok(metadata.workspace_root.into_std_path_buf()),
        Err(e) => {
            debug_println!("no cargo workspace found ({}), using current directory", e);
            Ok(std::env::current_dir()?)
        }
    }
}
