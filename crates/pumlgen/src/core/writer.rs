//! Core trait for persisting diagram documents

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Core trait for document writers
///
/// Writing always replaces the previous artifact in full.
pub trait DocumentWriter: Send + Sync {
    /// Write `document` as `file_name` inside `output_dir`, returning the
    /// path that was written
    fn write(&self, output_dir: &Path, file_name: &str, document: &str) -> Result<PathBuf>;

    /// Get the name of this writer
    fn name(&self) -> &'static str;
}
