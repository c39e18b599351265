//! File-system document writer

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, span, Level};

use crate::core::{DocumentWriter, GenerationError};

/// Writes documents to disk, creating the output directory as needed
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentWriter;

impl FsDocumentWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for FsDocumentWriter {
    fn write(&self, output_dir: &Path, file_name: &str, document: &str) -> Result<PathBuf> {
        let write_span = span!(Level::DEBUG, "write_document", dir = %output_dir.display());
        let _enter = write_span.enter();

        fs::create_dir_all(output_dir)
            .map_err(|e| GenerationError::output_write(output_dir, e))?;

        let path = output_dir.join(file_name);
        fs::write(&path, document).map_err(|e| GenerationError::output_write(&path, e))?;

        info!(path = %path.display(), bytes = document.len(), "Wrote diagram");
        Ok(path)
    }

    fn name(&self) -> &'static str {
        "fs"
    }
}
