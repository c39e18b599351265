//! Core error types for diagram generation
//!
//! The indexing, inference and rendering stages never fail. Errors only come
//! from the collaborators around them: root discovery, declaration loading,
//! and writing the finished document.

use std::path::PathBuf;

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Project root not found starting from {}", start.display())]
    UnresolvableRoot { start: PathBuf },

    #[error("Declaration source error in {}: {message}", path.display())]
    DeclarationSource { path: PathBuf, message: String },

    #[error("Failed to write diagram to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Create a new unresolvable root error
    pub fn unresolvable_root(start: impl Into<PathBuf>) -> Self {
        Self::UnresolvableRoot {
            start: start.into(),
        }
    }

    /// Create a new declaration source error
    pub fn declaration_source(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DeclarationSource {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unresolvable_root() {
        let error = GenerationError::unresolvable_root("/tmp/nowhere");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Project root not found"));
        assert!(error_msg.contains("/tmp/nowhere"));
    }

    #[test]
    fn test_declaration_source() {
        let error = GenerationError::declaration_source("a.decl.json", "expected value");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Declaration source error"));
        assert!(error_msg.contains("a.decl.json"));
        assert!(error_msg.contains("expected value"));
    }

    #[test]
    fn test_output_write() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = GenerationError::output_write("out/ClassDiagrams.puml", io_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Failed to write diagram"));
        assert!(error_msg.contains("denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: GenerationError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
