//! Marker-based project root discovery
//!
//! A version-control root wins: the nearest ancestor holding a `.git` entry
//! (directory, or file for worktrees and submodules). Without one, the
//! nearest ancestor holding a solution or project file is used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use crate::core::{GenerationError, RootResolver};

/// Default project marker extensions
const PROJECT_EXTENSIONS: &[&str] = &["sln", "csproj"];

/// Resolves the project root by walking up from a start directory
#[derive(Debug, Clone)]
pub struct MarkerRootResolver {
    vcs_marker: String,
    project_extensions: Vec<String>,
}

impl MarkerRootResolver {
    pub fn new() -> Self {
        Self {
            vcs_marker: ".git".to_string(),
            project_extensions: PROJECT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the project-file extensions searched for
    pub fn with_project_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Nearest ancestor of `start`, itself included, holding the VCS marker
    pub fn find_vcs_root(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(&self.vcs_marker).exists())
            .map(Path::to_path_buf)
    }

    pub fn find_project_root(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.has_project_file(dir))
            .map(Path::to_path_buf)
    }

    fn has_project_file(&self, dir: &Path) -> bool {
        let Ok(entries) = fs::read_dir(dir) else {
            trace!(dir = %dir.display(), "Skipping unreadable directory");
            return false;
        };
        entries.filter_map(|e| e.ok()).any(|entry| {
            let path = entry.path();
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| self.project_extensions.iter().any(|p| p == ext))
                    .unwrap_or(false)
        })
    }
}

impl Default for MarkerRootResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RootResolver for MarkerRootResolver {
    fn resolve(&self, start: &Path) -> Result<PathBuf> {
        let resolve_span = span!(Level::DEBUG, "resolve_root", start = %start.display());
        let _enter = resolve_span.enter();

        let start = std::path::absolute(start).map_err(GenerationError::from)?;

        if let Some(root) = self.find_vcs_root(&start) {
            info!(root = %root.display(), "Resolved project root from version control");
            return Ok(root);
        }
        debug!("No version control root found, looking for project files");

        if let Some(root) = self.find_project_root(&start) {
            info!(root = %root.display(), "Resolved project root from project file");
            return Ok(root);
        }

        Err(GenerationError::unresolvable_root(start).into())
    }

    fn name(&self) -> &'static str {
        "marker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_start_is_io_error() {
        let err = MarkerRootResolver::new().resolve(Path::new("")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerationError>(),
            Some(GenerationError::Io { .. })
        ));
    }

    #[test]
    fn test_git_directory_wins() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("app/src");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("app/App.csproj"), "<Project />").unwrap();

        let root = MarkerRootResolver::new().resolve(&nested).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_git_file_counts_as_marker() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".git"), "gitdir: ../elsewhere").unwrap();

        let root = MarkerRootResolver::new().resolve(dir.path()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_project_file_fallback() {
        // resolve() would prefer any repository enclosing the temp dir
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src/Models");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("Shop.sln"), "").unwrap();

        let resolver = MarkerRootResolver::new();
        assert_eq!(resolver.find_project_root(&nested).unwrap(), dir.path());
    }

    #[test]
    fn test_project_directory_named_like_marker_is_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Fake.csproj")).unwrap();
        assert!(!MarkerRootResolver::new().has_project_file(dir.path()));
    }

    #[test]
    fn test_custom_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "").unwrap();
        let resolver = MarkerRootResolver::new().with_project_extensions(["toml"]);
        assert!(resolver.has_project_file(dir.path()));
        assert!(!MarkerRootResolver::new().has_project_file(dir.path()));
    }

    #[test]
    fn test_resolver_name() {
        assert_eq!(MarkerRootResolver::new().name(), "marker");
    }
}
