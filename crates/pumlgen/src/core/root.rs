//! Core trait for project root discovery
//!
//! Default source and output locations are derived from the project root.
//! Discovery is kept behind this trait so the generation pipeline never
//! touches version-control state directly.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Core trait for project root resolvers
pub trait RootResolver: Send + Sync {
    /// Resolve the project root containing `start`
    ///
    /// Fails with [`GenerationError::UnresolvableRoot`](super::GenerationError)
    /// when no root can be found.
    fn resolve(&self, start: &Path) -> Result<PathBuf>;

    /// Get the name of this resolver
    fn name(&self) -> &'static str;
}

/// Resolver that always answers with a fixed directory
#[derive(Debug, Clone)]
pub struct FixedRoot(pub PathBuf);

impl RootResolver for FixedRoot {
    fn resolve(&self, _start: &Path) -> Result<PathBuf> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
