//! Core trait for declaration sources
//!
//! A declaration source is the hand-off point from an external parser. It
//! yields every declaration of a run, in scan order, together with the file
//! each one came from.

use anyhow::Result;

use super::SourcedDeclaration;

/// Core trait for declaration sources
///
/// Loading is all-or-nothing: if any single input cannot be read the whole
/// call fails and no declarations are returned.
///
/// # Example
/// ```
/// use pumlgen::core::{Declaration, DeclarationSource, SourcedDeclaration};
///
/// struct Fixed(Vec<SourcedDeclaration>);
///
/// impl DeclarationSource for Fixed {
///     fn load(&self) -> anyhow::Result<Vec<SourcedDeclaration>> {
///         Ok(self.0.clone())
///     }
///
///     fn name(&self) -> &'static str {
///         "fixed"
///     }
/// }
///
/// let source = Fixed(vec![SourcedDeclaration::new(Declaration::class("A"), "/src/A.cs")]);
/// assert_eq!(source.load().unwrap().len(), 1);
/// ```
pub trait DeclarationSource: Send + Sync {
    /// Load every declaration, in file-scan order then declaration order
    fn load(&self) -> Result<Vec<SourcedDeclaration>>;

    /// Get the name of this source
    fn name(&self) -> &'static str;
}

impl DeclarationSource for Vec<SourcedDeclaration> {
    fn load(&self) -> Result<Vec<SourcedDeclaration>> {
        Ok(self.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
