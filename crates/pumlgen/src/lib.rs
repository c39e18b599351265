//! pumlgen - PlantUML class diagrams from parsed declarations
//!
//! A library for turning class and interface declarations into a styled,
//! deterministic PlantUML class diagram: declarations are grouped by
//! namespace, inheritance and association edges are inferred from base types
//! and typed members, and every entity links back to its source file.
//!
//! # Quick Start
//!
//! ```rust
//! use pumlgen::{generate, Declaration, Member, SourcedDeclaration};
//!
//! let declarations = vec![SourcedDeclaration::new(
//!     Declaration::class("Order")
//!         .in_namespace("Shop")
//!         .with_member(Member::field("_customer", "Customer")),
//!     "/repo/src/Order.cs",
//! )];
//!
//! let puml = generate(&declarations);
//! assert!(puml.starts_with("@startuml"));
//! assert!(puml.contains("Order --> Customer : has"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual stages:
//!
//! ```rust
//! use pumlgen::prelude::*;
//!
//! let declarations = vec![SourcedDeclaration::new(
//!     Declaration::class("Circle").in_namespace("Geometry").with_base("Shape"),
//!     "/repo/src/Circle.cs",
//! )];
//!
//! let index = NamespaceIndex::build(&declarations);
//! assert_eq!(index.package_count(), 1);
//!
//! let relationships = RelationshipInferencer::new().infer(&declarations, &index);
//! assert!(relationships.contains("Circle --|> Shape"));
//!
//! let puml = PlantUmlRenderer::new().render(&index, &relationships);
//! assert!(puml.ends_with("@enduml\n"));
//! ```

use std::path::{Path, PathBuf};

pub mod core;
pub mod plugins;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Declaration, DeclarationKind, DeclarationSource, DocumentWriter, GenerationError,
        GeneratorConfig, Member, MemberKind, RootResolver, Scope, ScopeKind, SourcedDeclaration,
    };
    pub use crate::plugins::{
        FsDocumentWriter, GenerationPipeline, ManifestSource, MarkerRootResolver,
        NamespaceIndex, NamespacePackage, Orchestrator, PlantUmlRenderer, RelationshipEdge,
        RelationshipInferencer, RelationshipKind, RelationshipSet, TypeClassifier,
    };
}

/// Generate a PlantUML class diagram for `declarations`
///
/// Uses the default built-in type table. Declarations are expected in scan
/// order: file order, then declaration order within each file.
///
/// # Example
/// ```rust
/// use pumlgen::generate;
///
/// let puml = generate(&[]);
/// assert!(puml.starts_with("@startuml\n"));
/// assert!(puml.ends_with("@enduml\n"));
/// ```
pub fn generate(declarations: &[SourcedDeclaration]) -> String {
    plugins::GenerationPipeline::new().generate(declarations)
}

/// Generate from the manifests under `source_dir` and write the diagram
/// into `output_dir`
///
/// Returns the path of the written file.
pub fn generate_to_dir(source_dir: &Path, output_dir: &Path) -> anyhow::Result<PathBuf> {
    plugins::Orchestrator::default().generate(source_dir, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty() {
        let output = generate(&[]);
        assert!(output.starts_with("@startuml\n"));
        assert!(output.ends_with("' Relationships\n@enduml\n"));
    }

    #[test]
    fn test_generate_simple_class() {
        let decls = vec![SourcedDeclaration::new(
            Declaration::class("SimpleClass")
                .in_namespace("TestNamespace")
                .with_member(Member::property("Test", "string").public()),
            "/tmp/SimpleClass.cs",
        )];
        let output = generate(&decls);
        assert!(output.contains("package TestNamespace {"));
        assert!(output.contains("class SimpleClass <<Clickable>>"));
        assert!(output.contains("+ Test : string"));
        assert!(output.ends_with("' Relationships\n@enduml\n"));
    }
}
