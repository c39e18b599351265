//! PlantUML class diagram plugin
//!
//! Indexes declarations by namespace, infers relationships between them, and
//! renders the result as a PlantUML document.

mod classifier;
mod index;
mod inference;
mod renderer;
mod uri;

pub use classifier::TypeClassifier;
pub use index::{NamespaceIndex, NamespacePackage};
pub use inference::{RelationshipEdge, RelationshipInferencer, RelationshipKind, RelationshipSet};
pub use renderer::PlantUmlRenderer;
pub use uri::{absolutize, file_uri};
