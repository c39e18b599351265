//! Plugin implementations
//!
//! `plantuml` holds the diagram stages. The remaining modules implement the
//! core collaborator traits against the file system, and `orchestrator`
//! wires everything together.

pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod pipeline;
pub mod plantuml;
pub mod project_root;

pub use manifest::*;
pub use orchestrator::*;
pub use output::*;
pub use pipeline::*;
pub use plantuml::*;
pub use project_root::*;
