//! Generation pipeline
//!
//! Runs indexing, relationship inference, and rendering over one batch of
//! declarations. Nothing is kept between calls.

use tracing::{info, span, Level};

use crate::core::{GeneratorConfig, SourcedDeclaration};
use crate::plugins::plantuml::{
    NamespaceIndex, PlantUmlRenderer, RelationshipInferencer, RelationshipSet, TypeClassifier,
};

/// Intermediate results of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub index: NamespaceIndex,
    pub relationships: RelationshipSet,
    pub document: String,
}

/// Declarations in, PlantUML document out
#[derive(Debug, Clone, Default)]
pub struct GenerationPipeline {
    inferencer: RelationshipInferencer,
    renderer: PlantUmlRenderer,
}

impl GenerationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline honouring the extra built-in types of `config`
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let classifier: TypeClassifier = config.extra_builtin_types.iter().cloned().collect();
        Self::with_classifier(classifier)
    }

    pub fn with_classifier(classifier: TypeClassifier) -> Self {
        Self {
            inferencer: RelationshipInferencer::with_classifier(classifier),
            renderer: PlantUmlRenderer::new(),
        }
    }

    /// Generate the document for `declarations`
    pub fn generate(&self, declarations: &[SourcedDeclaration]) -> String {
        self.run(declarations).document
    }

    /// Generate the document and keep the index and relationships
    pub fn run(&self, declarations: &[SourcedDeclaration]) -> GenerationReport {
        let generate_span = span!(
            Level::INFO,
            "generate",
            declaration_count = declarations.len()
        );
        let _enter = generate_span.enter();

        let index = NamespaceIndex::build(declarations);
        let relationships = self.inferencer.infer(declarations, &index);
        let document = self.renderer.render(&index, &relationships);

        info!(
            namespace_count = index.package_count(),
            class_count = index.class_count(),
            interface_count = index.interface_count(),
            relationship_count = relationships.len(),
            "Generated diagram"
        );

        GenerationReport {
            index,
            relationships,
            document,
        }
    }
}
