//! Orchestrator for a complete generation run
//!
//! The orchestrator manages the flow of data through the collaborators:
//! RootResolver → DeclarationSource → GenerationPipeline → DocumentWriter

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{DeclarationSource, DocumentWriter, GeneratorConfig, RootResolver};
use crate::plugins::manifest::ManifestSource;
use crate::plugins::output::FsDocumentWriter;
use crate::plugins::pipeline::{GenerationPipeline, GenerationReport};
use crate::plugins::project_root::MarkerRootResolver;

/// Locations chosen for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLocations {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Coordinates root discovery, declaration loading, generation and writing
pub struct Orchestrator {
    config: GeneratorConfig,
    pipeline: GenerationPipeline,
    root_resolver: Box<dyn RootResolver>,
    writer: Box<dyn DocumentWriter>,
}

impl Orchestrator {
    /// Create an orchestrator with the file-system collaborators
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_collaborators(
            config,
            Box::new(MarkerRootResolver::new()),
            Box::new(FsDocumentWriter::new()),
        )
    }

    pub fn with_collaborators(
        config: GeneratorConfig,
        root_resolver: Box<dyn RootResolver>,
        writer: Box<dyn DocumentWriter>,
    ) -> Self {
        let pipeline = GenerationPipeline::from_config(&config);
        Self {
            config,
            pipeline,
            root_resolver,
            writer,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &GenerationPipeline {
        &self.pipeline
    }

    /// Resolve the project root containing `start`
    pub fn resolve_root(&self, start: &Path) -> Result<PathBuf> {
        debug!(resolver = self.root_resolver.name(), "Resolving project root");
        self.root_resolver.resolve(start)
    }

    /// Fill in missing locations from the project root found above `start`
    ///
    /// The root is only resolved when a location is missing.
    pub fn locations(
        &self,
        start: &Path,
        source_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<RunLocations> {
        match (source_dir, output_dir) {
            (Some(source_dir), Some(output_dir)) => Ok(RunLocations {
                source_dir,
                output_dir,
            }),
            (source_dir, output_dir) => {
                let root = self.resolve_root(start)?;
                Ok(RunLocations {
                    output_dir: output_dir
                        .unwrap_or_else(|| root.join(&self.config.default_output_dir)),
                    source_dir: source_dir.unwrap_or(root),
                })
            }
        }
    }

    /// Load declarations and generate without writing
    pub fn inspect(&self, source: &dyn DeclarationSource) -> Result<GenerationReport> {
        debug!(source = source.name(), "Loading declarations");
        let declarations = source.load()?;
        Ok(self.pipeline.run(&declarations))
    }

    /// Generate from `source` and write into `output_dir`
    ///
    /// Nothing is written if loading fails.
    pub fn generate_from(
        &self,
        source: &dyn DeclarationSource,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let run_span = span!(Level::INFO, "generate_run", output = %output_dir.display());
        let _enter = run_span.enter();

        let report = self.inspect(source)?;
        debug!(writer = self.writer.name(), "Writing document");
        let path = self
            .writer
            .write(output_dir, &self.config.output_file, &report.document)?;

        info!(path = %path.display(), "Generation completed");
        Ok(path)
    }

    /// Generate from the manifests under `source_dir` into `output_dir`
    pub fn generate(&self, source_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
        self.generate_from(&ManifestSource::new(source_dir), output_dir)
    }

    /// Generate into `output_dir`, reading manifests from the project root
    pub fn generate_into(&self, start: &Path, output_dir: &Path) -> Result<PathBuf> {
        let locations = self.locations(start, None, Some(output_dir.to_path_buf()))?;
        self.generate(&locations.source_dir, &locations.output_dir)
    }

    /// Generate using the project root for both locations
    pub fn generate_default(&self, start: &Path) -> Result<PathBuf> {
        let locations = self.locations(start, None, None)?;
        self.generate(&locations.source_dir, &locations.output_dir)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
