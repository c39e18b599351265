//! Command-line interface for the pumlgen utility
//!
//! Provides a CLI to generate PlantUML class diagrams from the declaration
//! manifests produced by a source parser.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use pumlgen::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use pumlgen::plugins::{ManifestSource, Orchestrator};
use pumlgen::GeneratorConfig;

/// pumlgen - Generate PlantUML class diagrams from parsed declarations
#[derive(Parser)]
#[command(name = "pumlgen")]
#[command(about = "Generate PlantUML class diagrams from declaration manifests")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the class diagram
    Generate {
        /// Directory scanned for declaration manifests (defaults to the project root)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Directory receiving ClassDiagrams.puml (defaults to <root>/diagrams)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extra type name to treat as built-in (repeatable)
        #[arg(long = "builtin-type", value_name = "NAME")]
        builtin_types: Vec<String>,

        /// Print the diagram to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Report what a generation run would contain, without writing
    Inspect {
        /// Directory scanned for declaration manifests (defaults to the project root)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved project root
    Root {
        /// Directory to start searching from (defaults to the current directory)
        #[arg(long)]
        start: Option<PathBuf>,
    },
}

/// Main CLI application
pub struct PumlgenApp {
    config: GeneratorConfig,
}

impl PumlgenApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a new application instance with a generator config
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("pumlgen v{}", env!("CARGO_PKG_VERSION"));
        }

        let cwd = std::env::current_dir()?;

        match cli.command {
            Commands::Generate {
                source,
                output,
                builtin_types,
                stdout,
            } => self.generate_command(&cwd, source, output, builtin_types, stdout, cli.verbose),
            Commands::Inspect { source, json } => {
                self.inspect_command(&cwd, source, json, cli.verbose)
            }
            Commands::Root { start } => self.root_command(start.as_deref().unwrap_or(&cwd)),
        }
    }

    fn orchestrator(&self, builtin_types: Vec<String>) -> Orchestrator {
        let mut config = self.config.clone();
        config.extra_builtin_types.extend(builtin_types);
        Orchestrator::new(config)
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        cwd: &Path,
        source: Option<PathBuf>,
        output: Option<PathBuf>,
        builtin_types: Vec<String>,
        stdout: bool,
        verbose: bool,
    ) -> Result<()> {
        let orchestrator = self.orchestrator(builtin_types);

        if stdout {
            let source_dir = match source {
                Some(dir) => dir,
                None => orchestrator.resolve_root(cwd)?,
            };
            debug!(source = %source_dir.display(), "Generating to stdout");
            let report = orchestrator.inspect(&ManifestSource::new(&source_dir))?;
            return write_stdout(&report.document);
        }

        let locations = orchestrator.locations(cwd, source, output)?;
        if verbose {
            eprintln!("Source: {}", locations.source_dir.display());
            eprintln!("Output: {}", locations.output_dir.display());
        }

        let path = orchestrator.generate(&locations.source_dir, &locations.output_dir)?;
        println!("{}", path.display());
        Ok(())
    }

    /// Handle the inspect command
    fn inspect_command(
        &self,
        cwd: &Path,
        source: Option<PathBuf>,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let orchestrator = self.orchestrator(Vec::new());
        let source_dir = match source {
            Some(dir) => dir,
            None => orchestrator.resolve_root(cwd)?,
        };

        if verbose {
            eprintln!("Inspecting manifests under {}", source_dir.display());
        }

        let report = orchestrator.inspect(&ManifestSource::new(&source_dir))?;
        let index = &report.index;

        if json {
            let namespaces: Vec<_> = index
                .packages()
                .map(|package| {
                    serde_json::json!({
                        "name": package.name(),
                        "interfaces": package.interfaces().len(),
                        "classes": package.classes().len(),
                    })
                })
                .collect();
            let summary = serde_json::json!({
                "source": source_dir.display().to_string(),
                "namespaces": namespaces,
                "classes": index.class_count(),
                "interfaces": index.interface_count(),
                "relationships": report.relationships.lines().collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("Source: {}", source_dir.display());
            println!("Namespaces:");
            for package in index.packages() {
                println!(
                    "  {:<24} {} interfaces, {} classes",
                    package.name(),
                    package.interfaces().len(),
                    package.classes().len()
                );
            }
            println!();
            println!(
                "Total: {} classes, {} interfaces, {} relationships",
                index.class_count(),
                index.interface_count(),
                report.relationships.len()
            );
        }

        Ok(())
    }

    /// Handle the root command
    fn root_command(&self, start: &Path) -> Result<()> {
        let root = self.orchestrator(Vec::new()).resolve_root(start)?;
        debug!(root = %root.display(), "Resolved project root");
        println!("{}", root.display());
        Ok(())
    }
}

impl Default for PumlgenApp {
    fn default() -> Self {
        Self::new()
    }
}

fn write_stdout(content: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(content.as_bytes())?;
    out.flush()?;
    Ok(())
}
