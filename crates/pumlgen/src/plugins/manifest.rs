//! Declaration manifests
//!
//! The external parser hands declarations over as JSON manifests, one per
//! parsed source file, named `*.decl.json`:
//!
//! ```json
//! {
//!   "source": "src/Shapes.cs",
//!   "declarations": [
//!     {
//!       "kind": "class",
//!       "name": "Circle",
//!       "scopes": [{ "kind": "namespace", "name": "Geometry" }],
//!       "members": [{ "kind": "field", "name": "_radius", "public": false, "type": "double" }],
//!       "base_types": ["Shape"]
//!     }
//!   ]
//! }
//! ```
//!
//! A relative `source` is resolved against the manifest's directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info, span, trace, Level};
use walkdir::{DirEntry, WalkDir};

use crate::core::{
    Declaration, DeclarationKind, DeclarationSource, GenerationError, Member, MemberKind, Scope,
    ScopeKind, SourcedDeclaration,
};

/// File name suffix identifying manifests
pub const MANIFEST_SUFFIX: &str = ".decl.json";

/// Directories never descended into while scanning
const SKIPPED_DIRS: &[&str] = &["bin", "obj", "target", "node_modules"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    source: PathBuf,
    #[serde(default)]
    declarations: Vec<DeclarationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum DeclarationKindEntry {
    Class,
    Interface,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MemberKindEntry {
    Field,
    Property,
    Method,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScopeKindEntry {
    Namespace,
    Type,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScopeEntry {
    kind: ScopeKindEntry,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MemberEntry {
    kind: MemberKindEntry,
    name: String,
    #[serde(default)]
    public: bool,
    #[serde(rename = "type")]
    type_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeclarationEntry {
    kind: DeclarationKindEntry,
    name: String,
    #[serde(default)]
    scopes: Vec<ScopeEntry>,
    #[serde(default)]
    members: Vec<MemberEntry>,
    #[serde(default)]
    base_types: Vec<String>,
}

impl From<ScopeEntry> for Scope {
    fn from(entry: ScopeEntry) -> Self {
        let kind = match entry.kind {
            ScopeKindEntry::Namespace => ScopeKind::Namespace,
            ScopeKindEntry::Type => ScopeKind::Type,
        };
        Scope {
            kind,
            name: entry.name,
        }
    }
}

impl From<MemberEntry> for Member {
    fn from(entry: MemberEntry) -> Self {
        let kind = match entry.kind {
            MemberKindEntry::Field => MemberKind::Field,
            MemberKindEntry::Property => MemberKind::Property,
            MemberKindEntry::Method => MemberKind::Method,
        };
        Member {
            kind,
            name: entry.name,
            is_public: entry.public,
            type_name: entry.type_name,
        }
    }
}

impl From<DeclarationEntry> for Declaration {
    fn from(entry: DeclarationEntry) -> Self {
        let kind = match entry.kind {
            DeclarationKindEntry::Class => DeclarationKind::Class,
            DeclarationKindEntry::Interface => DeclarationKind::Interface,
        };
        Declaration {
            kind,
            name: entry.name,
            scopes: entry.scopes.into_iter().map(Scope::from).collect(),
            members: entry.members.into_iter().map(Member::from).collect(),
            base_types: entry.base_types,
        }
    }
}

/// Parse one manifest's contents
///
/// `manifest_path` is used to resolve a relative `source` and in errors.
pub fn parse_manifest(manifest_path: &Path, contents: &str) -> Result<Vec<SourcedDeclaration>> {
    let manifest: ManifestFile = serde_json::from_str(contents)
        .map_err(|e| GenerationError::declaration_source(manifest_path, e.to_string()))?;

    let source = if manifest.source.is_absolute() {
        manifest.source
    } else {
        manifest_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&manifest.source)
    };

    Ok(manifest
        .declarations
        .into_iter()
        .map(|entry| SourcedDeclaration::new(Declaration::from(entry), source.clone()))
        .collect())
}

/// Declaration source reading every manifest under a directory
#[derive(Debug, Clone)]
pub struct ManifestSource {
    root: PathBuf,
}

impl ManifestSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find manifest files in lexical path order
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(GenerationError::declaration_source(
                &self.root,
                "source directory does not exist",
            )
            .into());
        }

        let mut manifests = Vec::new();
        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                GenerationError::declaration_source(path, e.to_string())
            })?;
            if entry.file_type().is_file() && is_manifest(entry.path()) {
                trace!(path = %entry.path().display(), "Found manifest");
                manifests.push(entry.into_path());
            }
        }
        Ok(manifests)
    }
}

impl DeclarationSource for ManifestSource {
    fn load(&self) -> Result<Vec<SourcedDeclaration>> {
        let load_span = span!(Level::INFO, "load_manifests", root = %self.root.display());
        let _enter = load_span.enter();

        let manifests = self.discover()?;
        debug!(manifest_count = manifests.len(), "Discovered manifests");

        let mut declarations = Vec::new();
        for path in &manifests {
            let contents = fs::read_to_string(path)
                .map_err(|e| GenerationError::declaration_source(path, e.to_string()))?;
            let parsed = parse_manifest(path, &contents)?;
            trace!(path = %path.display(), declaration_count = parsed.len(), "Read manifest");
            declarations.extend(parsed);
        }

        info!(
            manifest_count = manifests.len(),
            declaration_count = declarations.len(),
            "Loaded declarations"
        );
        Ok(declarations)
    }

    fn name(&self) -> &'static str {
        "manifest"
    }
}

fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(MANIFEST_SUFFIX))
        .unwrap_or(false)
}

/// Hidden entries and build output directories
fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_str().unwrap_or("");
    name.starts_with('.') || (entry.file_type().is_dir() && SKIPPED_DIRS.contains(&name))
}
