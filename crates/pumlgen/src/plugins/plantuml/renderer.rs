//! PlantUML document renderer
//!
//! Renders the namespace index and relationship set to a complete PlantUML
//! class diagram. The output depends only on its inputs: same declarations
//! and same absolute paths give the same bytes.

use std::fmt::Write as _;

use tracing::{debug, span, Level};

use super::index::{NamespaceIndex, NamespacePackage};
use super::inference::RelationshipSet;
use super::uri::file_uri;
use crate::core::{Member, MemberKind, SourcedDeclaration};

const START_MARKER: &str = "@startuml";
const END_MARKER: &str = "@enduml";
const CLICKABLE: &str = "<<Clickable>>";
const INDENT: &str = "    ";

const CONFIGURATION: &[&str] = &[
    "' Configuration",
    "hide empty members",
    "skinparam shadowing false",
    "skinparam handwritten false",
    "skinparam monochrome false",
    "skinparam linetype ortho",
];

const CLASS_STYLE: &[&str] = &[
    "skinparam class {",
    "    BackgroundColor<<Clickable>> #E3F2FD",
    "    BorderColor<<Clickable>> #1976D2",
    "    HeaderBackgroundColor<<Clickable>> #BBDEFB",
    "    FontSize 12",
    "    AttributeFontSize 11",
    "    AttributeFontColor #333333",
    "    BorderThickness 1",
    "}",
];

const INTERFACE_STYLE: &[&str] = &[
    "skinparam interface {",
    "    BackgroundColor<<Clickable>> #F1F8E9",
    "    BorderColor<<Clickable>> #689F38",
    "    HeaderBackgroundColor<<Clickable>> #DCEDC8",
    "    FontSize 12",
    "    AttributeFontSize 11",
    "    AttributeFontColor #333333",
    "    BorderThickness 1",
    "}",
];

const ARROW_STYLE: &[&str] = &[
    "skinparam arrow {",
    "    Color #666666",
    "    FontSize 11",
    "    Thickness 1",
    "}",
];

const RELATIONSHIPS_HEADER: &str = "' Relationships";

/// PlantUML class diagram renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlRenderer;

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Get the name of this renderer
    pub fn name(&self) -> &'static str {
        "plantuml"
    }

    /// Get the supported output format
    pub fn format(&self) -> &'static str {
        "puml"
    }

    /// Render a complete document
    pub fn render(&self, index: &NamespaceIndex, relationships: &RelationshipSet) -> String {
        let render_span = span!(
            Level::DEBUG,
            "render_document",
            namespace_count = index.package_count(),
            relationship_count = relationships.len()
        );
        let _enter = render_span.enter();

        let mut out = DocumentBuilder::default();
        out.line(START_MARKER);
        out.block(CONFIGURATION);
        out.block(CLASS_STYLE);
        out.block(INTERFACE_STYLE);
        out.block(ARROW_STYLE);

        for package in index.packages() {
            self.render_package(&mut out, package);
        }

        out.blank();
        out.line(RELATIONSHIPS_HEADER);
        for line in relationships.lines() {
            out.line(line);
        }
        out.line(END_MARKER);

        let document = out.finish();
        debug!(output_len = document.len(), "Rendering completed");
        document
    }

    fn render_package(&self, out: &mut DocumentBuilder, package: &NamespacePackage) {
        out.line(&format!("package {} {{", package.name()));

        for entry in package.interfaces() {
            self.render_interface(out, entry);
        }
        for entry in package.classes() {
            self.render_class(out, entry);
        }

        out.line("}");
    }

    fn render_interface(&self, out: &mut DocumentBuilder, entry: &SourcedDeclaration) {
        out.line(&header("interface", entry));
        for member in &entry.declaration.members {
            // Interface members are implicitly public
            match member.kind {
                MemberKind::Method => out.member(format_args!("+ {}()", member.name)),
                MemberKind::Property => {
                    out.member(format_args!("+ {} : {}", member.name, member.type_name))
                }
                MemberKind::Field => {}
            }
        }
        out.line("}");
        out.blank();
    }

    fn render_class(&self, out: &mut DocumentBuilder, entry: &SourcedDeclaration) {
        out.line(&header("class", entry));
        for member in &entry.declaration.members {
            out.member(format_args!("{}", ClassMember(member)));
        }
        out.line("}");
        out.blank();
    }
}

fn header(keyword: &str, entry: &SourcedDeclaration) -> String {
    format!(
        "{} {} {} [[{}]] {{",
        keyword,
        entry.name(),
        CLICKABLE,
        file_uri(entry.source())
    )
}

/// Class member line without indentation
struct ClassMember<'a>(&'a Member);

impl std::fmt::Display for ClassMember<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let member = self.0;
        let vis = member.visibility_marker();
        match member.kind {
            MemberKind::Field | MemberKind::Property => {
                write!(f, "{} {} : {}", vis, member.name, member.type_name)
            }
            MemberKind::Method => write!(f, "{} {}() : {}", vis, member.name, member.type_name),
        }
    }
}

/// Line-oriented document buffer using `\n` endings
#[derive(Default)]
struct DocumentBuilder {
    buf: String,
}

impl DocumentBuilder {
    fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn block(&mut self, lines: &[&str]) {
        for line in lines {
            self.line(line);
        }
    }

    fn member(&mut self, args: std::fmt::Arguments<'_>) {
        self.buf.push_str(INDENT);
        let _ = self.buf.write_fmt(args);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}
