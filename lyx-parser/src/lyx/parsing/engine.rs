//! Parsing engine - frame-stack tree assembly
//!
//! The engine walks the classified lines with an explicit stack of open
//! containers (the frame stack); the root frame is the document's own content
//! list. Opening a container pushes a frame, a close tag pops one, and
//! everything else appends to the innermost open frame.
//!
//! Malformed markup never aborts the parse:
//! - a close tag with no open container is reported and kept as a raw text
//!   line, so it survives re-serialization;
//! - containers still open at end of input stay open in the tree (no
//!   synthetic close children) and are reported once, with their tags.

use crate::lyx::ast::diagnostics::Diagnostic;
use crate::lyx::ast::{Container, ContentItem, Document};
use crate::lyx::parsing::line_classification::{classify_line, ParsedLine};

/// The result of a parse: the best-effort tree plus the structural warnings
/// collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// True when the input parsed without structural warnings.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a full document text into a tree.
///
/// Never fails; structural irregularities are reported through the returned
/// diagnostics while parsing continues with a best-effort tree shape.
pub fn parse_document(source: &str) -> ParseOutcome {
    let mut root: Vec<ContentItem> = Vec::new();
    let mut open: Vec<Container> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for (index, line) in source.split('\n').enumerate() {
        match classify_line(line) {
            ParsedLine::Open(container) => open.push(container),
            ParsedLine::Close(close) => match open.pop() {
                Some(done) => attach(&mut root, &mut open, ContentItem::Container(done)),
                None => {
                    diagnostics.push(
                        Diagnostic::warning(format!(
                            "closing tag without matching opening: {}",
                            close.render()
                        ))
                        .with_code("unmatched-close")
                        .at_line(index + 1),
                    );
                    // keep the stray line so re-serialization reproduces it
                    root.push(ContentItem::Text(close.render()));
                }
            },
            ParsedLine::Leaf(node) => attach(&mut root, &mut open, ContentItem::Node(node)),
            ParsedLine::Text(text) => attach(&mut root, &mut open, ContentItem::Text(text)),
        }
    }

    if !open.is_empty() {
        let tags: Vec<String> = open.iter().map(|container| container.tag.clone()).collect();
        diagnostics.push(
            Diagnostic::warning(format!(
                "found {} unclosed container(s): {}",
                open.len(),
                tags.join(", ")
            ))
            .with_code("unclosed-open"),
        );
        while let Some(done) = open.pop() {
            attach(&mut root, &mut open, ContentItem::Container(done));
        }
    }

    ParseOutcome {
        document: Document::with_content(root),
        diagnostics,
    }
}

fn attach(root: &mut Vec<ContentItem>, open: &mut Vec<Container>, item: ContentItem) {
    match open.last_mut() {
        Some(container) => container.push(item),
        None => root.push(item),
    }
}
