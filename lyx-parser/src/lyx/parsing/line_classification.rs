//! Line classification
//!
//! Every source line maps to exactly one of four shapes, decided in priority
//! order:
//!
//! 1. Empty line - raw text (the empty string).
//! 2. Line not starting with the escape character `\` - raw text, verbatim.
//! 3. Line starting with `\begin` - a new open container; tag is the text
//!    after `\begin_` up to the first space (whole remainder if no space),
//!    attribute is the remainder after the first space, kept verbatim.
//! 4. Line starting with `\end` - a close sentinel for the current container.
//! 5. Anything else - a leaf node; tag is the first whitespace-delimited
//!    token minus the leading escape character, attribute the rest.
//!
//! Tagged lines are right-trimmed before tag/attribute extraction; raw text
//! lines are preserved byte for byte.

use crate::lyx::ast::{Container, Node};
use std::fmt;

/// Transient sentinel for a `\end_<tag>` line.
///
/// Close tags exist only between classification and tree assembly: the engine
/// consumes them to pop the open-container stack, so they never appear in the
/// final tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseTag {
    pub tag: String,
}

impl CloseTag {
    pub fn render(&self) -> String {
        format!("\\end_{}", self.tag)
    }
}

impl fmt::Display for CloseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\end_{}", self.tag)
    }
}

/// The classified form of one source line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Text(String),
    Open(Container),
    Close(CloseTag),
    Leaf(Node),
}

/// Classify a single source line.
pub fn classify_line(line: &str) -> ParsedLine {
    if line.is_empty() {
        return ParsedLine::Text(String::new());
    }
    if !line.starts_with('\\') {
        return ParsedLine::Text(line.to_string());
    }

    let trimmed = line.trim_end();
    if let Some(rest) = trimmed.strip_prefix("\\begin") {
        let rest = rest.strip_prefix('_').unwrap_or(rest);
        let (tag, attribute) = split_tag_attribute(rest);
        return ParsedLine::Open(match attribute {
            Some(attribute) => Container::with_attribute(tag, attribute),
            None => Container::new(tag),
        });
    }
    if let Some(rest) = trimmed.strip_prefix("\\end") {
        let rest = rest.strip_prefix('_').unwrap_or(rest);
        let (tag, _) = split_tag_attribute(rest);
        return ParsedLine::Close(CloseTag { tag });
    }

    let (tag, attribute) = split_tag_attribute(&trimmed[1..]);
    ParsedLine::Leaf(match attribute {
        Some(attribute) => Node::with_attribute(tag, attribute),
        None => Node::new(tag),
    })
}

/// Split `tag[ attribute]` at the first space; the attribute keeps embedded
/// quotes and spaces verbatim.
fn split_tag_attribute(text: &str) -> (String, Option<String>) {
    match text.split_once(' ') {
        Some((tag, attribute)) => (tag.to_string(), Some(attribute.to_string())),
        None => (text.to_string(), None),
    }
}
