//! Leaf element
//!
//! A `Node` is a single tagged line: the escape character, a tag, and an
//! optional attribute holding the remainder of the line verbatim.

use std::fmt;

/// A tagged leaf line, e.g. `\lyxformat 544` or `\noindent`.
///
/// The tag is assumed non-empty and pre-validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub attribute: Option<String>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: Some(attribute.into()),
        }
    }

    /// Render the node to its single source line.
    pub fn render(&self) -> String {
        match &self.attribute {
            Some(attribute) => format!("\\{} {}", self.tag, attribute),
            None => format!("\\{}", self.tag),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(f, "\\{} {}", self.tag, attribute),
            None => write!(f, "\\{}", self.tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_attribute() {
        assert_eq!(Node::new("noindent").render(), "\\noindent");
    }

    #[test]
    fn test_render_with_attribute() {
        let node = Node::with_attribute("align", "center");
        assert_eq!(node.render(), "\\align center");
    }

    #[test]
    fn test_attribute_preserved_verbatim() {
        let node = Node::with_attribute("origin", "creator \"report generator\"");
        assert_eq!(node.render(), "\\origin creator \"report generator\"");
    }
}
