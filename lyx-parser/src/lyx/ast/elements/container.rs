//! Container element
//!
//! A `Container` is a tagged node that owns an ordered sequence of children
//! (leaf nodes, nested containers, or raw text lines). It renders as a
//! begin/end bracketed block:
//!
//! ```text
//! \begin_layout Standard
//! Some text
//! \end_layout
//! ```
//!
//! Children order is render order and parse order; a container exclusively
//! owns its children.
//!
//! ## Accessing children
//!
//! The `children` field is private. The container derefs to the child vector,
//! so `Vec` read access (`len`, `iter`, indexing) works directly:
//!
//! ```ignore
//! for child in &container {
//!     // process child
//! }
//! let first = &container[0]; // panics when out of range
//! let checked = container.get(0); // Option-returning access
//! ```

use super::content_item::ContentItem;
use std::fmt;

/// A tagged begin/end block with ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub tag: String,
    pub attribute: Option<String>,
    children: Vec<ContentItem>,
}

impl Container {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: None,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: Some(attribute.into()),
            children: Vec::new(),
        }
    }

    pub fn with_children(
        tag: impl Into<String>,
        attribute: Option<&str>,
        children: Vec<ContentItem>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.map(str::to_string),
            children,
        }
    }

    /// Add a child to the end of the content sequence.
    pub fn push(&mut self, item: impl Into<ContentItem>) {
        self.children.push(item.into());
    }

    /// The opening source line, `\begin_<tag>[ <attribute>]`.
    pub fn open_line(&self) -> String {
        match &self.attribute {
            Some(attribute) => format!("\\begin_{} {}", self.tag, attribute),
            None => format!("\\begin_{}", self.tag),
        }
    }

    /// The closing source line, `\end_<tag>`.
    pub fn close_line(&self) -> String {
        format!("\\end_{}", self.tag)
    }

    /// Render the container and its content recursively, one line block per
    /// child, newline separated.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.children.len() + 2);
        lines.push(self.open_line());
        for child in &self.children {
            lines.push(child.render());
        }
        lines.push(self.close_line());
        lines.join("\n")
    }

    /// Join the string form of every child: raw text as-is, elements via
    /// their rendered form. Used to extract a readable label from header-like
    /// containers.
    pub fn text(&self, sep: &str) -> String {
        self.children
            .iter()
            .map(ContentItem::render)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

// Deref for ergonomic read access to the child vector.
impl std::ops::Deref for Container {
    type Target = Vec<ContentItem>;

    fn deref(&self) -> &Self::Target {
        &self.children
    }
}

impl std::ops::DerefMut for Container {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.children
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a mut Container {
    type Item = &'a mut ContentItem;
    type IntoIter = std::slice::IterMut<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter_mut()
    }
}
