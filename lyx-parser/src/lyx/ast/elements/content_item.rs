//! Content item
//!
//! `ContentItem` is the common wrapper for everything that can appear in
//! document content: tagged leaves, tagged containers, and raw text lines
//! (already-rendered source lines, including the empty line). It lets tooling
//! operate uniformly on mixed structures without probing concrete types.

use super::container::Container;
use super::node::Node;
use std::fmt;

/// Any element that can appear in document content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Node(Node),
    Container(Container),
    Text(String),
}

impl ContentItem {
    /// The element's tag, when it has one. Raw text carries no tag.
    pub fn tag(&self) -> Option<&str> {
        match self {
            ContentItem::Node(node) => Some(&node.tag),
            ContentItem::Container(container) => Some(&container.tag),
            ContentItem::Text(_) => None,
        }
    }

    /// The element's attribute, when it has one.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            ContentItem::Node(node) => node.attribute.as_deref(),
            ContentItem::Container(container) => container.attribute.as_deref(),
            ContentItem::Text(_) => None,
        }
    }

    /// Child elements, for containers.
    pub fn children(&self) -> Option<&[ContentItem]> {
        match self {
            ContentItem::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Mutable child vector, for containers.
    pub fn children_mut(&mut self) -> Option<&mut Vec<ContentItem>> {
        match self {
            ContentItem::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Render the item exactly as its source line(s).
    pub fn render(&self) -> String {
        match self {
            ContentItem::Node(node) => node.render(),
            ContentItem::Container(container) => container.render(),
            ContentItem::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<Node> for ContentItem {
    fn from(node: Node) -> Self {
        ContentItem::Node(node)
    }
}

impl From<Container> for ContentItem {
    fn from(container: Container) -> Self {
        ContentItem::Container(container)
    }
}

impl From<String> for ContentItem {
    fn from(text: String) -> Self {
        ContentItem::Text(text)
    }
}

impl From<&str> for ContentItem {
    fn from(text: &str) -> Self {
        ContentItem::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_accessor() {
        assert_eq!(ContentItem::from(Node::new("lyxformat")).tag(), Some("lyxformat"));
        assert_eq!(ContentItem::from(Container::new("body")).tag(), Some("body"));
        assert_eq!(ContentItem::from("plain line").tag(), None);
    }

    #[test]
    fn test_children_only_for_containers() {
        let mut container = Container::new("body");
        container.push("line");
        let item = ContentItem::from(container);
        assert_eq!(item.children().map(<[_]>::len), Some(1));
        assert!(ContentItem::from("text").children().is_none());
        assert!(ContentItem::from(Node::new("noindent")).children().is_none());
    }

    #[test]
    fn test_render_text_verbatim() {
        assert_eq!(ContentItem::from("").render(), "");
        assert_eq!(ContentItem::from("  spaced  ").render(), "  spaced  ");
    }
}
