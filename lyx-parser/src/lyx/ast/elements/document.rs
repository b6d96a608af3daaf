//! Document element
//!
//! The document owns the root sequence of tree nodes. It is built once from
//! input text (see [`parse_document`](crate::lyx::parsing::parse_document)) or
//! assembled programmatically, and mutated only by appending to its content or
//! to a container within it.
//!
//! Navigation:
//! - [`Document::find_tag`] — breadth-first tag search returning each match
//!   with the path of child indices from the root.
//! - [`Document::parse_parts`] — the leveled section-hierarchy view, see the
//!   [part](super::part) module.

use super::container::Container;
use super::content_item::ContentItem;
use super::part::{self, PartItem};
use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A tag-search hit: the matched element and the path of child indices that
/// reaches it from the document root.
#[derive(Debug, Clone, PartialEq)]
pub struct TagMatch<'a> {
    pub item: &'a ContentItem,
    pub path: Vec<usize>,
}

/// The root content sequence of a parsed or programmatically built document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub content: Vec<ContentItem>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: Vec<ContentItem>) -> Self {
        Self { content }
    }

    /// Add an item to the end of the top-level content.
    pub fn push(&mut self, item: impl Into<ContentItem>) {
        self.content.push(item.into());
    }

    /// Render the whole document, top-level items joined by newlines.
    pub fn render(&self) -> String {
        self.content
            .iter()
            .map(ContentItem::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Find every element carrying `tag`, breadth first.
    ///
    /// Siblings are visited in list order and a whole depth level is visited
    /// before descending. Each match is paired with the path of child indices
    /// needed to reach it from the root; [`Document::item_at`] resolves such
    /// a path back to the element.
    pub fn find_tag(&self, tag: &str) -> Vec<TagMatch<'_>> {
        let mut queue: VecDeque<(&ContentItem, Vec<usize>)> = self
            .content
            .iter()
            .enumerate()
            .map(|(index, item)| (item, vec![index]))
            .collect();
        let mut found = Vec::new();

        while let Some((item, path)) = queue.pop_front() {
            if item.tag() == Some(tag) {
                found.push(TagMatch {
                    item,
                    path: path.clone(),
                });
            }
            if let Some(children) = item.children() {
                for (index, child) in children.iter().enumerate() {
                    let mut child_path = path.clone();
                    child_path.push(index);
                    queue.push_back((child, child_path));
                }
            }
        }
        found
    }

    /// Resolve a path of child indices, as produced by [`Document::find_tag`].
    pub fn item_at(&self, path: &[usize]) -> Option<&ContentItem> {
        let (first, rest) = path.split_first()?;
        let mut current = self.content.get(*first)?;
        for &index in rest {
            current = current.children()?.get(index)?;
        }
        Some(current)
    }

    /// Mutable variant of [`Document::item_at`].
    pub fn item_at_mut(&mut self, path: &[usize]) -> Option<&mut ContentItem> {
        let (first, rest) = path.split_first()?;
        let mut current = self.content.get_mut(*first)?;
        for &index in rest {
            current = current.children_mut()?.get_mut(index)?;
        }
        Some(current)
    }

    /// The first `body` container found by tag search, if any.
    pub fn body(&self) -> Option<&Container> {
        self.find_tag("body").into_iter().find_map(|hit| match hit.item {
            ContentItem::Container(container) => Some(container),
            _ => None,
        })
    }

    /// Mutable access to the first `body` container, the usual insertion
    /// point for generated report content.
    pub fn body_mut(&mut self) -> Option<&mut Container> {
        let path = self.find_tag("body").into_iter().find_map(|hit| {
            matches!(hit.item, ContentItem::Container(_)).then_some(hit.path)
        })?;
        match self.item_at_mut(&path)? {
            ContentItem::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Group the body's flat children into nested sections keyed by the
    /// heading attributes in `levels`, outermost first.
    ///
    /// A document without a `body` container yields an empty vector; this is
    /// the documented contract rather than an error.
    pub fn parse_parts(&self, levels: &[&str]) -> Vec<PartItem> {
        match self.body() {
            Some(body) => part::build_parts(body, levels),
            None => Vec::new(),
        }
    }

    /// [`Document::parse_parts`] with the standard heading vocabulary:
    /// Section > Subsection > Subsubsection.
    pub fn parse_default_parts(&self) -> Vec<PartItem> {
        self.parse_parts(&part::DEFAULT_LEVELS)
    }

    /// Write the rendered document to a file. I/O errors propagate unchanged.
    pub fn to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::super::node::Node;
    use super::*;

    fn sample_document() -> Document {
        let mut body = Container::new("body");
        body.push(Node::with_attribute("lyxformat", "544"));
        let mut doc_container = Container::new("document");
        doc_container.push(body);
        Document::with_content(vec![
            ContentItem::from("# preamble comment"),
            ContentItem::from(doc_container),
        ])
    }

    #[test]
    fn test_render_joins_top_level() {
        let doc = Document::with_content(vec![
            ContentItem::from(Node::new("lyxformat")),
            ContentItem::from(""),
            ContentItem::from("trailing"),
        ]);
        assert_eq!(doc.render(), "\\lyxformat\n\ntrailing");
    }

    #[test]
    fn test_find_tag_returns_paths() {
        let doc = sample_document();
        let hits = doc.find_tag("body");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, vec![1, 0]);
        assert_eq!(doc.item_at(&hits[0].path), Some(hits[0].item));
    }

    #[test]
    fn test_breadth_first_order() {
        // A shallow match at depth 1 must precede a deeper one at depth 2
        // even though the deep one's top-level ancestor comes first.
        let mut inner = Container::new("target");
        inner.push("deep");
        let mut wrapper = Container::new("wrapper");
        wrapper.push(inner);
        let doc = Document::with_content(vec![
            ContentItem::from(wrapper),
            ContentItem::from(Container::new("target")),
        ]);
        let hits = doc.find_tag("target");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].path, vec![1]);
        assert_eq!(hits[1].path, vec![0, 0]);
    }

    #[test]
    fn test_body_mut_allows_insertion() {
        let mut doc = sample_document();
        doc.body_mut().unwrap().push("inserted line");
        let body = doc.body().unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[1].render(), "inserted line");
    }

    #[test]
    fn test_item_at_out_of_range() {
        let doc = sample_document();
        assert!(doc.item_at(&[5]).is_none());
        assert!(doc.item_at(&[1, 0, 9]).is_none());
        assert!(doc.item_at(&[]).is_none());
    }
}
