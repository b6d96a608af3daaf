//! Section hierarchy
//!
//! Report documents keep their body flat: a heading is just another layout
//! container sitting next to the content it introduces. Navigating a report
//! by section therefore needs a derived view that groups flat siblings into
//! nested parts by a leveled heading vocabulary.
//!
//! A [`Part`] wraps a heading container as `header` and collects everything
//! up to the next heading of the same or shallower level as `content`, which
//! may itself contain child parts. The builder maintains a stack of open
//! parts: a new heading pops every open part at the same or deeper rank, so a
//! Section ends an open Subsection, an open Subsubsection, and a sibling
//! Section.
//!
//! Parts are derived on demand and clone the relevant body children; they are
//! not persisted back into the document unless the caller re-inserts them.

use super::container::Container;
use super::content_item::ContentItem;
use std::fmt;

/// Standard heading vocabulary, outermost level first.
pub const DEFAULT_LEVELS: [&str; 3] = ["Section", "Subsection", "Subsubsection"];

/// An entry in a part's content: a nested part or a plain tree element.
#[derive(Debug, Clone, PartialEq)]
pub enum PartItem {
    Item(ContentItem),
    Part(Part),
}

impl PartItem {
    pub fn render(&self) -> String {
        match self {
            PartItem::Item(item) => item.render(),
            PartItem::Part(part) => part.render(),
        }
    }

    /// The nested part, when this entry is one.
    pub fn as_part(&self) -> Option<&Part> {
        match self {
            PartItem::Part(part) => Some(part),
            PartItem::Item(_) => None,
        }
    }
}

impl fmt::Display for PartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<ContentItem> for PartItem {
    fn from(item: ContentItem) -> Self {
        PartItem::Item(item)
    }
}

impl From<Container> for PartItem {
    fn from(container: Container) -> Self {
        PartItem::Item(ContentItem::Container(container))
    }
}

impl From<Part> for PartItem {
    fn from(part: Part) -> Self {
        PartItem::Part(part)
    }
}

/// A named hierarchical grouping of document content keyed by heading level.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub header: Container,
    pub content: Vec<PartItem>,
}

impl Part {
    pub fn new(header: Container) -> Self {
        Self {
            header,
            content: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.header.tag
    }

    pub fn attribute(&self) -> Option<&str> {
        self.header.attribute.as_deref()
    }

    /// The part's textual name: the header's joined child text, trimmed.
    pub fn name(&self) -> String {
        self.header.text(" ").trim().to_string()
    }

    pub fn push(&mut self, item: impl Into<PartItem>) {
        self.content.push(item.into());
    }

    /// Flatten the part back into plain tree elements, header first, child
    /// parts recursively. This is how a derived part is re-inserted into a
    /// document's flat body content.
    pub fn into_items(self) -> Vec<ContentItem> {
        let mut items = vec![ContentItem::Container(self.header)];
        for entry in self.content {
            match entry {
                PartItem::Item(item) => items.push(item),
                PartItem::Part(part) => items.extend(part.into_items()),
            }
        }
        items
    }

    /// Render the header followed by the part's content.
    pub fn render(&self) -> String {
        let mut blocks = vec![self.header.render()];
        for item in &self.content {
            blocks.push(item.render());
        }
        blocks.join("\n")
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Group a body container's direct children into nested parts.
///
/// `levels` lists the heading attributes outermost first; a container child
/// whose trimmed attribute matches a level starts a new part at that rank.
/// Any other child, including a heading attribute absent from `levels`, is
/// ordinary content appended to the innermost open part.
pub fn build_parts(body: &Container, levels: &[&str]) -> Vec<PartItem> {
    let mut builder = PartBuilder::new(levels);
    for child in body {
        builder.add(child);
    }
    builder.finish()
}

/// Stack machine for the flat-to-nested grouping.
struct PartBuilder<'a> {
    levels: &'a [&'a str],
    // open parts with their rank, outermost first
    stack: Vec<(usize, Part)>,
    result: Vec<PartItem>,
}

impl<'a> PartBuilder<'a> {
    fn new(levels: &'a [&'a str]) -> Self {
        Self {
            levels,
            stack: Vec::new(),
            result: Vec::new(),
        }
    }

    fn heading_rank(&self, item: &ContentItem) -> Option<usize> {
        match item {
            ContentItem::Container(container) => {
                let attribute = container.attribute.as_deref()?.trim();
                self.levels.iter().position(|level| *level == attribute)
            }
            _ => None,
        }
    }

    fn add(&mut self, item: &ContentItem) {
        match self.heading_rank(item) {
            Some(rank) => {
                self.close_through(rank);
                if let ContentItem::Container(container) = item {
                    self.stack.push((rank, Part::new(container.clone())));
                }
            }
            None => self.append(PartItem::Item(item.clone())),
        }
    }

    /// Pop every open part at `rank` or deeper, attaching each to its parent.
    fn close_through(&mut self, rank: usize) {
        while self
            .stack
            .last()
            .is_some_and(|(open_rank, _)| *open_rank >= rank)
        {
            if let Some((_, part)) = self.stack.pop() {
                self.append(PartItem::Part(part));
            }
        }
    }

    fn append(&mut self, item: PartItem) {
        match self.stack.last_mut() {
            Some((_, part)) => part.content.push(item),
            None => self.result.push(item),
        }
    }

    fn finish(mut self) -> Vec<PartItem> {
        self.close_through(0);
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: &str, title: &str) -> ContentItem {
        let mut container = Container::with_attribute("layout", level);
        container.push(title);
        ContentItem::Container(container)
    }

    fn body_with(children: Vec<ContentItem>) -> Container {
        Container::with_children("body", None, children)
    }

    #[test]
    fn test_part_name_joins_and_trims() {
        let mut header = Container::with_attribute("layout", "Section");
        header.push("  Executive Summary  ");
        assert_eq!(Part::new(header).name(), "Executive Summary");
    }

    #[test]
    fn test_single_section_collects_content() {
        let body = body_with(vec![
            heading("Section", "Intro"),
            ContentItem::from("first paragraph"),
        ]);
        let parts = build_parts(&body, &DEFAULT_LEVELS);
        assert_eq!(parts.len(), 1);
        let part = parts[0].as_part().unwrap();
        assert_eq!(part.name(), "Intro");
        assert_eq!(part.content.len(), 1);
    }

    #[test]
    fn test_same_rank_closes_sibling() {
        let body = body_with(vec![
            heading("Section", "A"),
            heading("Section", "B"),
        ]);
        let parts = build_parts(&body, &DEFAULT_LEVELS);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_part().unwrap().name(), "A");
        assert_eq!(parts[1].as_part().unwrap().name(), "B");
    }

    #[test]
    fn test_deeper_rank_nests() {
        let body = body_with(vec![
            heading("Section", "A"),
            heading("Subsection", "A.1"),
            heading("Subsubsection", "A.1.1"),
            heading("Subsection", "A.2"),
        ]);
        let parts = build_parts(&body, &DEFAULT_LEVELS);
        assert_eq!(parts.len(), 1);
        let section = parts[0].as_part().unwrap();
        assert_eq!(section.content.len(), 2);
        let first_sub = section.content[0].as_part().unwrap();
        assert_eq!(first_sub.name(), "A.1");
        assert_eq!(first_sub.content[0].as_part().unwrap().name(), "A.1.1");
        assert_eq!(section.content[1].as_part().unwrap().name(), "A.2");
    }

    #[test]
    fn test_unknown_heading_attribute_is_content() {
        let body = body_with(vec![
            heading("Section", "A"),
            heading("Chapter", "not a level"),
        ]);
        let parts = build_parts(&body, &DEFAULT_LEVELS);
        assert_eq!(parts.len(), 1);
        let section = parts[0].as_part().unwrap();
        assert_eq!(section.content.len(), 1);
        assert!(section.content[0].as_part().is_none());
    }

    #[test]
    fn test_loose_content_before_first_heading() {
        let body = body_with(vec![
            ContentItem::from("preamble text"),
            heading("Section", "A"),
        ]);
        let parts = build_parts(&body, &DEFAULT_LEVELS);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].as_part().is_none());
        assert!(parts[1].as_part().is_some());
    }

    #[test]
    fn test_render_reproduces_flat_form() {
        let body = body_with(vec![
            heading("Section", "A"),
            ContentItem::from("text"),
        ]);
        let parts = build_parts(&body, &DEFAULT_LEVELS);
        let rendered: Vec<String> = parts.iter().map(PartItem::render).collect();
        assert_eq!(
            rendered.join("\n"),
            "\\begin_layout Section\nA\n\\end_layout\ntext"
        );
    }
}
