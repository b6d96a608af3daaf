//! Tree snapshot - a normalized, serializable view of the document tree
//!
//! The snapshot captures node types, labels, attributes and children in a
//! format-agnostic shape, so tooling (JSON dumps, tree visualizers, test
//! fixtures) can consume the tree without reimplementing traversal.

use super::elements::{ContentItem, Document};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A snapshot of a tree node in a normalized, serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The node variant: "Document", "Container", "Node" or "Text".
    pub node_type: String,

    /// The tag for tagged elements, the text itself for raw text.
    pub label: String,

    /// Additional per-variant attributes.
    pub attributes: HashMap<String, String>,

    /// Child nodes in tree order.
    pub children: Vec<Snapshot>,
}

impl Snapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Snapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the snapshot of a whole document.
pub fn snapshot_from_document(document: &Document) -> Snapshot {
    let mut root = Snapshot::new("Document", "");
    for item in &document.content {
        root.children.push(snapshot_from_item(item));
    }
    root
}

/// Build the snapshot of a single tree element.
pub fn snapshot_from_item(item: &ContentItem) -> Snapshot {
    match item {
        ContentItem::Node(node) => {
            let mut snapshot = Snapshot::new("Node", node.tag.clone());
            if let Some(attribute) = &node.attribute {
                snapshot = snapshot.with_attribute("attribute", attribute.clone());
            }
            snapshot
        }
        ContentItem::Container(container) => {
            let mut snapshot = Snapshot::new("Container", container.tag.clone());
            if let Some(attribute) = &container.attribute {
                snapshot = snapshot.with_attribute("attribute", attribute.clone());
            }
            for child in container.iter() {
                snapshot.children.push(snapshot_from_item(child));
            }
            snapshot
        }
        ContentItem::Text(text) => Snapshot::new("Text", text.clone()),
    }
}
