//! Document tree: elements, diagnostics and the snapshot view

pub mod diagnostics;
pub mod elements;
pub mod snapshot;

pub use elements::{Container, ContentItem, Document, Node, Part, PartItem, TagMatch};
