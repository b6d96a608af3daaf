//! Tree elements
//!
//! The closed set of node variants that can appear in document content:
//! [`Node`] (tagged leaf line), [`Container`] (tagged begin/end block) and raw
//! text, wrapped by the [`ContentItem`] union. [`Document`] owns the top-level
//! content sequence; [`Part`] is the derived section-hierarchy view.

pub mod container;
pub mod content_item;
pub mod document;
pub mod node;
pub mod part;

pub use container::Container;
pub use content_item::ContentItem;
pub use document::{Document, TagMatch};
pub use node::Node;
pub use part::{Part, PartItem};
