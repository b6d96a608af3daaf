//! Line classification and tree assembly

pub mod engine;
pub mod line_classification;

pub use engine::{parse_document, ParseOutcome};
pub use line_classification::{classify_line, CloseTag, ParsedLine};
