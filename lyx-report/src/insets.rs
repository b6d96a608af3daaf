//! Inset builders
//!
//! Pure string-to-container transforms for the insets report generators need
//! most: cross-reference labels, references to them, and the standard layout
//! block that wraps a paragraph of content.
//!
//! Label names go through [`sanitize_label`] first: LaTeX-active characters
//! are substituted with literal words in a single regex pass, so generated
//! labels are always safe to emit.

use lyx_parser::lyx::ast::{Container, ContentItem};
use once_cell::sync::Lazy;
use regex::Regex;

static LABEL_SPECIALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[%_^#{}\\=]").expect("label character class compiles"));

/// Replace the LaTeX-active characters of a label with literal words.
///
/// Replacements are concatenated in place, without separators:
/// `a_b%c` becomes `aunderlinebpercentc`.
pub fn sanitize_label(input: &str) -> String {
    LABEL_SPECIALS
        .replace_all(input, |captures: &regex::Captures<'_>| {
            match &captures[0] {
                "%" => "percent",
                "_" => "underline",
                "^" => "slide",
                "#" => "pound",
                "{" => "bracketStart",
                "}" => "bracketEnd",
                "\\" => "backwardSlash",
                "=" => "equal",
                _ => "",
            }
        })
        .into_owned()
}

/// Build a cross-reference label inset for `name` (sanitized).
pub fn label(name: &str) -> Container {
    Container::with_children(
        "inset",
        Some("CommandInset Label"),
        vec![
            ContentItem::from("LatexCommand Label"),
            ContentItem::from(format!("name \"{}\"", sanitize_label(name))),
        ],
    )
}

/// Build a reference inset pointing at an existing label.
pub fn reference(crossref: &str) -> Container {
    Container::with_children(
        "inset",
        Some("CommandInset ref"),
        vec![ContentItem::from(format!("reference \"{}\"", crossref))],
    )
}

/// Build a layout block of the given kind around one piece of content.
pub fn layout(kind: &str, body: impl Into<ContentItem>) -> Container {
    Container::with_children("layout", Some(kind), vec![body.into()])
}

/// [`layout`] with a leading label inset, for heading blocks that are
/// cross-referenced elsewhere in the report.
pub fn labeled_layout(kind: &str, body: impl Into<ContentItem>, label_name: &str) -> Container {
    Container::with_children(
        "layout",
        Some(kind),
        vec![ContentItem::from(label(label_name)), body.into()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_each_special_character() {
        assert_eq!(sanitize_label("%"), "percent");
        assert_eq!(sanitize_label("_"), "underline");
        assert_eq!(sanitize_label("^"), "slide");
        assert_eq!(sanitize_label("#"), "pound");
        assert_eq!(sanitize_label("{"), "bracketStart");
        assert_eq!(sanitize_label("}"), "bracketEnd");
        assert_eq!(sanitize_label("\\"), "backwardSlash");
        assert_eq!(sanitize_label("="), "equal");
    }

    #[test]
    fn test_sanitize_concatenates_without_separators() {
        assert_eq!(sanitize_label("a_b%c"), "aunderlinebpercentc");
    }

    #[test]
    fn test_sanitize_leaves_plain_labels_alone() {
        assert_eq!(sanitize_label("summary-purpose"), "summary-purpose");
    }

    #[test]
    fn test_label_structure() {
        let inset = label("model_outputs");
        assert_eq!(inset.tag, "inset");
        assert_eq!(inset.attribute.as_deref(), Some("CommandInset Label"));
        assert_eq!(inset[0].render(), "LatexCommand Label");
        assert_eq!(inset[1].render(), "name \"modelunderlineoutputs\"");
    }

    #[test]
    fn test_reference_structure() {
        let inset = reference("summary");
        assert_eq!(
            inset.render(),
            "\\begin_inset CommandInset ref\nreference \"summary\"\n\\end_inset"
        );
    }

    #[test]
    fn test_labeled_layout_puts_label_first() {
        let block = labeled_layout("Section", "Limitations", "limitations");
        assert_eq!(block.attribute.as_deref(), Some("Section"));
        assert_eq!(block.len(), 2);
        assert_eq!(block[0].tag(), Some("inset"));
        assert_eq!(block[1].render(), "Limitations");
    }
}
