//! Integration tests for the section-hierarchy view.

use lyx_parser::lyx::ast::elements::part::DEFAULT_LEVELS;
use lyx_parser::lyx::ast::{ContentItem, Document, PartItem};
use lyx_parser::lyx::parsing::parse_document;

fn parse(source: &str) -> Document {
    let outcome = parse_document(source);
    assert!(
        outcome.is_clean(),
        "fixture should parse clean: {:?}",
        outcome.diagnostics
    );
    outcome.document
}

#[test]
fn test_section_subsection_grouping() {
    // body children: Section A, Subsection A.1, loose text, Section B
    let document = parse(
        "\\begin_body\n\
         \\begin_layout Section\nA\n\\end_layout\n\
         \\begin_layout Subsection\nA.1\n\\end_layout\n\
         loose text\n\
         \\begin_layout Section\nB\n\\end_layout\n\
         \\end_body",
    );

    let parts = document.parse_parts(&["Section", "Subsection"]);
    assert_eq!(parts.len(), 2);

    let section_a = parts[0].as_part().unwrap();
    assert_eq!(section_a.name(), "A");
    assert_eq!(section_a.content.len(), 1);
    let subsection = section_a.content[0].as_part().unwrap();
    assert_eq!(subsection.name(), "A.1");
    assert_eq!(subsection.content.len(), 1);
    assert_eq!(subsection.content[0].render(), "loose text");

    let section_b = parts[1].as_part().unwrap();
    assert_eq!(section_b.name(), "B");
    assert!(section_b.content.is_empty());
}

#[test]
fn test_subsection_does_not_close_enclosing_section() {
    let document = parse(
        "\\begin_body\n\
         \\begin_layout Section\nOutline\n\\end_layout\n\
         \\begin_layout Subsection\nFirst\n\\end_layout\n\
         \\begin_layout Subsection\nSecond\n\\end_layout\n\
         \\end_body",
    );

    let parts = document.parse_default_parts();
    assert_eq!(parts.len(), 1);
    let section = parts[0].as_part().unwrap();
    assert_eq!(section.content.len(), 2);
    assert_eq!(section.content[0].as_part().unwrap().name(), "First");
    assert_eq!(section.content[1].as_part().unwrap().name(), "Second");
}

#[test]
fn test_document_without_body_yields_empty() {
    let document = parse("\\begin_header\n\\textclass article\n\\end_header");
    assert!(document.parse_parts(&DEFAULT_LEVELS).is_empty());
}

#[test]
fn test_heading_outside_levels_is_plain_content() {
    let document = parse(
        "\\begin_body\n\
         \\begin_layout Section\nA\n\\end_layout\n\
         \\begin_layout Subsubsection\ntoo deep for the caller\n\\end_layout\n\
         \\end_body",
    );

    // Subsubsection is not in the requested vocabulary here
    let parts = document.parse_parts(&["Section", "Subsection"]);
    let section = parts[0].as_part().unwrap();
    assert_eq!(section.content.len(), 1);
    assert!(
        section.content[0].as_part().is_none(),
        "unlisted heading must stay ordinary content"
    );
}

#[test]
fn test_parts_are_a_derived_view() {
    let source = "\\begin_body\n\\begin_layout Section\nA\n\\end_layout\n\\end_body";
    let document = parse(source);
    let mut parts = document.parse_default_parts();
    if let Some(PartItem::Part(part)) = parts.first_mut() {
        part.push(ContentItem::from("mutation on the view"));
    }
    // mutating the derived view leaves the document untouched
    assert_eq!(document.render(), source);
}
