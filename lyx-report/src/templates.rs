//! Report templates
//!
//! `report_default.lyx` is embedded into the binary so generated reports
//! never depend on a template file being present at runtime. [`ReportDocument`]
//! parses it (or a caller-supplied template) into a [`Document`] whose `body`
//! container is the insertion point for generated sections.
//!
//! The section builders return [`Part`]s mirroring the stock report
//! structure: executive summary, outputs, limitations. Callers append their
//! own content to a part before inserting it with
//! [`ReportDocument::append_part`].

use crate::insets::{labeled_layout, layout};
use crate::tabular::{tabular, Cell};
use lyx_parser::lyx::ast::diagnostics::Diagnostic;
use lyx_parser::lyx::ast::{Document, Part};
use lyx_parser::lyx::parsing::parse_document;

/// The embedded default report document.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report_default.lyx");

/// A report document seeded from a template.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub document: Document,
    /// Structural warnings from parsing the template, if any.
    pub diagnostics: Vec<Diagnostic>,
}

impl ReportDocument {
    /// Seed from the embedded default template.
    pub fn new() -> Self {
        Self::from_template(DEFAULT_TEMPLATE)
    }

    /// Seed from a caller-supplied template text.
    pub fn from_template(source: &str) -> Self {
        let outcome = parse_document(source);
        Self {
            document: outcome.document,
            diagnostics: outcome.diagnostics,
        }
    }

    /// Flatten a part into the document body. Returns false when the
    /// document has no `body` container to insert into.
    pub fn append_part(&mut self, part: Part) -> bool {
        match self.document.body_mut() {
            Some(body) => {
                for item in part.into_items() {
                    body.push(item);
                }
                true
            }
            None => false,
        }
    }

    /// Render the final document text.
    pub fn render(&self) -> String {
        self.document.render()
    }
}

impl Default for ReportDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// The stock executive-summary section: purpose and summary-of-description
/// subsections, with placeholder text when no content is supplied.
pub fn executive_summary(
    intended_use: Option<&[&str]>,
    description: Option<&[&str]>,
) -> Part {
    let mut purpose = Part::new(labeled_layout("Subsection", "Purpose", "summary-purpose"));
    match intended_use {
        Some(uses) => {
            for use_case in uses {
                purpose.push(layout("Standard", *use_case));
            }
        }
        None => purpose.push(layout("Standard", "is used for")),
    }

    let mut summary_description = Part::new(labeled_layout(
        "Subsection",
        "Summary of Description",
        "summary-description",
    ));
    match description {
        Some(lines) => {
            for line in lines {
                summary_description.push(layout("Standard", *line));
            }
        }
        None => {
            summary_description.push(layout("Standard", "Description here"));
            summary_description.push(layout("Standard", "Description here too"));
        }
    }

    let mut section = Part::new(labeled_layout("Section", "Executive Summary", "summary"));
    section.push(purpose);
    section.push(summary_description);
    section
}

/// The stock outputs subsection.
pub fn outputs(template_outputs: Option<&[&str]>) -> Part {
    let mut section = Part::new(labeled_layout("Subsection", "Outputs", "outputs"));
    match template_outputs {
        Some(entries) if !entries.is_empty() => {
            section.push(layout("Standard", "Description"));
            section.push(layout("Standard", entries.join(" ")));
        }
        _ => section.push(layout("Standard", "Description")),
    }
    section
}

/// The stock limitations section; a provided table renders through the
/// tabular builder.
pub fn limitations(limitation_table: Option<&[Vec<Cell>]>) -> Part {
    let mut section = Part::new(labeled_layout("Section", "Limitations", "limitations"));
    match limitation_table {
        Some(rows) if !rows.is_empty() => {
            section.push(layout(
                "Standard",
                tabular(rows, Some(&[10.0, 28.0, 30.0, 30.0]), 0),
            ));
        }
        _ => section.push(layout("Standard", "Description")),
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_clean() {
        let report = ReportDocument::new();
        assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
        assert!(report.document.body().is_some());
    }

    #[test]
    fn test_executive_summary_defaults() {
        let section = executive_summary(None, None);
        assert_eq!(section.content.len(), 2);
        let purpose = section.content[0].as_part().unwrap();
        // the header text includes the rendered label inset ahead of the title
        assert!(purpose.name().ends_with("Purpose"));
        assert_eq!(purpose.content.len(), 1);
        let description = section.content[1].as_part().unwrap();
        assert_eq!(description.content.len(), 2);
    }

    #[test]
    fn test_outputs_joins_entries() {
        let section = outputs(Some(&["model.bin", "scores.csv"]));
        assert_eq!(section.content.len(), 2);
        assert!(section.render().contains("model.bin scores.csv"));
    }

    #[test]
    fn test_limitations_with_table() {
        let table = vec![vec![Cell::from("id"), Cell::from("severity")]];
        let section = limitations(Some(&table));
        assert!(section.render().contains("<lyxtabular"));
    }
}
