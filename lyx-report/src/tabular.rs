//! Tabular inset builder
//!
//! Builds the `Tabular` inset for limitation tables and similar report
//! content: a `<lyxtabular>` header with precomputed row/column counts,
//! per-column declarations, then `<row>`/`<cell>` blocks.
//!
//! Cell text is normalized for readability (underscores to spaces, camelCase
//! split at word boundaries). A text cell holding more than
//! [`MAX_CELL_ITEMS`] semicolon-separated items is split across synthetic
//! continuation rows so no single cell overflows the page; the continuation
//! rows are included in the declared row total. This builder is best-effort:
//! generated tables should be checked in a LyX viewer before shipping a
//! report template that relies on unusual shapes.

use lyx_parser::lyx::ast::Container;

/// Maximum semicolon-separated items per cell before splitting.
pub const MAX_CELL_ITEMS: usize = 180;

/// One table cell: text, or a number formatted at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Build a tabular inset from rows of cells.
///
/// `col_widths` gives per-column widths; when absent, 95% of the page is
/// split evenly. `decimals` is the precision for numeric cells; `NaN`
/// renders as `N/A`. Short rows are padded with empty cells to the widest
/// row's column count. Empty input yields a bare inset.
pub fn tabular(rows: &[Vec<Cell>], col_widths: Option<&[f64]>, decimals: usize) -> Container {
    let mut inset = Container::with_attribute("inset", "Tabular");
    if rows.is_empty() {
        return inset;
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(1).max(1);
    let widths: Vec<f64> = match col_widths {
        Some(widths) => widths.to_vec(),
        None => vec![(100.0 * 0.95 / columns as f64).round(); columns],
    };

    // oversized cells add continuation rows; the header must count them
    let mut total_rows = rows.len();
    for row in rows {
        for cell in row {
            if let Cell::Text(text) = cell {
                total_rows += extra_rows_for(text);
            }
        }
    }

    inset.push(format!(
        "<lyxtabular version=\"3\" rows=\"{}\" columns=\"{}\">",
        total_rows, columns
    ));
    inset.push("<features islongtable=\"true\" longtabularalignment=\"center\">");
    for width in &widths {
        inset.push(format!(
            "<column alignment=\"center\" valignment=\"top\" width=\"{}\">",
            width
        ));
    }

    for (row_index, row) in rows.iter().enumerate() {
        inset.push("<row>");
        let bottomline = row_index == rows.len() - 1;
        for column in 0..columns {
            let leftline = column == 0;
            let text = match row.get(column) {
                Some(Cell::Text(text)) => normalize_text(text),
                Some(Cell::Number(value)) => format_number(*value, decimals),
                None => String::new(),
            };
            push_cell_blocks(&mut inset, &text, bottomline, leftline);
        }
        inset.push("</row>");
    }
    inset.push("</lyxtabular>");
    inset
}

/// Continuation rows needed for one cell's text.
fn extra_rows_for(text: &str) -> usize {
    if !text.contains(';') {
        return 0;
    }
    let items = text.split(';').count();
    if items > MAX_CELL_ITEMS {
        (items - 1) / MAX_CELL_ITEMS
    } else {
        0
    }
}

/// Emit one logical cell, splitting across continuation rows when oversized.
fn push_cell_blocks(inset: &mut Container, text: &str, bottomline: bool, leftline: bool) {
    let items: Vec<&str> = text.split(';').collect();
    if !text.contains(';') || items.len() <= MAX_CELL_ITEMS {
        push_cell(inset, text, bottomline, leftline);
        return;
    }

    let chunks: Vec<&[&str]> = items.chunks(MAX_CELL_ITEMS).collect();
    for (chunk_index, chunk) in chunks.iter().enumerate() {
        if chunk_index > 0 {
            inset.push("</row>");
            inset.push("<row>");
        }
        let mut chunk_text = chunk.join(";");
        if chunk_index < chunks.len() - 1 {
            chunk_text.push(';');
        }
        push_cell(inset, &chunk_text, bottomline, leftline);
    }
}

fn push_cell(inset: &mut Container, text: &str, bottomline: bool, leftline: bool) {
    inset.push(format!(
        "<cell alignment=\"center\" valignment=\"top\" topline=\"true\" bottomline=\"{}\" leftline=\"{}\" usebox=\"none\">",
        bottomline, leftline
    ));
    inset.push("\\begin_inset Text");
    inset.push(text);
    inset.push("\\end_inset");
    inset.push("</cell>");
}

/// Underscores to spaces, then a space at every camelCase word boundary.
fn normalize_text(text: &str) -> String {
    let spaced = text.replace('_', " ");
    let chars: Vec<char> = spaced.chars().collect();
    let mut out = String::with_capacity(spaced.len() + 8);
    for (index, &current) in chars.iter().enumerate() {
        out.push(current);
        let next = chars.get(index + 1);
        let after = chars.get(index + 2);
        let lower_to_upper = current.is_ascii_lowercase()
            && next.is_some_and(|c| c.is_ascii_uppercase());
        let acronym_end = current.is_ascii_uppercase()
            && next.is_some_and(|c| c.is_ascii_uppercase())
            && after.is_some_and(|c| c.is_ascii_lowercase());
        if lower_to_upper || acronym_end {
            out.push(' ');
        }
    }
    out
}

fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else {
        format!("{:.prec$}", value, prec = decimals)
    }
}
