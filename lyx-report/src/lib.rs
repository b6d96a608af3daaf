//! # lyx-report
//!
//! Builders and templates for generating LyX technical-report documents on
//! top of the [`lyx_parser`] document model.
//!
//! The crate covers the content that report generators insert into a parsed
//! document body: cross-reference labels and references, standard layout
//! blocks, tabular and figure insets, and the stock report sections
//! (executive summary, outputs, limitations) seeded from an embedded default
//! document.

#![allow(rustdoc::invalid_html_tags)]

pub mod graphics;
pub mod insets;
pub mod tabular;
pub mod templates;
