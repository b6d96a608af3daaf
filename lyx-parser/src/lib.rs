//! # lyx-parser
//!
//! A parser and document model for the LyX report markup format.
//!
//! The format is line oriented: every line is either raw text, a tagged leaf
//! (`\tag attribute`), or one of the bracketing lines of a tagged container
//! (`\begin_tag attribute` ... `\end_tag`). Documents are parsed into a tree
//! of [`ContentItem`](lyx::ast::ContentItem)s that renders back to the exact
//! source text, and navigated through tag search and a leveled section
//! hierarchy.
//!
//! Parsing never fails: malformed markup degrades to a best-effort tree and a
//! list of structural [`Diagnostic`](lyx::ast::diagnostics::Diagnostic)s.

#![allow(rustdoc::invalid_html_tags)]

pub mod lyx;
