//! Document model and frontmatter extraction for the Folio catalog.
//!
//! A document is one content entry (a project or an insight) stored as a
//! markdown file with a YAML frontmatter block. This crate defines the
//! document types and the pure-text parser that splits metadata from body;
//! it never touches the filesystem.
//!
//! # Modules
//!
//! - [`document`]: `Category`, `Frontmatter`, `Document`, `DocumentSummary`
//! - [`frontmatter`]: fence splitting and YAML metadata parsing

pub mod document;
pub mod frontmatter;

pub use document::{Category, Document, DocumentSummary, EXTENSIONS, Frontmatter};
pub use frontmatter::RawDocument;
