//! Document store and query layer for the Folio content catalog.
//!
//! The catalog is a read-only, file-backed store of tagged documents with
//! list/detail/tag access. Content is added or removed only by changing the
//! backing files; every query re-scans the source, so there is no mutable
//! state to coordinate.
//!
//! # Modules
//!
//! - [`store`]: scanning, loading, validation, and ordering of entries
//! - [`catalog`]: the [`Catalog`] query interface
//! - [`filter`]: tag filtering for list views

pub mod catalog;
pub mod filter;
pub mod store;

pub use catalog::Catalog;
pub use filter::filter_by_tag;
