//! Utility modules shared across Folio crates.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery and reading utilities

pub mod files;
