//! Command-line interface for the Folio content catalog.
//!
//! Provides the `folio` binary: catalog queries (list, show, tags), the
//! HTTP API server (serve), and configuration management.
//!
//! # Key Abstractions
//!
//! - [`FolioCli<C>`](app::FolioCli): application parameterized over a
//!   [`ConfigProvider`](folio_core::ConfigProvider)
//! - [`FolioConfig`](config::FolioConfig): TOML + env configuration

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod content_handlers;

pub use app::FolioCli;
pub use cli::CliArgs;
pub use config::FolioConfig;
