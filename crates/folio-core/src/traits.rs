//! Core traits for Folio configuration abstraction.
//!
//! The primary trait is [`ConfigProvider`], which abstracts where the
//! site's content directories live. The catalog and servers only ever see
//! this trait, so hosts can supply configuration from files, environment
//! variables, or test fixtures.

use std::path::PathBuf;

use crate::Result;

/// Trait for site configuration.
///
/// Every Folio-based application implements this trait to provide the
/// paths that the catalog needs: the data root and per-category content
/// directories.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
/// use folio_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     data_dir: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "portfolio"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.data_dir.clone())
///     }
///
///     fn content_path(&self, content_type: &str) -> Result<PathBuf> {
///         Ok(self.data_dir.join("content").join(content_type))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all site data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined (e.g., missing
    /// environment variable or invalid configuration).
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content type.
    ///
    /// `content_type` is a category directory key like `"projects"` or
    /// `"insights"`. The implementation decides how these map to actual
    /// filesystem paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn content_path(&self, content_type: &str) -> Result<PathBuf>;
}
