//! Document types for the Folio catalog.
//!
//! A [`Document`] is one content entry with validated [`Frontmatter`] and a
//! markdown body. [`DocumentSummary`] is the same minus the body, used for
//! list views. Metadata keys beyond the required set are preserved opaquely
//! so future frontmatter additions survive a round trip.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// File extensions recognised as document sources, in lookup priority order.
pub const EXTENSIONS: [&str; 2] = ["mdx", "md"];

// ============================================================================
// Category
// ============================================================================

/// The content type partition: every document is a project or an insight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Project,
    Insight,
}

impl Category {
    /// All categories, in presentation order.
    pub const ALL: [Category; 2] = [Category::Project, Category::Insight];

    /// Singular display name ("project" / "insight").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Project => "project",
            Category::Insight => "insight",
        }
    }

    /// Content directory name for this category ("projects" / "insights").
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Project => "projects",
            Category::Insight => "insights",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "project" | "projects" => Ok(Category::Project),
            "insight" | "insights" => Ok(Category::Insight),
            other => Err(Error::invalid_data(format!(
                "unknown category '{other}' (expected 'projects' or 'insights')"
            ))),
        }
    }
}

// ============================================================================
// Frontmatter
// ============================================================================

/// Validated document metadata.
///
/// `title`, `summary`, `date`, and `tags` are required for every document;
/// `cover` is required for projects only, which the store enforces per
/// category (serde cannot, since both categories share this type). Unknown
/// keys land in `extra` unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    pub summary: String,
    /// ISO-8601 date text, kept verbatim; see [`Frontmatter::parsed_date`].
    pub date: String,
    pub tags: Vec<String>,
    /// Cover image reference (projects only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Unknown frontmatter keys, preserved opaquely.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Frontmatter {
    /// Parse the date field as a calendar date.
    ///
    /// Returns `None` when the text is not a valid `YYYY-MM-DD` date.
    /// Documents with an unparsable date are excluded from date ordering
    /// but stay retrievable by slug.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

// ============================================================================
// Document
// ============================================================================

/// One content entry: slug, category, metadata, and markdown body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub slug: String,
    pub category: Category,
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl Document {
    /// Build a document from parser output, validating the metadata.
    ///
    /// Fails when the metadata is missing required fields (which includes
    /// the no-frontmatter case, where `metadata` is null) or when a project
    /// entry has no `cover`.
    pub fn from_parts(
        slug: impl Into<String>,
        category: Category,
        metadata: serde_yaml::Value,
        body: impl Into<String>,
    ) -> Result<Self> {
        let slug = slug.into();
        let frontmatter: Frontmatter = serde_yaml::from_value(metadata)
            .map_err(|e| Error::invalid_data(format!("invalid metadata for '{slug}': {e}")))?;

        if category == Category::Project && frontmatter.cover.is_none() {
            return Err(Error::invalid_data(format!(
                "project '{slug}' is missing required 'cover' field"
            )));
        }

        Ok(Self {
            slug,
            category,
            frontmatter,
            body: body.into(),
        })
    }

    /// The body-less view of this document, for list payloads.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            slug: self.slug.clone(),
            category: self.category,
            frontmatter: self.frontmatter.clone(),
        }
    }
}

/// A document without its body, for list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub slug: String,
    pub category: Category,
    pub frontmatter: Frontmatter,
}
