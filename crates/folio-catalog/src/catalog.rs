//! Catalog query layer: ordered lists, slug lookup, and tag aggregation.
//!
//! [`Catalog`] is the read-only query interface over the document store.
//! Every call re-scans the backing directories, keeping the content files
//! as the single source of truth. There is no cache to invalidate, and
//! concurrent callers never race because nothing is mutated.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use folio_content::{Category, Document, DocumentSummary};
use folio_core::{ConfigProvider, Result};

use crate::store;

/// Read-only query interface over the two category directories.
#[derive(Clone, Debug)]
pub struct Catalog {
    projects_dir: PathBuf,
    insights_dir: PathBuf,
}

impl Catalog {
    /// Create a catalog over explicit category directories.
    pub fn new(projects_dir: impl Into<PathBuf>, insights_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
            insights_dir: insights_dir.into(),
        }
    }

    /// Create a catalog from a [`ConfigProvider`].
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(
            config.content_path(Category::Project.dir_name())?,
            config.content_path(Category::Insight.dir_name())?,
        ))
    }

    fn dir(&self, category: Category) -> &Path {
        match category {
            Category::Project => &self.projects_dir,
            Category::Insight => &self.insights_dir,
        }
    }

    // ------------------------------------------------------------------
    // Generic surface
    // ------------------------------------------------------------------

    /// All valid documents in a category, newest first.
    pub async fn load(&self, category: Category) -> Result<Vec<Document>> {
        store::load_all(self.dir(category), category).await
    }

    /// All valid documents in a category as body-less summaries,
    /// in the same order as [`Catalog::load`].
    pub async fn list(&self, category: Category) -> Result<Vec<DocumentSummary>> {
        let documents = self.load(category).await?;
        Ok(documents.iter().map(Document::summary).collect())
    }

    /// Look up a single document by slug.
    ///
    /// Returns `Error::NotFound` on a miss; callers map this to their
    /// "missing" response.
    pub async fn get(&self, category: Category, slug: &str) -> Result<Document> {
        store::load_one(self.dir(category), category, slug).await
    }

    /// Deduplicated tags of a category, sorted ascending.
    ///
    /// Recomputed from the current scan, never cached.
    pub async fn tags(&self, category: Category) -> Result<Vec<String>> {
        let documents = self.load(category).await?;
        let tags: BTreeSet<String> = documents
            .into_iter()
            .flat_map(|d| d.frontmatter.tags)
            .collect();
        Ok(tags.into_iter().collect())
    }

    /// Deduplicated tags across all categories, sorted ascending.
    pub async fn all_tags(&self) -> Result<Vec<String>> {
        let mut tags = BTreeSet::new();
        for category in Category::ALL {
            tags.extend(self.tags(category).await?);
        }
        Ok(tags.into_iter().collect())
    }

    // ------------------------------------------------------------------
    // Typed surface (the API consumed by pages)
    // ------------------------------------------------------------------

    /// Project summaries, newest first.
    pub async fn list_projects(&self) -> Result<Vec<DocumentSummary>> {
        self.list(Category::Project).await
    }

    /// Insight summaries, newest first.
    pub async fn list_insights(&self) -> Result<Vec<DocumentSummary>> {
        self.list(Category::Insight).await
    }

    /// A single project by slug.
    pub async fn get_project(&self, slug: &str) -> Result<Document> {
        self.get(Category::Project, slug).await
    }

    /// A single insight by slug.
    pub async fn get_insight(&self, slug: &str) -> Result<Document> {
        self.get(Category::Insight, slug).await
    }

    /// Sorted, deduplicated project tags.
    pub async fn project_tags(&self) -> Result<Vec<String>> {
        self.tags(Category::Project).await
    }

    /// Sorted, deduplicated insight tags.
    pub async fn insight_tags(&self) -> Result<Vec<String>> {
        self.tags(Category::Insight).await
    }
}
