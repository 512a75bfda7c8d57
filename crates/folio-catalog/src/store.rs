//! Document store: scanning, loading, and ordering content entries.
//!
//! One flat directory per category, one document per file, slug = file name
//! minus extension. Loading is partial-failure tolerant: a single bad entry
//! is logged and skipped, never aborting the whole scan. A missing category
//! directory means "no content yet" and yields an empty result.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use folio_content::{Category, Document, EXTENSIONS, frontmatter};
use folio_core::util::files;
use folio_core::{Error, Result};
use log::{debug, warn};

/// Enumerate the raw entries of a category directory.
///
/// Entries are sorted lexicographically by file name, which fixes the scan
/// order used for duplicate-slug resolution and for the relative order of
/// entries without a parsable date.
pub async fn scan(dir: &Path) -> Result<Vec<PathBuf>> {
    files::list_entries(dir, &EXTENSIONS).await
}

/// Load every valid document in a category directory.
///
/// Invalid entries (unreadable, unparsable frontmatter, missing required
/// fields, duplicate slug) are skipped with a warning. The result is sorted
/// newest-first by frontmatter date; entries whose date does not parse sort
/// after all dated entries, keeping their scan order among themselves.
pub async fn load_all(dir: &Path, category: Category) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    let mut seen = HashSet::new();

    for path in scan(dir).await? {
        let Some(document) = load_entry(&path, category).await else {
            continue;
        };
        // First entry with a slug wins; later collisions are skipped rather
        // than silently overwriting (the scan order above makes this
        // deterministic).
        if !seen.insert(document.slug.clone()) {
            warn!(
                "duplicate {} slug '{}' at {}, skipping",
                category,
                document.slug,
                path.display()
            );
            continue;
        }
        documents.push(document);
    }

    sort_by_date_desc(&mut documents);
    Ok(documents)
}

/// Load a single document by slug via a direct path probe.
///
/// Tries each recognised extension in priority order instead of scanning
/// the directory. Returns `Error::NotFound` when no file exists or when the
/// entry fails to parse or validate; a malformed detail target looks the
/// same as a missing one to callers.
pub async fn load_one(dir: &Path, category: Category, slug: &str) -> Result<Document> {
    for ext in EXTENSIONS {
        let path = dir.join(format!("{slug}.{ext}"));
        if !files::exists(&path).await {
            continue;
        }
        return match load_entry(&path, category).await {
            Some(document) => Ok(document),
            None => Err(Error::not_found(format!("{}/{slug}", category.dir_name()))),
        };
    }
    Err(Error::not_found(format!("{}/{slug}", category.dir_name())))
}

/// Read, parse, and validate one entry; `None` (with a warning) on failure.
async fn load_entry(path: &Path, category: Category) -> Option<Document> {
    let Some(slug) = files::slug_from_path(path) else {
        warn!("cannot derive slug from {}, skipping", path.display());
        return None;
    };

    let raw = match files::read_file(path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("failed to read {}: {e}, skipping", path.display());
            return None;
        }
    };

    let parsed = match frontmatter::parse(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("failed to parse {}: {e}, skipping", path.display());
            return None;
        }
    };

    match Document::from_parts(slug, category, parsed.metadata, parsed.body) {
        Ok(document) => {
            debug!("loaded {} '{}'", category, document.slug);
            Some(document)
        }
        Err(e) => {
            warn!("invalid entry {}: {e}, skipping", path.display());
            None
        }
    }
}

/// Sort newest-first by parsed date; undated entries after all dated ones.
///
/// The sort is stable, so undated entries keep their scan order and dated
/// ties keep theirs.
fn sort_by_date_desc(documents: &mut [Document]) {
    documents.sort_by(|a, b| {
        match (a.frontmatter.parsed_date(), b.frontmatter.parsed_date()) {
            (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}
