//! Handler functions for catalog CLI commands.
//!
//! Implements `folio {list,show,tags}` over a [`Catalog`] built from the
//! loaded configuration.

use folio_catalog::{Catalog, filter_by_tag};
use folio_content::Category;
use folio_core::{ConfigProvider, Error, Result};

// ============================================================================
// Command handlers
// ============================================================================

/// List documents in a category, optionally restricted to a tag.
pub async fn handle_list<C: ConfigProvider>(
    config: &C,
    category: Category,
    tag: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::from_config(config)?;
    let summaries = catalog.list(category).await?;
    let shown: Vec<_> = filter_by_tag(&summaries, tag).into_iter().collect();

    if json {
        let rendered = serde_json::to_string_pretty(&shown)
            .map_err(|e| Error::invalid_data(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    if shown.is_empty() {
        match tag {
            Some(t) => println!("No {} tagged '{t}'.", category.dir_name()),
            None => println!("No {} found.", category.dir_name()),
        }
        return Ok(());
    }

    for summary in &shown {
        let date = if summary.frontmatter.date.is_empty() {
            "(undated)"
        } else {
            summary.frontmatter.date.as_str()
        };
        println!("{date}  {}  {}", summary.slug, summary.frontmatter.title);
        if !summary.frontmatter.tags.is_empty() {
            println!("            tags: {}", summary.frontmatter.tags.join(", "));
        }
    }
    println!("\n{} of {} shown", shown.len(), summaries.len());
    Ok(())
}

/// Show a single document by slug.
pub async fn handle_show<C: ConfigProvider>(
    config: &C,
    category: Category,
    slug: &str,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::from_config(config)?;
    let document = catalog.get(category, slug).await?;

    if json {
        let rendered = serde_json::to_string_pretty(&document)
            .map_err(|e| Error::invalid_data(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("# {}", document.frontmatter.title);
    println!("slug: {}", document.slug);
    if !document.frontmatter.date.is_empty() {
        println!("date: {}", document.frontmatter.date);
    }
    if !document.frontmatter.tags.is_empty() {
        println!("tags: {}", document.frontmatter.tags.join(", "));
    }
    if let Some(cover) = &document.frontmatter.cover {
        println!("cover: {cover}");
    }
    println!("\n{}", document.frontmatter.summary);
    println!("\n{}", document.body);
    Ok(())
}

/// List tags for one category, or the union of both.
pub async fn handle_tags<C: ConfigProvider>(config: &C, category: Option<Category>) -> Result<()> {
    let catalog = Catalog::from_config(config)?;
    let tags = match category {
        Some(c) => catalog.tags(c).await?,
        None => catalog.all_tags().await?,
    };

    if tags.is_empty() {
        println!("No tags found.");
        return Ok(());
    }
    for tag in &tags {
        println!("{tag}");
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
