//! Tag filtering for list views.
//!
//! The presentation layer shows a row of tag buttons above each list; this
//! helper implements the selection semantics: an active tag restricts the
//! list to summaries carrying that exact tag, and clearing the selection
//! ("All") restores the full list.

use folio_content::DocumentSummary;

/// Filter summaries by an optional selected tag.
///
/// `Some(tag)` keeps only summaries whose `tags` contain the tag (exact,
/// case-sensitive string match); `None` keeps everything. Relative order is
/// preserved either way.
pub fn filter_by_tag<'a>(
    summaries: &'a [DocumentSummary],
    tag: Option<&str>,
) -> Vec<&'a DocumentSummary> {
    match tag {
        Some(tag) => summaries
            .iter()
            .filter(|s| s.frontmatter.tags.iter().any(|t| t == tag))
            .collect(),
        None => summaries.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{Category, Document};

    fn summary(slug: &str, tags: &[&str]) -> DocumentSummary {
        let yaml = format!(
            "{{title: {slug}, summary: S, date: \"2024-01-01\", tags: [{}]}}",
            tags.join(", ")
        );
        Document::from_parts(
            slug,
            Category::Insight,
            serde_yaml::from_str(&yaml).unwrap(),
            "",
        )
        .unwrap()
        .summary()
    }

    #[test]
    fn test_filter_selected_tag() {
        let summaries = vec![
            summary("a", &["finance", "rust"]),
            summary("b", &["ai"]),
            summary("c", &["finance"]),
        ];

        let filtered = filter_by_tag(&summaries, Some("finance"));
        let slugs: Vec<&str> = filtered.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_none_restores_full_list() {
        let summaries = vec![summary("a", &["x"]), summary("b", &["y"])];

        let all = filter_by_tag(&summaries, None);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_filter_exact_match_only() {
        let summaries = vec![summary("a", &["finance"]), summary("b", &["Finance"])];

        let filtered = filter_by_tag(&summaries, Some("finance"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].slug, "a");
    }

    #[test]
    fn test_filter_unknown_tag_empty() {
        let summaries = vec![summary("a", &["x"])];
        assert!(filter_by_tag(&summaries, Some("zzz")).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let summaries = vec![
            summary("newest", &["t"]),
            summary("middle", &["t"]),
            summary("oldest", &["t"]),
        ];

        let filtered = filter_by_tag(&summaries, Some("t"));
        let slugs: Vec<&str> = filtered.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
    }
}
