//! Frontmatter extraction from raw document text.
//!
//! A document may start with a single metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "My Project"
//! date: "2024-01-01"
//! tags:
//!   - rust
//! ---
//! Body text follows here.
//! ```
//!
//! [`parse`] splits that block from the body. It is a pure function over
//! text, with no I/O and no side effects. Policy decisions (what to do
//! with missing or malformed metadata) belong to the store layer.

use folio_core::{Error, Result};

/// A document split into unvalidated metadata and body.
///
/// `metadata` is `Value::Null` when the text has no frontmatter block;
/// callers downstream decide whether empty metadata is acceptable.
#[derive(Clone, Debug)]
pub struct RawDocument {
    /// Parsed YAML metadata, not yet validated against any schema.
    pub metadata: serde_yaml::Value,
    /// Text content after the metadata block.
    pub body: String,
}

/// Split a raw document into frontmatter metadata and body.
///
/// - No opening fence at the very start → the whole input is body,
///   metadata is `Value::Null`.
/// - Opening fence without a closing fence → `Error::Parse`.
/// - Fenced block that is not valid YAML → `Error::Parse`.
///
/// The closing fence line and the newline that terminates it are consumed;
/// the body starts at the first character after them.
pub fn parse(raw: &str) -> Result<RawDocument> {
    let Some(rest) = strip_open_fence(raw) else {
        return Ok(RawDocument {
            metadata: serde_yaml::Value::Null,
            body: raw.to_string(),
        });
    };

    let (yaml, body) = split_close_fence(rest)
        .ok_or_else(|| Error::parse("unterminated frontmatter fence"))?;

    let metadata = if yaml.trim().is_empty() {
        serde_yaml::Value::Null
    } else {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::parse(format!("malformed frontmatter: {e}")))?
    };

    Ok(RawDocument {
        metadata,
        body: body.to_string(),
    })
}

/// Strip an opening `---` fence line; `None` when the text has no block.
fn strip_open_fence(raw: &str) -> Option<&str> {
    let after = raw.strip_prefix("---")?;
    // "----" and longer runs are horizontal rules, not fences.
    rest_of_fence_line(after)
}

/// Find the closing `---` fence in `rest`, returning (yaml, body).
fn split_close_fence(rest: &str) -> Option<(&str, &str)> {
    // A closing fence as the first line means an empty metadata block.
    if let Some(after) = rest.strip_prefix("---") {
        if let Some(body) = rest_of_fence_line(after) {
            return Some(("", body));
        }
    }

    let mut search_from = 0;
    while let Some(idx) = rest[search_from..].find("\n---") {
        let fence_start = search_from + idx + 1;
        let after = &rest[fence_start + 3..];
        if let Some(body) = rest_of_fence_line(after) {
            return Some((&rest[..fence_start], body));
        }
        search_from = fence_start + 3;
    }
    None
}

/// Accept the remainder of a fence line: end of input or a line break.
/// Returns the text following the line break.
fn rest_of_fence_line(after: &str) -> Option<&str> {
    if after.is_empty() {
        Some("")
    } else if let Some(body) = after.strip_prefix("\r\n") {
        Some(body)
    } else {
        after.strip_prefix('\n')
    }
}
