//! Front matter parser for extracting note metadata from markdown sources.

use crate::domain::{NoteMeta, extract_tags};
use serde::Deserialize;
use thiserror::Error;

/// Errors during front matter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("missing opening front matter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing front matter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("invalid YAML in front matter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("front matter is missing the mandatory '{0}' field")]
    MissingField(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    doi: Option<String>,
}

/// Parses a note body into its indexed metadata.
///
/// # Format
/// ```text
/// ---
/// title: Some Note
/// group: research
/// doi: 10.1000/xyz
/// ---
/// Body with inline @tags anywhere...
/// ```
///
/// `title` and `group` are mandatory, `doi` is optional, and unknown header
/// fields are ignored. Tags are collected from the whole source, header
/// included.
///
/// # Errors
///
/// Returns `FrontmatterError` if the delimiters are missing, the YAML
/// between them is invalid, or a mandatory field is absent.
pub fn parse(content: &str) -> Result<NoteMeta, FrontmatterError> {
    let header: RawHeader = serde_yaml::from_str(header_block(content)?)?;

    let title = header
        .title
        .ok_or(FrontmatterError::MissingField("title"))?;
    let group = header
        .group
        .ok_or(FrontmatterError::MissingField("group"))?;

    Ok(NoteMeta {
        title,
        group,
        tags: extract_tags(content),
        doi: header.doi,
    })
}

/// Returns the content after the closing front matter delimiter, or the
/// whole input when there is no parseable header.
pub fn body(content: &str) -> &str {
    let opening_len = if content.starts_with("---\n") {
        4
    } else if content.starts_with("---\r\n") {
        5
    } else {
        return content;
    };
    let rest = &content[opening_len..];
    let Some(close) = find_closing_delimiter(rest) else {
        return content;
    };
    let after_close = &rest[close..];
    let line_end = after_close
        .find('\n')
        .map(|i| i + 1)
        .unwrap_or(after_close.len());
    &rest[close + line_end..]
}

/// Returns the YAML text between the opening and closing `---` lines.
fn header_block(content: &str) -> Result<&str, FrontmatterError> {
    let after_opening = if let Some(rest) = content.strip_prefix("---\n") {
        rest
    } else if let Some(rest) = content.strip_prefix("---\r\n") {
        rest
    } else {
        return Err(FrontmatterError::MissingOpeningDelimiter);
    };

    let close = find_closing_delimiter(after_opening)
        .ok_or(FrontmatterError::MissingClosingDelimiter)?;
    Ok(&after_opening[..close])
}

/// Finds the offset of the closing `---`, which must sit alone on a line.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    loop {
        let line_end = content[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(content.len());
        if content[pos..line_end].trim_end_matches('\r') == "---" {
            return Some(pos);
        }
        if line_end == content.len() {
            return None;
        }
        pos = line_end + 1;
    }
}
