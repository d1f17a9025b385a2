//! Inline tag type and tag extraction from note bodies.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// An inline tag, stored in its normalized `@word` form.
///
/// Tags are the `@word` tokens that appear anywhere in a note body. They are
/// normalized to lowercase, making `@Draft` and `@draft` the same tag, and
/// index keys use the normalized form verbatim (including the leading `@`).
///
/// # Validation Rules
/// - Must start with `@`
/// - The remainder must be one or more word characters (alphanumeric or `_`)
///
/// # Examples
///
/// ```
/// use mdn::domain::Tag;
///
/// let tag = Tag::new("@Draft").unwrap();
/// assert_eq!(tag.as_str(), "@draft");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String); // Always stored lowercase, with the leading '@'

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid tag '{}': tags are '@' followed by word characters",
            self.0
        )
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a Tag from a string, normalizing it to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the input does not start with `@` or the
    /// remainder is empty or contains non-word characters.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let normalized = s.trim().to_lowercase();

        let Some(name) = normalized.strip_prefix('@') else {
            return Err(ParseTagError(s.to_string()));
        };
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(ParseTagError(s.to_string()));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag including the leading `@`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the tag name without the leading `@`.
    pub fn name(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\B@\w+").expect("tag pattern is valid"))
}

/// Extracts every inline tag from a note body.
///
/// Scans the whole text (front matter included) for `@word` tokens,
/// lowercases them, and collapses duplicates into a set.
pub fn extract_tags(content: &str) -> BTreeSet<Tag> {
    tag_pattern()
        .find_iter(content)
        .filter_map(|m| Tag::new(m.as_str()).ok())
        .collect()
}
