//! Parsed note attributes as extracted from a note body.

use crate::domain::Tag;
use std::collections::BTreeSet;

/// The indexed attributes of a single note.
///
/// Produced by the front-matter parser: `title` and `group` come from the
/// YAML header and are mandatory, `doi` is an optional header field, and
/// `tags` is every `@word` token found anywhere in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMeta {
    pub title: String,
    pub group: String,
    pub tags: BTreeSet<Tag>,
    pub doi: Option<String>,
}

impl NoteMeta {
    /// Returns the tag set in the string form used as index keys.
    pub fn tag_keys(&self) -> BTreeSet<String> {
        self.tags.iter().map(|t| t.as_str().to_string()).collect()
    }
}
