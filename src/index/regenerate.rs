//! Full index rebuild from note bodies.

use crate::domain::NoteId;
use crate::index::store::Index;
use crate::infra::frontmatter::{self, FrontmatterError};
use thiserror::Error;

/// A note body that could not be parsed during a rebuild.
#[derive(Debug, Error)]
#[error("note {id}: {source}")]
pub struct RegenerateError {
    pub id: NoteId,
    #[source]
    pub source: FrontmatterError,
}

/// The output of a full rebuild: four fresh indexes and the recomputed
/// ID counter.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RebuiltIndexes {
    pub title: Index,
    pub group: Index,
    pub tag: Index,
    pub doi: Index,
    pub next_id: u64,
}

/// Reconstructs all four indexes from ground truth.
///
/// Folds every `(id, body)` pair through the front matter parser into
/// indexes that start empty; existing (possibly corrupt) index state is
/// never consulted. `next_id` comes out as `max(ids) + 1`, or 0 when the
/// collection is empty.
///
/// # Errors
///
/// Propagates the first front matter failure, tagged with the note's ID.
pub fn regenerate<'a, I>(bodies: I) -> Result<RebuiltIndexes, RegenerateError>
where
    I: IntoIterator<Item = (NoteId, &'a str)>,
{
    let mut rebuilt = RebuiltIndexes::default();

    for (id, body) in bodies {
        let meta = frontmatter::parse(body).map_err(|source| RegenerateError { id, source })?;
        rebuilt.title.insert(&meta.title, id);
        rebuilt.group.insert(&meta.group, id);
        for tag in &meta.tags {
            rebuilt.tag.insert(tag.as_str(), id);
        }
        if let Some(doi) = &meta.doi {
            rebuilt.doi.insert(doi, id);
        }
        rebuilt.next_id = rebuilt.next_id.max(id.value() + 1);
    }

    Ok(rebuilt)
}
