//! Pure index operations: one mapping from key to set of note IDs.
//!
//! Four instances of [`Index`] exist per collection. Title, group and doi
//! are single-valued (a live note appears under exactly one key, or none
//! for doi); the tag index is multi-valued. The operations here never touch
//! disk; persistence lives in [`crate::index::persist`].

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// An index removal targeted a key that was never recorded.
///
/// This means the index no longer reflects the note files. The current
/// operation must stop; the only sanctioned repair is a full rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "index entry '{key}' is missing for note {id}: the index has drifted \
     from the note files, run 'mdn regenerate'"
)]
pub struct CorruptIndexError {
    pub key: String,
    pub id: NoteId,
}

/// A mapping from string key to the set of note IDs carrying that key.
///
/// Invariant: no key ever maps to an empty set; a removal that empties a
/// key's set deletes the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index(BTreeMap<String, BTreeSet<NoteId>>);

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Key/set pairs, in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<NoteId>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<NoteId>> {
        self.0.get(key)
    }

    /// Adds `id` under `key`. Idempotent.
    pub fn insert(&mut self, key: &str, id: NoteId) {
        self.0.entry(key.to_string()).or_default().insert(id);
    }

    /// Removes `id` from under `key`.
    ///
    /// A `None` key is a guarded no-op for "no previous value" cases. An
    /// emptied set deletes the key.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptIndexError`] if `key` is absent from the index.
    pub fn remove(&mut self, key: Option<&str>, id: NoteId) -> Result<(), CorruptIndexError> {
        let Some(key) = key else {
            return Ok(());
        };
        let Some(ids) = self.0.get_mut(key) else {
            return Err(CorruptIndexError {
                key: key.to_string(),
                id,
            });
        };

        ids.remove(&id);
        if ids.is_empty() {
            self.0.remove(key);
        }
        Ok(())
    }

    /// Moves `id` from `old_key` to `new_key` after a single-valued
    /// attribute changed. Callers skip the call when the value is unchanged.
    pub fn update_single(
        &mut self,
        new_key: Option<&str>,
        old_key: Option<&str>,
        id: NoteId,
    ) -> Result<(), CorruptIndexError> {
        self.remove(old_key, id)?;
        if let Some(new_key) = new_key {
            self.insert(new_key, id);
        }
        Ok(())
    }

    /// Applies the set difference between a note's old and new key sets.
    ///
    /// Inserts the added keys, then removes the dropped ones.
    pub fn update_multi(
        &mut self,
        new_keys: &BTreeSet<String>,
        old_keys: &BTreeSet<String>,
        id: NoteId,
    ) -> Result<(), CorruptIndexError> {
        for key in new_keys.difference(old_keys) {
            self.insert(key, id);
        }
        for key in old_keys.difference(new_keys) {
            self.remove(Some(key), id)?;
        }
        Ok(())
    }

    /// The one key (if any) whose set contains `id`.
    ///
    /// Linear scan; used to discover a note's previous title/group/doi
    /// before an edit is applied. Absence is normal, not an error.
    pub fn find_single(&self, id: NoteId) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, ids)| ids.contains(&id))
            .map(|(key, _)| key.as_str())
    }

    /// All keys whose set contains `id`.
    pub fn find_multi(&self, id: NoteId) -> BTreeSet<String> {
        self.0
            .iter()
            .filter(|(_, ids)| ids.contains(&id))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
