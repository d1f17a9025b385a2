//! The open collection: storage root plus the four loaded indexes.
//!
//! Every command that touches indexes goes through a [`Library`] value;
//! there is no ambient global. Each index is written back to its own file
//! as soon as it changes, so a failure partway through an update never
//! leaves an index file mid-write (though it may leave sibling indexes at
//! different generations, which `regenerate` repairs).

use crate::domain::{NoteId, NoteMeta};
use crate::index::persist::{self, IndexKind, PersistError};
use crate::index::regenerate::{RegenerateError, regenerate};
use crate::index::store::{CorruptIndexError, Index};
use crate::infra::fs::{self, FsError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from index maintenance against a live collection.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Corrupt(#[from] CorruptIndexError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Regenerate(#[from] RegenerateError),
}

pub struct Library {
    root: PathBuf,
    pub title: Index,
    pub group: Index,
    pub tag: Index,
    pub doi: Index,
}

impl Library {
    /// Loads all four indexes from `root`; missing files load as empty.
    pub fn open(root: &Path) -> Result<Self, LibraryError> {
        Ok(Self {
            root: root.to_path_buf(),
            title: persist::load_index(root, IndexKind::Title)?,
            group: persist::load_index(root, IndexKind::Group)?,
            tag: persist::load_index(root, IndexKind::Tag)?,
            doi: persist::load_index(root, IndexKind::Doi)?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Registers a freshly created note. A new note has no previous index
    /// entries, so this is plain inserts for the mandatory attributes.
    pub fn note_created(&mut self, id: NoteId, meta: &NoteMeta) -> Result<(), LibraryError> {
        self.title.insert(&meta.title, id);
        persist::store_index(&self.root, IndexKind::Title, &self.title)?;
        self.group.insert(&meta.group, id);
        persist::store_index(&self.root, IndexKind::Group, &self.group)?;
        Ok(())
    }

    /// Syncs the indexes after a note's content was (re)written.
    ///
    /// The previous attribute values are recovered from the indexes
    /// themselves; only the attributes that actually changed are updated
    /// and written back.
    pub fn note_saved(&mut self, id: NoteId, meta: &NoteMeta) -> Result<(), LibraryError> {
        let old_title = self.title.find_single(id).map(str::to_string);
        if old_title.as_deref() != Some(meta.title.as_str()) {
            self.title
                .update_single(Some(&meta.title), old_title.as_deref(), id)?;
            persist::store_index(&self.root, IndexKind::Title, &self.title)?;
        }

        let old_group = self.group.find_single(id).map(str::to_string);
        if old_group.as_deref() != Some(meta.group.as_str()) {
            self.group
                .update_single(Some(&meta.group), old_group.as_deref(), id)?;
            persist::store_index(&self.root, IndexKind::Group, &self.group)?;
        }

        let old_tags = self.tag.find_multi(id);
        let new_tags = meta.tag_keys();
        if new_tags != old_tags {
            self.tag.update_multi(&new_tags, &old_tags, id)?;
            persist::store_index(&self.root, IndexKind::Tag, &self.tag)?;
        }

        let old_doi = self.doi.find_single(id).map(str::to_string);
        if old_doi.as_deref() != meta.doi.as_deref() {
            self.doi
                .update_single(meta.doi.as_deref(), old_doi.as_deref(), id)?;
            persist::store_index(&self.root, IndexKind::Doi, &self.doi)?;
        }

        Ok(())
    }

    /// Drops a deleted note from every index.
    ///
    /// # Errors
    ///
    /// Surfaces [`CorruptIndexError`] when an expected entry is absent; the
    /// operation stops there and nothing self-heals.
    pub fn note_removed(&mut self, id: NoteId, meta: &NoteMeta) -> Result<(), LibraryError> {
        self.title.remove(Some(&meta.title), id)?;
        persist::store_index(&self.root, IndexKind::Title, &self.title)?;

        self.group.remove(Some(&meta.group), id)?;
        persist::store_index(&self.root, IndexKind::Group, &self.group)?;

        for tag in &meta.tag_keys() {
            self.tag.remove(Some(tag), id)?;
        }
        persist::store_index(&self.root, IndexKind::Tag, &self.tag)?;

        self.doi.remove(meta.doi.as_deref(), id)?;
        persist::store_index(&self.root, IndexKind::Doi, &self.doi)?;

        Ok(())
    }

    /// Rebuilds all four indexes from the note files and stores them.
    ///
    /// Returns the recomputed ID counter value.
    pub fn rebuild(&mut self) -> Result<u64, LibraryError> {
        let ids = fs::list_note_ids(&self.root)?;
        let mut bodies = Vec::with_capacity(ids.len());
        for id in ids {
            let body = fs::read_to_string(&fs::note_path(&self.root, id))?;
            bodies.push((id, body));
        }

        let rebuilt = regenerate(bodies.iter().map(|(id, body)| (*id, body.as_str())))?;
        self.title = rebuilt.title;
        self.group = rebuilt.group;
        self.tag = rebuilt.tag;
        self.doi = rebuilt.doi;

        persist::store_index(&self.root, IndexKind::Title, &self.title)?;
        persist::store_index(&self.root, IndexKind::Group, &self.group)?;
        persist::store_index(&self.root, IndexKind::Tag, &self.tag)?;
        persist::store_index(&self.root, IndexKind::Doi, &self.doi)?;

        Ok(rebuilt.next_id)
    }
}
