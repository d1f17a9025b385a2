//! ID counter state and last-touched bookmarks.

use crate::domain::NoteId;
use crate::infra::fs::{self, FsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or storing the state file.
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("invalid state file: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// The collection's mutable bookkeeping, persisted as `state.yaml`.
///
/// `next_id` is a monotonic counter; IDs are never reused, so deleting the
/// highest note does not free its ID. The bookmarks back the special IDs
/// `_c`, `_e` and `_s`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub next_id: u64,
    pub last_created: Option<NoteId>,
    pub last_edited: Option<NoteId>,
    pub last_shown: Option<NoteId>,
}

impl State {
    pub fn path(root: &Path) -> PathBuf {
        root.join("state.yaml")
    }

    /// Loads the state file; a missing file is a fresh collection.
    pub fn load(root: &Path) -> Result<Self, StateError> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    pub fn store(&self, root: &Path) -> Result<(), StateError> {
        let text = serde_yaml::to_string(self)?;
        fs::write_atomic(&Self::path(root), &text)?;
        Ok(())
    }

    /// Hands out the next ID and advances the counter.
    pub fn claim_next_id(&mut self) -> NoteId {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_fresh_collection() {
        let state = State::default();
        assert_eq!(state.next_id, 0);
        assert_eq!(state.last_created, None);
        assert_eq!(state.last_edited, None);
        assert_eq!(state.last_shown, None);
    }

    #[test]
    fn load_without_file_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(State::load(dir.path()).unwrap(), State::default());
    }

    #[test]
    fn roundtrips_through_disk() {
        let dir = TempDir::new().unwrap();
        let state = State {
            next_id: 7,
            last_created: Some(NoteId::new(6)),
            last_edited: Some(NoteId::new(2)),
            last_shown: None,
        };
        state.store(dir.path()).unwrap();
        assert_eq!(State::load(dir.path()).unwrap(), state);
    }

    #[test]
    fn claim_next_id_advances_counter() {
        let mut state = State::default();
        assert_eq!(state.claim_next_id(), NoteId::new(0));
        assert_eq!(state.claim_next_id(), NoteId::new(1));
        assert_eq!(state.next_id, 2);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let state: State = serde_yaml::from_str("next_id: 4\n").unwrap();
        assert_eq!(state.next_id, 4);
        assert_eq!(state.last_created, None);
    }
}
