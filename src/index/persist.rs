//! On-disk YAML form of the four indexes.

use crate::index::store::Index;
use crate::infra::fs::{self, FsError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or storing an index file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("invalid index file {path}: {source}")]
    InvalidYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Which of the four index files is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Title,
    Group,
    Tag,
    Doi,
}

impl IndexKind {
    pub const ALL: [IndexKind; 4] = [
        IndexKind::Title,
        IndexKind::Group,
        IndexKind::Tag,
        IndexKind::Doi,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            IndexKind::Title => "title_index.yaml",
            IndexKind::Group => "group_index.yaml",
            IndexKind::Tag => "tag_index.yaml",
            IndexKind::Doi => "doi_index.yaml",
        }
    }

    pub fn path(self, root: &Path) -> PathBuf {
        root.join(self.file_name())
    }
}

/// Loads one index; a missing file is an empty index.
pub fn load_index(root: &Path, kind: IndexKind) -> Result<Index, PersistError> {
    let path = kind.path(root);
    if !path.exists() {
        return Ok(Index::new());
    }
    let text = fs::read_to_string(&path)?;
    serde_yaml::from_str(&text).map_err(|source| PersistError::InvalidYaml { path, source })
}

/// Writes one index atomically.
pub fn store_index(root: &Path, kind: IndexKind, index: &Index) -> Result<(), PersistError> {
    let path = kind.path(root);
    let text = serde_yaml::to_string(index).map_err(|source| PersistError::InvalidYaml {
        path: path.clone(),
        source,
    })?;
    fs::write_atomic(&path, &text)?;
    Ok(())
}
