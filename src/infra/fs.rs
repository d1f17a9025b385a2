//! Note file layout and atomic writes.
//!
//! A collection lives under a single root directory: note sources at
//! `<root>/md/<id>.md`, rendered pages at `<root>/html/<id>.html`, and the
//! index and state files directly under the root.

use crate::domain::NoteId;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors during file system operations on the collection.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

pub fn md_dir(root: &Path) -> PathBuf {
    root.join("md")
}

pub fn html_dir(root: &Path) -> PathBuf {
    root.join("html")
}

pub fn note_path(root: &Path, id: NoteId) -> PathBuf {
    md_dir(root).join(format!("{id}.md"))
}

pub fn html_path(root: &Path, id: NoteId) -> PathBuf {
    html_dir(root).join(format!("{id}.html"))
}

/// Creates the root, `md` and `html` directories if missing.
pub fn ensure_layout(root: &Path) -> Result<(), FsError> {
    for dir in [root.to_path_buf(), md_dir(root), html_dir(root)] {
        std::fs::create_dir_all(&dir).map_err(|e| FsError::from_io(&dir, e))?;
    }
    Ok(())
}

pub fn read_to_string(path: &Path) -> Result<String, FsError> {
    std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
}

/// Writes a file atomically via a temp file and rename.
///
/// The parent directory must exist.
///
/// # Errors
///
/// Returns `FsError::AtomicWrite` if the final rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::NotADirectory { path: path.into() })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| FsError::from_io(path, e))?;
    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

pub fn remove_file(path: &Path) -> Result<(), FsError> {
    std::fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
}

pub fn modified(path: &Path) -> Result<SystemTime, FsError> {
    let meta = std::fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
    meta.modified().map_err(|e| FsError::from_io(path, e))
}

/// Lists the IDs of every note file under `<root>/md`, ascending.
///
/// Files whose names are not `<digits>.md` are ignored; a missing `md`
/// directory counts as an empty collection.
pub fn list_note_ids(root: &Path) -> Result<Vec<NoteId>, FsError> {
    let dir = md_dir(root);
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory { path: dir });
    }

    let mut ids: Vec<NoteId> = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| note_file_id(e.path()))
        .collect();
    ids.sort_unstable();

    Ok(ids)
}

fn note_file_id(path: &Path) -> Option<NoteId> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".md")?;
    if stem.is_empty() || !stem.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}
