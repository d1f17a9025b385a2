//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{MdnCommand, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// same directory doubles as `$HOME` for the spawned binary, so the user's
/// real config file never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with the `md`/`html` layout
    /// already in place.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        std::fs::create_dir_all(notes_dir.join("md")).expect("Failed to create md directory");
        std::fs::create_dir_all(notes_dir.join("html")).expect("Failed to create html directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path of a note file by ID.
    pub fn note_path(&self, id: u64) -> PathBuf {
        self.notes_dir.join("md").join(format!("{id}.md"))
    }

    /// Returns the path of a rendered page by ID.
    pub fn html_path(&self, id: u64) -> PathBuf {
        self.notes_dir.join("html").join(format!("{id}.html"))
    }

    /// Writes a note file directly, bypassing the binary.
    ///
    /// The indexes don't know about it until `regenerate` runs.
    pub fn add_note(&self, id: u64, note: &TestNote) -> PathBuf {
        let path = self.note_path(id);
        std::fs::write(&path, note.to_markdown()).expect("Failed to write test note");
        path
    }

    /// Runs `regenerate` and asserts success.
    pub fn regenerate(&self) {
        self.cmd().regenerate().assert().success();
    }

    /// Creates an MdnCommand configured for this test environment.
    pub fn cmd(&self) -> MdnCommand {
        MdnCommand::new()
            .dir(&self.notes_dir)
            .env("HOME", &self._temp_dir.path().to_string_lossy())
            .env(
                "XDG_CONFIG_HOME",
                &self._temp_dir.path().join("config").to_string_lossy(),
            )
    }

    /// Writes a file into the temp directory and returns its path.
    ///
    /// Useful for custom templates.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads one of the YAML index files as text.
    pub fn read_index(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.notes_dir.join(file_name))
            .unwrap_or_else(|e| panic!("Failed to read {file_name}: {e}"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
