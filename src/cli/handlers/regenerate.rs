//! Index rebuild and path command handlers.

use anyhow::Result;
use std::path::Path;

use crate::index::Library;
use crate::infra::{State, fs};

pub fn handle_regenerate(notes_dir: &Path) -> Result<()> {
    fs::ensure_layout(notes_dir)?;
    let mut library = Library::open(notes_dir)?;
    let next_id = library.rebuild()?;

    // the counter follows the rebuilt ground truth; bookmarks stay
    let mut state = State::load(notes_dir)?;
    state.next_id = next_id;
    state.store(notes_dir)?;

    let count = fs::list_note_ids(notes_dir)?.len();
    println!("Rebuilt indexes from {count} notes, next id is {next_id}");
    Ok(())
}

pub fn handle_path(notes_dir: &Path) -> Result<()> {
    println!("{}", fs::md_dir(notes_dir).display());
    Ok(())
}
