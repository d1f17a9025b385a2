//! Show, edit and cat command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

use super::resolve::{resolve_id, resolve_selection};
use crate::cli::config::Config;
use crate::cli::{CatArgs, EditArgs, ShowArgs};
use crate::domain::{NoteId, NoteMeta};
use crate::export;
use crate::index::Library;
use crate::infra::{State, frontmatter, fs};

pub fn handle_edit(args: &EditArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    let mut library = Library::open(notes_dir)?;
    let mut state = State::load(notes_dir)?;

    let id = resolve_id(&args.note, &library, &state)?;
    let path = fs::note_path(notes_dir, id);
    if !path.exists() {
        bail!(
            "no file for note {id} at {}, run 'mdn regenerate' and try again",
            path.display()
        );
    }

    open_in_editor(&path, config)?;
    sync_after_edit(id, &mut library, notes_dir)?;

    state.last_edited = Some(id);
    state.store(notes_dir)?;

    println!("Edited note {id}");
    Ok(())
}

pub fn handle_show(args: &ShowArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    let library = Library::open(notes_dir)?;
    let mut state = State::load(notes_dir)?;

    let refs = if args.notes.is_empty() {
        vec!["_e".to_string()]
    } else {
        args.notes.clone()
    };

    let mut last = None;
    for reference in &refs {
        let id = resolve_id(reference, &library, &state)?;
        let html = ensure_rendered(id, notes_dir)?;
        open_in_browser(&html, config)?;
        last = Some(id);
    }

    state.last_shown = last;
    state.store(notes_dir)?;
    Ok(())
}

pub fn handle_cat(args: &CatArgs, notes_dir: &Path) -> Result<()> {
    let library = Library::open(notes_dir)?;
    let state = State::load(notes_dir)?;

    let ids = resolve_selection(
        &args.pattern,
        args.group.as_deref(),
        args.tags.as_deref(),
        &library,
        &state,
    )?;

    for id in ids {
        let path = fs::note_path(notes_dir, id);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read note {id}"))?;
        let text = if args.no_header {
            frontmatter::body(&content)
        } else {
            &content
        };
        println!();
        println!("{}", text.trim());
    }
    Ok(())
}

/// Re-reads a note after its file changed, syncs the indexes and rewrites
/// the rendered page.
pub(crate) fn sync_after_edit(
    id: NoteId,
    library: &mut Library,
    notes_dir: &Path,
) -> Result<NoteMeta> {
    let path = fs::note_path(notes_dir, id);
    let content =
        fs::read_to_string(&path).with_context(|| format!("failed to read note {id}"))?;
    let meta = frontmatter::parse(&content)
        .with_context(|| format!("invalid front matter in {}", path.display()))?;

    library.note_saved(id, &meta)?;

    fs::ensure_layout(notes_dir)?;
    fs::write_atomic(&fs::html_path(notes_dir, id), &export::render(&meta, &content))?;
    Ok(meta)
}

/// Renders the note's page if it is missing or older than the source.
fn ensure_rendered(id: NoteId, notes_dir: &Path) -> Result<std::path::PathBuf> {
    let md = fs::note_path(notes_dir, id);
    if !md.exists() {
        bail!(
            "no file for note {id} at {}, run 'mdn regenerate' and try again",
            md.display()
        );
    }
    let html = fs::html_path(notes_dir, id);

    let stale = match (fs::modified(&md), fs::modified(&html)) {
        (Ok(md_time), Ok(html_time)) => html_time < md_time,
        _ => true,
    };
    if stale {
        let content = fs::read_to_string(&md)?;
        let meta = frontmatter::parse(&content)
            .with_context(|| format!("invalid front matter in {}", md.display()))?;
        fs::ensure_layout(notes_dir)?;
        fs::write_atomic(&html, &export::render(&meta, &content))?;
    }
    Ok(html)
}

/// Opens a file in the user's configured editor, waiting for it to exit.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // may include args like "code --wait"
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, cmd_args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(cmd_args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{editor}'"))?;

    if !status.success() {
        bail!("editor '{editor}' exited with non-zero status");
    }
    Ok(())
}

/// Opens a rendered page in the browser without waiting for it.
fn open_in_browser(path: &Path, config: &Config) -> Result<()> {
    let browser = config.browser();

    let parts: Vec<&str> = browser.split_whitespace().collect();
    let Some((cmd, cmd_args)) = parts.split_first() else {
        bail!("browser command is empty");
    };

    Command::new(cmd)
        .args(cmd_args)
        .arg(path)
        .spawn()
        .with_context(|| format!("failed to launch browser '{browser}'"))?;
    Ok(())
}
