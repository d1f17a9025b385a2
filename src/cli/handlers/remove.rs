//! Delete command handler.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::list::{print_table, row_for};
use super::resolve::resolve_selection;
use crate::cli::RmArgs;
use crate::index::Library;
use crate::infra::{State, frontmatter, fs};

pub fn handle_rm(args: &RmArgs, notes_dir: &Path) -> Result<()> {
    let mut library = Library::open(notes_dir)?;
    let state = State::load(notes_dir)?;

    let ids = resolve_selection(
        &args.pattern,
        args.group.as_deref(),
        args.tags.as_deref(),
        &library,
        &state,
    )?;
    if ids.is_empty() {
        println!("no matching notes");
        return Ok(());
    }

    if ids.len() > 1 && !args.force {
        let rows = ids
            .iter()
            .map(|id| row_for(&library, *id))
            .collect::<Result<Vec<_>>>()?;
        println!("Do you really want to delete the following notes?");
        println!();
        print_table(&rows);
        println!();
        if !confirm("Delete? y/n: ")? {
            return Ok(());
        }
    }

    for id in ids {
        let path = fs::note_path(notes_dir, id);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read note {id}, run 'mdn regenerate'"))?;
        let meta = frontmatter::parse(&content)
            .with_context(|| format!("invalid front matter in {}", path.display()))?;

        fs::remove_file(&path)?;
        let html = fs::html_path(notes_dir, id);
        if html.exists() {
            fs::remove_file(&html)?;
        }
        library.note_removed(id, &meta)?;
        println!("Deleted note {id}");
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
