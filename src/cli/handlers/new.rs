//! New note command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::show_edit::{open_in_editor, sync_after_edit};
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::index::Library;
use crate::infra::{State, frontmatter, fs};

pub fn handle_new(args: &NewArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    fs::ensure_layout(notes_dir)?;
    let mut library = Library::open(notes_dir)?;
    let mut state = State::load(notes_dir)?;

    let id = state.claim_next_id();
    let path = fs::note_path(notes_dir, id);
    if path.exists() {
        bail!(
            "the file for note {id} already exists at {}, run 'mdn regenerate' and try again",
            path.display()
        );
    }

    let content = match &args.template {
        Some(template) => std::fs::read_to_string(template)
            .with_context(|| format!("failed to read template {}", template.display()))?,
        None => default_template(
            args.title.as_deref().unwrap_or("untitled"),
            args.group.as_deref().unwrap_or("none"),
        ),
    };
    let meta = frontmatter::parse(&content)
        .context("the note template must carry a front matter with title and group")?;

    fs::write_atomic(&path, &content)?;
    library.note_created(id, &meta)?;
    if !meta.tags.is_empty() || meta.doi.is_some() {
        // templates can already carry tags or a doi
        library.note_saved(id, &meta)?;
    }

    state.last_created = Some(id);
    state.store(notes_dir)?;

    println!("Created note {id}: {}", path.display());

    if args.edit {
        open_in_editor(&path, config)?;
        sync_after_edit(id, &mut library, notes_dir)?;
        state.last_edited = Some(id);
        state.store(notes_dir)?;
    }

    Ok(())
}

fn default_template(title: &str, group: &str) -> String {
    format!(
        "---\ntitle: {}\ngroup: {}\n---\n\n",
        yaml_quote(title),
        yaml_quote(group)
    )
}

/// Single-quotes a value so titles with `:` or `#` stay valid YAML.
fn yaml_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
