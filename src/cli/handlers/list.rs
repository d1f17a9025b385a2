//! Listing handlers: `ls`, `groups`, `tags`.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local};
use std::path::Path;

use super::resolve::fuzzy_pattern;
use super::truncate_str;
use crate::cli::output::{KeyListing, NoteListing, OutputFormat};
use crate::cli::{GroupsArgs, ListArgs, TagsArgs};
use crate::domain::NoteId;
use crate::index::{Index, Library};
use crate::infra::fs;
use crate::query;

/// One line of `ls` output before formatting.
#[derive(Debug)]
pub(crate) struct Row {
    pub id: NoteId,
    pub title: String,
    pub group: String,
    pub modified: DateTime<Local>,
}

/// Builds a row for every note file, straight from the indexes.
pub(crate) fn collect_rows(library: &Library) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for id in fs::list_note_ids(library.root())? {
        rows.push(row_for(library, id)?);
    }
    Ok(rows)
}

pub(crate) fn row_for(library: &Library, id: NoteId) -> Result<Row> {
    let title = library
        .title
        .find_single(id)
        .with_context(|| format!("note {id} is missing from the title index, run 'mdn regenerate'"))?
        .to_string();
    let group = library
        .group
        .find_single(id)
        .with_context(|| format!("note {id} is missing from the group index, run 'mdn regenerate'"))?
        .to_string();
    let modified = fs::modified(&fs::note_path(library.root(), id))?;
    Ok(Row {
        id,
        title,
        group,
        modified: modified.into(),
    })
}

/// Applies the `ls` filters and sorts newest first.
///
/// The group filter is a case-insensitive substring test, the tag filter is
/// a compiled query evaluated against each note's indexed tags, and the
/// title pattern matches its characters in order.
pub(crate) fn filter_rows(
    library: &Library,
    pattern: &str,
    group: Option<&str>,
    tags: Option<&str>,
) -> Result<Vec<Row>> {
    let mut rows = collect_rows(library)?;

    if let Some(group) = group {
        let needle = group.to_lowercase();
        rows.retain(|row| row.group.to_lowercase().contains(&needle));
    }

    if let Some(tags) = tags.filter(|t| !t.trim().is_empty()) {
        let predicate = query::compile(&tags.to_lowercase())
            .map_err(|err| anyhow!("could not parse the tag query: {err}. Maybe you missed an @?"))?;
        rows.retain(|row| predicate.matches(&library.tag.find_multi(row.id)));
    }

    if !pattern.is_empty() {
        let regex = fuzzy_pattern(pattern)?;
        rows.retain(|row| regex.is_match(&row.title));
    }

    rows.sort_by(|a, b| b.modified.cmp(&a.modified).then(b.id.cmp(&a.id)));
    Ok(rows)
}

pub fn handle_list(args: &ListArgs, notes_dir: &Path) -> Result<()> {
    let library = Library::open(notes_dir)?;
    let rows = filter_rows(
        &library,
        args.pattern.as_deref().unwrap_or(""),
        args.group.as_deref(),
        args.tags.as_deref(),
    )?;

    match args.format {
        OutputFormat::Human => print_table(&rows),
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = rows
                .iter()
                .map(|row| NoteListing {
                    id: row.id.value(),
                    title: row.title.clone(),
                    group: row.group.clone(),
                    last_edit: row.modified.format("%Y-%m-%d %H:%M:%S").to_string(),
                    path: fs::note_path(library.root(), row.id)
                        .display()
                        .to_string(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
        OutputFormat::Paths => {
            for row in &rows {
                println!("{}", fs::note_path(library.root(), row.id).display());
            }
        }
    }

    Ok(())
}

pub(crate) fn print_table(rows: &[Row]) {
    if rows.is_empty() {
        println!("no notes found");
        return;
    }

    const MAX_TITLE: usize = 48;
    let titles: Vec<String> = rows
        .iter()
        .map(|row| truncate_str(&row.title, MAX_TITLE))
        .collect();

    let id_width = rows
        .iter()
        .map(|row| row.id.to_string().len())
        .chain(["id".len()].into_iter())
        .max()
        .unwrap_or(2);
    let title_width = titles
        .iter()
        .map(|t| t.chars().count())
        .chain(["title".len()].into_iter())
        .max()
        .unwrap_or(5);
    let group_width = rows
        .iter()
        .map(|row| row.group.chars().count())
        .chain(["group".len()].into_iter())
        .max()
        .unwrap_or(5);

    println!(
        "{:<id_width$}  {:<title_width$}  {:<group_width$}  last edit",
        "id", "title", "group"
    );
    for (row, title) in rows.iter().zip(&titles) {
        println!(
            "{:<id_width$}  {:<title_width$}  {:<group_width$}  {}",
            row.id.to_string(),
            title,
            row.group,
            row.modified.format("%Y-%m-%d %H:%M")
        );
    }
}

pub fn handle_groups(args: &GroupsArgs, notes_dir: &Path) -> Result<()> {
    let library = Library::open(notes_dir)?;
    print_keys(&library.group, args.counts);
    Ok(())
}

pub fn handle_tags(args: &TagsArgs, notes_dir: &Path) -> Result<()> {
    let library = Library::open(notes_dir)?;
    print_keys(&library.tag, args.counts);
    Ok(())
}

fn print_keys(index: &Index, counts: bool) {
    let listings: Vec<KeyListing> = index
        .iter()
        .map(|(key, ids)| KeyListing {
            name: key.to_string(),
            count: counts.then_some(ids.len()),
        })
        .collect();

    for listing in listings {
        match listing.count {
            Some(count) => println!("{}\t{}", listing.name, count),
            None => println!("{}", listing.name),
        }
    }
}
