//! Note reference resolution: integers, bookmarks, title patterns.

use anyhow::{Result, anyhow, bail};
use regex::{Regex, RegexBuilder};
use std::time::SystemTime;

use crate::domain::NoteId;
use crate::index::Library;
use crate::infra::{State, fs};

use super::list::filter_rows;

/// Resolves a user-supplied note reference to an ID.
///
/// Accepts a plain integer, one of the special IDs `_c` (last created),
/// `_e` (last edited) and `_s` (last shown), or a title pattern whose
/// characters match in order with anything between them. When several
/// titles match the pattern, the most recently modified note wins.
pub fn resolve_id(input: &str, library: &Library, state: &State) -> Result<NoteId> {
    if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
        return input.parse().map_err(|e| anyhow!("{e}"));
    }

    match input {
        "_c" => return bookmark(state.last_created, "no note has been created yet"),
        "_e" => return bookmark(state.last_edited, "no note has been edited yet"),
        "_s" => return bookmark(state.last_shown, "no note has been shown yet"),
        _ => {}
    }

    let pattern = fuzzy_pattern(input)?;
    let mut candidates: Vec<NoteId> = Vec::new();
    for (title, ids) in library.title.iter() {
        if pattern.is_match(title) {
            candidates.extend(ids.iter().copied());
        }
    }
    if candidates.is_empty() {
        bail!("no note matching '{input}' found");
    }

    let mut best: Option<(SystemTime, NoteId)> = None;
    for id in candidates {
        let modified = fs::modified(&fs::note_path(library.root(), id))?;
        if best.is_none_or(|(t, _)| modified > t) {
            best = Some((modified, id));
        }
    }
    Ok(best.expect("candidates is non-empty").1)
}

/// Resolves the pattern arguments shared by `cat` and `rm`.
///
/// No pattern means "everything matching the group/tag filters"; a single
/// non-numeric pattern filters like `ls` does; a single numeric pattern is
/// an ID; several patterns resolve individually via [`resolve_id`].
pub fn resolve_selection(
    patterns: &[String],
    group: Option<&str>,
    tags: Option<&str>,
    library: &Library,
    state: &State,
) -> Result<Vec<NoteId>> {
    if patterns.len() > 1 {
        return patterns
            .iter()
            .map(|p| resolve_id(p, library, state))
            .collect();
    }

    let pattern = patterns.first().map(String::as_str).unwrap_or("");
    if !pattern.is_empty() && pattern.chars().all(|c| c.is_ascii_digit()) {
        return Ok(vec![pattern.parse()?]);
    }

    let rows = filter_rows(library, pattern, group, tags)?;
    Ok(rows.into_iter().map(|row| row.id).collect())
}

fn bookmark(id: Option<NoteId>, missing: &str) -> Result<NoteId> {
    id.ok_or_else(|| anyhow!("{missing}"))
}

/// Joins the pattern's characters with `.*`, case-insensitively.
pub(crate) fn fuzzy_pattern(input: &str) -> Result<Regex> {
    let joined: Vec<String> = input
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    RegexBuilder::new(&joined.join(".*"))
        .case_insensitive(true)
        .build()
        .map_err(|e| anyhow!("invalid title pattern '{input}': {e}"))
}
