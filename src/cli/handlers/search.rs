//! Content search command handler.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::path::Path;

use crate::cli::SearchArgs;
use crate::index::Library;
use crate::infra::fs;

const CONTEXT_LEN: usize = 15;

pub fn handle_search(args: &SearchArgs, notes_dir: &Path) -> Result<()> {
    let pattern = build_pattern(&args.pattern, args.regex, args.no_wildcard)?;
    let library = Library::open(notes_dir)?;

    for id in fs::list_note_ids(notes_dir)? {
        let content = fs::read_to_string(&fs::note_path(notes_dir, id))?;
        let hits = context_snippets(&pattern, &content, CONTEXT_LEN);
        if hits.is_empty() {
            continue;
        }
        let title = library.title.find_single(id).unwrap_or("<unindexed>");
        println!("{id}: {title}");
        for hit in hits {
            println!("\t {hit}");
        }
    }

    Ok(())
}

/// Builds the search regex. By default `*` acts as a wildcard and matching
/// ignores case; `--regex` passes the pattern through verbatim.
fn build_pattern(pattern: &str, regex: bool, no_wildcard: bool) -> Result<Regex> {
    if regex {
        return Regex::new(pattern).context("invalid regular expression");
    }

    let escaped = if no_wildcard {
        regex::escape(pattern)
    } else {
        pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*")
    };
    RegexBuilder::new(&escaped)
        .case_insensitive(true)
        .build()
        .context("invalid search pattern")
}

/// Returns one surrounding-context snippet per match, newlines flattened.
fn context_snippets(pattern: &Regex, body: &str, context_len: usize) -> Vec<String> {
    let mut snippets = Vec::new();
    for m in pattern.find_iter(body) {
        let mut start = m.start().saturating_sub(context_len);
        while !body.is_char_boundary(start) {
            start -= 1;
        }
        let mut end = (m.end() + context_len).min(body.len());
        while !body.is_char_boundary(end) {
            end += 1;
        }
        let hit = body[start..end].replace('\n', " ");
        snippets.push(format!("... {} ...", hit.trim()));
    }
    snippets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_pattern_ignores_case() {
        let pattern = build_pattern("Needle", false, false).unwrap();
        assert!(pattern.is_match("some needle here"));
    }

    #[test]
    fn star_is_a_wildcard() {
        let pattern = build_pattern("foo*bar", false, false).unwrap();
        assert!(pattern.is_match("foo something bar"));
    }

    #[test]
    fn no_wildcard_matches_star_literally() {
        let pattern = build_pattern("foo*bar", false, true).unwrap();
        assert!(pattern.is_match("foo*bar"));
        assert!(!pattern.is_match("foo something bar"));
    }

    #[test]
    fn regex_mode_passes_through() {
        let pattern = build_pattern(r"^ti\w+", true, false).unwrap();
        assert!(pattern.is_match("title"));
        assert!(build_pattern(r"(unclosed", true, false).is_err());
    }

    #[test]
    fn snippets_carry_context() {
        let pattern = build_pattern("needle", false, false).unwrap();
        let body = "a lot of text before the needle and after it too";
        let hits = context_snippets(&pattern, body, 10);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].contains("needle"));
        assert!(hits[0].starts_with("... "));
    }

    #[test]
    fn snippets_flatten_newlines() {
        let pattern = build_pattern("needle", false, false).unwrap();
        let hits = context_snippets(&pattern, "line one\nneedle\nline two", 10);
        assert!(!hits[0].contains('\n'));
    }

    #[test]
    fn one_snippet_per_match() {
        let pattern = build_pattern("x", false, false).unwrap();
        let hits = context_snippets(&pattern, "x and x and x", 2);
        assert_eq!(hits.len(), 3);
    }
}
