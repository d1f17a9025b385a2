//! Benchmarks for query compilation, evaluation, and index maintenance.
//!
//! Run with: cargo bench --bench query_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdn::domain::NoteId;
use mdn::index::{regenerate, Index};
use mdn::query::compile;
use std::collections::BTreeSet;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Tags to assign to generated notes
const TAGS: &[&str] = &[
    "@draft",
    "@review",
    "@published",
    "@important",
    "@rust",
    "@cli",
    "@async",
    "@database",
];

/// Groups to assign to generated notes
const GROUPS: &[&str] = &["inbox", "work", "reference", "journal", "ideas"];

/// Sample words for generating note bodies
const WORDS: &[&str] = &[
    "architecture",
    "design",
    "pattern",
    "system",
    "component",
    "interface",
    "module",
    "function",
    "testing",
    "performance",
];

/// Deterministic tag set for the note at a given index
fn tag_set(index: usize) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    tags.insert(TAGS[index % TAGS.len()].to_string());
    tags.insert(TAGS[(index + 3) % TAGS.len()].to_string());
    if index % 4 == 0 {
        tags.insert(TAGS[(index + 5) % TAGS.len()].to_string());
    }
    tags
}

/// Generate a note source with front matter, inline tags, and body text
fn generate_note_content(index: usize) -> String {
    let title = format!("Note {} - {}", index, WORDS[index % WORDS.len()]);
    let group = GROUPS[index % GROUPS.len()];
    let tags: Vec<String> = tag_set(index).into_iter().collect();

    let body_words: Vec<&str> = (0..50).map(|j| WORDS[(index + j) % WORDS.len()]).collect();
    let body = body_words.join(" ");

    format!(
        "---\ntitle: {}\ngroup: {}\n---\n\n# {}\n\nTagged {} for later.\n\n{}\n",
        title,
        group,
        title,
        tags.join(" and "),
        body,
    )
}

/// Generate (id, body) pairs for N notes
fn generate_notes(count: usize) -> Vec<(NoteId, String)> {
    (0..count)
        .map(|i| (NoteId::new(i as u64), generate_note_content(i)))
        .collect()
}

/// Build a tag index over N synthetic notes
fn build_tag_index(count: usize) -> Index {
    let mut index = Index::new();
    for i in 0..count {
        let id = NoteId::new(i as u64);
        for tag in tag_set(i) {
            index.insert(&tag, id);
        }
    }
    index
}

// =============================================================================
// Query Compilation Benchmarks
// =============================================================================

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    group.bench_function("single_tag", |b| b.iter(|| compile("@rust").unwrap()));

    group.bench_function("and_chain", |b| {
        b.iter(|| compile("@rust & @cli & @draft").unwrap())
    });

    group.bench_function("mixed_precedence", |b| {
        b.iter(|| compile("@rust & -@draft | @cli & @review").unwrap())
    });

    group.bench_function("nested_groups", |b| {
        b.iter(|| compile("(@rust | @cli) & -(@draft | (@review & @important))").unwrap())
    });

    group.finish();
}

fn bench_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("matches");

    let tag_sets: Vec<BTreeSet<String>> = (0..1000).map(tag_set).collect();

    let simple = compile("@rust").unwrap();
    group.throughput(Throughput::Elements(tag_sets.len() as u64));
    group.bench_function("single_tag_1000_notes", |b| {
        b.iter(|| tag_sets.iter().filter(|tags| simple.matches(tags)).count())
    });

    let complex = compile("(@rust | @cli) & -@draft").unwrap();
    group.bench_function("complex_1000_notes", |b| {
        b.iter(|| tag_sets.iter().filter(|tags| complex.matches(tags)).count())
    });

    group.finish();
}

// =============================================================================
// Index Maintenance Benchmarks
// =============================================================================

fn bench_update_multi(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_multi");

    for size in [100, 500, 1000] {
        let index = build_tag_index(size);
        let id = NoteId::new(0);
        let old = tag_set(0);
        let new = tag_set(1);

        group.bench_with_input(BenchmarkId::new("notes", size), &size, |b, _| {
            b.iter_batched(
                || index.clone(),
                |mut index| index.update_multi(&new, &old, id).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_find_multi(c: &mut Criterion) {
    let index = build_tag_index(1000);
    let id = NoteId::new(500);

    c.bench_function("find_multi_1000_notes", |b| {
        b.iter(|| index.find_multi(id))
    });
}

// =============================================================================
// Rebuild Benchmarks
// =============================================================================

fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("regenerate");

    for size in [100, 500, 1000] {
        let notes = generate_notes(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &size, |b, _| {
            b.iter(|| {
                regenerate(notes.iter().map(|(id, body)| (*id, body.as_str()))).unwrap()
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(query_benches, bench_compile, bench_matches);

criterion_group!(
    index_benches,
    bench_update_multi,
    bench_find_multi,
    bench_regenerate,
);

criterion_main!(query_benches, index_benches);
