//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// mdn - plaintext markdown notes with tag queries
#[derive(Parser, Debug)]
#[command(name = "mdn", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides the config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// Edit a note in your editor
    Edit(EditArgs),

    /// Render one or more notes to HTML and open them in the browser
    Show(ShowArgs),

    /// Print note sources to stdout
    Cat(CatArgs),

    /// List notes, optionally filtered by title, group and tags
    #[command(name = "ls")]
    List(ListArgs),

    /// List all groups
    Groups(GroupsArgs),

    /// List all tags
    Tags(TagsArgs),

    /// Delete notes
    Rm(RmArgs),

    /// Search through the content of all notes
    Search(SearchArgs),

    /// Print the directory where the note files are stored
    Path,

    /// Rebuild all indexes from the note files
    Regenerate,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: Option<String>,

    /// Group for the note
    #[arg(short, long)]
    pub group: Option<String>,

    /// File to use as the note template
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Open in editor after creation
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID, special ID (`_c`/`_e`/`_s`) or title pattern
    #[arg(default_value = "_c")]
    pub note: String,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note IDs, special IDs or title patterns (defaults to `_e`)
    pub notes: Vec<String>,
}

/// Arguments for the `cat` command
#[derive(Parser, Debug)]
pub struct CatArgs {
    /// Note IDs, special IDs or title patterns
    pub pattern: Vec<String>,

    /// Filter by group (case-insensitive substring)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Filter by tag query, e.g. "@foo & -@bar"
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Hide the YAML header
    #[arg(short, long)]
    pub no_header: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Title pattern (characters matched in order, case-insensitive)
    pub pattern: Option<String>,

    /// Filter by group (case-insensitive substring)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Filter by tag query, e.g. "@foo & -@bar"
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `groups` command
#[derive(Parser, Debug)]
pub struct GroupsArgs {
    /// Show note counts for each group
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note IDs, special IDs or title patterns
    pub pattern: Vec<String>,

    /// Filter by group (case-insensitive substring)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Filter by tag query, e.g. "@foo & -@bar"
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Delete without confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search pattern; `*` is a wildcard unless -n or -r is given
    pub pattern: String,

    /// Treat the pattern as a regular expression
    #[arg(short, long)]
    pub regex: bool,

    /// Match the pattern literally, no wildcards
    #[arg(short, long)]
    pub no_wildcard: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
