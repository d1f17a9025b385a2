//! mdn - plaintext markdown notes with tag queries

pub mod cli;
pub mod domain;
pub mod export;
pub mod index;
pub mod infra;
pub mod query;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_cat, handle_edit, handle_groups, handle_list, handle_new, handle_path,
        handle_regenerate, handle_rm, handle_search, handle_show, handle_tags,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());

    match &cli.command {
        Command::New(args) => handle_new(args, &notes_dir, &config),
        Command::Edit(args) => handle_edit(args, &notes_dir, &config),
        Command::Show(args) => handle_show(args, &notes_dir, &config),
        Command::Cat(args) => handle_cat(args, &notes_dir),
        Command::List(args) => handle_list(args, &notes_dir),
        Command::Groups(args) => handle_groups(args, &notes_dir),
        Command::Tags(args) => handle_tags(args, &notes_dir),
        Command::Rm(args) => handle_rm(args, &notes_dir),
        Command::Search(args) => handle_search(args, &notes_dir),
        Command::Path => handle_path(&notes_dir),
        Command::Regenerate => handle_regenerate(&notes_dir),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "mdn", &mut std::io::stdout());
            Ok(())
        }
    }
}
