//! novanotes - plain-text notes in a directory

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    console::Console,
    handlers::{
        handle_create_command, handle_dedup_command, handle_delete_command, handle_edit_command,
        handle_list, handle_search_command,
    },
    menu::run_session,
};
use infra::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let store_config = config.store_config(cli.dir.as_ref());
    let mut console = Console::stdio(cli.verbose > 0);

    console.trace(format!("config: {}", Config::config_path().display()));

    let store = NoteStore::open(store_config)
        .with_context(|| "falha ao abrir o diretório de notas")?;
    console.trace(format!("notes dir: {}", store.dir().display()));

    match &cli.command {
        None => run_session(&mut console, &store)?,
        Some(Command::List(args)) => handle_list(args, &mut console, &store)?,
        Some(Command::Create(args)) => handle_create_command(args, &mut console, &store)?,
        Some(Command::Edit(args)) => handle_edit_command(args, &mut console, &store)?,
        Some(Command::Delete(args)) => handle_delete_command(args, &mut console, &store)?,
        Some(Command::Search(args)) => handle_search_command(args, &mut console, &store)?,
        Some(Command::Dedup) => handle_dedup_command(&mut console, &store)?,
    }
    Ok(())
}
