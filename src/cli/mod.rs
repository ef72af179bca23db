//! CLI definitions, console session, and handlers

pub mod config;
pub mod console;
pub mod handlers;
pub mod menu;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use output::OutputFormat;

/// novanotes - plain-text notes in a directory
///
/// Without a subcommand, runs the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "novanotes", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes with their content
    #[command(name = "list", alias = "ls")]
    List(ListArgs),

    /// Create a note
    Create(CreateArgs),

    /// Replace a note's content
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Search note contents (case-insensitive)
    Search(SearchArgs),

    /// Remove notes whose content duplicates another note
    Dedup,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `create` command
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Note name (without extension)
    pub name: String,

    /// Note content
    pub content: String,

    /// Overwrite an existing note
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note name (without extension)
    pub name: String,

    /// New content (must not be empty)
    pub content: String,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note name (without extension)
    pub name: String,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for
    pub query: String,

    /// Treat the query as a category (same matching, different wording)
    #[arg(short, long)]
    pub category: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}
