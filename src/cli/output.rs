//! Output format types for scripted commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub name: String,
    pub file: String,
    pub content: String,
}

/// A single note in search output.
#[derive(Debug, Serialize)]
pub struct SearchListing {
    pub name: String,
    pub file: String,
}

/// Flattens note content onto one line for `<name>: <content>` listings.
pub fn single_line(content: &str) -> String {
    content.lines().collect::<Vec<_>>().join(" ")
}
