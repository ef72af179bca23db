//! Search command handlers.
//!
//! Keyword and category search share the same matching; "category" is not a
//! stored field, just text looked for anywhere in the note body.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{NO_NOTES, report_read_failures};
use crate::cli::SearchArgs;
use crate::cli::console::{Console, ConsoleError};
use crate::cli::output::{Output, OutputFormat, SearchListing};
use crate::infra::NoteStore;

/// Wording variant of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Keyword,
    Category,
}

impl SearchKind {
    fn prompt(self) -> &'static str {
        match self {
            SearchKind::Keyword => "Digite a palavra-chave para buscar: ",
            SearchKind::Category => "Digite a categoria para buscar: ",
        }
    }

    fn not_found(self) -> &'static str {
        match self {
            SearchKind::Keyword => "Nenhuma nota encontrada com a palavra-chave.",
            SearchKind::Category => "Nenhuma nota encontrada com a categoria.",
        }
    }
}

pub fn handle_search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
    kind: SearchKind,
) -> Result<(), ConsoleError> {
    let query = console.ask(kind.prompt())?;

    let report = match store.search(&query) {
        Ok(report) => report,
        Err(e) => return console.say(format!("Erro ao listar as notas: {}", e)),
    };

    if report.scanned == 0 {
        return console.say(NO_NOTES);
    }

    report_read_failures(console, &report.read_failures)?;

    if report.matches.is_empty() {
        console.say(kind.not_found())?;
    } else {
        console.say("Notas encontradas:")?;
        for file_name in &report.matches {
            console.say(format!("- {}", file_name))?;
        }
    }
    Ok(())
}

pub fn handle_search_command<R: BufRead, W: Write>(
    args: &SearchArgs,
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<()> {
    let kind = if args.category {
        SearchKind::Category
    } else {
        SearchKind::Keyword
    };
    let report = store.search(&args.query)?;

    for failure in &report.read_failures {
        eprintln!(
            "Erro ao ler o arquivo {}: {}",
            failure.file_name, failure.error
        );
    }

    match args.format {
        OutputFormat::Human => {
            if report.matches.is_empty() {
                console.say(kind.not_found())?;
            }
            for file_name in &report.matches {
                console.say(file_name)?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<SearchListing> = report
                .matches
                .iter()
                .map(|file_name| SearchListing {
                    name: store.stem_of(file_name).to_string(),
                    file: file_name.clone(),
                })
                .collect();
            console.say(serde_json::to_string_pretty(&Output::new(listings))?)?;
        }
    }
    Ok(())
}
