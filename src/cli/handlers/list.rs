//! List command handler.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::ListArgs;
use crate::cli::console::Console;
use crate::cli::output::{NoteListing, Output, OutputFormat, single_line};
use crate::infra::NoteStore;

/// Prints every note as `<name>: <content>`, one per line.
///
/// Unreadable notes are reported on stderr and left out.
pub fn handle_list<R: BufRead, W: Write>(
    args: &ListArgs,
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<()> {
    let scan = store
        .list_notes()
        .with_context(|| format!("Erro ao listar as notas em {}", store.dir().display()))?;

    for failure in &scan.failures {
        eprintln!("Erro ao ler o arquivo {}: {}", failure.file_name, failure.error);
    }

    let mut listings = Vec::with_capacity(scan.names.len());
    for file_name in scan.names {
        match store.read(&file_name) {
            Ok(content) => listings.push(NoteListing {
                name: store.stem_of(&file_name).to_string(),
                file: file_name,
                content,
            }),
            Err(e) => eprintln!("Erro ao ler o arquivo {}: {}", file_name, e),
        }
    }

    match args.format {
        OutputFormat::Human => {
            for listing in &listings {
                console.say(format!(
                    "{}: {}",
                    listing.name,
                    single_line(&listing.content)
                ))?;
            }
        }
        OutputFormat::Json => {
            let output = Output::new(listings);
            console.say(serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}
