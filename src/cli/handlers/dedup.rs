//! Duplicate removal handler.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};

use crate::cli::console::{Console, ConsoleError};
use crate::infra::{DedupEvent, DedupReport, NoteStore};

/// Removes notes whose content duplicates an earlier note and reports
/// each pair.
pub fn handle_remove_duplicates<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<(), ConsoleError> {
    match store.remove_duplicates() {
        Ok(report) => print_report(console, store, &report),
        Err(e) => console.say(format!("Erro ao listar as notas: {}", e)),
    }
}

pub fn handle_dedup_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<()> {
    let report = store.remove_duplicates()?;
    finish_dedup_command(console, store, &report)
}

/// Prints the report and fails if any duplicate survived.
pub(super) fn finish_dedup_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
    report: &DedupReport,
) -> Result<()> {
    print_report(console, store, report)?;

    if !report.remove_failures.is_empty() {
        bail!(
            "{} nota(s) duplicada(s) não puderam ser removidas",
            report.remove_failures.len()
        );
    }
    Ok(())
}

/// Prints one block per outcome, in listing order.
pub(super) fn print_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
    report: &DedupReport,
) -> Result<(), ConsoleError> {
    for event in report.events() {
        match event {
            DedupEvent::Unreadable(failure) => console.say(format!(
                "Erro ao ler o arquivo {}: {}",
                failure.file_name, failure.error
            ))?,
            DedupEvent::Removed(duplicate) => {
                console.say(format!(
                    "Nota duplicada encontrada: {} e {}",
                    duplicate.removed, duplicate.kept
                ))?;
                console.trace(format!(
                    "removed: {}",
                    store.path_of(&duplicate.removed).display()
                ));
                console.say(format!("Nota duplicada removida: {}", duplicate.removed))?;
            }
            DedupEvent::RemoveFailed(duplicate, error) => {
                console.say(format!(
                    "Nota duplicada encontrada: {} e {}",
                    duplicate.removed, duplicate.kept
                ))?;
                console.say(format!(
                    "Erro ao remover o arquivo {}: {}",
                    duplicate.removed, error
                ))?;
            }
        }
    }

    if report.found_nothing() {
        console.say("Nenhuma nota duplicada encontrada.")?;
    }
    Ok(())
}
