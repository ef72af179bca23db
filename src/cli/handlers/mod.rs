//! Command handlers for the interactive menu and scripted subcommands.
//!
//! Interactive handlers report every store failure through the console and
//! return normally; only console failures propagate. Scripted handlers
//! return an error so the process exits non-zero.

mod create;
mod dedup;
mod delete;
mod edit;
mod list;
mod search;


use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use super::console::{Console, ConsoleError};
use crate::domain::{NoteName, parse_selection};
use crate::infra::{FileFailure, NoteStore};

// Re-export public items
pub use create::{handle_create, handle_create_command};
pub use dedup::{handle_dedup_command, handle_remove_duplicates};
pub use delete::{handle_delete, handle_delete_command};
pub use edit::{handle_edit, handle_edit_command};
pub use list::handle_list;
pub use search::{SearchKind, handle_search, handle_search_command};

// ===========================================
// Shared Utilities
// ===========================================

pub(crate) const NO_NOTES: &str = "Nenhuma nota encontrada.";

/// Lists the notes with 1-based indices and asks for one of them.
///
/// Returns `None` (after saying why) when there is nothing to pick.
pub(crate) fn select_note<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
    action: &str,
) -> Result<Option<String>, ConsoleError> {
    let scan = match store.list_notes() {
        Ok(scan) => scan,
        Err(e) => {
            console.say(format!("Erro ao listar as notas: {}", e))?;
            return Ok(None);
        }
    };
    report_read_failures(console, &scan.failures)?;
    let notes = scan.names;

    if notes.is_empty() {
        console.say(NO_NOTES)?;
        return Ok(None);
    }

    console.say("Notas disponíveis:")?;
    for (i, file_name) in notes.iter().enumerate() {
        console.say(format!("{}. {}", i + 1, file_name))?;
    }

    let prompt = format!("Selecione o número da nota para {}: ", action);
    let index = console.ask_until(&prompt, |answer| parse_selection(answer, notes.len()))?;

    Ok(notes.into_iter().nth(index))
}

/// Prints one line per file that could not be read.
pub(crate) fn report_read_failures<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    failures: &[FileFailure],
) -> Result<(), ConsoleError> {
    for failure in failures {
        console.say(format!(
            "Erro ao ler o arquivo {}: {}",
            failure.file_name, failure.error
        ))?;
    }
    Ok(())
}

/// Resolves a scripted note argument to an existing note's file name.
pub(crate) fn existing_note(store: &NoteStore, stem: &str) -> Result<String> {
    let name = NoteName::new(stem).with_context(|| format!("nome de nota inválido: '{}'", stem))?;
    if !store.exists(&name) {
        bail!("nota não encontrada: '{}'", name);
    }
    Ok(store.file_name(&name))
}
