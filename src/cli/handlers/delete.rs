//! Delete command handler.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::{existing_note, select_note};
use crate::cli::DeleteArgs;
use crate::cli::console::{Console, ConsoleError};
use crate::domain::is_affirmative;
use crate::infra::NoteStore;

/// Interactive delete: pick a note and remove it after confirmation.
pub fn handle_delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<(), ConsoleError> {
    let Some(file_name) = select_note(console, store, "remover")? else {
        return Ok(());
    };

    let answer = console.ask(&format!(
        "Tem certeza que deseja remover a nota '{}'? (s/n): ",
        file_name
    ))?;
    if !is_affirmative(&answer) {
        console.say("Remoção cancelada.")?;
        return Ok(());
    }

    match store.remove(&file_name) {
        Ok(()) => {
            console.trace(format!("removed: {}", store.path_of(&file_name).display()));
            console.say(format!("Nota '{}' removida com sucesso.", file_name))?;
        }
        Err(e) => console.say(format!("Erro ao remover a nota: {}", e))?,
    }
    Ok(())
}

/// Scripted delete. The caller is responsible for confirmation.
pub fn handle_delete_command<R: BufRead, W: Write>(
    args: &DeleteArgs,
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<()> {
    let file_name = existing_note(store, &args.name)?;

    store
        .remove(&file_name)
        .with_context(|| "Erro ao remover a nota")?;

    console.trace(format!("removed: {}", store.path_of(&file_name).display()));
    console.say(format!("Nota '{}' removida com sucesso.", file_name))?;
    Ok(())
}
