//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

use super::{existing_note, select_note};
use crate::cli::EditArgs;
use crate::cli::console::{Console, ConsoleError};
use crate::infra::NoteStore;

/// Interactive edit: pick a note, show it, and replace its content.
///
/// An empty answer cancels, so a note can never be edited to empty here.
pub fn handle_edit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<(), ConsoleError> {
    let Some(file_name) = select_note(console, store, "editar")? else {
        return Ok(());
    };

    let current = match store.read(&file_name) {
        Ok(content) => content,
        Err(e) => {
            console.say(format!("Erro ao editar a nota: {}", e))?;
            return Ok(());
        }
    };
    console.trace(format!("read: {}", store.path_of(&file_name).display()));

    console.say("Conteúdo atual:")?;
    console.say(&current)?;

    let replacement = console.ask(
        "Digite o novo conteúdo da nota (deixe em branco para manter o conteúdo atual): ",
    )?;
    if replacement.is_empty() {
        console.say("Edição cancelada.")?;
        return Ok(());
    }

    match store.write(&file_name, &replacement) {
        Ok(()) => {
            console.trace(format!("wrote: {}", store.path_of(&file_name).display()));
            console.say(format!("Nota '{}' editada com sucesso.", file_name))?;
        }
        Err(e) => console.say(format!("Erro ao editar a nota: {}", e))?,
    }
    Ok(())
}

pub fn handle_edit_command<R: BufRead, W: Write>(
    args: &EditArgs,
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<()> {
    let file_name = existing_note(store, &args.name)?;

    if args.content.is_empty() {
        bail!("o novo conteúdo da nota não pode ser vazio");
    }

    store
        .write(&file_name, &args.content)
        .with_context(|| "Erro ao editar a nota")?;

    console.trace(format!("wrote: {}", store.path_of(&file_name).display()));
    console.say(format!("Nota '{}' editada com sucesso.", file_name))?;
    Ok(())
}
