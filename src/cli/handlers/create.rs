//! Create command handler.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

use crate::cli::CreateArgs;
use crate::cli::console::{Console, ConsoleError};
use crate::domain::{NoteName, is_affirmative};
use crate::infra::NoteStore;

/// Interactive create: asks for a name until one is free or the user agrees
/// to overwrite it, then asks for the content.
pub fn handle_create<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<(), ConsoleError> {
    let name = loop {
        let name = console.ask_until("Digite o nome da nota (sem extensão): ", NoteName::new)?;
        if !store.exists(&name) {
            break name;
        }
        let answer = console.ask("O arquivo já existe. Deseja sobrescrever? (s/n): ")?;
        if is_affirmative(&answer) {
            break name;
        }
    };

    let content = console.ask("Digite o conteúdo da nota: ")?;

    match store.create(&name, &content) {
        Ok(path) => {
            console.trace(format!("wrote: {}", path.display()));
            console.say(format!("Nota '{}' criada com sucesso.", name))?;
        }
        Err(e) => console.say(format!("Erro ao criar a nota: {}", e))?,
    }
    Ok(())
}

pub fn handle_create_command<R: BufRead, W: Write>(
    args: &CreateArgs,
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<()> {
    let name = NoteName::new(&args.name)
        .with_context(|| format!("nome de nota inválido: '{}'", args.name))?;

    if store.exists(&name) && !args.force {
        bail!(
            "a nota '{}' já existe (use --force para sobrescrever)",
            name
        );
    }

    let path = store
        .create(&name, &args.content)
        .with_context(|| "Erro ao criar a nota")?;

    console.trace(format!("wrote: {}", path.display()));
    console.say(format!("Nota '{}' criada com sucesso.", name))?;
    Ok(())
}
