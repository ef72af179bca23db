//! Interactive menu loop.

use std::io::{BufRead, Write};

use super::console::{Console, ConsoleError};
use super::handlers::{
    SearchKind, handle_create, handle_delete, handle_edit, handle_remove_duplicates,
    handle_search,
};
use crate::domain::MenuChoice;
use crate::infra::NoteStore;

/// Runs the menu until the exit entry is chosen or input ends.
///
/// Each operation returns control here when done; nothing but the notes
/// directory carries state between operations.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
) -> Result<(), ConsoleError> {
    loop {
        print_menu(console)?;

        let outcome = match console.ask("Escolha uma opção: ") {
            Ok(line) => match MenuChoice::parse(&line) {
                Ok(MenuChoice::Exit) => {
                    console.say("Saindo...")?;
                    return Ok(());
                }
                Ok(choice) => dispatch(console, store, choice),
                Err(_) => console.say("Opção inválida. Tente novamente."),
            },
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {}
            Err(ConsoleError::Closed) => {
                console.trace("input closed, leaving");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
    console.say("")?;
    console.say("Gerenciador de Notas")?;
    for choice in MenuChoice::ALL {
        console.say(choice)?;
    }
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &NoteStore,
    choice: MenuChoice,
) -> Result<(), ConsoleError> {
    match choice {
        MenuChoice::RemoveDuplicates => handle_remove_duplicates(console, store),
        MenuChoice::Create => handle_create(console, store),
        MenuChoice::Edit => handle_edit(console, store),
        MenuChoice::Delete => handle_delete(console, store),
        MenuChoice::SearchKeyword => handle_search(console, store, SearchKind::Keyword),
        MenuChoice::SearchCategory => handle_search(console, store, SearchKind::Category),
        MenuChoice::Exit => Ok(()),
    }
}
