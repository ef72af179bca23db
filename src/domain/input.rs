//! Pure validators for console input.
//!
//! Each prompt in the interactive session validates its raw line through one
//! of these functions, so the accept/reject rules are testable without a
//! console. Inputs arrive with the line ending already removed.

use std::fmt;
use thiserror::Error;

/// Token that confirms an overwrite or removal (compared case-insensitively).
pub const AFFIRMATIVE: &str = "s";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RemoveDuplicates,
    Create,
    Edit,
    Delete,
    SearchKeyword,
    SearchCategory,
    Exit,
}

/// Rejection for a line that names no menu entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("opção inválida: '{0}'")]
pub struct InvalidMenuChoice(pub String);

impl MenuChoice {
    /// All entries, in display order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::RemoveDuplicates,
        MenuChoice::Create,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::SearchKeyword,
        MenuChoice::SearchCategory,
        MenuChoice::Exit,
    ];

    /// Resolves a menu line by exact comparison with the entry number.
    pub fn parse(input: &str) -> Result<Self, InvalidMenuChoice> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == input)
            .ok_or_else(|| InvalidMenuChoice(input.to_string()))
    }

    /// The text the user types to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::RemoveDuplicates => "1",
            MenuChoice::Create => "2",
            MenuChoice::Edit => "3",
            MenuChoice::Delete => "4",
            MenuChoice::SearchKeyword => "5",
            MenuChoice::SearchCategory => "6",
            MenuChoice::Exit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::RemoveDuplicates => "Remover duplicatas",
            MenuChoice::Create => "Criar nota",
            MenuChoice::Edit => "Editar nota",
            MenuChoice::Delete => "Remover nota",
            MenuChoice::SearchKeyword => "Buscar notas por palavra-chave",
            MenuChoice::SearchCategory => "Buscar notas por categoria",
            MenuChoice::Exit => "Sair",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

/// Rejection for a numbered selection from a listing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Entrada inválida. Digite um número.")]
    NotANumber(String),

    #[error("Número inválido.")]
    OutOfRange { choice: i64, count: usize },
}

/// Validates a 1-based selection against a listing of `count` entries.
///
/// Surrounding whitespace is ignored. Returns the 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let choice: i64 = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;

    if choice >= 1 && (choice as u64) <= count as u64 {
        Ok((choice - 1) as usize)
    } else {
        Err(SelectionError::OutOfRange { choice, count })
    }
}

/// Returns true if the answer confirms a destructive action.
///
/// Only the exact token `s` (either case) confirms; anything else, including
/// an empty answer, declines.
pub fn is_affirmative(input: &str) -> bool {
    input.to_lowercase() == AFFIRMATIVE
}
