//! Note name (stem) validation and storage key resolution.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default suffix identifying note files inside the notes directory.
pub const DEFAULT_EXTENSION: &str = ".notes.novacmd.any";

/// A validated note stem: the user-chosen name without the fixed suffix.
///
/// The stem is the note's identity. Its storage key is `stem + suffix`,
/// resolved inside the notes directory, so a stem may never name a path
/// outside that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteName(String);

/// Errors when validating a note stem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteNameError {
    #[error("o nome da nota não pode ser vazio")]
    Empty,

    #[error("o nome da nota não pode conter '{0}'")]
    PathSeparator(char),

    #[error("nome de nota reservado: '{0}'")]
    Reserved(String),
}

impl NoteName {
    /// Validates a stem.
    ///
    /// Input is taken verbatim (no trimming), matching how filenames are
    /// typed at the prompt.
    pub fn new(stem: &str) -> Result<Self, NoteNameError> {
        if stem.is_empty() {
            return Err(NoteNameError::Empty);
        }
        if let Some(sep) = stem.chars().find(|c| *c == '/' || *c == '\\') {
            return Err(NoteNameError::PathSeparator(sep));
        }
        if stem == "." || stem == ".." {
            return Err(NoteNameError::Reserved(stem.to_string()));
        }
        Ok(Self(stem.to_string()))
    }

    /// Recovers the stem from a listed file name, if it carries the suffix.
    pub fn from_file_name(file_name: &str, extension: &str) -> Option<Self> {
        file_name
            .strip_suffix(extension)
            .and_then(|stem| Self::new(stem).ok())
    }

    /// Returns the stem.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the storage key for this note.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.0, extension)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteName {
    type Err = NoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
