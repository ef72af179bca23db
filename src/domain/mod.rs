//! Core types and pure rules: note names, input validation, content hashing,
//! dedup, search

mod content_hash;
mod dedup;
mod input;
mod note_name;
mod search;

pub use content_hash::ContentHash;
pub use dedup::{Duplicate, find_duplicates};
pub use input::{
    AFFIRMATIVE, InvalidMenuChoice, MenuChoice, SelectionError, is_affirmative, parse_selection,
};
pub use note_name::{DEFAULT_EXTENSION, NoteName, NoteNameError};
pub use search::matches_query;
