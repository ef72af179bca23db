//! Duplicate detection over note contents.
//!
//! Pure function over already-read notes; the store performs the reads and
//! the removals.

use std::collections::HashMap;

use super::ContentHash;

/// A note whose content exactly matches an earlier note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// File name of the first note seen with this content (survives).
    pub kept: String,
    /// File name of the later note with identical content (to be removed).
    pub removed: String,
}

/// Finds notes whose content exactly matches an earlier note in the slice.
///
/// The first occurrence of each content is the one kept; every later
/// occurrence is reported against it. Contents are bucketed by SHA-256
/// digest and compared in full on a digest hit, so equality is exact.
///
/// # Arguments
///
/// * `notes` - (file name, content) pairs in listing order
pub fn find_duplicates<S: AsRef<str>>(notes: &[(String, S)]) -> Vec<Duplicate> {
    let mut seen: HashMap<ContentHash, Vec<usize>> = HashMap::new();
    let mut duplicates = Vec::new();

    for (i, (name, content)) in notes.iter().enumerate() {
        let content = content.as_ref();
        let bucket = seen
            .entry(ContentHash::compute(content.as_bytes()))
            .or_default();

        let original = bucket
            .iter()
            .copied()
            .find(|&j| notes[j].1.as_ref() == content);

        match original {
            Some(j) => duplicates.push(Duplicate {
                kept: notes[j].0.clone(),
                removed: name.clone(),
            }),
            None => bucket.push(i),
        }
    }

    duplicates
}
