//! Note store: a flat directory of suffixed text files.

use std::path::{Path, PathBuf};

use super::fs::{
    FileFailure, NoteScan, StoreError, read_content, remove_file, scan_notes_directory,
    write_content,
};
use crate::domain::{DEFAULT_EXTENSION, Duplicate, NoteName, find_duplicates, matches_query};

/// Default notes directory, relative to the working directory.
pub const DEFAULT_NOTES_DIR: &str = "notes";

/// Location and naming of the note files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the note files
    pub dir: PathBuf,
    /// Fixed suffix identifying note files
    pub extension: String,
}

impl StoreConfig {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NOTES_DIR, DEFAULT_EXTENSION)
    }
}

/// Outcome of a deduplication pass.
#[derive(Debug, Default)]
pub struct DedupReport {
    /// Duplicates whose file was removed
    pub removed: Vec<Duplicate>,
    /// Files skipped because they could not be read
    pub read_failures: Vec<FileFailure>,
    /// Duplicates found but whose removal failed
    pub remove_failures: Vec<(Duplicate, StoreError)>,
}

/// One outcome of a deduplication pass.
#[derive(Debug)]
pub enum DedupEvent<'a> {
    Unreadable(&'a FileFailure),
    Removed(&'a Duplicate),
    RemoveFailed(&'a Duplicate, &'a StoreError),
}

impl DedupEvent<'_> {
    /// The file the outcome is about.
    pub fn file_name(&self) -> &str {
        match self {
            DedupEvent::Unreadable(failure) => &failure.file_name,
            DedupEvent::Removed(duplicate) | DedupEvent::RemoveFailed(duplicate, _) => {
                &duplicate.removed
            }
        }
    }
}

impl DedupReport {
    /// All outcomes ordered by the file they concern.
    ///
    /// Listing order is name order, so this replays the pass file by file.
    pub fn events(&self) -> Vec<DedupEvent<'_>> {
        let mut events: Vec<DedupEvent<'_>> = self
            .read_failures
            .iter()
            .map(DedupEvent::Unreadable)
            .chain(self.removed.iter().map(DedupEvent::Removed))
            .chain(
                self.remove_failures
                    .iter()
                    .map(|(duplicate, error)| DedupEvent::RemoveFailed(duplicate, error)),
            )
            .collect();
        events.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        events
    }

    /// True when no duplicate was found.
    pub fn found_nothing(&self) -> bool {
        self.removed.is_empty() && self.remove_failures.is_empty()
    }
}

/// Outcome of a content search.
#[derive(Debug, Default)]
pub struct SearchReport {
    /// Number of note files examined
    pub scanned: usize,
    /// Matching file names, in listing order
    pub matches: Vec<String>,
    /// Files skipped because they could not be read
    pub read_failures: Vec<FileFailure>,
}

/// Manages the note files of one directory.
///
/// Every operation touches the file system directly: files are opened,
/// fully read or written, and closed within the call. Nothing is cached
/// between calls, so external changes are always visible.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
    extension: String,
}

impl NoteStore {
    /// Opens the store, creating the notes directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotADirectory` if the path exists but is a file.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        let store = Self {
            dir: config.dir,
            extension: config.extension,
        };
        store.ensure_dir()?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Creates the notes directory if needed. Idempotent.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(StoreError::NotADirectory {
                path: self.dir.clone(),
            });
        }
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::from_io(&self.dir, e))
    }

    /// Lists note file names, sorted by name, along with the suffixed
    /// entries that could not be listed.
    pub fn list_notes(&self) -> Result<NoteScan, StoreError> {
        scan_notes_directory(&self.dir, &self.extension)
    }

    /// Returns the storage key of a note.
    pub fn file_name(&self, name: &NoteName) -> String {
        name.file_name(&self.extension)
    }

    /// Resolves a file name to its path inside the notes directory.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Returns the stem of a listed file name.
    pub fn stem_of<'a>(&self, file_name: &'a str) -> &'a str {
        file_name
            .strip_suffix(self.extension.as_str())
            .unwrap_or(file_name)
    }

    pub fn exists(&self, name: &NoteName) -> bool {
        self.path_of(&self.file_name(name)).exists()
    }

    pub fn read(&self, file_name: &str) -> Result<String, StoreError> {
        read_content(&self.path_of(file_name))
    }

    /// Replaces the content of a note file.
    pub fn write(&self, file_name: &str, content: &str) -> Result<(), StoreError> {
        write_content(&self.path_of(file_name), content)
    }

    /// Writes a note under `name`, replacing any existing file.
    ///
    /// The notes directory is recreated first if it disappeared since the
    /// store was opened. Returns the written path.
    pub fn create(&self, name: &NoteName, content: &str) -> Result<PathBuf, StoreError> {
        self.ensure_dir()?;
        let path = self.path_of(&self.file_name(name));
        write_content(&path, content)?;
        Ok(path)
    }

    pub fn remove(&self, file_name: &str) -> Result<(), StoreError> {
        remove_file(&self.path_of(file_name))
    }

    /// Removes every note whose content exactly matches an earlier note.
    ///
    /// The first note in listing order survives. Unreadable files are
    /// skipped and reported; they are never removed.
    ///
    /// # Errors
    ///
    /// Fails only if the directory itself cannot be listed.
    pub fn remove_duplicates(&self) -> Result<DedupReport, StoreError> {
        let (notes, read_failures) = self.read_all()?;
        let mut report = DedupReport {
            read_failures,
            ..Default::default()
        };

        for duplicate in find_duplicates(&notes) {
            match self.remove(&duplicate.removed) {
                Ok(()) => report.removed.push(duplicate),
                Err(e) => report.remove_failures.push((duplicate, e)),
            }
        }

        Ok(report)
    }

    /// Finds notes whose content contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Result<SearchReport, StoreError> {
        let scan = self.list_notes()?;
        let mut report = SearchReport {
            scanned: scan.len(),
            read_failures: scan.failures,
            ..Default::default()
        };

        for file_name in scan.names {
            match self.read(&file_name) {
                Ok(content) if matches_query(&content, query) => report.matches.push(file_name),
                Ok(_) => {}
                Err(error) => report.read_failures.push(FileFailure { file_name, error }),
            }
        }
        sort_failures(&mut report.read_failures);

        Ok(report)
    }

    fn read_all(&self) -> Result<(Vec<(String, String)>, Vec<FileFailure>), StoreError> {
        let scan = self.list_notes()?;
        let mut notes = Vec::new();
        let mut failures = scan.failures;

        for file_name in scan.names {
            match self.read(&file_name) {
                Ok(content) => notes.push((file_name, content)),
                Err(error) => failures.push(FileFailure { file_name, error }),
            }
        }
        sort_failures(&mut failures);

        Ok((notes, failures))
    }
}

fn sort_failures(failures: &mut [FileFailure]) {
    failures.sort_by(|a, b| a.file_name.cmp(&b.file_name));
}
