//! File I/O primitives for note files with atomic writes.

use std::ffi::OsStr;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("arquivo não encontrado: {path}")]
    NotFound { path: PathBuf },

    #[error("permissão negada: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("erro de E/S em {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("falha na gravação atômica de {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("diretório pai não existe: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("o caminho não é um diretório: {path}")]
    NotADirectory { path: PathBuf },

    #[error("codificação inválida em {path}: UTF-8 inválido no byte {valid_up_to}")]
    InvalidEncoding { path: PathBuf, valid_up_to: usize },

    #[error("nome de arquivo não é UTF-8 válido: {path}")]
    InvalidFileName { path: PathBuf },
}

impl StoreError {
    /// Creates an appropriate StoreError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a note file's full content as text.
///
/// The content is returned verbatim: no BOM stripping, no line-ending or
/// trailing-newline normalization.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file doesn't exist.
/// Returns `StoreError::PermissionDenied` if access is denied.
/// Returns `StoreError::InvalidEncoding` if the file is not valid UTF-8.
pub fn read_content(path: &Path) -> Result<String, StoreError> {
    let bytes = std::fs::read(path).map_err(|e| StoreError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|e| StoreError::InvalidEncoding {
        path: path.into(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Writes content to a file path atomically.
///
/// Uses a temporary file in the same directory and an atomic rename, so a
/// failed write never leaves a truncated note behind. Any existing file at
/// `path` is fully replaced. The parent directory must exist.
///
/// # Errors
///
/// Returns `StoreError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `StoreError::AtomicWrite` if the atomic rename fails.
pub fn write_content(path: &Path, content: &str) -> Result<(), StoreError> {
    let parent = path
        .parent()
        .ok_or_else(|| StoreError::ParentNotFound { path: path.into() })?;

    if !parent.exists() {
        return Err(StoreError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::from_io(path, e))?;

    temp.write_all(content.as_bytes())
        .map_err(|e| StoreError::from_io(path, e))?;

    temp.persist(path).map_err(|e| StoreError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Removes a note file.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file doesn't exist.
pub fn remove_file(path: &Path) -> Result<(), StoreError> {
    std::fs::remove_file(path).map_err(|e| StoreError::from_io(path, e))
}

/// A file that could not be listed or read.
#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub error: StoreError,
}

/// Note files found in a directory, plus the entries that matched the
/// suffix but could not be turned into a usable name.
#[derive(Debug, Default)]
pub struct NoteScan {
    /// Note file names, sorted
    pub names: Vec<String>,
    /// Suffixed entries that could not be listed
    pub failures: Vec<FileFailure>,
}

impl NoteScan {
    /// Total number of suffixed entries seen, listed or not.
    pub fn len(&self) -> usize {
        self.names.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lists the note files directly inside `dir`.
///
/// Every entry whose name ends with `extension` counts, except
/// directories; subdirectories are not descended into. Symlinks are not
/// followed here, so a dangling link still shows up and fails when read.
/// Names are sorted lexicographically so listing order is the same on
/// every platform. Entries that cannot be inspected, and names that are
/// not valid UTF-8, land in `failures`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the directory doesn't exist.
/// Returns `StoreError::NotADirectory` if the path is not a directory.
/// Returns the mapped I/O error if the directory itself cannot be read.
pub fn scan_notes_directory(dir: &Path, extension: &str) -> Result<NoteScan, StoreError> {
    if !dir.exists() {
        return Err(StoreError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(StoreError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut scan = NoteScan::default();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() || !has_extension(entry.file_name(), extension) {
                    continue;
                }
                match entry.file_name().to_str() {
                    Some(name) => scan.names.push(name.to_string()),
                    None => scan.failures.push(FileFailure {
                        file_name: entry.file_name().to_string_lossy().into_owned(),
                        error: StoreError::InvalidFileName {
                            path: entry.path().to_path_buf(),
                        },
                    }),
                }
            }
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                if path == dir {
                    return Err(walk_error(&path, e));
                }
                let Some(name) = path.file_name() else {
                    return Err(walk_error(&path, e));
                };
                if !has_extension(name, extension) {
                    continue;
                }
                scan.failures.push(FileFailure {
                    file_name: name.to_string_lossy().into_owned(),
                    error: walk_error(&path, e),
                });
            }
        }
    }

    Ok(scan)
}

fn has_extension(name: &OsStr, extension: &str) -> bool {
    name.as_encoded_bytes().ends_with(extension.as_bytes())
}

fn walk_error(path: &Path, error: walkdir::Error) -> StoreError {
    match error.into_io_error() {
        Some(io_error) => StoreError::from_io(path, io_error),
        None => StoreError::Io {
            path: path.into(),
            source: io::Error::other("falha ao percorrer o diretório"),
        },
    }
}
