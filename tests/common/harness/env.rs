//! Isolated test environment with temp directory.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use super::NotesCommand;
use novanotes::domain::DEFAULT_EXTENSION;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// The temp directory doubles as the config home, so a user's real
/// configuration never leaks into a test run. Everything is removed when
/// the TestEnv is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The notes directory is not created up front; the binary creates it
    /// on startup, and `add_note` creates it on demand.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        Self {
            temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the root of the environment (used as config home).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the path a note with the given stem is stored at.
    pub fn note_path(&self, stem: &str) -> PathBuf {
        self.notes_dir.join(format!("{stem}{DEFAULT_EXTENSION}"))
    }

    /// Writes a note file directly and returns its path.
    pub fn add_note(&self, stem: &str, content: &str) -> PathBuf {
        std::fs::create_dir_all(&self.notes_dir).expect("Failed to create notes dir");
        let path = self.note_path(stem);
        std::fs::write(&path, content).expect("Failed to write test note");
        path
    }

    /// Writes raw bytes as a note file (for unreadable-content cases).
    pub fn add_raw_note(&self, stem: &str, bytes: &[u8]) -> PathBuf {
        std::fs::create_dir_all(&self.notes_dir).expect("Failed to create notes dir");
        let path = self.note_path(stem);
        std::fs::write(&path, bytes).expect("Failed to write test note");
        path
    }

    /// Reads a note's content, or `None` if it does not exist.
    pub fn read_note(&self, stem: &str) -> Option<String> {
        std::fs::read_to_string(self.note_path(stem)).ok()
    }

    /// Lists note file names in the notes directory, sorted.
    pub fn note_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.notes_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| name.ends_with(DEFAULT_EXTENSION))
            .collect();
        names.sort();
        names
    }

    /// Writes the config file read by the binary.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.root().join("novanotes");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .config_home(self.root())
            .dir(&self.notes_dir)
    }

    /// Creates a NotesCommand that relies on the config file for its
    /// notes directory.
    pub fn cmd_without_dir(&self) -> NotesCommand {
        NotesCommand::new().config_home(self.root())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
        assert!(env.notes_dir().starts_with(env.root()));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_add_note_creates_file() {
        let env = TestEnv::new();
        let path = env.add_note("a", "conteúdo");
        assert!(path.is_file());
        assert_eq!(env.read_note("a").as_deref(), Some("conteúdo"));
        assert_eq!(env.note_files(), vec!["a.notes.novacmd.any".to_string()]);
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }
}
