//! File I/O and the note store

mod fs;
mod store;

pub use fs::{
    FileFailure, NoteScan, StoreError, read_content, remove_file, scan_notes_directory,
    write_content,
};
pub use store::{
    DEFAULT_NOTES_DIR, DedupEvent, DedupReport, NoteStore, SearchReport, StoreConfig,
};
