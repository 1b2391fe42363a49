use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, DirEntry, EntryKind};
use crate::ports::ExampleStore;

/// Filesystem-based example store implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemExampleStore;

impl FilesystemExampleStore {
    pub fn new() -> Self {
        Self
    }
}

fn entry_kind(path: &Path) -> EntryKind {
    // `metadata` follows symlinks, so a link to a regular file counts as a file.
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => EntryKind::File,
        Ok(meta) if meta.is_dir() => EntryKind::Directory,
        _ => EntryKind::Other,
    }
}

impl ExampleStore for FilesystemExampleStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>, AppError> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!(name = ?raw, "skipping entry with non-UTF-8 name");
                    continue;
                }
            };
            let kind = entry_kind(&entry.path());
            entries.push(DirEntry { name, kind });
        }

        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Option<String>, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }
}
