use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DirEntry};
use crate::ports::ExampleStore;

/// In-memory example store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockExampleStore {
    pub dirs: RefCell<HashMap<PathBuf, Vec<DirEntry>>>,
    pub files: RefCell<HashMap<PathBuf, String>>,
    pub writes: RefCell<Vec<PathBuf>>,
    pub unreadable: RefCell<HashSet<PathBuf>>,
    pub undecodable: RefCell<HashSet<PathBuf>>,
}

#[allow(dead_code)]
impl MockExampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` with the given entries, in listing order.
    pub fn with_dir(self, dir: impl Into<PathBuf>, entries: Vec<DirEntry>) -> Self {
        self.dirs.borrow_mut().insert(dir.into(), entries);
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }

    /// Make listing `dir` fail with a permission error.
    pub fn with_unreadable(self, dir: impl Into<PathBuf>) -> Self {
        self.unreadable.borrow_mut().insert(dir.into());
        self
    }

    /// Make reading `path` fail as a file with invalid UTF-8 would.
    pub fn with_undecodable(self, path: impl Into<PathBuf>) -> Self {
        self.undecodable.borrow_mut().insert(path.into());
        self
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl ExampleStore for MockExampleStore {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains_key(path)
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>, AppError> {
        if self.unreadable.borrow().contains(dir) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied").into());
        }
        self.dirs
            .borrow()
            .get(dir)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory").into())
    }

    fn read_file(&self, path: &Path) -> Result<Option<String>, AppError> {
        if self.undecodable.borrow().contains(path) {
            return Err(
                io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
                    .into(),
            );
        }
        Ok(self.file(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        self.writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
