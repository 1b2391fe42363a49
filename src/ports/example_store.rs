use std::path::Path;

use crate::domain::{AppError, DirEntry};

/// Filesystem access needed to scan examples and maintain the manifest.
pub trait ExampleStore {
    /// True when `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate entries of `dir`, in the order the listing returns them.
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>, AppError>;

    /// File content, or `None` when nothing exists at `path`.
    fn read_file(&self, path: &Path) -> Result<Option<String>, AppError>;

    /// Replace the content of `path`. Not atomic.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
