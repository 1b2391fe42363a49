//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::config::{default_root, load_layout};
use crate::app::{
    AppContext,
    commands::{check, generate, list},
};
use crate::services::FilesystemExampleStore;

pub use crate::app::commands::check::CheckOutcome;
pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::list::ListOutcome;
pub use crate::domain::{AppError, Manifest, ManifestLayout};

/// Create an `AppContext` rooted at `root`, honouring any layout override found there.
fn create_context(root: &Path) -> Result<AppContext<FilesystemExampleStore>, AppError> {
    let root = std::path::absolute(root)?;
    let store = FilesystemExampleStore::new();
    let layout = load_layout(&root, &store)?;
    Ok(AppContext::new(store, root, layout))
}

/// Root used when none is given: the directory containing the executable.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root {
        Some(root) => Ok(root),
        None => default_root(),
    }
}

/// Generate the manifest for the examples directory under `root`.
pub fn generate_at(root: &Path, options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(root)?;
    generate::execute(&ctx, options)
}

/// Check whether the manifest under `root` matches the current examples.
pub fn check_at(root: &Path) -> Result<CheckOutcome, AppError> {
    let ctx = create_context(root)?;
    check::execute(&ctx)
}

/// Read the manifest under `root`.
pub fn list_at(root: &Path) -> Result<ListOutcome, AppError> {
    let ctx = create_context(root)?;
    list::execute(&ctx)
}
