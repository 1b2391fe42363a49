use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, Manifest};
use crate::ports::ExampleStore;

#[derive(Debug, Clone)]
pub struct ListOutcome {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub suffix: String,
}

impl ListOutcome {
    /// `(example name, file name)` pairs in manifest order.
    pub fn examples(&self) -> impl Iterator<Item = (&str, &str)> {
        self.manifest
            .example_names(&self.suffix)
            .zip(self.manifest.files().iter().map(String::as_str))
    }
}

/// Read and parse the manifest currently on disk.
pub fn execute<S: ExampleStore>(ctx: &AppContext<S>) -> Result<ListOutcome, AppError> {
    let target_dir = ctx.paths().target_dir();
    if !ctx.store().is_dir(target_dir) {
        return Err(AppError::MissingDirectory { path: target_dir.to_path_buf() });
    }

    let manifest_path = ctx.paths().manifest_file().to_path_buf();
    let content = ctx
        .store()
        .read_file(&manifest_path)?
        .ok_or_else(|| AppError::ManifestMissing { path: manifest_path.clone() })?;
    let manifest = Manifest::from_json(&content)?;
    tracing::debug!(path = %manifest_path.display(), count = manifest.len(), "manifest read");

    Ok(ListOutcome { manifest_path, manifest, suffix: ctx.layout().suffix.clone() })
}
