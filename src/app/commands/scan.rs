use crate::app::AppContext;
use crate::domain::{AppError, Manifest, select_examples};
use crate::ports::ExampleStore;

/// Check the examples directory exists, then collect matching example files.
pub fn scan<S: ExampleStore>(ctx: &AppContext<S>) -> Result<Manifest, AppError> {
    let target_dir = ctx.paths().target_dir();

    if !ctx.store().is_dir(target_dir) {
        return Err(AppError::MissingDirectory { path: target_dir.to_path_buf() });
    }

    tracing::info!(dir = %target_dir.display(), suffix = %ctx.layout().suffix, "scanning examples");
    let entries = ctx.store().list_entries(target_dir)?;
    let files = select_examples(&entries, &ctx.layout().suffix);
    tracing::debug!(listed = entries.len(), matched = files.len(), "scan complete");

    Ok(Manifest::new(files))
}
