use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::scan;
use crate::domain::{AppError, Manifest};
use crate::ports::ExampleStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render the manifest without writing it.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub json: String,
    pub suffix: String,
    pub written: bool,
}

pub fn execute<S: ExampleStore>(
    ctx: &AppContext<S>,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let manifest = scan(ctx)?;
    let json = manifest.to_json()?;
    let manifest_path = ctx.paths().manifest_file().to_path_buf();

    if options.dry_run {
        tracing::info!(path = %manifest_path.display(), "dry run, manifest not written");
    } else {
        ctx.store().write_file(&manifest_path, &json)?;
        tracing::info!(path = %manifest_path.display(), count = manifest.len(), "manifest written");
    }

    Ok(GenerateOutcome {
        manifest_path,
        manifest,
        json,
        suffix: ctx.layout().suffix.clone(),
        written: !options.dry_run,
    })
}
