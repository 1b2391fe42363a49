use std::io;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::scan;
use crate::domain::{AppError, Manifest};
use crate::ports::ExampleStore;

/// Freshness of the manifest on disk relative to the current directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate {
        manifest_path: PathBuf,
        count: usize,
        suffix: String,
    },
    /// `added` and `removed` are empty when only formatting differs or the
    /// file on disk is not a readable manifest.
    Stale {
        manifest_path: PathBuf,
        added: Vec<String>,
        removed: Vec<String>,
    },
    Missing {
        manifest_path: PathBuf,
    },
}

impl CheckOutcome {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, CheckOutcome::UpToDate { .. })
    }
}

/// Compare the manifest on disk with what `generate` would write. Never writes.
pub fn execute<S: ExampleStore>(ctx: &AppContext<S>) -> Result<CheckOutcome, AppError> {
    let manifest = scan(ctx)?;
    let expected = manifest.to_json()?;
    let manifest_path = ctx.paths().manifest_file().to_path_buf();

    let on_disk = match ctx.store().read_file(&manifest_path) {
        Ok(content) => content,
        Err(AppError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
            tracing::info!(path = %manifest_path.display(), "manifest is not valid UTF-8");
            return Ok(CheckOutcome::Stale { manifest_path, added: vec![], removed: vec![] });
        }
        Err(err) => return Err(err),
    };

    let outcome = match on_disk {
        None => CheckOutcome::Missing { manifest_path },
        Some(actual) if actual == expected => CheckOutcome::UpToDate {
            manifest_path,
            count: manifest.len(),
            suffix: ctx.layout().suffix.clone(),
        },
        Some(actual) => {
            let (added, removed) = match Manifest::from_json(&actual) {
                Ok(recorded) => entry_changes(&manifest, &recorded),
                Err(err) => {
                    tracing::info!(error = %err, "manifest on disk does not parse");
                    (vec![], vec![])
                }
            };
            CheckOutcome::Stale { manifest_path, added, removed }
        }
    };

    tracing::info!(up_to_date = outcome.is_up_to_date(), "manifest checked");
    Ok(outcome)
}

/// Entries present only in `current`, then entries present only in `recorded`.
fn entry_changes(current: &Manifest, recorded: &Manifest) -> (Vec<String>, Vec<String>) {
    let only_in = |a: &Manifest, b: &Manifest| {
        a.files().iter().filter(|file| !b.files().contains(*file)).cloned().collect::<Vec<_>>()
    };
    (only_in(current, recorded), only_in(recorded, current))
}
