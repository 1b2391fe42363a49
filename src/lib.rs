//! kl-manifest: Generate the `examples.json` manifest for a directory of `.kl` example programs.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::api::{CheckOutcome, GenerateOptions, GenerateOutcome, ListOutcome};
pub use domain::{AppError, Manifest, ManifestLayout, ManifestPaths};

/// Generate the manifest for the examples directory under `root`.
pub fn generate(root: &Path) -> Result<GenerateOutcome, AppError> {
    app::api::generate_at(root, GenerateOptions::default())
}

/// Check whether the manifest under `root` is current.
pub fn check(root: &Path) -> Result<CheckOutcome, AppError> {
    app::api::check_at(root)
}

/// Read the manifest under `root`.
pub fn list(root: &Path) -> Result<ListOutcome, AppError> {
    app::api::list_at(root)
}
