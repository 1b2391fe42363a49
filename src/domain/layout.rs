//! Manifest layout and resolved path catalog.
//!
//! All paths the tool touches are derived here from a root directory and a
//! [`ManifestLayout`]. Commands must use [`ManifestPaths`] instead of ad-hoc
//! `.join("...")` chains.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// The examples directory name, relative to the root.
pub const EXAMPLES_DIR: &str = "ex";

/// The manifest file name inside the examples directory.
pub const MANIFEST_FILENAME: &str = "examples.json";

/// File name suffix selecting example programs.
pub const KL_SUFFIX: &str = ".kl";

/// Optional layout override file, read from the root directory.
pub const CONFIG_FILENAME: &str = "kl-manifest.toml";

/// Names and suffix that define where examples live and what counts as one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestLayout {
    pub examples_dir: String,
    pub manifest_file: String,
    pub suffix: String,
}

impl Default for ManifestLayout {
    fn default() -> Self {
        Self {
            examples_dir: EXAMPLES_DIR.to_string(),
            manifest_file: MANIFEST_FILENAME.to_string(),
            suffix: KL_SUFFIX.to_string(),
        }
    }
}

impl ManifestLayout {
    /// Reject layouts that would scan outside the root, write outside the examples
    /// directory, or make the manifest match its own suffix.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.suffix.is_empty() {
            return Err(AppError::config_error("suffix must not be empty"));
        }

        let examples_dir = Path::new(&self.examples_dir);
        if self.examples_dir.is_empty()
            || !examples_dir.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(AppError::config_error(format!(
                "examples_dir '{}' must be a relative path without '..'",
                self.examples_dir
            )));
        }

        let mut manifest = Path::new(&self.manifest_file).components();
        if !matches!((manifest.next(), manifest.next()), (Some(Component::Normal(_)), None)) {
            return Err(AppError::config_error(format!(
                "manifest_file '{}' must be a plain file name",
                self.manifest_file
            )));
        }

        // The manifest lives in the scanned directory and must not list itself.
        if self.manifest_file.ends_with(&self.suffix) {
            return Err(AppError::config_error(format!(
                "manifest_file '{}' must not end with suffix '{}'",
                self.manifest_file, self.suffix
            )));
        }

        Ok(())
    }
}

/// Parse and validate a layout override from TOML content.
pub fn parse_layout_content(content: &str) -> Result<ManifestLayout, AppError> {
    let layout: ManifestLayout = toml::from_str(content)?;
    layout.validate()?;
    Ok(layout)
}

/// Absolute locations for one run. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    root: PathBuf,
    target_dir: PathBuf,
    manifest_file: PathBuf,
}

impl ManifestPaths {
    /// Pure path arithmetic; nothing is checked on disk.
    pub fn resolve(root: impl Into<PathBuf>, layout: &ManifestLayout) -> Self {
        let root = root.into();
        let target_dir = root.join(&layout.examples_dir);
        let manifest_file = target_dir.join(&layout.manifest_file);
        Self { root, target_dir, manifest_file }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory scanned for examples.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Where the manifest is written.
    pub fn manifest_file(&self) -> &Path {
        &self.manifest_file
    }
}
