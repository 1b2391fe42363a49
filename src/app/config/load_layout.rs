//! Layout configuration loading from the root directory.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, CONFIG_FILENAME, ManifestLayout, parse_layout_content};
use crate::ports::ExampleStore;

/// Load `kl-manifest.toml` from `root`, falling back to the default layout when absent.
pub fn load_layout<S: ExampleStore>(root: &Path, store: &S) -> Result<ManifestLayout, AppError> {
    let config_path = root.join(CONFIG_FILENAME);

    match store.read_file(&config_path)? {
        Some(content) => {
            tracing::debug!(path = %config_path.display(), "loading layout override");
            parse_layout_content(&content)
        }
        None => Ok(ManifestLayout::default()),
    }
}

/// Directory containing the running executable.
pub fn default_root() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AppError::config_error(format!(
            "Cannot determine directory of executable: {}",
            exe.display()
        ))
    })
}
