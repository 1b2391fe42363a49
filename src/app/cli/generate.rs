//! Generate command implementation.

use std::path::Path;

use crate::app::api::{self, GenerateOptions};
use crate::domain::AppError;

pub fn run_generate(root: &Path, dry_run: bool) -> Result<(), AppError> {
    let outcome = api::generate_at(root, GenerateOptions { dry_run })?;

    if outcome.written {
        println!(
            "Generated {} with {} {} files.",
            outcome.manifest_path.display(),
            outcome.manifest.len(),
            outcome.suffix
        );
    } else {
        println!("{}", outcome.json);
    }
    Ok(())
}
