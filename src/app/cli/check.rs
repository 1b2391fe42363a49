//! Check command implementation.

use std::path::Path;

use crate::app::api::{self, CheckOutcome};
use crate::domain::AppError;

pub fn run_check(root: &Path) -> Result<i32, AppError> {
    match api::check_at(root)? {
        CheckOutcome::UpToDate { manifest_path, count, suffix } => {
            println!("{} is up to date ({} {} files).", manifest_path.display(), count, suffix);
            Ok(0)
        }
        CheckOutcome::Stale { manifest_path, added, removed } => {
            for file in &added {
                tracing::info!("+ {}", file);
            }
            for file in &removed {
                tracing::info!("- {}", file);
            }
            println!("{} is stale.", manifest_path.display());
            Ok(1)
        }
        CheckOutcome::Missing { manifest_path } => {
            println!("{} does not exist.", manifest_path.display());
            Ok(1)
        }
    }
}
