//! List command implementation.

use std::path::Path;

use crate::app::api;
use crate::domain::AppError;

pub fn run_list(root: &Path) -> Result<(), AppError> {
    let outcome = api::list_at(root)?;
    for (name, file) in outcome.examples() {
        println!("{}\t{}", name, file);
    }
    Ok(())
}
