pub mod entry;
pub mod error;
pub mod layout;
pub mod manifest;

pub use entry::{DirEntry, EntryKind, matches_suffix, select_examples};
pub use error::AppError;
pub use layout::{
    CONFIG_FILENAME, EXAMPLES_DIR, KL_SUFFIX, MANIFEST_FILENAME, ManifestLayout, ManifestPaths,
    parse_layout_content,
};
pub use manifest::Manifest;
