mod load_layout;

pub use load_layout::{default_root, load_layout};
