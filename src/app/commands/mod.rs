pub mod check;
pub mod generate;
pub mod list;
mod scan;

pub use scan::scan;
