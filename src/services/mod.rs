mod filesystem_example_store;

pub use filesystem_example_store::FilesystemExampleStore;
