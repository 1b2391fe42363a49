mod example_store;

pub use example_store::ExampleStore;
