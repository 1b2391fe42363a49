mod mock_example_store;

#[allow(unused_imports)]
pub use mock_example_store::MockExampleStore;
