use crate::domain::{ManifestLayout, ManifestPaths};
use crate::ports::ExampleStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ExampleStore> {
    store: S,
    layout: ManifestLayout,
    paths: ManifestPaths,
}

impl<S: ExampleStore> AppContext<S> {
    /// Create a context whose paths are resolved from `root` and `layout`.
    pub fn new(store: S, root: impl Into<std::path::PathBuf>, layout: ManifestLayout) -> Self {
        let paths = ManifestPaths::resolve(root, &layout);
        Self { store, layout, paths }
    }

    /// Get a reference to the example store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn layout(&self) -> &ManifestLayout {
        &self.layout
    }

    pub fn paths(&self) -> &ManifestPaths {
        &self.paths
    }
}
