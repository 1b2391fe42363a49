//! Shared testing harness for `kl-manifest` integration tests.

use assert_cmd::Command;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated docs tree for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    docs_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty `docs/` directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let docs_dir = root.path().join("docs");
        fs::create_dir_all(&docs_dir).expect("Failed to create docs directory");
        Self { root, docs_dir }
    }

    /// Create a context whose `docs/ex/` directory already exists.
    pub(crate) fn with_examples_dir() -> Self {
        let ctx = Self::new();
        fs::create_dir_all(ctx.examples_dir()).expect("Failed to create examples directory");
        ctx
    }

    /// Directory passed as `--root`.
    pub(crate) fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub(crate) fn examples_dir(&self) -> PathBuf {
        self.docs_dir.join("ex")
    }

    pub(crate) fn manifest_path(&self) -> PathBuf {
        self.examples_dir().join("examples.json")
    }

    /// Write a file inside `docs/ex/`.
    pub(crate) fn write_example(&self, name: &str, content: &str) {
        fs::write(self.examples_dir().join(name), content)
            .unwrap_or_else(|e| panic!("Failed to write example {}: {}", name, e));
    }

    /// Create a subdirectory inside `docs/ex/`.
    pub(crate) fn create_subdir(&self, name: &str) {
        fs::create_dir_all(self.examples_dir().join(name))
            .unwrap_or_else(|e| panic!("Failed to create subdirectory {}: {}", name, e));
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.docs_dir.join("kl-manifest.toml"), content).expect("Failed to write config");
    }

    pub(crate) fn read_manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).expect("Failed to read manifest")
    }

    /// Manifest entries as a set; directory listing order is platform-dependent.
    pub(crate) fn manifest_entries(&self) -> BTreeSet<String> {
        let entries: Vec<String> = serde_json::from_str(&self.read_manifest())
            .expect("Manifest is not a JSON string array");
        entries.into_iter().collect()
    }

    /// Build a command for invoking the compiled binary against `docs/`.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("kl-manifest").expect("Failed to locate kl-manifest binary");
        cmd.current_dir(self.root.path()).env_remove("RUST_LOG").arg("--root").arg(&self.docs_dir);
        cmd
    }

    /// Copy the compiled binary into `docs/` so the default root is exercised.
    pub(crate) fn install_binary_in_docs(&self) -> PathBuf {
        let source = assert_cmd::cargo::cargo_bin("kl-manifest");
        let target = self.docs_dir.join(source.file_name().expect("binary has a file name"));
        fs::copy(&source, &target).expect("Failed to copy kl-manifest binary");
        target
    }
}
