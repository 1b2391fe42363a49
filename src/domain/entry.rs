//! Directory entries and the example file filter.

/// What a directory entry resolves to, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Broken links, sockets, fifos, devices.
    Other,
}

/// One immediate entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::File }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::Directory }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::Other }
    }
}

/// Case-sensitive suffix test. A name equal to the suffix matches.
pub fn matches_suffix(name: &str, suffix: &str) -> bool {
    name.ends_with(suffix)
}

/// Keep regular files whose name ends with `suffix`, in listing order.
pub fn select_examples(entries: &[DirEntry], suffix: &str) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| {
            let keep = entry.kind == EntryKind::File && matches_suffix(&entry.name, suffix);
            if !keep {
                tracing::debug!(name = %entry.name, kind = ?entry.kind, "skipping entry");
            }
            keep
        })
        .map(|entry| entry.name.clone())
        .collect()
}
