//! In-memory project tree produced by assembly, consumed by archiving.

/// Insertion-ordered mapping from forward-slash relative path to content.
///
/// Built fresh per assembly call and discarded once the archive is
/// produced; never shared across operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: Vec<(String, String)>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing any existing entry at the same path.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == path) {
            entry.1 = content;
        } else {
            self.entries.push((path, content));
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.iter().find(|(p, _)| p == path).map(|(_, c)| c.as_str())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
