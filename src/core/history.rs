//! Browsing history abstraction.
//!
//! The browser implementation lives in `utils::browser`; [`MemoryHistory`]
//! backs tests. `back()` only moves the cursor: the host reports the
//! transition separately (`popstate`), which is what triggers re-resolution.

/// Host history stack.
pub trait History {
    /// Path of the current entry.
    fn current_path(&self) -> String;
    /// Push `path` as a new entry and make it current.
    fn push(&mut self, path: &str);
    /// Move to the previous entry, if any.
    fn back(&mut self);
}

/// Vector-backed history stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn forward(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }

    fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut history = MemoryHistory::new("/");
        history.push("/tag/new");
        history.push("/item/a");
        assert_eq!(history.current_path(), "/item/a");

        history.back();
        assert_eq!(history.current_path(), "/tag/new");
        history.back();
        history.back();
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/a");
        history.push("/b");
        history.back();
        history.push("/c");
        assert_eq!(history.entries(), &["/", "/a", "/c"]);

        history.forward();
        assert_eq!(history.current_path(), "/c");
    }
}
