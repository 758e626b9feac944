//! The allow-list of trivial file names.
//!
//! A trivial file (`.DS_Store`, `Thumbs.db`, ...) does not count against
//! its directory being empty. Matching is on the exact base name,
//! case-sensitive, never on a path or a glob.
use compact_str::CompactString;
use std::collections::HashSet;
use std::ffi::OsStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrivialSet {
    names: HashSet<CompactString>,
}

impl TrivialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a file with this base name is trivial.
    ///
    /// Names that are not valid UTF-8 can never be on the list.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for TrivialSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            let name = name.as_ref().trim();
            if !name.is_empty() {
                self.names.insert(CompactString::new(name));
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrivialSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
