//! Type names the emitter could not resolve.

use indexmap::IndexSet;

/// Grow-only set of unresolved type names, in first-seen order.
///
/// One set belongs to one generation run; the emitter records into it but
/// never reads it back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnknownTypes {
    names: IndexSet<String>,
}

impl UnknownTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name`. Recording it again has no effect.
    pub fn record(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Every recorded name.
    pub fn snapshot(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn merge(&mut self, other: UnknownTypes) {
        self.names.extend(other.names);
    }
}

impl IntoIterator for UnknownTypes {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
