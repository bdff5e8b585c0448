//! Insertion-ordered set of registry names.

use indexmap::IndexSet;
use thiserror::Error;

/// Returned by [`NameSet::erase`] when the name was never inserted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not in the set")]
pub struct NotPresent(pub String);

/// A set of enum, command or type names that remembers first-insertion order.
///
/// Unlike a plain list, erasing a name that is not present is an error rather
/// than a silent no-op, and re-inserting a present name keeps its original
/// position.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    names: IndexSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Remove a name, keeping the relative order of the remaining names.
    pub fn erase(&mut self, name: &str) -> Result<(), NotPresent> {
        if self.names.shift_remove(name) {
            Ok(())
        } else {
            Err(NotPresent(name.to_string()))
        }
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

    /// Iterate names in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_subset(&self, other: &NameSet) -> bool {
        self.names.is_subset(&other.names)
    }

    /// Insert every name of `other`, in its order.
    pub fn extend_from(&mut self, other: &NameSet) {
        for name in other.iter() {
            self.insert(name);
        }
    }
}

/// Two sets are equal only when they hold the same names in the same order.
impl PartialEq for NameSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for NameSet {}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> IntoIterator for &'a NameSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<indexmap::set::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = NameSet::new();
        assert!(set.insert("glClear"));
        assert!(set.insert("glFlush"));
        assert!(!set.insert("glClear"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), ["glClear", "glFlush"]);
    }

    #[test]
    fn test_erase_preserves_order() {
        let mut set: NameSet = ["a", "b", "c", "d"].into_iter().collect();
        set.erase("b").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "c", "d"]);
    }

    #[test]
    fn test_erase_absent_fails() {
        let mut set: NameSet = ["a"].into_iter().collect();
        assert_eq!(set.erase("z"), Err(NotPresent("z".to_string())));
        set.erase("a").unwrap();
        assert!(set.erase("a").is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn test_reinsert_after_erase_goes_last() {
        let mut set: NameSet = ["a", "b"].into_iter().collect();
        set.erase("a").unwrap();
        set.insert("a");
        assert_eq!(set.iter().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn test_equality_respects_order() {
        let ab: NameSet = ["A", "B"].into_iter().collect();
        let ba: NameSet = ["B", "A"].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ["A", "B"].into_iter().collect());
    }

    #[test]
    fn test_subset() {
        let small: NameSet = ["a", "b"].into_iter().collect();
        let large: NameSet = ["b", "c", "a"].into_iter().collect();
        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
    }

    #[test]
    fn test_extend_from() {
        let mut set: NameSet = ["a"].into_iter().collect();
        set.extend_from(&["b", "a", "c"].into_iter().collect());
        assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
