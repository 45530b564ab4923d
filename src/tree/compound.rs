use std::collections::HashMap;

use crate::{codec::tags::TagKind, tree::Value};

/// Mapping from field names to values, the NBT equivalent of a struct.
///
/// Alongside the values a compound remembers which tag each field was
/// read with or should be written with. A field without a recorded tag
/// gets one guessed at write time (see [`Value::guess_kind`]), and the
/// guess is stored back so later writes reuse it. Equality compares
/// values only, the tag annotations are bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    values: HashMap<String, Value>,
    kinds: HashMap<String, TagKind>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, returning the previous value if any.
    ///
    /// Any tag recorded for the old value is dropped: the new value may
    /// not fit it, so the writer starts from a clean guess.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        self.kinds.remove(&name);
        self.values.insert(name, value.into())
    }

    /// Inserts a field together with the tag it must be written as.
    pub fn insert_with_kind(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        kind: TagKind,
    ) -> Option<Value> {
        let name = name.into();
        self.kinds.insert(name.clone(), kind);
        self.values.insert(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.values.get_mut(name)
    }

    /// Tag recorded for a field, if one was read or assigned.
    pub fn kind(&self, name: &str) -> Option<TagKind> {
        self.kinds.get(name).copied()
    }

    /// Pins the tag a present field will be written as.
    ///
    /// Returns `false` when no such field exists, so a tag never
    /// outlives its value.
    pub fn set_kind(&mut self, name: &str, kind: TagKind) -> bool {
        if self.values.contains_key(name) {
            self.kinds.insert(name.to_string(), kind);
            true
        } else {
            false
        }
    }

    /// Removes a field and its recorded tag.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.kinds.remove(name);
        self.values.remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Field names in arbitrary (hash map) order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut c = Compound::new();
        assert!(c.insert("health", 20i32).is_none());
        assert_eq!(c.get("health").and_then(Value::as_int), Some(20));
        assert_eq!(c.len(), 1);
        assert!(c.contains_key("health"));
        assert!(!c.contains_key("mana"));
    }

    #[test]
    fn test_insert_replaces_and_returns_old() {
        let mut c = Compound::new();
        c.insert("name", "alpha");
        let old = c.insert("name", "beta");
        assert_eq!(old, Some(Value::from("alpha")));
        assert_eq!(c.get("name").and_then(Value::as_text), Some("beta"));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_insert_drops_stale_kind() {
        let mut c = Compound::new();
        c.insert_with_kind("flag", 1i32, TagKind::Byte);
        assert_eq!(c.kind("flag"), Some(TagKind::Byte));

        c.insert("flag", "now a string");
        assert_eq!(c.kind("flag"), None);
    }

    #[test]
    fn test_set_kind_requires_value() {
        let mut c = Compound::new();
        assert!(!c.set_kind("ghost", TagKind::Byte));
        assert_eq!(c.kind("ghost"), None);

        c.insert("real", 5i32);
        assert!(c.set_kind("real", TagKind::Short));
        assert_eq!(c.kind("real"), Some(TagKind::Short));
    }

    #[test]
    fn test_remove_clears_kind() {
        let mut c = Compound::new();
        c.insert_with_kind("x", 1i32, TagKind::Byte);
        assert_eq!(c.remove("x"), Some(Value::Int(1)));
        assert_eq!(c.kind("x"), None);
        assert!(c.is_empty());
    }

    #[test]
    fn test_equality_ignores_kinds() {
        let mut a = Compound::new();
        a.insert("n", 3i32);
        let mut b = Compound::new();
        b.insert_with_kind("n", 3i32, TagKind::Byte);
        assert_eq!(a, b);

        b.insert("extra", 1i32);
        assert_ne!(a, b);
    }
}
