use crate::{codec::tags::TagKind, tree::Value};

/// Ordered sequence of values sharing one element tag.
///
/// The wire format stores the element tag once, in front of the items.
/// A freshly built list may leave it unset, in which case the writer
/// infers it from the first item (an empty one falls back to INT) and
/// records the choice here. Equality compares items only.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<Value>,
    elem_kind: Option<TagKind>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// List whose element tag is pinned up front.
    pub fn with_kind(kind: TagKind) -> Self {
        Self {
            items: Vec::new(),
            elem_kind: Some(kind),
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Element tag, if one was read or already inferred.
    pub fn elem_kind(&self) -> Option<TagKind> {
        self.elem_kind
    }

    pub fn set_elem_kind(&mut self, kind: TagKind) {
        self.elem_kind = Some(kind);
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self {
            items,
            elem_kind: None,
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            elem_kind: None,
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
