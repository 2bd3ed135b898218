//! Shared container nodes.
//!
//! Arrays and objects are reference-counted and interior-mutable so an input
//! graph can share subtrees or refer back to itself. Locks are only held for
//! the duration of a single accessor; readers get owned clones of child
//! values, which are themselves cheap handles.

use crate::key::Key;
use crate::value::Value;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Identity of a container node.
///
/// Derived from the allocation address, so it is only meaningful while the
/// node is alive. Two handles have equal ids exactly when they share storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    fn of<T>(node: &Arc<RwLock<T>>) -> Self {
        Self(Arc::as_ptr(node).cast::<u8>() as usize)
    }
}

// ============================================================================
// ARRAY
// ============================================================================

/// A shared, ordered sequence of values.
#[derive(Clone, Default)]
pub struct Array(Arc<RwLock<Vec<Value>>>);

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array node owning `items`.
    pub fn from_vec(items: Vec<Value>) -> Self {
        Self(Arc::new(RwLock::new(items)))
    }

    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId {
        NodeId::of(&self.0)
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Returns a handle to the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.read().get(index).cloned()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.write().push(value.into());
    }

    /// Replaces the element at `index`. Returns false if out of bounds.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> bool {
        match self.0.write().get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Snapshot of the current elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.read().clone()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Array(self.clone()), f)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// A shared map from [`Key`] to value, keeping insertion order.
#[derive(Clone, Default)]
pub struct Object(Arc<RwLock<IndexMap<Key, Value>>>);

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId {
        NodeId::of(&self.0)
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.write().insert(key.into(), value.into())
    }

    /// Returns a handle to the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.0.read().get(key).cloned()
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.read().contains_key(key)
    }

    /// Snapshot of the keys in insertion order.
    pub fn keys(&self) -> Vec<Key> {
        self.0.read().keys().cloned().collect()
    }

    /// Snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.0
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Object(self.clone()), f)
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Self(Arc::new(RwLock::new(map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let array = Array::from_vec(vec![Value::from(1)]);
        let alias = array.clone();
        alias.push(2);

        assert!(array.ptr_eq(&alias));
        assert_eq!(array.id(), alias.id());
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn equal_contents_have_distinct_ids() {
        let a = Object::new();
        let b = Object::new();
        a.insert("x", 1);
        b.insert("x", 1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn object_keeps_insertion_order() {
        let object = Object::new();
        object.insert("b", 1);
        object.insert("a", 2);
        object.insert("b", 3);

        let keys: Vec<String> = object.keys().iter().map(ToString::to_string).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(object.get(&"b".into()), Some(Value::from(3)));
    }

    #[test]
    fn array_set_out_of_bounds() {
        let array = Array::new();
        assert!(!array.set(0, true));
        array.push(false);
        assert!(array.set(0, true));
        assert_eq!(array.get(0), Some(Value::Bool(true)));
    }
}
