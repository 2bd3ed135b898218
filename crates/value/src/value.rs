use crate::node::{Array, NodeId, Object};
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

/// An untyped value: a scalar or a shared container.
///
/// Scalars compare by value. Containers compare by identity, so two distinct
/// arrays with the same elements are not equal; use the typed result of a
/// parse when structural comparison is wanted.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Builds an array node from anything yielding values.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds an object node from key/value pairs.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<crate::Key>,
        V: Into<Value>,
    {
        let object = Object::new();
        for (key, value) in entries {
            object.insert(key, value);
        }
        Self::Object(object)
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Identity of a container; `None` for scalars.
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Self::Array(array) => Some(array.id()),
            Self::Object(object) => Some(object.id()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a.ptr_eq(b),
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// ============================================================================
// DEBUG
// ============================================================================

// Containers already on the print stack render as `<cycle>`.
struct Tracked<'a> {
    value: &'a Value,
    stack: &'a RefCell<Vec<NodeId>>,
}

impl Tracked<'_> {
    fn enter(&self, id: NodeId) -> bool {
        if self.stack.borrow().contains(&id) {
            return false;
        }
        self.stack.borrow_mut().push(id);
        true
    }

    fn leave(&self) {
        self.stack.borrow_mut().pop();
    }
}

impl fmt::Debug for Tracked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({:?})", &**s),
            Value::Array(array) => {
                if !self.enter(array.id()) {
                    return f.write_str("<cycle>");
                }
                let items = array.to_vec();
                let result = f
                    .debug_list()
                    .entries(items.iter().map(|value| Tracked {
                        value,
                        stack: self.stack,
                    }))
                    .finish();
                self.leave();
                result
            }
            Value::Object(object) => {
                if !self.enter(object.id()) {
                    return f.write_str("<cycle>");
                }
                let entries = object.entries();
                let result = f
                    .debug_map()
                    .entries(entries.iter().map(|(key, value)| {
                        (
                            key,
                            Tracked {
                                value,
                                stack: self.stack,
                            },
                        )
                    }))
                    .finish();
                self.leave();
                result
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack = RefCell::new(Vec::new());
        fmt::Debug::fmt(
            &Tracked {
                value: self,
                stack: &stack,
            },
            f,
        )
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Self::Array(array)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Self::array(items)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
