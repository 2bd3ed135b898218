//! Paths from the root input to the current focus.
//!
//! A [`Path`] is a shared handle to a persistent vector: extending it shares
//! structure with the parent, so every descent can produce a new path without
//! copying, and the handle itself is one pointer wide. States and errors are
//! moved by value at every descent, so their size is stack use.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use sift_value::{Key, Symbol};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One step of a descent: an object key, an array index or a symbol.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named object member.
    Key(Arc<str>),
    /// Array element.
    Index(usize),
    /// Symbol-keyed object member.
    Symbol(Symbol),
}

impl PathSegment {
    /// Escapes the segment for a JSON-Pointer-like rendering.
    ///
    /// `~` becomes `~0` before `/` becomes `~1`.
    pub fn escaped(&self) -> String {
        self.to_string().replace('~', "~0").replace('/', "~1")
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
            Self::Symbol(symbol) => fmt::Display::fmt(symbol, f),
        }
    }
}

impl fmt::Debug for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{:?}", &**key),
            Self::Index(index) => write!(f, "{index}"),
            Self::Symbol(symbol) => fmt::Debug::fmt(symbol, f),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Key(key) => serializer.serialize_str(key),
            Self::Index(index) => serializer.serialize_u64(*index as u64),
            Self::Symbol(symbol) => serializer.collect_str(symbol),
        }
    }
}

impl From<Key> for PathSegment {
    fn from(key: Key) -> Self {
        match key {
            Key::Name(name) => Self::Key(name),
            Key::Symbol(symbol) => Self::Symbol(symbol),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.into())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key.into())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<Symbol> for PathSegment {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

// ============================================================================
// PATH
// ============================================================================

/// Ordered segments describing how the focus was reached from the root.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Arc<im::Vector<PathSegment>>);

impl Path {
    /// The empty path of the root input.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathSegment> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    /// Returns a new path extended by `segment`; `self` is unchanged.
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = (*self.0).clone();
        segments.push_back(segment.into());
        Self(Arc::new(segments))
    }

    /// Copies the segments out.
    pub fn segments(&self) -> Vec<PathSegment> {
        self.0.iter().cloned().collect()
    }

    /// Renders the path as `/a/1/b`, escaping each segment.
    ///
    /// The root path renders as the empty string.
    pub fn to_pointer(&self) -> String {
        self.0.iter().fold(String::new(), |mut out, segment| {
            out.push('/');
            out.push_str(&segment.escaped());
            out
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pointer())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for segment in self.0.iter() {
            seq.serialize_element(segment)?;
        }
        seq.end()
    }
}

impl<T: Into<PathSegment>> FromIterator<T> for Path {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().map(Into::into).collect()))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = im::vector::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
