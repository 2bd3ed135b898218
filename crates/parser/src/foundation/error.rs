//! The parse failure value.
//!
//! A [`ParseError`] carries only a reason and the path at which the parse
//! failed. It never holds on to the input, so it is cheap to keep around and
//! trivially serializable.
//!
//! Reasons are `Cow<'static, str>`: the fixed reasons of the built-in
//! combinators allocate nothing.

use super::path::Path;
use serde::Serialize;
use sift_value::Key;
use std::borrow::Cow;

/// Reason strings produced by the built-in combinators and validators.
pub mod reason {
    pub const STRING_EXPECTED: &str = "string expected";
    pub const NUMBER_EXPECTED: &str = "number expected";
    pub const INTEGER_EXPECTED: &str = "integer expected";
    pub const BOOLEAN_EXPECTED: &str = "boolean expected";
    pub const NULL_EXPECTED: &str = "null expected";
    pub const OBJECT_EXPECTED: &str = "object expected";
    pub const ARRAY_EXPECTED: &str = "array expected";
    pub const CIRCULAR_REFERENCE: &str = "circular reference detected";
    pub const MAX_DEPTH_EXCEEDED: &str = "maximum depth exceeded";
    pub const NO_ALTERNATIVES: &str = "no alternatives";
}

/// A failed parse: why, and where.
///
/// The `Display` form is the message used when an execution fails without
/// an error handler:
///
/// ```rust
/// use sift_parser::foundation::{ParseError, Path};
///
/// let error = ParseError::new("number expected", Path::root().child("users").child(1usize));
/// assert_eq!(error.to_string(), r#"number expected at path "/users/1""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{reason} at path \"{}\"", .path.to_pointer())]
pub struct ParseError {
    /// Human-readable reason.
    pub reason: Cow<'static, str>,
    /// Path of the focus at the point of failure.
    pub path: Path,
}

impl ParseError {
    pub fn new(reason: impl Into<Cow<'static, str>>, path: Path) -> Self {
        Self {
            reason: reason.into(),
            path,
        }
    }

    pub fn object_expected(path: Path) -> Self {
        Self::new(reason::OBJECT_EXPECTED, path)
    }

    pub fn array_expected(path: Path) -> Self {
        Self::new(reason::ARRAY_EXPECTED, path)
    }

    /// A named member is missing. `path` is the path of the object, not of
    /// the member that was never reached.
    pub fn property_expected(key: &Key, path: Path) -> Self {
        Self::new(format!("property '{key}' expected"), path)
    }

    pub fn element_expected(index: usize, path: Path) -> Self {
        Self::new(format!("element {index} expected"), path)
    }

    pub fn circular_reference(path: Path) -> Self {
        Self::new(reason::CIRCULAR_REFERENCE, path)
    }

    pub fn max_depth_exceeded(path: Path) -> Self {
        Self::new(reason::MAX_DEPTH_EXCEEDED, path)
    }

    /// Replaces the reason, keeping the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reason(mut self, reason: impl Into<Cow<'static, str>>) -> Self {
        self.reason = reason.into();
        self
    }

    /// `{"reason": .., "path": [..]}`.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "reason": self.reason,
            "path": self.path,
        })
    }
}
