//! Exact-value matching.

use crate::foundation::{ParseResult, ParseState, Parser};
use sift_value::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A scalar that the focus must equal.
///
/// Numbers compare with `==`, so a NaN literal never matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
}

impl Literal {
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Null, Value::Null) => true,
            (Self::Bool(expected), Value::Bool(actual)) => expected == actual,
            (Self::Number(expected), Value::Number(actual)) => expected == actual,
            (Self::String(expected), Value::String(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Null => Self::Null,
            Literal::Bool(b) => Self::Bool(b),
            Literal::Number(n) => Self::Number(n),
            Literal::String(s) => Self::String(s),
        }
    }
}

impl From<()> for Literal {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

/// Succeeds with its literal when the focus equals it.
///
/// Fails with `expected value "<literal>"`.
pub struct LiteralParser<S = ()> {
    expected: Literal,
    _aux: PhantomData<fn() -> S>,
}

impl<S> LiteralParser<S> {
    pub fn expected(&self) -> &Literal {
        &self.expected
    }
}

impl<S> Clone for LiteralParser<S> {
    fn clone(&self) -> Self {
        literal(self.expected.clone())
    }
}

impl<S> fmt::Debug for LiteralParser<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LiteralParser").field(&self.expected).finish()
    }
}

impl<S> Parser for LiteralParser<S> {
    type Output = Literal;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<Literal, S> {
        if self.expected.matches(state.focus()) {
            Ok((self.expected.clone(), state))
        } else {
            Err(state.error(format!("expected value \"{}\"", self.expected)))
        }
    }
}

/// Creates a [`LiteralParser`].
///
/// # Examples
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let kind = field("kind", literal("circle"));
/// let err = execute(&kind, Params::new(Value::object([("kind", "square")]))).unwrap_err();
/// assert_eq!(err.to_string(), r#"expected value "circle" at path "/kind""#);
/// ```
pub fn literal<S>(expected: impl Into<Literal>) -> LiteralParser<S> {
    LiteralParser {
        expected: expected.into(),
        _aux: PhantomData,
    }
}
