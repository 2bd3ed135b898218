//! The parser abstraction.
//!
//! A parser takes a [`ParseState`] by value and either produces a result
//! together with the next state, or fails with a [`ParseError`]. Parsers are
//! immutable values: running one never changes it, so a single parser may be
//! run any number of times, from any number of threads.

use super::error::ParseError;
use super::state::ParseState;
use crate::combinators::{AndThen, Ensure, Map, Optional, Or, OrElse, Recover, WithReason};
use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::Arc;

/// Outcome of running a parser: the value and the state to continue from.
pub type ParseResult<T, S = ()> = Result<(T, ParseState<S>), ParseError>;

// ============================================================================
// CORE PARSER TRAIT
// ============================================================================

/// The core trait every parser implements.
///
/// # Associated Types
///
/// * `Output` - the typed value produced on success
/// * `Aux` - the auxiliary state type threaded through the parse
///
/// Expected validation failures are reported through the `Err` channel.
/// Panics raised by user code are defects and pass through every combinator
/// untouched.
///
/// # Examples
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let parser = field("age", number()).map(|age| age >= 18.0);
/// let adult = execute(&parser, Params::new(Value::object([("age", 30)])));
/// assert_eq!(adult, Ok(true));
/// ```
pub trait Parser {
    /// Value produced on success.
    type Output;

    /// Auxiliary state type.
    type Aux;

    /// Runs the parser against `state`.
    fn run(&self, state: ParseState<Self::Aux>) -> ParseResult<Self::Output, Self::Aux>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<Self::Aux>) -> ParseResult<Self::Output, Self::Aux> {
        (**self).run(state)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<Self::Aux>) -> ParseResult<Self::Output, Self::Aux> {
        (**self).run(state)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<Self::Aux>) -> ParseResult<Self::Output, Self::Aux> {
        (**self).run(state)
    }
}

// ============================================================================
// PARSER EXTENSION TRAIT
// ============================================================================

/// Chaining operations, available on every [`Parser`].
pub trait ParserExt: Parser + Sized {
    /// Transforms the value on success; the state is passed through as is.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Runs the parser returned by `f` against the state this one left.
    ///
    /// `f` is not called if this parser fails.
    fn and_then<Q, F>(self, f: F) -> AndThen<Self, F>
    where
        Q: Parser<Aux = Self::Aux>,
        F: Fn(Self::Output) -> Q,
    {
        AndThen::new(self, f)
    }

    /// On failure, runs the parser returned by `f` against the state this
    /// parser started from.
    fn recover<Q, F>(self, f: F) -> Recover<Self, F>
    where
        Q: Parser<Output = Self::Output, Aux = Self::Aux>,
        F: Fn(ParseError) -> Q,
    {
        Recover::new(self, f)
    }

    /// On failure, runs `other` against the state this parser started from.
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Q: Parser<Output = Self::Output, Aux = Self::Aux>,
    {
        Or::new(self, other)
    }

    /// Like [`or`](Self::or), but the fallback is only built when needed.
    fn or_else<Q, F>(self, fallback: F) -> OrElse<Self, F>
    where
        Q: Parser<Output = Self::Output, Aux = Self::Aux>,
        F: Fn() -> Q,
    {
        OrElse::new(self, fallback)
    }

    /// Succeeds with `None` instead of failing, leaving the state untouched.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Replaces the reason of any failure, keeping its path.
    fn with_reason(self, reason: impl Into<Cow<'static, str>>) -> WithReason<Self> {
        WithReason::new(self, reason)
    }

    /// Fails with `reason` when `predicate` rejects the value.
    ///
    /// The failure is reported at the path where this parser started.
    fn ensure<F>(self, predicate: F, reason: impl Into<Cow<'static, str>>) -> Ensure<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Ensure::new(self, predicate, reason)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxedParser<Self::Output, Self::Aux>
    where
        Self: Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }
}

impl<P: Parser> ParserExt for P {}

// ============================================================================
// BOXED PARSER
// ============================================================================

/// A type-erased, shareable parser.
pub struct BoxedParser<T, S = ()> {
    parser: Arc<dyn Parser<Output = T, Aux = S> + Send + Sync>,
}

impl<T, S> BoxedParser<T, S> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Output = T, Aux = S> + Send + Sync + 'static,
    {
        Self {
            parser: Arc::new(parser),
        }
    }
}

impl<T, S> Clone for BoxedParser<T, S> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T, S> Parser for BoxedParser<T, S> {
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        self.parser.run(state)
    }
}

impl<T, S> std::fmt::Debug for BoxedParser<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BoxedParser")
    }
}

// ============================================================================
// FUNCTION PARSER
// ============================================================================

/// A parser backed by a raw state-transition function.
pub struct FnParser<F, T, S> {
    run: F,
    _marker: PhantomData<fn() -> (T, S)>,
}

impl<F: Clone, T, S> Clone for FnParser<F, T, S> {
    fn clone(&self) -> Self {
        Self {
            run: self.run.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T, S> Parser for FnParser<F, T, S>
where
    F: Fn(ParseState<S>) -> ParseResult<T, S>,
{
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        (self.run)(state)
    }
}

/// Lifts a state-transition function into a [`Parser`].
///
/// # Examples
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let even = make_parser(|state: ParseState| match state.focus().as_f64() {
///     Some(n) if n % 2.0 == 0.0 => Ok((n, state)),
///     _ => Err(state.error("even number expected")),
/// });
/// assert_eq!(execute(&even, Params::new(4)), Ok(4.0));
/// ```
pub fn make_parser<F, T, S>(run: F) -> FnParser<F, T, S>
where
    F: Fn(ParseState<S>) -> ParseResult<T, S>,
{
    FnParser {
        run,
        _marker: PhantomData,
    }
}
