//! LAZY and DEFERRED - late-bound parsers for recursive grammars
//!
//! A grammar that refers to itself cannot be built eagerly. Two ways out:
//!
//! - [`lazy`] wraps a constructor that runs on first use, so a function may
//!   mention itself inside its own parser:
//!
//! ```rust
//! use sift_parser::prelude::*;
//!
//! fn depth() -> BoxedParser<usize> {
//!     optional_field("child", lazy(depth))
//!         .map(|child| child.map_or(0, |d| d + 1))
//!         .boxed()
//! }
//!
//! let input = Value::object([("child", Value::object([("child", Value::object(Vec::<(&str, Value)>::new()))]))]);
//! assert_eq!(execute(&depth(), Params::new(input)), Ok(2));
//! ```
//!
//! - [`Deferred`] is a forward-declared slot filled in after the parser that
//!   uses it has been built; [`recursive`] wraps that pattern.

use crate::foundation::{BoxedParser, ParseResult, ParseState, Parser, ParserExt};
use std::sync::{Arc, OnceLock};

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Defers parser construction until first use.
///
/// The constructor runs at most once per `Lazy` value; later runs reuse the
/// parser it built.
pub struct Lazy<P, F>
where
    F: Fn() -> P,
{
    init: F,
    parser: OnceLock<P>,
}

impl<P, F> Lazy<P, F>
where
    F: Fn() -> P,
{
    pub fn new(init: F) -> Self {
        Self {
            init,
            parser: OnceLock::new(),
        }
    }

    /// Returns true once the parser has been built.
    pub fn is_initialized(&self) -> bool {
        self.parser.get().is_some()
    }

    /// Builds the parser if needed and returns it.
    pub fn force(&self) -> &P {
        self.parser.get_or_init(&self.init)
    }
}

impl<P, F> Parser for Lazy<P, F>
where
    P: Parser,
    F: Fn() -> P,
{
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<P::Output, P::Aux> {
        self.force().run(state)
    }
}

impl<P, F> std::fmt::Debug for Lazy<P, F>
where
    F: Fn() -> P,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

pub fn lazy<P, F>(init: F) -> Lazy<P, F>
where
    F: Fn() -> P,
{
    Lazy::new(init)
}

// ============================================================================
// DEFERRED PARSER
// ============================================================================

/// A parser whose definition is supplied after construction.
///
/// Clones share one slot. Running a `Deferred` before [`define`] is a
/// programming error and panics.
///
/// A definition that contains a clone of its own slot forms a reference
/// cycle and is never freed; build such parsers once and keep them.
///
/// [`define`]: Deferred::define
pub struct Deferred<T, S = ()> {
    slot: Arc<OnceLock<BoxedParser<T, S>>>,
}

impl<T, S> Deferred<T, S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Fills the slot. A slot can be filled only once; a second definition
    /// is handed back unchanged.
    pub fn define<P>(&self, parser: P) -> Result<(), BoxedParser<T, S>>
    where
        P: Parser<Output = T, Aux = S> + Send + Sync + 'static,
    {
        self.slot.set(parser.boxed())
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T, S> Default for Deferred<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Clone for Deferred<T, S> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T, S> std::fmt::Debug for Deferred<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("defined", &self.is_defined())
            .finish()
    }
}

impl<T, S> Parser for Deferred<T, S> {
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        let Some(parser) = self.slot.get() else {
            panic!("deferred parser run before it was defined");
        };
        parser.run(state)
    }
}

/// Builds a self-referential parser.
///
/// `build` receives a handle to the parser being defined and returns its
/// body.
///
/// # Examples
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// // A tree of numbers: {"value": n, "children": [...]}
/// let sum = recursive(|node: Deferred<f64>| {
///     combine(move |scope| {
///         let value = scope.bind(&field("value", number()))?;
///         let children = scope.bind(&field("children", list(node.clone())))?;
///         Ok(value + children.iter().sum::<f64>())
///     })
/// });
///
/// let leaf = |n: i32| Value::object([("value", Value::from(n)), ("children", Value::array(Vec::<Value>::new()))]);
/// let tree = Value::object([("value", Value::from(1)), ("children", Value::array([leaf(2), leaf(3)]))]);
/// assert_eq!(execute(&sum, Params::new(tree)), Ok(6.0));
/// ```
pub fn recursive<T, S, P, F>(build: F) -> Deferred<T, S>
where
    F: FnOnce(Deferred<T, S>) -> P,
    P: Parser<Output = T, Aux = S> + Send + Sync + 'static,
{
    let handle = Deferred::new();
    let body = build(handle.clone());
    handle.slot.get_or_init(|| body.boxed());
    handle
}
