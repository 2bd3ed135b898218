//! Alternation - retrying from the original state
//!
//! Every combinator here keeps the state it was given and hands that same
//! state to the fallback. Whatever the failed branch did to the path, the
//! visited set or the auxiliary state is discarded with it.
//!
//! # Examples
//!
//! ```rust
//! use sift_parser::prelude::*;
//!
//! let id = string().or(number().map(|n| n.to_string()));
//! assert_eq!(execute(&id, Params::new(7)), Ok("7".to_string()));
//! ```

use crate::foundation::error::reason;
use crate::foundation::{BoxedParser, ParseError, ParseResult, ParseState, Parser};

// ============================================================================
// OR
// ============================================================================

/// Tries `left`; on failure runs `right` from the original state.
///
/// If both fail, the error of `right` is returned.
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Parser for Or<L, R>
where
    L: Parser,
    L::Aux: Clone,
    R: Parser<Output = L::Output, Aux = L::Aux>,
{
    type Output = L::Output;
    type Aux = L::Aux;

    fn run(&self, state: ParseState<L::Aux>) -> ParseResult<L::Output, L::Aux> {
        match self.left.run(state.clone()) {
            Ok(success) => Ok(success),
            Err(_) => self.right.run(state),
        }
    }
}

// ============================================================================
// OR ELSE
// ============================================================================

/// Like [`Or`], but the fallback parser is built by a thunk, and only when
/// the first parser fails.
#[derive(Debug, Clone, Copy)]
pub struct OrElse<P, F> {
    inner: P,
    fallback: F,
}

impl<P, F> OrElse<P, F> {
    pub fn new(inner: P, fallback: F) -> Self {
        Self { inner, fallback }
    }
}

impl<P, F, Q> Parser for OrElse<P, F>
where
    P: Parser,
    P::Aux: Clone,
    Q: Parser<Output = P::Output, Aux = P::Aux>,
    F: Fn() -> Q,
{
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<P::Output, P::Aux> {
        match self.inner.run(state.clone()) {
            Ok(success) => Ok(success),
            Err(_) => (self.fallback)().run(state),
        }
    }
}

// ============================================================================
// RECOVER
// ============================================================================

/// On failure, builds a fallback from the error and runs it from the
/// original state.
#[derive(Debug, Clone, Copy)]
pub struct Recover<P, F> {
    inner: P,
    handler: F,
}

impl<P, F> Recover<P, F> {
    pub fn new(inner: P, handler: F) -> Self {
        Self { inner, handler }
    }
}

impl<P, F, Q> Parser for Recover<P, F>
where
    P: Parser,
    P::Aux: Clone,
    Q: Parser<Output = P::Output, Aux = P::Aux>,
    F: Fn(ParseError) -> Q,
{
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<P::Output, P::Aux> {
        match self.inner.run(state.clone()) {
            Ok(success) => Ok(success),
            Err(error) => (self.handler)(error).run(state),
        }
    }
}

// ============================================================================
// ONE OF
// ============================================================================

/// Tries each alternative in order until one succeeds.
///
/// Every alternative starts from the same original state. When all fail the
/// last error is returned; with no alternatives at all the parse fails with
/// `"no alternatives"`.
#[derive(Debug, Clone)]
pub struct OneOf<T, S> {
    alternatives: Vec<BoxedParser<T, S>>,
}

impl<T, S: Clone> Parser for OneOf<T, S> {
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        let mut last = None;
        for alternative in &self.alternatives {
            match alternative.run(state.clone()) {
                Ok(success) => return Ok(success),
                Err(error) => last = Some(error),
            }
        }
        Err(last.unwrap_or_else(|| state.error(reason::NO_ALTERNATIVES)))
    }
}

/// Creates a [`OneOf`] from boxed alternatives.
#[must_use]
pub fn one_of<T, S>(alternatives: Vec<BoxedParser<T, S>>) -> OneOf<T, S> {
    OneOf { alternatives }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn left_wins_when_it_succeeds() {
        let parser = literal("a").or(literal("b"));
        assert_eq!(execute(&parser, Params::new("a")), Ok(Literal::from("a")));
    }

    #[test]
    fn right_runs_when_left_fails() {
        let parser = literal("a").or(literal("b"));
        assert_eq!(execute(&parser, Params::new("b")), Ok(Literal::from("b")));
    }

    #[test]
    fn both_fail_reports_right() {
        let parser = string().or(number().map(|n| n.to_string()));
        let err = execute(&parser, Params::new(true)).unwrap_err();
        assert_eq!(err.reason, "number expected");
    }

    #[test]
    fn fallback_restarts_from_original_path() {
        // The left branch descends before failing; the right one must not
        // see that descent.
        let left = field("a", fail_with::<Path, ()>("nope"));
        let parser = left.or(current_path());
        let input = Value::object([("a", 1)]);
        assert_eq!(execute(&parser, Params::new(input)), Ok(Path::root()));
    }

    #[test]
    fn or_else_builds_fallback_lazily() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let built = AtomicUsize::new(0);
        let parser = number().or_else(|| {
            built.fetch_add(1, Ordering::SeqCst);
            succeed(0.0)
        });

        assert_eq!(execute(&parser, Params::new(5)), Ok(5.0));
        assert_eq!(built.load(Ordering::SeqCst), 0);
        assert_eq!(execute(&parser, Params::new("x")), Ok(0.0));
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn recover_sees_the_error() {
        let parser = field("a", number()).recover(|err| succeed(err.path.len() as f64 + 100.0));
        let input = Value::object([("a", "x")]);
        assert_eq!(execute(&parser, Params::new(input)), Ok(101.0));
    }

    #[test]
    fn recover_discards_failed_aux_updates() {
        let left = combine(|scope: &mut Scope<Vec<&'static str>>| {
            scope.bind(&update_aux(|mut log: Vec<&'static str>| {
                log.push("left");
                log
            }))?;
            scope.bind(&number())
        });
        let parser = left.recover(|_| succeed(0.0));
        let (value, log) = execute_with_state(&parser, Params::new("x").with_aux(Vec::new())).unwrap();
        assert_eq!(value, 0.0);
        assert!(log.is_empty());
    }

    #[test]
    fn one_of_takes_first_success() {
        let parser = one_of(vec![
            literal(1).boxed(),
            literal(2).boxed(),
            literal(3).boxed(),
        ]);
        assert_eq!(execute(&parser, Params::new(2)), Ok(Literal::from(2)));

        let err = execute(&parser, Params::new(4)).unwrap_err();
        assert_eq!(err.reason, r#"expected value "3""#);
    }

    #[test]
    fn one_of_empty_fails() {
        let parser = one_of::<(), ()>(Vec::new());
        let err = execute(&parser, Params::new(Value::Null)).unwrap_err();
        assert_eq!(err.reason, "no alternatives");
    }
}
