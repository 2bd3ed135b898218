//! COMBINE - straight-line sequencing over a threaded state
//!
//! A combine block is a closure that receives a [`Scope`]. Each
//! [`Scope::bind`] runs a parser against the state threaded so far and
//! advances it on success. A failed bind returns the error, and `?` carries
//! it out of the block, so nothing after the failing step runs.
//!
//! ```rust
//! use sift_parser::prelude::*;
//!
//! let range = combine(|scope| {
//!     let start = scope.bind(&field("start", number()))?;
//!     let end = scope.bind(&field("end", number()))?;
//!     if end < start {
//!         return scope.fail("end before start");
//!     }
//!     Ok(start..end)
//! });
//!
//! let input = Value::object([("start", 1), ("end", 4)]);
//! assert_eq!(execute(&range, Params::new(input)), Ok(1.0..4.0));
//! ```
//!
//! Each run of a combine parser gets its own scope, so the same parser can
//! be run repeatedly or concurrently.

use crate::foundation::{ParseError, ParseResult, ParseState, Parser, Path};
use std::borrow::Cow;
use std::marker::PhantomData;

// ============================================================================
// SCOPE
// ============================================================================

/// The state holder of one combine block run.
pub struct Scope<S = ()> {
    state: ParseState<S>,
}

impl<S: Clone> Scope<S> {
    /// Runs `parser` against the current state.
    ///
    /// On success the scope moves on to the state the parser left and the
    /// value is returned. On failure the scope is left where it was, so a
    /// block may inspect the error and keep going from the same point.
    pub fn bind<P>(&mut self, parser: &P) -> Result<P::Output, ParseError>
    where
        P: Parser<Aux = S>,
    {
        let (value, next) = parser.run(self.state.clone())?;
        self.state = next;
        Ok(value)
    }
}

impl<S> Scope<S> {
    /// The auxiliary state as threaded so far.
    pub fn aux(&self) -> &S {
        self.state.aux()
    }

    /// Path of the block's focus.
    pub fn path(&self) -> &Path {
        self.state.path()
    }

    /// Fails the block with `reason` at the current path.
    pub fn fail<T>(&self, reason: impl Into<Cow<'static, str>>) -> Result<T, ParseError> {
        Err(self.state.error(reason))
    }
}

// ============================================================================
// COMBINE PARSER
// ============================================================================

/// Parser built from a combine block.
pub struct Combine<F, T, S> {
    block: F,
    _marker: PhantomData<fn() -> (T, S)>,
}

impl<F: Clone, T, S> Clone for Combine<F, T, S> {
    fn clone(&self) -> Self {
        Self {
            block: self.block.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T, S> std::fmt::Debug for Combine<F, T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combine").field("block", &"<function>").finish()
    }
}

impl<F, T, S> Parser for Combine<F, T, S>
where
    F: Fn(&mut Scope<S>) -> Result<T, ParseError>,
    S: Clone,
{
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        let mut scope = Scope { state };
        let value = (self.block)(&mut scope)?;
        Ok((value, scope.state))
    }
}

/// Creates a [`Combine`] parser from a block.
pub fn combine<F, T, S>(block: F) -> Combine<F, T, S>
where
    F: Fn(&mut Scope<S>) -> Result<T, ParseError>,
{
    Combine {
        block,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    struct User {
        name: String,
        age: f64,
    }

    fn user() -> impl Parser<Output = User, Aux = ()> + Clone {
        combine(|scope| {
            Ok(User {
                name: scope.bind(&field("name", string()))?,
                age: scope.bind(&field("age", number()))?,
            })
        })
    }

    #[test]
    fn assembles_a_record() {
        let input = Value::object([("name", Value::from("Ada")), ("age", Value::from(36))]);
        assert_eq!(
            execute(&user(), Params::new(input)),
            Ok(User {
                name: "Ada".into(),
                age: 36.0
            })
        );
    }

    #[test]
    fn later_binds_do_not_run_after_failure() {
        use std::sync::atomic::{AtomicBool, Ordering};
        let reached = AtomicBool::new(false);
        let parser = combine(|scope| {
            scope.bind(&field("a", number()))?;
            reached.store(true, Ordering::SeqCst);
            Ok(())
        });
        let err = execute(&parser, Params::new(Value::object([("b", 1)]))).unwrap_err();
        assert_eq!(err.reason, "property 'a' expected");
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[test]
    fn block_may_branch_on_earlier_results() {
        let parser = combine(|scope| {
            let version = scope.bind(&field("version", integer()))?;
            match version {
                1 => scope.bind(&field("name", string())),
                2 => scope.bind(&field("title", string())),
                _ => scope.fail(format!("unsupported version {version}")),
            }
        });

        let v2 = Value::object([("version", Value::from(2)), ("title", Value::from("t"))]);
        assert_eq!(execute(&parser, Params::new(v2)), Ok("t".to_string()));

        let v9 = Value::object([("version", 9)]);
        let err = execute(&parser, Params::new(v9)).unwrap_err();
        assert_eq!(err.reason, "unsupported version 9");
    }

    #[test]
    fn failed_bind_leaves_scope_in_place() {
        let parser = combine(|scope| {
            let first = scope.bind(&field("a", string()));
            let second = scope.bind(&field("b", number()))?;
            Ok((first.is_err(), second))
        });
        let input = Value::object([("a", Value::from(1)), ("b", Value::from(2))]);
        assert_eq!(execute(&parser, Params::new(input)), Ok((true, 2.0)));
    }

    #[test]
    fn reusable_across_runs() {
        let parser = user();
        for age in [1, 2, 3] {
            let input = Value::object([("name", Value::from("x")), ("age", Value::from(age))]);
            assert_eq!(execute(&parser, Params::new(input)).unwrap().age, f64::from(age));
        }
    }

    #[test]
    fn aux_primitives_thread_through_the_block() {
        let parser = combine(|scope: &mut Scope<Vec<String>>| {
            scope.bind(&update_aux(|mut log: Vec<String>| {
                log.push("start".into());
                log
            }))?;
            let seen = scope.bind(&get_aux())?;
            Ok(seen.len())
        });
        let (len, log) =
            execute_with_state(&parser, Params::new(Value::Null).with_aux(Vec::new())).unwrap();
        assert_eq!(len, 1);
        assert_eq!(log, vec!["start".to_string()]);
    }
}
