//! ENSURE combinator - refines a successful value

use crate::foundation::{ParseError, ParseResult, ParseState, Parser};
use std::borrow::Cow;

/// Fails with a fixed reason when the predicate rejects the parsed value.
///
/// The failure is reported at the path where the refined parser started,
/// i.e. at the value that was rejected.
#[derive(Debug, Clone)]
pub struct Ensure<P, F> {
    inner: P,
    predicate: F,
    reason: Cow<'static, str>,
}

impl<P, F> Ensure<P, F> {
    pub fn new(inner: P, predicate: F, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            predicate,
            reason: reason.into(),
        }
    }
}

impl<P, F> Parser for Ensure<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<P::Output, P::Aux> {
        let start = state.path().clone();
        let (value, next) = self.inner.run(state)?;
        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(ParseError::new(self.reason.clone(), start))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn username() -> impl Parser<Output = String, Aux = ()> {
        string().ensure(|s| (3..=20).contains(&s.len()), "username must be 3-20 characters")
    }

    #[test]
    fn accepts_matching_values() {
        assert_eq!(
            execute(&username(), Params::new("alice")),
            Ok("alice".to_string())
        );
    }

    #[test]
    fn rejects_at_value_path() {
        let parser = field("users", list(username()));
        let input = Value::object([("users", Value::array(["alice", "al"]))]);
        let err = execute(&parser, Params::new(input)).unwrap_err();
        assert_eq!(err.reason, "username must be 3-20 characters");
        assert_eq!(err.path.to_pointer(), "/users/1");
    }

    #[test]
    fn inner_failure_passes_through() {
        let err = execute(&username(), Params::new(5)).unwrap_err();
        assert_eq!(err.reason, "string expected");
    }
}
