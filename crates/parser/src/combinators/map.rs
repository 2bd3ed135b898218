//! MAP combinator - transforms a successful result

use crate::foundation::{ParseResult, ParseState, Parser};

/// Transforms the value of a successful parse.
///
/// The resulting state is exactly the one the inner parser produced: path,
/// visited set and auxiliary state are untouched.
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    inner: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(inner: P, f: F) -> Self {
        Self { inner, f }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<U, P::Aux> {
        let (value, next) = self.inner.run(state)?;
        Ok(((self.f)(value), next))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn maps_the_value() {
        let parser = string().map(|s| s.len());
        assert_eq!(execute(&parser, Params::new("hello")), Ok(5));
    }

    #[test]
    fn failure_skips_the_function() {
        let parser = number().map(|_| -> f64 { panic!("must not run") });
        let err = execute(&parser, Params::new("x")).unwrap_err();
        assert_eq!(err.reason, "number expected");
    }

    #[test]
    fn state_is_passed_through() {
        let parser = current_path().map(|path| path.len());
        let nested = field("a", parser);
        assert_eq!(
            execute(&nested, Params::new(Value::object([("a", 1)]))),
            Ok(1)
        );
    }
}
