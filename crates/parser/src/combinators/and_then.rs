//! AND_THEN combinator - dependent sequencing

use crate::foundation::{ParseResult, ParseState, Parser};

/// Runs a parser chosen from the previous result.
///
/// The second parser starts from the state the first one left. If the
/// first parser fails its error is returned unchanged and the continuation
/// is never called.
#[derive(Debug, Clone, Copy)]
pub struct AndThen<P, F> {
    inner: P,
    f: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(inner: P, f: F) -> Self {
        Self { inner, f }
    }
}

impl<P, F, Q> Parser for AndThen<P, F>
where
    P: Parser,
    Q: Parser<Aux = P::Aux>,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<Q::Output, P::Aux> {
        let (value, next) = self.inner.run(state)?;
        (self.f)(value).run(next)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn shape() -> impl Parser<Output = f64, Aux = ()> {
        field("kind", string()).and_then(|kind| match kind.as_str() {
            "circle" => field("radius", number())
                .map(|r| std::f64::consts::PI * r * r)
                .boxed(),
            "square" => field("side", number()).map(|s| s * s).boxed(),
            other => fail_with(format!("unknown shape '{other}'")).boxed(),
        })
    }

    #[test]
    fn continuation_sees_previous_value() {
        let square = Value::object([("kind", Value::from("square")), ("side", Value::from(3))]);
        assert_eq!(execute(&shape(), Params::new(square)), Ok(9.0));
    }

    #[test]
    fn continuation_failure_reports_its_own_path() {
        let input = Value::object([("kind", Value::from("circle")), ("radius", Value::from("big"))]);
        let err = execute(&shape(), Params::new(input)).unwrap_err();
        assert_eq!(err.reason, "number expected");
        assert_eq!(err.path.to_pointer(), "/radius");
    }

    #[test]
    fn user_failure_at_current_path() {
        let input = Value::object([("kind", "hexagon")]);
        let err = execute(&shape(), Params::new(input)).unwrap_err();
        assert_eq!(err.reason, "unknown shape 'hexagon'");
        assert!(err.path.is_empty());
    }

    #[test]
    fn first_failure_short_circuits() {
        let parser = number().and_then(|_| -> Succeed<f64, ()> { panic!("must not run") });
        let err = execute(&parser, Params::new(true)).unwrap_err();
        assert_eq!(err.reason, "number expected");
    }
}
