//! OPTIONAL combinator - turns a failure into `None`

use crate::foundation::{ParseResult, ParseState, Parser};

/// Succeeds with `Some` when the inner parser does, and with `None`
/// otherwise.
///
/// On failure the original state is returned unchanged. Only parse failures
/// are absorbed; a panic inside the inner parser propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<P> {
    inner: P,
}

impl<P> Optional<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
    P::Aux: Clone,
{
    type Output = Option<P::Output>;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<Option<P::Output>, P::Aux> {
        match self.inner.run(state.clone()) {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, state)),
        }
    }
}

pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn some_on_success() {
        assert_eq!(
            execute(&number().optional(), Params::new(3)),
            Ok(Some(3.0))
        );
    }

    #[test]
    fn none_on_failure() {
        assert_eq!(execute(&optional(number()), Params::new("x")), Ok(None));
    }

    #[test]
    fn failure_keeps_original_aux() {
        let noisy = combine(|scope: &mut Scope<u32>| {
            scope.bind(&update_aux(|n: u32| n + 1))?;
            scope.bind(&string())
        });
        let parser = noisy.optional();
        let (value, count) = execute_with_state(&parser, Params::new(1).with_aux(0u32)).unwrap();
        assert_eq!(value, None);
        assert_eq!(count, 0);
    }

    #[test]
    #[should_panic(expected = "defect in leaf")]
    fn panics_are_not_swallowed() {
        let broken = make_parser(|_state: ParseState| -> ParseResult<f64> { panic!("defect in leaf") });
        let _ = execute(&broken.optional(), Params::new(1));
    }
}
