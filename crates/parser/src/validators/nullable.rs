//! NULLABLE - `null` or an inner parser

use crate::foundation::{ParseResult, ParseState, Parser};

/// `None` when the focus is `null`, otherwise the inner parser's value.
///
/// Unlike [`optional`](crate::combinators::optional), a non-null value that
/// the inner parser rejects is still an error.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<P> {
    inner: P,
}

impl<P: Parser> Parser for Nullable<P> {
    type Output = Option<P::Output>;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<Option<P::Output>, P::Aux> {
        if state.focus().is_null() {
            return Ok((None, state));
        }
        let (value, next) = self.inner.run(state)?;
        Ok((Some(value), next))
    }
}

pub fn nullable<P: Parser>(parser: P) -> Nullable<P> {
    Nullable { inner: parser }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn null_is_none() {
        assert_eq!(execute(&nullable(number()), Params::new(Value::Null)), Ok(None));
    }

    #[test]
    fn present_value_is_parsed() {
        assert_eq!(execute(&nullable(number()), Params::new(2)), Ok(Some(2.0)));
    }

    #[test]
    fn wrong_shape_still_fails() {
        let err = execute(&nullable(number()), Params::new("2")).unwrap_err();
        assert_eq!(err.reason, "number expected");
    }
}
