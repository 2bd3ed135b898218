//! Type-checking leaves over [`Value`] variants.

use crate::foundation::error::reason;
use crate::foundation::{ParseResult, ParseState, Parser};
use sift_value::{Array, Object, Value};
use std::marker::PhantomData;

/// A parser that extracts a `T` from the focus or fails with `reason`.
pub struct Leaf<T, S = ()> {
    extract: fn(&Value) -> Option<T>,
    reason: &'static str,
    _aux: PhantomData<fn() -> S>,
}

impl<T, S> Leaf<T, S> {
    /// A leaf from an extraction function and its failure reason.
    pub fn new(extract: fn(&Value) -> Option<T>, reason: &'static str) -> Self {
        Self {
            extract,
            reason,
            _aux: PhantomData,
        }
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl<T, S> Clone for Leaf<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for Leaf<T, S> {}

impl<T, S> std::fmt::Debug for Leaf<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Leaf").field("reason", &self.reason).finish()
    }
}

impl<T, S> Parser for Leaf<T, S> {
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        match (self.extract)(state.focus()) {
            Some(value) => Ok((value, state)),
            None => Err(state.error(self.reason)),
        }
    }
}

/// Any string.
pub fn string<S>() -> Leaf<String, S> {
    Leaf::new(|value| value.as_str().map(str::to_owned), reason::STRING_EXPECTED)
}

/// Any number, including NaN and the infinities.
pub fn number<S>() -> Leaf<f64, S> {
    Leaf::new(Value::as_f64, reason::NUMBER_EXPECTED)
}

/// A finite number without a fractional part that fits in an `i64`.
pub fn integer<S>() -> Leaf<i64, S> {
    Leaf::new(as_integer, reason::INTEGER_EXPECTED)
}

pub fn boolean<S>() -> Leaf<bool, S> {
    Leaf::new(Value::as_bool, reason::BOOLEAN_EXPECTED)
}

pub fn null<S>() -> Leaf<(), S> {
    Leaf::new(|value| value.is_null().then_some(()), reason::NULL_EXPECTED)
}

/// The focus as an object handle, without descending into it.
pub fn object<S>() -> Leaf<Object, S> {
    Leaf::new(|value| value.as_object().cloned(), reason::OBJECT_EXPECTED)
}

/// The focus as an array handle, without descending into it.
pub fn array<S>() -> Leaf<Array, S> {
    Leaf::new(|value| value.as_array().cloned(), reason::ARRAY_EXPECTED)
}

fn as_integer(value: &Value) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    let n = value.as_f64()?;
    (n.is_finite() && n.fract() == 0.0 && (-LIMIT..LIMIT).contains(&n)).then(|| n as i64)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from("x"), true)]
    #[case(Value::from(1), false)]
    #[case(Value::Null, false)]
    fn string_accepts_only_strings(#[case] input: Value, #[case] ok: bool) {
        assert_eq!(execute(&string(), Params::new(input)).is_ok(), ok);
    }

    #[rstest]
    #[case(3.0, Some(3))]
    #[case(-7.0, Some(-7))]
    #[case(1.5, None)]
    #[case(f64::NAN, None)]
    #[case(f64::INFINITY, None)]
    #[case(1e300, None)]
    fn integer_bounds(#[case] input: f64, #[case] expected: Option<i64>) {
        assert_eq!(execute(&integer(), Params::new(input)).ok(), expected);
    }

    #[test]
    fn reasons() {
        let cases: [(&str, Result<(), ParseError>); 7] = [
            ("string expected", execute(&string().map(drop), Params::new(1))),
            ("number expected", execute(&number().map(drop), Params::new("1"))),
            ("integer expected", execute(&integer().map(drop), Params::new(0.5))),
            ("boolean expected", execute(&boolean().map(drop), Params::new(0))),
            ("null expected", execute(&null(), Params::new(false))),
            ("object expected", execute(&object().map(drop), Params::new(Value::array([1])))),
            ("array expected", execute(&array().map(drop), Params::new(Value::object([("a", 1)])))),
        ];
        for (reason, result) in cases {
            assert_eq!(result.unwrap_err().reason, reason);
        }
    }

    #[test]
    fn container_leaves_return_the_same_node() {
        let input = Value::array([1, 2]);
        let array = execute(&array(), Params::new(input.clone())).unwrap();
        assert_eq!(Value::Array(array), input);
    }
}
