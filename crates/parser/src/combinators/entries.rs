//! ENTRIES combinator - maps a parser over every object member

use super::field::descend_into;
use crate::foundation::{ParseError, ParseResult, ParseState, Parser};
use indexmap::IndexMap;
use sift_value::{Key, Value};

/// Parses every member value of an object, keyed as in the input.
///
/// Members are visited in insertion order; each one is a separate descent
/// with its key pushed onto the path. The first failure aborts the parse.
#[derive(Debug, Clone, Copy)]
pub struct Entries<P> {
    inner: P,
}

impl<P> Parser for Entries<P>
where
    P: Parser,
    P::Aux: Clone,
{
    type Output = IndexMap<Key, P::Output>;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<IndexMap<Key, P::Output>, P::Aux> {
        let Value::Object(object) = state.focus() else {
            return Err(ParseError::object_expected(state.path().clone()));
        };
        let members = object.entries();

        let mut results = IndexMap::with_capacity(members.len());
        let mut current = state;
        for (key, member) in members {
            let (value, next) = descend_into(&self.inner, current, key.clone(), member)?;
            results.insert(key, value);
            current = next;
        }
        Ok((results, current))
    }
}

/// Creates an [`Entries`] parser.
///
/// # Examples
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let scores = entries(number());
/// let input = Value::object([("alice", 3), ("bob", 5)]);
/// let parsed = execute(&scores, Params::new(input)).unwrap();
/// assert_eq!(parsed[&Key::from("bob")], 5.0);
/// ```
pub fn entries<P: Parser>(parser: P) -> Entries<P> {
    Entries { inner: parser }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn keeps_insertion_order() {
        let input = Value::object([("z", 1), ("a", 2)]);
        let parsed = execute(&entries(number()), Params::new(input)).unwrap();
        let keys: Vec<String> = parsed.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn failure_names_the_member() {
        let input = Value::object([("ok", Value::from(1)), ("bad", Value::from("x"))]);
        let err = execute(&entries(number()), Params::new(input)).unwrap_err();
        assert_eq!(err.reason, "number expected");
        assert_eq!(err.path.to_pointer(), "/bad");
    }
}
