//! LIST combinator - maps a parser over every array element
//!
//! Elements are parsed in index order, each from its own descent off the
//! array's state, so one element's visited set never leaks into the next.
//! The auxiliary state, on the other hand, is threaded from one element to
//! the next.

use super::field::descend_into;
use crate::foundation::{ParseError, ParseResult, ParseState, Parser};
use sift_value::Value;

// ============================================================================
// LIST COMBINATOR
// ============================================================================

/// Parses every element of an array.
///
/// Fails with `"array expected"` when the focus is not an array. The first
/// failing element aborts the whole list with its own error, whose path ends
/// in the element's index.
#[derive(Debug, Clone, Copy)]
pub struct List<P> {
    inner: P,
}

impl<P> List<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P> Parser for List<P>
where
    P: Parser,
    P::Aux: Clone,
{
    type Output = Vec<P::Output>;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<Vec<P::Output>, P::Aux> {
        let Value::Array(array) = state.focus() else {
            return Err(ParseError::array_expected(state.path().clone()));
        };
        let items = array.to_vec();

        let mut results = Vec::with_capacity(items.len());
        let mut current = state;
        for (index, item) in items.into_iter().enumerate() {
            let (value, next) = descend_into(&self.inner, current, index, item)?;
            results.push(value);
            current = next;
        }
        Ok((results, current))
    }
}

/// Creates a [`List`] parser.
pub fn list<P: Parser>(parser: P) -> List<P> {
    List::new(parser)
}

// ============================================================================
// ELEMENT COMBINATOR
// ============================================================================

/// Parses the single array element at `index`.
///
/// Fails with `"element <index> expected"` at the array's path when the
/// array is too short.
#[derive(Debug, Clone, Copy)]
pub struct Element<P> {
    index: usize,
    inner: P,
}

impl<P> Parser for Element<P>
where
    P: Parser,
    P::Aux: Clone,
{
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<P::Output, P::Aux> {
        let Value::Array(array) = state.focus() else {
            return Err(ParseError::array_expected(state.path().clone()));
        };
        let Some(item) = array.get(self.index) else {
            return Err(ParseError::element_expected(self.index, state.path().clone()));
        };
        descend_into(&self.inner, state, self.index, item)
    }
}

pub fn element<P: Parser>(index: usize, parser: P) -> Element<P> {
    Element {
        index,
        inner: parser,
    }
}
