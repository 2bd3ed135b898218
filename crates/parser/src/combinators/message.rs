//! WITH_REASON combinator - rewords failures

use crate::foundation::{ParseResult, ParseState, Parser};
use std::borrow::Cow;

/// Replaces the reason of a failure; the path is kept so the error still
/// points at where the parse actually stopped.
#[derive(Debug, Clone)]
pub struct WithReason<P> {
    inner: P,
    reason: Cow<'static, str>,
}

impl<P> WithReason<P> {
    pub fn new(inner: P, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl<P: Parser> Parser for WithReason<P> {
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<P::Output, P::Aux> {
        self.inner
            .run(state)
            .map_err(|error| error.with_reason(self.reason.clone()))
    }
}
