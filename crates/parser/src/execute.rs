//! Running a parser against an input.

use crate::config::ParseConfig;
use crate::foundation::{ParseError, ParseState, Parser};
use sift_value::Value;

/// Everything one execution needs: the input, the initial auxiliary state
/// and the limits.
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let params = Params::new(Value::array([1, 2]))
///     .with_aux(0u32)
///     .with_config(ParseConfig::default().with_max_depth(8));
/// assert_eq!(params.aux, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Params<S = ()> {
    pub input: Value,
    pub aux: S,
    pub config: ParseConfig,
}

impl Params {
    /// Parameters with no auxiliary state and default limits.
    pub fn new(input: impl Into<Value>) -> Self {
        Self {
            input: input.into(),
            aux: (),
            config: ParseConfig::default(),
        }
    }
}

impl<S> Params<S> {
    /// Replaces the initial auxiliary state, changing its type if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_aux<T>(self, aux: T) -> Params<T> {
        Params {
            input: self.input,
            aux,
            config: self.config,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }
}

fn run_to_end<P>(parser: &P, params: Params<P::Aux>) -> Result<(P::Output, P::Aux), ParseError>
where
    P: Parser + ?Sized,
{
    let state = ParseState::new(params.input, params.aux, params.config);
    match parser.run(state) {
        Ok((value, state)) => Ok((value, state.into_aux())),
        Err(error) => {
            tracing::debug!(reason = %error.reason, path = %error.path, "parse failed");
            Err(error)
        }
    }
}

/// Runs `parser` from the root of `params.input`.
///
/// The error's `Display` is the standard failure message,
/// `<reason> at path "<path>"`.
///
/// # Examples
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let input = Value::object([("users", Value::array([Value::object([("age", "old")])]))]);
/// let parser = field("users", list(field("age", number())));
/// let err = execute(&parser, Params::new(input)).unwrap_err();
/// assert_eq!(err.to_string(), r#"number expected at path "/users/0/age""#);
/// ```
pub fn execute<P>(parser: &P, params: Params<P::Aux>) -> Result<P::Output, ParseError>
where
    P: Parser + ?Sized,
{
    run_to_end(parser, params).map(|(value, _)| value)
}

/// Like [`execute`], but also returns the final auxiliary state.
pub fn execute_with_state<P>(
    parser: &P,
    params: Params<P::Aux>,
) -> Result<(P::Output, P::Aux), ParseError>
where
    P: Parser + ?Sized,
{
    run_to_end(parser, params)
}

/// Like [`execute`], but a failure is handed to `on_error`, whose result is
/// returned instead.
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let port = execute_or_else(&number(), Params::new("eighty"), |_| 80.0);
/// assert_eq!(port, 80.0);
/// ```
pub fn execute_or_else<P, F>(parser: &P, params: Params<P::Aux>, on_error: F) -> P::Output
where
    P: Parser + ?Sized,
    F: FnOnce(ParseError) -> P::Output,
{
    execute(parser, params).unwrap_or_else(on_error)
}
