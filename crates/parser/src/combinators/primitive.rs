//! Primitive parsers: constants, failure, and state accessors
//!
//! None of these move the focus. They read or replace parts of the state so
//! that combine blocks and `and_then` chains can reach them.

use crate::foundation::{ParseError, ParseResult, ParseState, Parser, Path};
use sift_value::Value;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Marker for parsers generic over an auxiliary state they never touch.
type AuxMarker<S> = PhantomData<fn() -> S>;

// ============================================================================
// SUCCEED / FAIL
// ============================================================================

/// Always succeeds with a clone of its value.
pub struct Succeed<T, S = ()> {
    value: T,
    _aux: AuxMarker<S>,
}

impl<T: Clone, S> Clone for Succeed<T, S> {
    fn clone(&self) -> Self {
        succeed(self.value.clone())
    }
}

impl<T: Clone, S> Parser for Succeed<T, S> {
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        Ok((self.value.clone(), state))
    }
}

pub fn succeed<T, S>(value: T) -> Succeed<T, S> {
    Succeed {
        value,
        _aux: PhantomData,
    }
}

/// Always fails with its reason, at the current path.
pub struct FailWith<T, S = ()> {
    reason: Cow<'static, str>,
    _marker: PhantomData<fn() -> (T, S)>,
}

impl<T, S> Clone for FailWith<T, S> {
    fn clone(&self) -> Self {
        fail_with(self.reason.clone())
    }
}

impl<T, S> Parser for FailWith<T, S> {
    type Output = T;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<T, S> {
        Err(ParseError::new(self.reason.clone(), state.path().clone()))
    }
}

pub fn fail_with<T, S>(reason: impl Into<Cow<'static, str>>) -> FailWith<T, S> {
    FailWith {
        reason: reason.into(),
        _marker: PhantomData,
    }
}

// ============================================================================
// FOCUS AND PATH ACCESSORS
// ============================================================================

/// Yields the current path.
pub struct CurrentPath<S = ()>(AuxMarker<S>);

impl<S> Clone for CurrentPath<S> {
    fn clone(&self) -> Self {
        current_path()
    }
}

impl<S> Parser for CurrentPath<S> {
    type Output = Path;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<Path, S> {
        Ok((state.path().clone(), state))
    }
}

#[must_use]
pub fn current_path<S>() -> CurrentPath<S> {
    CurrentPath(PhantomData)
}

/// Yields the current focus unvalidated.
pub struct RawInput<S = ()>(AuxMarker<S>);

impl<S> Clone for RawInput<S> {
    fn clone(&self) -> Self {
        raw_input()
    }
}

impl<S> Parser for RawInput<S> {
    type Output = Value;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<Value, S> {
        Ok((state.focus().clone(), state))
    }
}

#[must_use]
pub fn raw_input<S>() -> RawInput<S> {
    RawInput(PhantomData)
}

// ============================================================================
// AUXILIARY STATE
// ============================================================================

/// Yields a clone of the auxiliary state.
pub struct GetAux<S>(AuxMarker<S>);

impl<S> Clone for GetAux<S> {
    fn clone(&self) -> Self {
        get_aux()
    }
}

impl<S: Clone> Parser for GetAux<S> {
    type Output = S;
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<S, S> {
        Ok((state.aux().clone(), state))
    }
}

#[must_use]
pub fn get_aux<S>() -> GetAux<S> {
    GetAux(PhantomData)
}

/// Replaces the auxiliary state with `f(current)`.
#[derive(Clone)]
pub struct UpdateAux<F, S> {
    update: F,
    _aux: AuxMarker<S>,
}

impl<F, S> Parser for UpdateAux<F, S>
where
    F: Fn(S) -> S,
    S: Clone,
{
    type Output = ();
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<(), S> {
        let aux = (self.update)(state.aux().clone());
        Ok(((), state.with_aux(aux)))
    }
}

pub fn update_aux<F, S>(update: F) -> UpdateAux<F, S>
where
    F: Fn(S) -> S,
{
    UpdateAux {
        update,
        _aux: PhantomData,
    }
}

/// Replaces the auxiliary state with a clone of a fixed value.
#[derive(Clone)]
pub struct SetAux<S> {
    value: S,
}

impl<S: Clone> Parser for SetAux<S> {
    type Output = ();
    type Aux = S;

    fn run(&self, state: ParseState<S>) -> ParseResult<(), S> {
        Ok(((), state.with_aux(self.value.clone())))
    }
}

pub fn set_aux<S>(value: S) -> SetAux<S> {
    SetAux { value }
}
