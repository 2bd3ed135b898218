//! FIELD combinator - descends into an object member
//!
//! The member's value becomes the focus of the inner parser, its key is
//! pushed onto the path, and the object itself joins the visited set for the
//! duration of the descent. Once the inner parser finishes, focus and path
//! return to the object; only the auxiliary state produced below carries
//! over.

use crate::foundation::{ParseError, ParseResult, ParseState, Parser};
use sift_value::{Key, Value};

// ============================================================================
// FIELD COMBINATOR
// ============================================================================

/// Parses a required member of an object.
///
/// Fails with `"object expected"` when the focus is not an object, and with
/// `"property '<name>' expected"` at the object's path when the member is
/// absent.
#[derive(Debug, Clone)]
pub struct Field<P> {
    key: Key,
    inner: P,
}

impl<P> Field<P> {
    pub fn new(key: impl Into<Key>, inner: P) -> Self {
        Self {
            key: key.into(),
            inner,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P> Parser for Field<P>
where
    P: Parser,
    P::Aux: Clone,
{
    type Output = P::Output;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<P::Output, P::Aux> {
        let Value::Object(object) = state.focus() else {
            return Err(ParseError::object_expected(state.path().clone()));
        };
        let Some(member) = object.get(&self.key) else {
            return Err(ParseError::property_expected(&self.key, state.path().clone()));
        };
        descend_into(&self.inner, state, self.key.clone(), member)
    }
}

/// Creates a [`Field`] parser.
///
/// # Examples
///
/// ```rust
/// use sift_parser::prelude::*;
///
/// let name = field("name", string());
/// let err = execute(&name, Params::new(Value::object([("age", 3)]))).unwrap_err();
/// assert_eq!(err.to_string(), r#"property 'name' expected at path """#);
/// ```
pub fn field<P: Parser>(key: impl Into<Key>, parser: P) -> Field<P> {
    Field::new(key, parser)
}

// ============================================================================
// OPTIONAL FIELD COMBINATOR
// ============================================================================

/// Parses a member that may be absent.
///
/// A missing member or a `null` value yields `None`. A present member is
/// parsed exactly like [`Field`], and its failures are not absorbed.
#[derive(Debug, Clone)]
pub struct OptionalField<P> {
    key: Key,
    inner: P,
}

impl<P> Parser for OptionalField<P>
where
    P: Parser,
    P::Aux: Clone,
{
    type Output = Option<P::Output>;
    type Aux = P::Aux;

    fn run(&self, state: ParseState<P::Aux>) -> ParseResult<Option<P::Output>, P::Aux> {
        let Value::Object(object) = state.focus() else {
            return Err(ParseError::object_expected(state.path().clone()));
        };
        match object.get(&self.key) {
            None | Some(Value::Null) => Ok((None, state)),
            Some(member) => {
                let (value, next) = descend_into(&self.inner, state, self.key.clone(), member)?;
                Ok((Some(value), next))
            }
        }
    }
}

pub fn optional_field<P: Parser>(key: impl Into<Key>, parser: P) -> OptionalField<P> {
    OptionalField {
        key: key.into(),
        inner: parser,
    }
}

/// Runs `parser` on `child`, reached from `state` through `segment`, and
/// returns to `state` afterwards.
pub(crate) fn descend_into<P>(
    parser: &P,
    state: ParseState<P::Aux>,
    segment: impl Into<crate::foundation::PathSegment>,
    child: Value,
) -> ParseResult<P::Output, P::Aux>
where
    P: Parser,
    P::Aux: Clone,
{
    let below = state.descend(segment, child)?;
    let (value, after) = parser.run(below)?;
    Ok((value, state.ascend(after)))
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_member() {
        let input = Value::object([("a", 1)]);
        assert_eq!(execute(&field("a", number()), Params::new(input)), Ok(1.0));
    }

    #[test]
    fn non_object_focus() {
        let err = execute(&field("a", number()), Params::new(Value::array([1]))).unwrap_err();
        assert_eq!(err.reason, "object expected");
        assert!(err.path.is_empty());
    }

    #[test]
    fn missing_member_reports_parent_path() {
        let parser = field("outer", field("inner", number()));
        let input = Value::object([("outer", Value::object([("other", 1)]))]);
        let err = execute(&parser, Params::new(input)).unwrap_err();
        assert_eq!(err.reason, "property 'inner' expected");
        assert_eq!(err.path.to_pointer(), "/outer");
    }

    #[test]
    fn focus_returns_to_the_object_afterwards() {
        let parser = combine(|scope| {
            let a = scope.bind(&field("a", number()))?;
            let b = scope.bind(&field("b", number()))?;
            let path = scope.bind(&current_path())?;
            Ok((a + b, path))
        });
        let input = Value::object([("a", 1), ("b", 2)]);
        assert_eq!(execute(&parser, Params::new(input)), Ok((3.0, Path::root())));
    }

    #[test]
    fn symbol_keys() {
        let tag = Symbol::new("tag");
        let object = Object::new();
        object.insert(&tag, "x");

        let parser = field(&tag, string());
        assert_eq!(
            execute(&parser, Params::new(object.clone())),
            Ok("x".to_string())
        );

        let err = execute(&field(Symbol::new("tag"), string()), Params::new(object)).unwrap_err();
        assert_eq!(err.reason, "property 'Symbol(tag)' expected");
    }

    #[test]
    fn symbol_segment_in_path() {
        let tag = Symbol::new("tag");
        let object = Object::new();
        object.insert(&tag, 1);

        let err = execute(&field(&tag, string()), Params::new(object)).unwrap_err();
        assert_eq!(err.path.segments(), vec![PathSegment::Symbol(tag)]);
    }

    #[test]
    fn optional_field_missing_or_null() {
        let parser = optional_field("email", string());
        assert_eq!(
            execute(&parser, Params::new(Value::object([("name", "a")]))),
            Ok(None)
        );
        assert_eq!(
            execute(&parser, Params::new(Value::object([("email", Value::Null)]))),
            Ok(None)
        );
        assert_eq!(
            execute(&parser, Params::new(Value::object([("email", "a@b.c")]))),
            Ok(Some("a@b.c".to_string()))
        );
    }

    #[test]
    fn optional_field_present_but_invalid() {
        let parser = optional_field("email", string());
        let err = execute(&parser, Params::new(Value::object([("email", 1)]))).unwrap_err();
        assert_eq!(err.reason, "string expected");
        assert_eq!(err.path.to_pointer(), "/email");
    }
}
