//! Combinators that build parsers out of parsers.
//!
//! - **Transform**: [`Map`], [`AndThen`], [`Ensure`], [`WithReason`]
//! - **Alternate**: [`Or`], [`OrElse`], [`Recover`], [`OneOf`], [`Optional`]
//! - **Descend**: [`Field`], [`OptionalField`], [`Element`], [`List`], [`Entries`]
//! - **Sequence**: [`Combine`] with its [`Scope`]
//! - **Late binding**: [`Lazy`], [`Deferred`]
//! - **Primitives**: constants, failure and state accessors

mod and_then;
mod combine;
mod ensure;
mod entries;
mod field;
mod lazy;
mod list;
mod map;
mod message;
mod optional;
mod or;
mod primitive;

pub use and_then::AndThen;
pub use combine::{Combine, Scope, combine};
pub use ensure::Ensure;
pub use entries::{Entries, entries};
pub use field::{Field, OptionalField, field, optional_field};
pub use lazy::{Deferred, Lazy, lazy, recursive};
pub use list::{Element, List, element, list};
pub use map::Map;
pub use message::WithReason;
pub use optional::{Optional, optional};
pub use or::{OneOf, Or, OrElse, Recover, one_of};
pub use primitive::{
    CurrentPath, FailWith, GetAux, RawInput, SetAux, Succeed, UpdateAux, current_path, fail_with,
    get_aux, raw_input, set_aux, succeed, update_aux,
};
