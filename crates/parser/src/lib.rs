//! # sift-parser
//!
//! Typed parsers over untyped, possibly cyclic [`Value`] trees.
//!
//! A parser checks the shape of an input and produces a typed result. When
//! it fails, the error names the exact path to the offending value:
//!
//! ```rust
//! use sift_parser::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = combine(|scope| {
//!     Ok(User {
//!         name: scope.bind(&field("name", string()))?,
//!         tags: scope.bind(&field("tags", list(string())))?,
//!     })
//! });
//!
//! let input = Value::object([
//!     ("name", Value::from("ada")),
//!     ("tags", Value::array(["admin", "ops"])),
//! ]);
//! assert_eq!(
//!     execute(&user, Params::new(input)),
//!     Ok(User { name: "ada".into(), tags: vec!["admin".into(), "ops".into()] })
//! );
//!
//! let bad = Value::object([("name", Value::from("ada")), ("tags", Value::array([Value::from(1)]))]);
//! let err = execute(&user, Params::new(bad)).unwrap_err();
//! assert_eq!(err.to_string(), r#"string expected at path "/tags/0""#);
//! ```
//!
//! ## Cycles
//!
//! Arrays and objects have identity. Descending into a container that is
//! already an ancestor of the focus fails with `"circular reference
//! detected"`; the same container reached along two sibling branches is
//! fine.
//!
//! ## Modules
//!
//! - [`foundation`] - state, paths, errors, the [`Parser`] trait
//! - [`combinators`] - building parsers from parsers
//! - [`validators`] - leaf checks
//! - [`prelude`] - everything at once
//!
//! [`Value`]: sift_value::Value
//! [`Parser`]: foundation::Parser

#![allow(clippy::type_complexity)]

pub mod combinators;
mod config;
mod execute;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use config::{DEFAULT_MAX_DEPTH, ParseConfig};
pub use execute::{Params, execute, execute_or_else, execute_with_state};
pub use foundation::{ParseError, Parser, ParserExt, Path, PathSegment};
pub use sift_value as value;
