//! Everything needed to write and run parsers.
//!
//! ```rust
//! use sift_parser::prelude::*;
//! ```

pub use crate::combinators::*;
pub use crate::config::{DEFAULT_MAX_DEPTH, ParseConfig};
pub use crate::execute::{Params, execute, execute_or_else, execute_with_state};
pub use crate::foundation::{
    BoxedParser, FnParser, ParseError, ParseResult, ParseState, Parser, ParserExt, Path,
    PathSegment, make_parser,
};
pub use crate::validators::*;
pub use sift_value::{Array, Key, Object, Symbol, Value};
