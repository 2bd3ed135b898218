//! Core types: paths, state, errors and the parser traits.

pub mod error;
mod parser;
mod path;
mod state;

pub use error::{ParseError, reason};
pub use parser::{BoxedParser, FnParser, ParseResult, Parser, ParserExt, make_parser};
pub use path::{Path, PathSegment};
pub use state::ParseState;
