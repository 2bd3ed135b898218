//! Leaf validators.
//!
//! Leaves inspect the focus without descending. Each fails at the current
//! path with a fixed reason when the focus has the wrong shape.

mod leaf;
mod literal;
mod nullable;

pub use leaf::{Leaf, array, boolean, integer, null, number, object, string};
pub use literal::{Literal, LiteralParser, literal};
pub use nullable::{Nullable, nullable};
