//! # sift-value
//!
//! The untyped input tree consumed by `sift-parser`.
//!
//! A [`Value`] is what a wire format deserializes into before anything is
//! known about its shape: maps, sequences and scalars. Unlike
//! `serde_json::Value`, containers here are shared nodes with identity:
//! cloning an [`Array`] or [`Object`] clones a handle, not the contents, so an
//! input graph may reference the same node from several places or even
//! contain itself.
//!
//! ```rust
//! use sift_value::{Object, Value};
//!
//! let node = Object::new();
//! node.insert("value", "root");
//! node.insert("next", node.clone());
//!
//! let next = node.get(&"next".into()).unwrap();
//! assert!(next.as_object().unwrap().ptr_eq(&node));
//! ```
//!
//! Identity is exposed through [`NodeId`]; scalars have none.

mod json;
mod key;
mod node;
mod value;

pub use key::{Key, Symbol};
pub use node::{Array, NodeId, Object};
pub use value::Value;
