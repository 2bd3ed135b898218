//! Immutable parse state.
//!
//! Every transition builds a new [`ParseState`]; nothing is mutated in
//! place. The path and visited set are persistent collections, so a descent
//! costs O(log n) and the parent state stays valid for alternatives and
//! sibling descents.

use super::error::ParseError;
use super::path::{Path, PathSegment};
use crate::config::ParseConfig;
use sift_value::{NodeId, Value};

/// Snapshot of a parse in progress.
///
/// * `focus` - the value under examination
/// * `path` - how `focus` was reached from the root
/// * `visited` - the containers on the root-to-focus chain, excluding `focus`
///   itself, keyed by identity. Each entry holds a handle to its node, so an
///   id stays valid for as long as any state refers to it.
/// * `aux` - caller-defined side-channel state
#[derive(Clone)]
pub struct ParseState<S = ()> {
    focus: Value,
    path: Path,
    visited: im::HashMap<NodeId, Value>,
    aux: S,
    config: ParseConfig,
}

impl<S> ParseState<S> {
    /// State at the root of `input`.
    pub fn new(input: Value, aux: S, config: ParseConfig) -> Self {
        Self {
            focus: input,
            path: Path::root(),
            visited: im::HashMap::new(),
            aux,
            config,
        }
    }

    pub fn focus(&self) -> &Value {
        &self.focus
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn aux(&self) -> &S {
        &self.aux
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn into_aux(self) -> S {
        self.aux
    }

    /// Number of ancestors on the current chain.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// True if `id` is an ancestor of the focus.
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains_key(&id)
    }

    /// Same state with the auxiliary payload replaced.
    #[must_use]
    pub fn with_aux(self, aux: S) -> Self {
        Self { aux, ..self }
    }

    /// An error at the current path.
    pub fn error(&self, reason: impl Into<std::borrow::Cow<'static, str>>) -> ParseError {
        ParseError::new(reason, self.path.clone())
    }

    /// Returns to this state after a descent, keeping the auxiliary payload
    /// produced below it.
    #[must_use]
    pub fn ascend(self, child: Self) -> Self {
        self.with_aux(child.aux)
    }
}

impl<S: Clone> ParseState<S> {
    /// Moves the focus to `child`, reached through `segment`.
    ///
    /// The current focus joins the visited set of the new state only; this
    /// state and any sibling descent made from it are unaffected. Fails with
    /// `"circular reference detected"` at the extended path if `child` is
    /// already on the chain, or `"maximum depth exceeded"` past the
    /// configured limit.
    pub fn descend(&self, segment: impl Into<PathSegment>, child: Value) -> Result<Self, ParseError> {
        let path = self.path.child(segment);

        if path.len() > self.config.max_depth {
            tracing::trace!(path = %path, max_depth = self.config.max_depth, "descent rejected: too deep");
            return Err(ParseError::max_depth_exceeded(path));
        }

        let mut visited = self.visited.clone();
        if let Some(id) = self.focus.node_id() {
            visited.insert(id, self.focus.clone());
        }
        if child.node_id().is_some_and(|id| visited.contains_key(&id)) {
            tracing::trace!(path = %path, "descent rejected: circular reference");
            return Err(ParseError::circular_reference(path));
        }

        Ok(Self {
            focus: child,
            path,
            visited,
            aux: self.aux.clone(),
            config: self.config,
        })
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for ParseState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseState")
            .field("focus", &self.focus.kind())
            .field("path", &self.path)
            .field("visited", &self.visited.len())
            .field("aux", &self.aux)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_value::Object;

    fn root(input: Value) -> ParseState {
        ParseState::new(input, (), ParseConfig::default())
    }

    #[test]
    fn descent_extends_path_and_visited() {
        let leaf = Value::array([1]);
        let input = Value::object([("a", leaf.clone())]);
        let state = root(input.clone());

        let child = state.descend("a", leaf).unwrap();
        assert_eq!(child.path().to_pointer(), "/a");
        assert!(child.is_visited(input.node_id().unwrap()));
        assert!(!state.is_visited(input.node_id().unwrap()));
    }

    #[test]
    fn siblings_do_not_share_visited() {
        let shared = Value::object([("x", 1)]);
        let input = Value::object([("a", shared.clone()), ("b", shared.clone())]);
        let state = root(input);

        let a = state.descend("a", shared.clone()).unwrap();
        let b = state.descend("b", shared.clone()).unwrap();
        assert!(!a.is_visited(shared.node_id().unwrap()));
        assert!(!b.is_visited(shared.node_id().unwrap()));
    }

    #[test]
    fn self_reference_is_rejected_at_the_new_path() {
        let node = Object::new();
        node.insert("next", node.clone());
        let state = root(Value::Object(node.clone()));

        let err = state.descend("next", Value::Object(node)).unwrap_err();
        assert_eq!(err.reason, "circular reference detected");
        assert_eq!(err.path.to_pointer(), "/next");
    }

    #[test]
    fn scalars_never_trip_cycle_detection() {
        let state = root(Value::array(["x", "x"]));
        let first = state.descend(0usize, Value::from("x")).unwrap();
        assert!(first.descend(0usize, Value::from("x")).is_ok());
    }

    #[test]
    fn visited_ids_outlive_the_parent_state() {
        let state = root(Value::object([("a", Value::Null)]));
        let child = state.descend("a", Value::Null).unwrap();
        let parent_id = state.focus().node_id().unwrap();
        drop(state);

        // The parent allocation is held by `child`, so no new node can take
        // its address and be mistaken for an ancestor.
        let fresh: Vec<Object> = (0..64).map(|_| Object::new()).collect();
        assert!(child.is_visited(parent_id));
        assert!(fresh.iter().all(|node| !child.is_visited(node.id())));
    }

    #[test]
    fn depth_limit() {
        let state = ParseState::new(Value::Null, (), ParseConfig::default().with_max_depth(1));
        let child = state.descend("a", Value::Null).unwrap();
        let err = child.descend("b", Value::Null).unwrap_err();
        assert_eq!(err.reason, "maximum depth exceeded");
        assert_eq!(err.path.to_pointer(), "/a/b");
    }

    #[test]
    fn ascend_keeps_child_aux() {
        let parent = ParseState::new(Value::Null, 1u32, ParseConfig::default());
        let child = parent.descend("a", Value::Null).unwrap().with_aux(2);
        let back = parent.ascend(child);
        assert_eq!(*back.aux(), 2);
        assert!(back.path().is_empty());
    }
}
