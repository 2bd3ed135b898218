//! Parse limits.

use serde::{Deserialize, Serialize};

/// Default limit on the number of structural descents.
///
/// Parsing recurses once per descent, so this also bounds stack use; it is
/// sized to fit recursive grammars on a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied to one execution.
///
/// Deserializes with missing fields taking their defaults, so callers can
/// embed it in their own configuration files:
///
/// ```rust
/// use sift_parser::ParseConfig;
///
/// let config: ParseConfig = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
/// assert_eq!(config.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Maximum path length; a descent beyond it fails with
    /// `"maximum depth exceeded"`.
    pub max_depth: usize,
}

impl ParseConfig {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
