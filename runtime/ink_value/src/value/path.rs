//! Divert target paths.
//!
//! The story graph owns path resolution. Here a path is an opaque,
//! equality-comparable identity: its dotted text.

use std::fmt;
use std::sync::Arc;

/// A reference to a location in the story graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Arc<str>);

impl Path {
    /// Create a path from its dotted form, e.g. `"knot.stitch.0"`.
    pub fn new(path: impl AsRef<str>) -> Self {
        Path(Arc::from(path.as_ref()))
    }

    /// The dotted form of this path.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
