#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use core::fmt::{self, Write};

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use debug;
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use trace;

pub mod access;
pub use access::PathAccessError;

pub mod walk;
pub use walk::{Entry, VisitDecision, Visitor, Walk, WalkStatus, walk, walk_at, walk_with};

/// A single step in a path through a value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// A key of a plain object.
    Key(String),
    /// A position in an array.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A path from the root of a value to one of its descendants.
///
/// Rendered by joining segments with `.`, indices as decimal: `users.0.name`.
/// The empty path is the root and renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create the root path.
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from its dotted rendering.
    ///
    /// Every segment becomes a [`PathSegment::Key`]; `""` is the root.
    /// Resolving a decimal key against an array still reaches the element.
    pub fn from_dotted(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self {
            segments: dotted.split('.').map(PathSegment::from).collect(),
        }
    }

    /// Push a segment onto the path.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// Pop the last segment from the path.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Return a copy of this path extended by one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut child = Self {
            segments: Vec::with_capacity(self.segments.len() + 1),
        };
        child.segments.extend_from_slice(&self.segments);
        child.push(segment);
        child
    }

    /// Get the segments in this path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Get the last segment, or `None` at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Get the length of this path.
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root path.
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Format this path as its dotted rendering.
    pub fn format(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            // Writing to a String cannot fail.
            let _ = write!(out, "{segment}");
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<&str> for Path {
    fn from(dotted: &str) -> Self {
        Self::from_dotted(dotted)
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_empty() {
        specimen_testhelpers::setup();

        assert_eq!(Path::root().format(), "");
        assert!(Path::from_dotted("").is_empty());
    }

    #[test]
    fn child_appends_with_a_dot() {
        specimen_testhelpers::setup();

        let root = Path::root();
        let users = root.child("users");
        let first = users.child(0usize);
        let name = first.child("name");

        assert_eq!(users.to_string(), "users");
        assert_eq!(name.to_string(), "users.0.name");
        assert_eq!(name.len(), 3);
        assert_eq!(name.last(), Some(&PathSegment::Key("name".to_owned())));
    }

    #[test]
    fn dotted_round_trip() {
        specimen_testhelpers::setup();

        for dotted in ["a", "a.b", "arr.0", "a..b"] {
            assert_eq!(Path::from_dotted(dotted).format(), dotted);
        }
    }

    #[test]
    fn push_and_pop() {
        specimen_testhelpers::setup();

        let mut path: Path = ["a", "b"].into_iter().collect();
        path.push(3usize);
        assert_eq!(path.format(), "a.b.3");
        assert_eq!(path.pop(), Some(PathSegment::Index(3)));
        assert_eq!(path.format(), "a.b");
    }
}
