//! Pre-order structural walks over [`Value`] trees.
//!
//! A walk visits every own entry of every plain object and array reachable
//! from the root, reporting the entry's key, its value and its dotted
//! [`Path`].
//!
//! # Traversal order
//!
//! - **Pre-order.** An entry is reported before any of its descendants.
//! - **Natural order.** Object entries come in insertion order, array elements
//!   in ascending index order.
//! - The root itself is never reported; a root that is not a plain object or
//!   array produces no visits at all, and so do empty containers.
//!
//! # What is entered
//!
//! Only plain objects and arrays are descended into. Maps, sets, dates,
//! regular expressions, errors and promises are reported once, as leaves, even
//! when they hold nested values.
//!
//! # Traversal control
//!
//! [`VisitDecision`] returned from [`Visitor::visit`] controls descent:
//!
//! | Decision        | Effect                                          |
//! |-----------------|-------------------------------------------------|
//! | `Recurse`       | Visit this entry's children (if any).           |
//! | `SkipChildren`  | Skip descendants of this entry.                 |
//! | `Stop`          | Terminate the entire walk immediately.          |
//!
//! # Depth
//!
//! The walk keeps its own worklist instead of recursing, so nesting depth is
//! bounded by memory, not by the call stack. `Value` owns its children, so a
//! value cannot contain itself and every walk terminates.

use specimen_value::Value;

use crate::{Path, PathSegment, debug, trace};

/// Decision returned by [`Visitor::visit`] to control traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitDecision {
    /// Descend into this entry's children.
    Recurse,
    /// Skip this entry's descendants and continue with its next sibling.
    SkipChildren,
    /// Stop the entire walk immediately. No further callbacks are made.
    Stop,
}

/// Outcome of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// The walk visited every reachable entry.
    Completed,
    /// The walk was terminated early by [`VisitDecision::Stop`].
    Stopped,
}

/// One visited key/value pair.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    key: String,
    value: &'a Value,
    path: Path,
    dotted: String,
}

impl<'a> Entry<'a> {
    /// The key of this entry in its parent: an object key, or an array index
    /// in decimal.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value of this entry.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The path from the walk root to this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The dotted rendering of [`Entry::path`].
    pub fn dotted_path(&self) -> &str {
        &self.dotted
    }

    /// Nesting depth; entries of the root container are at depth 1.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Visitor trait for [`walk_with`].
pub trait Visitor<'a> {
    /// Called for each entry, **before** its children.
    ///
    /// Return a [`VisitDecision`] to control whether children are visited.
    fn visit(&mut self, entry: &Entry<'a>) -> VisitDecision;
}

/// A `(key, value, path)` callback visits every entry and always recurses.
impl<'a, F> Visitor<'a> for F
where
    F: FnMut(&str, &'a Value, &str),
{
    fn visit(&mut self, entry: &Entry<'a>) -> VisitDecision {
        (self)(entry.key(), entry.value(), entry.dotted_path());
        VisitDecision::Recurse
    }
}

/// A pre-order iterator over the entries of a value.
///
/// Children of the most recently returned entry are queued lazily, on the
/// following call to [`next`](Iterator::next), so [`Walk::skip_children`] can
/// still prune them.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    /// Pending entries, next one on top.
    stack: Vec<Entry<'a>>,
    /// The last entry returned, if its children have not been queued yet.
    descend: Option<(&'a Value, Path, String)>,
}

impl<'a> Walk<'a> {
    /// Start a walk at the root of `value`.
    pub fn new(value: &'a Value) -> Self {
        Self::with_base(value, Path::root())
    }

    /// Start a walk whose reported paths are all prefixed by `base`.
    pub fn with_base(value: &'a Value, base: Path) -> Self {
        let dotted = base.format();
        let mut walk = Self {
            stack: Vec::new(),
            descend: None,
        };
        walk.queue_children(value, &base, &dotted);
        walk
    }

    /// Don't descend into the entry most recently returned by `next`.
    pub fn skip_children(&mut self) {
        self.descend = None;
    }

    /// Push the children of `value` so that they pop in natural order.
    fn queue_children(&mut self, value: &'a Value, parent: &Path, parent_dotted: &str) {
        let start = self.stack.len();
        match value {
            Value::Object(obj) => {
                for (key, child) in obj {
                    self.stack.push(make_entry(parent, parent_dotted, key.into(), child));
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.stack
                        .push(make_entry(parent, parent_dotted, index.into(), child));
                }
            }
            _ => return,
        }
        self.stack[start..].reverse();
    }
}

fn make_entry<'a>(
    parent: &Path,
    parent_dotted: &str,
    segment: PathSegment,
    value: &'a Value,
) -> Entry<'a> {
    let key = segment.to_string();
    let dotted = if parent_dotted.is_empty() {
        key.clone()
    } else {
        format!("{parent_dotted}.{key}")
    };
    Entry {
        key,
        value,
        path: parent.child(segment),
        dotted,
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((value, path, dotted)) = self.descend.take() {
            self.queue_children(value, &path, &dotted);
        }
        let entry = self.stack.pop()?;
        if entry.value.is_structural() {
            self.descend = Some((entry.value, entry.path.clone(), entry.dotted.clone()));
        }
        Some(entry)
    }
}

/// Walk `value`, calling `visit(key, value, path)` for every entry.
///
/// See the [module docs](self) for order and scope. A plain callback always
/// recurses, so the walk always completes.
pub fn walk<'a>(value: &'a Value, visit: impl FnMut(&str, &'a Value, &str)) -> WalkStatus {
    walk_at(value, Path::root(), visit)
}

/// Like [`walk`], with every reported path prefixed by `base`.
///
/// `base` is a [`Path`] or its dotted rendering. An empty `base` is the root:
/// the first level is reported as `key`, not `.key`.
pub fn walk_at<'a>(
    value: &'a Value,
    base: impl Into<Path>,
    mut visit: impl FnMut(&str, &'a Value, &str),
) -> WalkStatus {
    drive(Walk::with_base(value, base.into()), &mut visit)
}

/// Walk `value` depth-first, calling `visitor` at each entry.
///
/// See the [module docs](self) for traversal order and control semantics.
pub fn walk_with<'a>(value: &'a Value, visitor: &mut impl Visitor<'a>) -> WalkStatus {
    drive(Walk::new(value), visitor)
}

fn drive<'a>(mut walk: Walk<'a>, visitor: &mut impl Visitor<'a>) -> WalkStatus {
    while let Some(entry) = walk.next() {
        match visitor.visit(&entry) {
            VisitDecision::Recurse => {}
            VisitDecision::SkipChildren => {
                trace!(path = %entry.dotted_path(), "skipping children");
                walk.skip_children();
            }
            VisitDecision::Stop => {
                debug!(path = %entry.dotted_path(), "walk stopped");
                return WalkStatus::Stopped;
            }
        }
    }
    debug!("walk completed");
    WalkStatus::Completed
}
