//! Path-based value access.

use specimen_value::{TypeTag, Value};

use crate::{Path, PathSegment};

/// Error returned when navigating a value using a [`Path`].
///
/// Each variant captures enough context for a caller to produce
/// a meaningful diagnostic without re-walking the path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathAccessError {
    /// The segment doesn't apply to the value reached so far.
    ///
    /// For example, any segment on a string, or a non-numeric key on an array.
    WrongSegmentKind {
        /// The segment that didn't apply.
        segment: PathSegment,
        /// Index of this segment in the path (0-based).
        segment_index: usize,
        /// The type of the value where the segment was attempted.
        found: TypeTag,
    },

    /// An object has no entry for the key.
    MissingKey {
        /// The key that was requested.
        key: String,
        /// Index of this segment in the path (0-based).
        segment_index: usize,
    },

    /// An array index is out of bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// Index of this segment in the path (0-based).
        segment_index: usize,
        /// The length of the array.
        len: usize,
    },
}

impl core::fmt::Display for PathAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathAccessError::WrongSegmentKind {
                segment,
                segment_index,
                found,
            } => {
                write!(
                    f,
                    "segment {segment_index} (`{segment}`) does not apply to a value of type {found}"
                )
            }
            PathAccessError::MissingKey { key, segment_index } => {
                write!(f, "segment {segment_index}: no key `{key}` in object")
            }
            PathAccessError::IndexOutOfBounds {
                index,
                segment_index,
                len,
            } => {
                write!(
                    f,
                    "segment {segment_index}: index {index} out of bounds for array of length {len}"
                )
            }
        }
    }
}

impl core::error::Error for PathAccessError {}

impl Path {
    /// Follow this path from `root` and return the value it points at.
    ///
    /// Only plain objects and arrays can be stepped into, matching what a walk
    /// descends into. A key segment that parses as a decimal index also
    /// addresses an array element, so paths built with
    /// [`Path::from_dotted`] resolve the same way as the ones a walk reports.
    pub fn resolve<'a>(&self, root: &'a Value) -> Result<&'a Value, PathAccessError> {
        let mut current = root;
        for (segment_index, segment) in self.segments().iter().enumerate() {
            current = match (current, segment) {
                (Value::Object(obj), PathSegment::Key(key)) => {
                    obj.get(key).ok_or_else(|| PathAccessError::MissingKey {
                        key: key.clone(),
                        segment_index,
                    })?
                }
                (Value::Array(items), PathSegment::Index(index)) => {
                    index_array(items, *index, segment_index)?
                }
                (Value::Array(items), PathSegment::Key(key)) => match key.parse::<usize>() {
                    Ok(index) => index_array(items, index, segment_index)?,
                    Err(_) => {
                        return Err(PathAccessError::WrongSegmentKind {
                            segment: segment.clone(),
                            segment_index,
                            found: TypeTag::Array,
                        });
                    }
                },
                (other, segment) => {
                    return Err(PathAccessError::WrongSegmentKind {
                        segment: segment.clone(),
                        segment_index,
                        found: other.type_tag(),
                    });
                }
            };
        }
        Ok(current)
    }
}

fn index_array(
    items: &[Value],
    index: usize,
    segment_index: usize,
) -> Result<&Value, PathAccessError> {
    items.get(index).ok_or(PathAccessError::IndexOutOfBounds {
        index,
        segment_index,
        len: items.len(),
    })
}
