use core::fmt;

use specimen_value::TypeTag;

/// Errors returned by [`Fixtures`](crate::Fixtures).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FixtureError {
    /// No sample is registered under this name.
    Unknown {
        /// The requested name.
        name: String,
        /// The registered names, in definition order.
        available: Vec<String>,
    },

    /// Samples were loaded from something other than a keyed structure.
    InvalidRoot {
        /// What was found instead.
        found: TypeTag,
    },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Unknown { name, available } if available.is_empty() => {
                write!(f, "unknown fixture `{name}` (no fixtures are defined)")
            }
            FixtureError::Unknown { name, available } => {
                write!(
                    f,
                    "unknown fixture `{name}` (defined: {})",
                    available.join(", ")
                )
            }
            FixtureError::InvalidRoot { found } => {
                write!(f, "fixture samples must be an object keyed by name, got {found}")
            }
        }
    }
}

impl core::error::Error for FixtureError {}
