//! Structured built-in value types.
//!
//! Each of these classifies under its own tag and is treated as an opaque leaf
//! by a walk, even where it holds nested values (an error's cause, a settled
//! promise's result).

use core::fmt::{self, Debug, Display, Formatter};
use core::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::value::Value;

// ============================================================================
// VSymbol
// ============================================================================

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A unique symbol.
///
/// Two symbols are equal only if one is a clone of the other; sharing a
/// description does not make symbols equal.
#[derive(Clone)]
pub struct VSymbol {
    id: u64,
    description: Option<String>,
}

impl VSymbol {
    /// Creates a fresh symbol.
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(str::to_owned),
        }
    }

    /// Returns the description the symbol was created with.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for VSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VSymbol {}

impl Debug for VSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

// ============================================================================
// VFunction
// ============================================================================

/// A callable, recorded by its name and declared parameter count.
///
/// Fixtures only need to know a function is there, so no body is stored.
#[derive(Clone, PartialEq, Eq)]
pub struct VFunction {
    name: String,
    arity: usize,
}

impl VFunction {
    /// Creates a function descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    /// Returns the function name. Anonymous functions have an empty name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared parameter count.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl Debug for VFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("[Function (anonymous)]")
        } else {
            write!(f, "[Function: {}]", self.name)
        }
    }
}

// ============================================================================
// VDate
// ============================================================================

/// A point in time with millisecond precision, in UTC.
///
/// Finer fractions are truncated on construction, so two dates are equal
/// exactly when they display the same.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VDate(DateTime<Utc>);

impl VDate {
    /// Creates a date from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the instant is out of range.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Parses an RFC 3339 timestamp such as `2024-05-01T12:00:00Z`.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc).into())
    }

    /// Returns milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the underlying chrono timestamp.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for VDate {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(3))
    }
}

impl Display for VDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Debug for VDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

// ============================================================================
// VRegExp
// ============================================================================

/// A regular expression literal: pattern source plus flags.
///
/// The pattern is stored, not compiled.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VRegExp {
    source: String,
    flags: String,
}

impl VRegExp {
    /// Creates a regular expression from its source and flags (e.g. `"gi"`).
    #[must_use]
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the flags.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl Display for VRegExp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl Debug for VRegExp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

// ============================================================================
// VError
// ============================================================================

/// An error value: a name such as `TypeError`, a message, and an optional
/// cause.
#[derive(Clone, PartialEq)]
pub struct VError {
    name: String,
    message: String,
    cause: Option<Box<Value>>,
}

impl VError {
    /// Creates a plain `Error` with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: "Error".to_owned(),
            message: message.into(),
            cause: None,
        }
    }

    /// Replaces the error name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attaches a cause.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Value>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    /// Returns the error name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Value> {
        self.cause.as_deref()
    }
}

impl Debug for VError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "[{}]", self.name)
        } else {
            write!(f, "[{}: {}]", self.name, self.message)
        }
    }
}

// ============================================================================
// VPromise
// ============================================================================

/// The settlement state of a [`VPromise`].
#[derive(Clone, PartialEq, Debug)]
pub enum PromiseState {
    /// Not yet settled.
    Pending,
    /// Resolved with a value.
    Fulfilled(Box<Value>),
    /// Rejected with a reason.
    Rejected(Box<Value>),
}

/// A deferred result, captured as a snapshot of its state.
#[derive(Clone, PartialEq)]
pub struct VPromise {
    state: PromiseState,
}

impl VPromise {
    /// Creates a pending promise.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            state: PromiseState::Pending,
        }
    }

    /// Creates a promise fulfilled with `value`.
    #[must_use]
    pub fn resolved(value: impl Into<Value>) -> Self {
        Self {
            state: PromiseState::Fulfilled(Box::new(value.into())),
        }
    }

    /// Creates a promise rejected with `reason`.
    #[must_use]
    pub fn rejected(reason: impl Into<Value>) -> Self {
        Self {
            state: PromiseState::Rejected(Box::new(reason.into())),
        }
    }

    /// Returns the settlement state.
    #[must_use]
    pub fn state(&self) -> &PromiseState {
        &self.state
    }
}

impl Debug for VPromise {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            PromiseState::Pending => f.write_str("Promise { <pending> }"),
            PromiseState::Fulfilled(v) => write!(f, "Promise {{ {v:?} }}"),
            PromiseState::Rejected(r) => write!(f, "Promise {{ <rejected> {r:?} }}"),
        }
    }
}
