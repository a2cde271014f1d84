//! Core `Value` type.
//!
//! `Value` is an owned tree. Every category the classifier distinguishes has a
//! dedicated variant, so the classification of a value never depends on
//! inspecting its contents beyond one number check:
//!
//! | Variant     | `typeof`    | Structural |
//! |-------------|-------------|------------|
//! | `Undefined` | `undefined` | no         |
//! | `Null`      | `object`    | no         |
//! | `Bool`      | `boolean`   | no         |
//! | `Number`    | `number`    | no         |
//! | `String`    | `string`    | no         |
//! | `Symbol`    | `symbol`    | no         |
//! | `Function`  | `function`  | no         |
//! | `Array`     | `object`    | yes        |
//! | `Object`    | `object`    | yes        |
//! | `Date`      | `object`    | no         |
//! | `RegExp`    | `object`    | no         |
//! | `Map`       | `object`    | no         |
//! | `Set`       | `object`    | no         |
//! | `Error`     | `object`    | no         |
//! | `Promise`   | `object`    | no         |
//!
//! "Structural" values are the only ones a walk descends into.

use core::fmt;

use crate::builtins::{VDate, VError, VFunction, VPromise, VRegExp, VSymbol};
use crate::collections::{VMap, VSet};
use crate::object::VObject;
use crate::tag::TypeTag;

/// The coarse runtime kind of a value, as a `typeof` check would report it.
///
/// This is deliberately lossy: `null`, arrays and every structured built-in
/// collapse into [`PrimitiveKind::Object`]. [`TypeTag`] is the precise
/// classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimitiveKind {
    /// `undefined`
    Undefined,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `string`
    String,
    /// `symbol`
    Symbol,
    /// `function`
    Function,
    /// `object`
    Object,
}

impl PrimitiveKind {
    /// Returns the name `typeof` would produce.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Function => "function",
            PrimitiveKind::Object => "object",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamic sample value.
///
/// See the [module docs](self) for the variant table.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The null value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An IEEE-754 double. NaN and the infinities are valid payloads.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// A unique symbol.
    Symbol(VSymbol),
    /// A callable, recorded by name and arity.
    Function(VFunction),
    /// An indexed sequence.
    Array(Vec<Value>),
    /// A plain keyed structure.
    Object(VObject),
    /// A point in time.
    Date(VDate),
    /// A pattern matcher.
    RegExp(VRegExp),
    /// A key-value associative structure with arbitrary keys.
    Map(VMap),
    /// A collection of unique values.
    Set(VSet),
    /// An error value.
    Error(VError),
    /// A deferred result.
    Promise(VPromise),
}

impl Value {
    /// Returns the runtime kind of this value.
    #[must_use]
    pub fn primitive_kind(&self) -> PrimitiveKind {
        match self {
            Value::Undefined => PrimitiveKind::Undefined,
            Value::Bool(_) => PrimitiveKind::Boolean,
            Value::Number(_) => PrimitiveKind::Number,
            Value::String(_) => PrimitiveKind::String,
            Value::Symbol(_) => PrimitiveKind::Symbol,
            Value::Function(_) => PrimitiveKind::Function,
            Value::Null
            | Value::Array(_)
            | Value::Object(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Map(_)
            | Value::Set(_)
            | Value::Error(_)
            | Value::Promise(_) => PrimitiveKind::Object,
        }
    }

    /// Returns the precise type tag of this value. Same as [`crate::classify`].
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        crate::classify(self)
    }

    /// Returns `true` for values a walk descends into: plain objects and arrays.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    // === Predicates ===
    //
    // Each predicate holds exactly when `classify` returns the matching tag.

    /// Returns `true` if this is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is `undefined`.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if this is a boolean.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this is a finite number.
    ///
    /// NaN and the infinities have their own tags and are excluded.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_finite())
    }

    /// Returns `true` if this is a NaN number.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Returns `true` if this is positive or negative infinity.
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_infinite())
    }

    /// Returns `true` if this is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a symbol.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Returns `true` if this is a function.
    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Returns `true` if this is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if this is a plain object.
    ///
    /// Arrays, `null` and the structured built-ins (date, regexp, map, set,
    /// error, promise) are not plain objects even though `typeof` reports
    /// `"object"` for all of them.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if this is a date.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Returns `true` if this is a regular expression.
    #[must_use]
    pub fn is_regexp(&self) -> bool {
        matches!(self, Value::RegExp(_))
    }

    /// Returns `true` if this is a map.
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if this is a set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    /// Returns `true` if this is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Returns `true` if this is a promise.
    #[must_use]
    pub fn is_promise(&self) -> bool {
        matches!(self, Value::Promise(_))
    }

    // === Accessors ===

    /// Returns the boolean, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number, if this is one (including NaN and infinities).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object, if this is a plain object.
    #[must_use]
    pub fn as_object(&self) -> Option<&VObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a key in a plain object or a decimal index in an array.
    ///
    /// Returns `None` for every other kind of value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }
}

// === Equality ===

/// SameValueZero: NaN equals NaN, and +0 equals -0.
pub(crate) fn same_value_zero(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => same_value_zero(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Promise(a), Value::Promise(b)) => a == b,
            _ => false,
        }
    }
}

// === Debug ===

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => fmt::Debug::fmt(b, f),
            Value::Number(n) => fmt::Display::fmt(&crate::format::Number(*n), f),
            Value::String(s) => fmt::Debug::fmt(s, f),
            Value::Symbol(s) => fmt::Debug::fmt(s, f),
            Value::Function(func) => fmt::Debug::fmt(func, f),
            Value::Array(items) => f.debug_list().entries(items).finish(),
            Value::Object(obj) => fmt::Debug::fmt(obj, f),
            Value::Date(d) => fmt::Debug::fmt(d, f),
            Value::RegExp(r) => fmt::Debug::fmt(r, f),
            Value::Map(m) => fmt::Debug::fmt(m, f),
            Value::Set(s) => fmt::Debug::fmt(s, f),
            Value::Error(e) => fmt::Debug::fmt(e, f),
            Value::Promise(p) => fmt::Debug::fmt(p, f),
        }
    }
}

// === From implementations ===

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

// Wide integers are stored as doubles and lose precision past 2^53, like the
// runtime they model.
impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_payload!(
    VSymbol => Symbol,
    VFunction => Function,
    VObject => Object,
    VDate => Date,
    VRegExp => RegExp,
    VMap => Map,
    VSet => Set,
    VError => Error,
    VPromise => Promise,
);

// === FromIterator implementations ===

impl<T: Into<Value>> FromIterator<T> for Value {
    /// Collect into an array value.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = VObject::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_with_same_value_zero() {
        specimen_testhelpers::setup();

        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::Number(0.0), Value::Number(-0.0));
        assert_ne!(Value::Number(1.0), Value::Number(2.0));
    }

    #[test]
    fn different_variants_are_never_equal() {
        specimen_testhelpers::setup();

        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::from(0), Value::from(false));
        assert_ne!(Value::from("1"), Value::from(1));
        assert_ne!(Value::Array(Vec::new()), Value::Object(VObject::new()));
    }

    #[test]
    fn primitive_kind_collapses_built_ins_to_object() {
        specimen_testhelpers::setup();

        assert_eq!(Value::Null.primitive_kind(), PrimitiveKind::Object);
        assert_eq!(
            Value::Array(Vec::new()).primitive_kind(),
            PrimitiveKind::Object
        );
        assert_eq!(
            Value::Map(VMap::new()).primitive_kind(),
            PrimitiveKind::Object
        );
        assert_eq!(
            Value::Number(f64::NAN).primitive_kind(),
            PrimitiveKind::Number
        );
        assert_eq!(Value::Undefined.primitive_kind().as_str(), "undefined");
    }

    #[test]
    fn get_indexes_objects_and_arrays() {
        specimen_testhelpers::setup();

        let mut obj = VObject::new();
        obj.insert("list", vec![10, 20]);
        let value = Value::Object(obj);

        assert_eq!(value.get("list").and_then(|v| v.get("1")), Some(&Value::from(20)));
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::from("text").get("0"), None);
    }

    #[test]
    fn option_none_is_null() {
        specimen_testhelpers::setup();

        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
