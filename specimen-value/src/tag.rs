//! Precise type classification.
//!
//! [`classify`] assigns exactly one [`TypeTag`] to every [`Value`]. The rules
//! are ordered, first match wins:
//!
//! | #  | Rule                                   | Tag         |
//! |----|----------------------------------------|-------------|
//! | 1  | null                                   | `null`      |
//! | 2  | symbol                                 | `symbol`    |
//! | 3  | number that is NaN                     | `nan`       |
//! | 4  | number that is +/- infinity            | `infinity`  |
//! | 5  | indexed sequence                       | `array`     |
//! | 6  | temporal value                         | `date`      |
//! | 7  | pattern matcher                        | `regexp`    |
//! | 8  | associative map                        | `map`       |
//! | 9  | unique-element set                     | `set`       |
//! | 10 | error                                  | `error`     |
//! | 11 | deferred result                        | `promise`   |
//! | 12 | any other `typeof == "object"` value   | `object`    |
//! | 13 | otherwise, the `typeof` name verbatim  | `string`, `number`, `boolean`, `undefined`, `function` |
//!
//! NaN and the infinities are numbers to `typeof`, so rules 3 and 4 must run
//! before the rule 13 fallback. Arrays and the built-ins are all
//! `typeof == "object"`, so rules 5 to 11 must run before rule 12.

use core::fmt;
use core::str::FromStr;

use crate::value::Value;

/// The closed set of classification labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// A string.
    String,
    /// A finite number.
    Number,
    /// NaN.
    Nan,
    /// Positive or negative infinity.
    Infinity,
    /// A boolean.
    Boolean,
    /// A symbol.
    Symbol,
    /// A function.
    Function,
    /// An indexed sequence.
    Array,
    /// A plain object.
    Object,
    /// A temporal value.
    Date,
    /// A pattern matcher.
    RegExp,
    /// A key-value map.
    Map,
    /// A unique-element set.
    Set,
    /// An error.
    Error,
    /// A deferred result.
    Promise,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [TypeTag; 17] = [
        TypeTag::Null,
        TypeTag::Undefined,
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Nan,
        TypeTag::Infinity,
        TypeTag::Boolean,
        TypeTag::Symbol,
        TypeTag::Function,
        TypeTag::Array,
        TypeTag::Object,
        TypeTag::Date,
        TypeTag::RegExp,
        TypeTag::Map,
        TypeTag::Set,
        TypeTag::Error,
        TypeTag::Promise,
    ];

    /// Returns the lowercase tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Undefined => "undefined",
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Nan => "nan",
            TypeTag::Infinity => "infinity",
            TypeTag::Boolean => "boolean",
            TypeTag::Symbol => "symbol",
            TypeTag::Function => "function",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Date => "date",
            TypeTag::RegExp => "regexp",
            TypeTag::Map => "map",
            TypeTag::Set => "set",
            TypeTag::Error => "error",
            TypeTag::Promise => "promise",
        }
    }

    /// Returns `true` if `value` belongs to this category.
    ///
    /// Dispatches to the matching predicate on [`Value`], so
    /// `tag.matches(v)` holds exactly when `classify(v) == tag`.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            TypeTag::Null => value.is_null(),
            TypeTag::Undefined => value.is_undefined(),
            TypeTag::String => value.is_string(),
            TypeTag::Number => value.is_number(),
            TypeTag::Nan => value.is_nan(),
            TypeTag::Infinity => value.is_infinity(),
            TypeTag::Boolean => value.is_boolean(),
            TypeTag::Symbol => value.is_symbol(),
            TypeTag::Function => value.is_function(),
            TypeTag::Array => value.is_array(),
            TypeTag::Object => value.is_object(),
            TypeTag::Date => value.is_date(),
            TypeTag::RegExp => value.is_regexp(),
            TypeTag::Map => value.is_map(),
            TypeTag::Set => value.is_set(),
            TypeTag::Error => value.is_error(),
            TypeTag::Promise => value.is_promise(),
        }
    }
}

/// Classifies a value. Total: every value gets exactly one tag.
///
/// See the [module docs](self) for the rule order.
#[must_use]
pub fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Symbol(_) => TypeTag::Symbol,
        Value::Number(n) if n.is_nan() => TypeTag::Nan,
        Value::Number(n) if n.is_infinite() => TypeTag::Infinity,
        Value::Array(_) => TypeTag::Array,
        Value::Date(_) => TypeTag::Date,
        Value::RegExp(_) => TypeTag::RegExp,
        Value::Map(_) => TypeTag::Map,
        Value::Set(_) => TypeTag::Set,
        Value::Error(_) => TypeTag::Error,
        Value::Promise(_) => TypeTag::Promise,
        Value::Object(_) => TypeTag::Object,
        // Everything left is tagged by its runtime kind.
        Value::Undefined => TypeTag::Undefined,
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Function(_) => TypeTag::Function,
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTypeTagError {
    name: String,
}

impl ParseTypeTagError {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseTypeTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type tag `{}`", self.name)
    }
}

impl core::error::Error for ParseTypeTagError {}

impl FromStr for TypeTag {
    type Err = ParseTypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseTypeTagError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_round_trip() {
        specimen_testhelpers::setup();

        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>(), Ok(tag));
            assert_eq!(tag.to_string(), tag.as_str());
        }
    }

    #[test]
    fn unknown_tag_name_is_rejected() {
        specimen_testhelpers::setup();

        let err = "bigint".parse::<TypeTag>().unwrap_err();
        assert_eq!(err.name(), "bigint");
        assert_eq!(err.to_string(), "unknown type tag `bigint`");
        assert!("Map".parse::<TypeTag>().is_err());
    }

    #[test]
    fn non_finite_numbers_are_special_cased() {
        specimen_testhelpers::setup();

        assert_eq!(classify(&Value::Number(f64::NAN)), TypeTag::Nan);
        assert_eq!(classify(&Value::Number(f64::INFINITY)), TypeTag::Infinity);
        assert_eq!(classify(&Value::Number(f64::NEG_INFINITY)), TypeTag::Infinity);
        assert_eq!(classify(&Value::Number(42.0)), TypeTag::Number);
        assert_eq!(classify(&Value::Number(-0.0)), TypeTag::Number);
    }

    #[test]
    fn fallback_tags_are_the_runtime_kind() {
        specimen_testhelpers::setup();

        for value in [
            Value::Undefined,
            Value::Bool(false),
            Value::Number(1.5),
            Value::String("s".to_owned()),
            Value::Function(crate::VFunction::new("f", 0)),
        ] {
            assert_eq!(classify(&value).as_str(), value.primitive_kind().as_str());
        }
    }
}
