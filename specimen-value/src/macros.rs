/// Builds a [`Value`](crate::Value) with JSON-like syntax.
///
/// `null` and `undefined` are keywords; `{ ... }` builds a plain object and
/// `[ ... ]` an array; anything else is an expression converted with
/// `Value::from`.
///
/// ```
/// use specimen_value::{Value, value};
///
/// let v = value!({
///     "name": "Alice",
///     "tags": ["admin", null],
///     "score": f64::NAN,
/// });
/// assert!(v.get("score").unwrap().is_nan());
/// assert_eq!(v.get("tags").unwrap().get("1"), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! value {
    // === Array muncher ===

    (@array [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };
    (@array [$($elems:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::Value::Null,] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] undefined $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::Value::Undefined,] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] [$($array:tt)*] $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::value!([$($array)*]),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] {$($map:tt)*} $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($elems,)* $crate::value!({$($map)*}),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::value!(@array [$($elems,)* $crate::Value::from($next),] $($rest)*)
    };
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::value!(@array [$($elems,)* $crate::Value::from($last),])
    };

    // === Object muncher ===

    (@object $object:ident) => {};
    (@object $object:ident $key:literal : null $(, $($rest:tt)*)?) => {
        $object.insert($key, $crate::Value::Null);
        $crate::value!(@object $object $($($rest)*)?);
    };
    (@object $object:ident $key:literal : undefined $(, $($rest:tt)*)?) => {
        $object.insert($key, $crate::Value::Undefined);
        $crate::value!(@object $object $($($rest)*)?);
    };
    (@object $object:ident $key:literal : [$($array:tt)*] $(, $($rest:tt)*)?) => {
        $object.insert($key, $crate::value!([$($array)*]));
        $crate::value!(@object $object $($($rest)*)?);
    };
    (@object $object:ident $key:literal : {$($map:tt)*} $(, $($rest:tt)*)?) => {
        $object.insert($key, $crate::value!({$($map)*}));
        $crate::value!(@object $object $($($rest)*)?);
    };
    (@object $object:ident $key:literal : $value:expr, $($rest:tt)*) => {
        $object.insert($key, $crate::Value::from($value));
        $crate::value!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : $value:expr) => {
        $object.insert($key, $crate::Value::from($value));
    };

    // === Entry points ===

    (null) => {
        $crate::Value::Null
    };
    (undefined) => {
        $crate::Value::Undefined
    };
    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };
    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::value!(@array [] $($tt)+))
    };
    ({}) => {
        $crate::Value::Object($crate::VObject::new())
    };
    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::VObject::new();
        $crate::value!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
