//! Conversion from `serde_json` trees, for samples stored as JSON.
//!
//! JSON has no NaN, infinities, dates or other built-ins, so a converted tree
//! only ever contains null, booleans, finite numbers, strings, arrays and
//! plain objects. Object key order is preserved.

use crate::{VObject, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(VObject::from(map)),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for VObject {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut obj = VObject::with_capacity(map.len());
        for (key, value) in map {
            obj.insert(key, Value::from(value));
        }
        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeTag;

    #[test]
    fn converts_nested_json() {
        specimen_testhelpers::setup();

        let json = serde_json::json!({
            "zeta": [1, 2.5, null],
            "alpha": { "ok": true, "name": "x" }
        });
        let value = Value::from(json);

        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["zeta", "alpha"]);
        assert_eq!(value.get("zeta").and_then(|v| v.get("1")), Some(&Value::from(2.5)));
        assert_eq!(
            value.get("alpha").and_then(|v| v.get("ok")).map(Value::type_tag),
            Some(TypeTag::Boolean)
        );
    }
}
