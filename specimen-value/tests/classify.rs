//! Classification totality and predicate exclusivity over a representative
//! value of every category.

use specimen_value::{
    PrimitiveKind, TypeTag, VDate, VError, VFunction, VMap, VObject, VPromise, VRegExp, VSet,
    VSymbol, Value, classify, value,
};

/// One representative per category, paired with the tag it must receive.
fn representatives() -> Vec<(TypeTag, Value)> {
    vec![
        (TypeTag::Null, Value::Null),
        (TypeTag::Undefined, Value::Undefined),
        (TypeTag::String, Value::from("text")),
        (TypeTag::Number, Value::from(42)),
        (TypeTag::Nan, Value::from(f64::NAN)),
        (TypeTag::Infinity, Value::from(f64::INFINITY)),
        (TypeTag::Infinity, Value::from(f64::NEG_INFINITY)),
        (TypeTag::Boolean, Value::from(true)),
        (TypeTag::Symbol, Value::from(VSymbol::new(Some("tag")))),
        (TypeTag::Function, Value::from(VFunction::new("handler", 2))),
        (TypeTag::Array, value!([1, 2, 3])),
        (TypeTag::Object, value!({ "a": 1 })),
        (
            TypeTag::Date,
            Value::from(VDate::from_timestamp_millis(0).unwrap()),
        ),
        (TypeTag::RegExp, Value::from(VRegExp::new("^a+$", "i"))),
        (TypeTag::Map, Value::from(VMap::new())),
        (TypeTag::Set, Value::from(VSet::new())),
        (TypeTag::Error, Value::from(VError::new("boom"))),
        (TypeTag::Promise, Value::from(VPromise::pending())),
    ]
}

#[test]
fn every_representative_gets_its_own_tag() {
    specimen_testhelpers::setup();

    for (expected, value) in representatives() {
        assert_eq!(classify(&value), expected, "classify({value})");
        assert_eq!(value.type_tag(), expected);
    }
}

#[test]
fn every_tag_has_a_representative() {
    specimen_testhelpers::setup();

    let reps = representatives();
    for tag in TypeTag::ALL {
        assert!(
            reps.iter().any(|(t, _)| *t == tag),
            "no representative for {tag}"
        );
    }
}

#[test]
fn predicates_are_mutually_exclusive() {
    specimen_testhelpers::setup();

    for (own, value) in representatives() {
        for tag in TypeTag::ALL {
            assert_eq!(
                tag.matches(&value),
                tag == own,
                "{tag} predicate on {value} (classified {own})"
            );
        }
    }
}

#[test]
fn named_predicates_agree_with_classify() {
    specimen_testhelpers::setup();

    let map = Value::from(VMap::new());
    assert!(map.is_map());
    assert!(!map.is_object());
    assert!(!map.is_set());

    let nan = Value::from(f64::NAN);
    assert!(nan.is_nan());
    assert!(!nan.is_number());
    assert!(!nan.is_object());
    assert!(!nan.is_infinity());

    let array = value!([]);
    assert!(array.is_array());
    assert!(!array.is_object());
}

#[test]
fn ordering_regression_guard() {
    specimen_testhelpers::setup();

    assert_eq!(classify(&Value::from(f64::NAN)).as_str(), "nan");
    assert_eq!(classify(&Value::from(f64::INFINITY)).as_str(), "infinity");
    assert_eq!(classify(&Value::from(42)).as_str(), "number");
}

#[test]
fn map_and_plain_object_stay_distinct() {
    specimen_testhelpers::setup();

    let map = Value::from(VMap::new());
    let object = Value::Object(VObject::new());

    assert_eq!(map.primitive_kind(), PrimitiveKind::Object);
    assert_eq!(object.primitive_kind(), PrimitiveKind::Object);
    assert_eq!(classify(&map).as_str(), "map");
    assert_eq!(classify(&object).as_str(), "object");
}

#[test]
fn contents_do_not_affect_classification() {
    specimen_testhelpers::setup();

    let error = VError::new("wrapped").with_cause(value!({ "inner": [1] }));
    assert_eq!(classify(&Value::from(error)), TypeTag::Error);

    let settled = VPromise::resolved(value!({ "ok": true }));
    assert_eq!(classify(&Value::from(settled)), TypeTag::Promise);

    let set: VSet = [value!({}), value!([])].into_iter().collect();
    assert_eq!(classify(&Value::from(set)), TypeTag::Set);
}

#[test]
fn value_macro_builds_nested_samples() {
    specimen_testhelpers::setup();

    let v = value!({
        "id": "fake-id",
        "nested": { "list": [1, -2, null, undefined, { "deep": [] }] },
        "missing": null,
    });

    insta::assert_snapshot!(
        v.to_string(),
        @"{ id: 'fake-id', nested: { list: [ 1, -2, null, undefined, { deep: [] } ] }, missing: null }"
    );
    insta::assert_snapshot!(specimen_value::format_value(&value!({ "a": [1, { "b": 2 }] })), @r"
    {
      a: [
        1,
        {
          b: 2
        }
      ]
    }
    ");
}
