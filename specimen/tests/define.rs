//! Integration tests for fixture definition and creation.

use std::sync::{Arc, Mutex};

use specimen::{
    Entry, FixtureError, NoopObserver, Observer, TypeTag, VDate, VMap, Value, define, value,
};

/// Shares everything it observes with the test through an `Arc`.
#[derive(Clone, Default)]
struct RecordingObserver {
    seen: Arc<Mutex<Vec<String>>>,
}

impl RecordingObserver {
    fn lines(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Observer for RecordingObserver {
    fn observe(&self, fixture: &str, entry: &Entry<'_>, tag: TypeTag) {
        self.seen.lock().unwrap().push(format!(
            "{fixture}: {} [{}] {tag}",
            entry.dotted_path(),
            entry.key()
        ));
    }
}

#[test]
fn returns_created_entity() {
    specimen_testhelpers::setup();

    let user_sample = value!({
        "id": "fake-id",
        "name": "Fake Name",
    });

    let fixtures = define([("user", user_sample.clone())]);

    let user = fixtures.create("user").unwrap();
    assert_eq!(user, user_sample);
}

#[test]
fn observer_sees_every_node_with_its_tag() {
    specimen_testhelpers::setup();

    let mut sample = specimen::VObject::new();
    sample.insert("id", "fake-id");
    sample.insert("age", f64::NAN);
    sample.insert("created", VDate::parse("2024-01-01T00:00:00Z").unwrap());
    sample.insert("meta", VMap::from_iter([("k", value!({ "hidden": 1 }))]));
    sample.insert("tags", value!(["a", null]));

    let observer = RecordingObserver::default();
    let fixtures = define([("user", sample)]).with_observer(observer.clone());
    fixtures.create("user").unwrap();

    insta::assert_snapshot!(observer.lines().join("\n"), @r"
    user: id [id] string
    user: age [age] nan
    user: created [created] date
    user: meta [meta] map
    user: tags [tags] array
    user: tags.0 [0] string
    user: tags.1 [1] null
    ");
}

#[test]
fn leaf_samples_are_returned_without_visits() {
    specimen_testhelpers::setup();

    let observer = RecordingObserver::default();
    let fixtures = define([("answer", value!(42)), ("nothing", Value::Null)])
        .with_observer(observer.clone());

    assert_eq!(fixtures.create("answer").unwrap(), value!(42));
    assert_eq!(fixtures.create("nothing").unwrap(), Value::Null);
    assert!(observer.lines().is_empty());
}

#[test]
fn each_creation_walks_again() {
    specimen_testhelpers::setup();

    let observer = RecordingObserver::default();
    let fixtures = define([("pair", value!([1, 2]))]).with_observer(observer.clone());
    fixtures.create("pair").unwrap();
    fixtures.create("pair").unwrap();
    assert_eq!(observer.lines().len(), 4);
}

#[test]
fn unknown_fixture_is_an_error() {
    specimen_testhelpers::setup();

    let fixtures = define([("user", value!({}))]).with_observer(NoopObserver);
    assert_eq!(
        fixtures.create("admin"),
        Err(FixtureError::Unknown {
            name: "admin".to_owned(),
            available: vec!["user".to_owned()],
        })
    );
    assert!(!fixtures.contains("admin"));
    assert!(fixtures.contains("user"));
}

#[test]
fn default_observer_logs_without_failing() {
    specimen_testhelpers::setup();

    let fixtures = define([(
        "order",
        value!({ "items": [{ "sku": "A-1", "qty": 2 }], "total": f64::INFINITY }),
    )]);
    assert_eq!(fixtures.len(), 1);
    assert!(!fixtures.is_empty());
    assert!(fixtures.create("order").is_ok());
}

#[test]
fn fixtures_are_shareable_across_threads() {
    specimen_testhelpers::setup();

    let fixtures = Arc::new(define([("n", value!({ "v": 1 }))]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let fixtures = Arc::clone(&fixtures);
            std::thread::spawn(move || fixtures.create("n").unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), value!({ "v": 1 }));
    }
}

#[cfg(feature = "json")]
#[test]
fn samples_load_from_json() {
    specimen_testhelpers::setup();

    let fixtures = specimen::Fixtures::from_json(serde_json::json!({
        "user": { "id": "fake-id", "name": "Fake Name" },
        "ids": [1, 2, 3]
    }))
    .unwrap();

    assert_eq!(fixtures.names().collect::<Vec<_>>(), ["user", "ids"]);
    assert_eq!(
        fixtures.create("user").unwrap(),
        value!({ "id": "fake-id", "name": "Fake Name" })
    );

    let err = specimen::Fixtures::from_json(serde_json::json!([1])).unwrap_err();
    assert_eq!(
        err,
        FixtureError::InvalidRoot {
            found: TypeTag::Array
        }
    );
}
