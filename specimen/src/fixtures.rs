//! Named fixture samples.

use core::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use specimen_path::Walk;
use specimen_value::{Value, classify};

use crate::{FixtureError, Observer, TracingObserver};

/// A set of named sample values.
///
/// Build one with [`define`] and ask it for fixtures by name with
/// [`Fixtures::create`].
#[derive(Clone)]
pub struct Fixtures {
    samples: IndexMap<String, Value>,
    observer: Arc<dyn Observer>,
}

/// Define fixtures from `(name, sample)` pairs.
///
/// A later pair with the same name replaces the earlier sample.
pub fn define<I, K, V>(samples: I) -> Fixtures
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    samples.into_iter().collect()
}

impl Fixtures {
    /// Creates an empty set of fixtures with the [`TracingObserver`].
    pub fn new() -> Self {
        Self {
            samples: IndexMap::new(),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer that receives every visited node.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Registers a sample, returning the sample it replaced.
    pub fn insert(&mut self, name: impl Into<String>, sample: impl Into<Value>) -> Option<Value> {
        self.samples.insert(name.into(), sample.into())
    }

    /// Creates the fixture registered as `name`.
    ///
    /// Every node of the sample is walked, classified and reported to the
    /// observer. The returned value is currently the sample itself.
    pub fn create(&self, name: &str) -> Result<Value, FixtureError> {
        let sample = self.samples.get(name).ok_or_else(|| FixtureError::Unknown {
            name: name.to_owned(),
            available: self.samples.keys().cloned().collect(),
        })?;

        tracing::debug!(fixture = name, root = %classify(sample), "creating fixture");
        for entry in Walk::new(sample) {
            let tag = classify(entry.value());
            self.observer.observe(name, &entry, tag);
        }

        // TODO: rebuild the value from per-path generated replacements once
        // leaf generation by type exists.
        Ok(sample.clone())
    }

    /// Returns the registered sample without walking it.
    pub fn sample(&self, name: &str) -> Option<&Value> {
        self.samples.get(name)
    }

    /// Returns `true` if a sample is registered as `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.samples.contains_key(name)
    }

    /// Iterates over the registered names in definition order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }

    /// Returns the number of registered samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Registers every top-level key of a JSON object as a fixture.
    #[cfg(feature = "json")]
    pub fn from_json(json: serde_json::Value) -> Result<Self, FixtureError> {
        match json {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(FixtureError::InvalidRoot {
                found: classify(&Value::from(other)),
            }),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fixtures {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fixtures = Fixtures::new();
        for (name, sample) in iter {
            fixtures.insert(name, sample);
        }
        fixtures
    }
}

impl fmt::Debug for Fixtures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.samples.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_value::value;

    #[test]
    fn later_definitions_replace_earlier_ones() {
        specimen_testhelpers::setup();

        let fixtures = define([("a", value!(1)), ("b", value!(2)), ("a", value!(3))]);
        assert_eq!(fixtures.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(fixtures.sample("a"), Some(&value!(3)));
    }

    #[test]
    fn unknown_names_list_what_is_defined() {
        specimen_testhelpers::setup();

        let fixtures = define([("user", value!({})), ("post", value!({}))]);
        let err = fixtures.create("comment").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown fixture `comment` (defined: user, post)"
        );

        let err = Fixtures::new().create("user").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown fixture `user` (no fixtures are defined)"
        );
    }
}
