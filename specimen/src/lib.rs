#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub use specimen_path::*;
pub use specimen_value::*;

mod error;
pub use error::FixtureError;

mod observer;
pub use observer::{NoopObserver, Observer, TracingObserver};

mod fixtures;
pub use fixtures::{Fixtures, define};
