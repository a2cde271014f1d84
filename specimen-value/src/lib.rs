#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

mod value;
pub use value::{PrimitiveKind, Value};

mod tag;
pub use tag::{ParseTypeTagError, TypeTag, classify};

mod object;
pub use object::{Iter as ObjectIter, VObject};

mod collections;
pub use collections::{VMap, VSet};

mod builtins;
pub use builtins::{PromiseState, VDate, VError, VFunction, VPromise, VRegExp, VSymbol};

mod format;
pub use format::format_value;

#[cfg(feature = "json")]
mod json;
