//! Generic collection primitives over sequences and keyed mappings.
//!
//! Functions are written once against [`Collection`] and behave the same
//! whether handed a sequence (`Vec`, slice, array, `VecDeque`) or a mapping
//! (`HashMap`, `BTreeMap`). Every call normalizes its input into a fresh,
//! ordered view of borrowed values, so the caller's container is never
//! mutated.
//!
//! # Quick Start
//!
//! ```
//! use collection_kit::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let stock = BTreeMap::from([("apples", 3), ("pears", 0), ("plums", 7)]);
//!
//! assert_eq!(size(&stock), 3);
//! assert_eq!(filter(&stock, |n| *n > 0), vec![&3, &7]);
//! assert_eq!(find(&stock, |n| *n > 5), Some(&7));
//! assert_eq!(reduce(&stock, |total, n, _| total + n, None), Some(10));
//! assert_eq!(keys(&stock), vec![&"apples", &"pears", &"plums"]);
//!
//! let sorted = sort_by(&[3, 1, 2], |n| *n);
//! assert_eq!(sorted, vec![&1, &2, &3]);
//! ```
//!
//! # Modules
//!
//! - [`collection`] - The [`Collection`]/[`Mapping`] traits and std impls
//! - [`traverse`] - `each`, `map`, `filter`, `find`
//! - [`reduce`](mod@reduce) - Seeded and unseeded left folds
//! - [`mapping`] - `size`, `keys`, `values`
//! - [`sequence`] - Prefix/suffix, stable `sort_by`, `flatten`
//! - [`json`] - The same primitives for `serde_json::Value` (requires `json` feature)
//!
//! # Feature Flags
//!
//! - `json` - Implement the traits for `serde_json` values and add shape-checked wrappers
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `full` - Enable all features

pub mod collection;
#[cfg(feature = "json")]
pub mod json;
mod logging;
pub mod mapping;
pub mod prelude;
pub mod reduce;
pub mod sequence;
pub mod traverse;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the primitives at crate root for convenience
pub use collection::{Collection, Mapping, normalize};
pub use mapping::{keys, size, values};
pub use reduce::{fold, reduce};
pub use sequence::flatten::{Nestable, Nested, flatten, flatten_into};
pub use sequence::{first, first_n, last, last_n, sort_by};
pub use traverse::{each, filter, find, map};
