//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring every primitive and the
//! collection traits into scope.
//!
//! # Example
//!
//! ```
//! use collection_kit::prelude::*;
//!
//! let lengths = map(&["a", "bb"], |s| s.len());
//! assert_eq!(lengths, vec![1, 2]);
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Collection traits
pub use crate::collection::{Collection, Mapping, normalize};

// Primitives
pub use crate::mapping::{keys, size, values};
pub use crate::reduce::{fold, reduce};
pub use crate::sequence::flatten::{Nestable, Nested, flatten, flatten_into};
pub use crate::sequence::{first, first_n, last, last_n, sort_by};
pub use crate::traverse::{each, filter, find, map};
