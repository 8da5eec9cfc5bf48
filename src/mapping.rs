//! Sizing and key/value extraction.

use crate::collection::{Collection, Mapping};

/// Number of elements in the normalized view.
///
/// For mappings this counts own entries.
pub fn size<C>(collection: &C) -> usize
where
    C: Collection + ?Sized,
{
    collection.normalize().len()
}

/// Keys of a mapping, in native enumeration order.
pub fn keys<M>(mapping: &M) -> Vec<&M::Key>
where
    M: Mapping + ?Sized,
{
    mapping.entries().into_iter().map(|(key, _)| key).collect()
}

/// Values of a mapping, in the same order as [`keys`].
pub fn values<M>(mapping: &M) -> Vec<&M::Value>
where
    M: Mapping + ?Sized,
{
    mapping.entries().into_iter().map(|(_, value)| value).collect()
}
