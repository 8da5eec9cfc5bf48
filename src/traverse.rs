//! Traversal primitives: visit, transform, select and search.
//!
//! Every function here normalizes its input first, so the same call works for
//! sequences and mappings alike.

use crate::collection::Collection;

/// Invoke `callback` once per element in normalized order.
///
/// Returns the original collection, not the normalized view, so calls can be
/// chained on the caller's own reference.
pub fn each<'a, C, F>(collection: &'a C, mut callback: F) -> &'a C
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item),
{
    for element in collection.normalize() {
        callback(element);
    }
    collection
}

/// Transform every element into a new vector of the same length.
pub fn map<'a, C, R, F>(collection: &'a C, callback: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item) -> R,
{
    collection.normalize().into_iter().map(callback).collect()
}

/// Keep the elements matching `predicate`, in original order.
///
/// An empty vector means nothing matched.
pub fn filter<'a, C, P>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    collection
        .normalize()
        .into_iter()
        .filter(|element| predicate(element))
        .collect()
}

/// Return the first element matching `predicate`, or `None`.
///
/// Stops at the first match: `predicate` is never called on later elements.
pub fn find<'a, C, P>(collection: &'a C, mut predicate: P) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    collection
        .normalize()
        .into_iter()
        .find(|element| predicate(element))
}
