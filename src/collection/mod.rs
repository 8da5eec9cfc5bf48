//! The uniform input layer shared by every primitive.
//!
//! A collection is either a *sequence* (ordered, index-addressable) or a
//! *mapping* (keyed values). Both shapes implement [`Collection`], whose single
//! operation [`Collection::normalize`] turns the container into an ordered
//! view of element references. Primitives written against [`Collection`]
//! never need to know which shape they were handed.
//!
//! # Module Organization
//!
//! - [`impls`]: implementations for the standard library containers

mod impls;

/// A container that can be normalized into an ordered view of its values.
///
/// Sequences normalize to their elements in index order. Mappings normalize
/// to their values in the mapping's own enumeration order (insertion order for
/// ordered maps, key order for `BTreeMap`, unspecified for `HashMap`).
///
/// The view is freshly allocated on every call and only borrows from `self`,
/// so neither building nor consuming it can mutate the source.
pub trait Collection {
    /// Element type of the normalized view.
    type Item;

    /// Build the normalized view of this collection.
    fn normalize(&self) -> Vec<&Self::Item>;
}

/// A keyed container whose entries can be enumerated in a stable order.
///
/// `entries` must yield keys and values in the same order that
/// [`Collection::normalize`] yields values, so `keys(m)[i]` always belongs to
/// `values(m)[i]`.
pub trait Mapping {
    /// Key type, usually a string.
    type Key;
    /// Value type.
    type Value;

    /// Own entries of the mapping, in native enumeration order.
    fn entries(&self) -> Vec<(&Self::Key, &Self::Value)>;
}

/// Normalize any collection into a fresh ordered view.
///
/// Free-function form of [`Collection::normalize`].
pub fn normalize<C>(collection: &C) -> Vec<&C::Item>
where
    C: Collection + ?Sized,
{
    collection.normalize()
}
