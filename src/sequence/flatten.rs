//! Flattening of nested sequences.
//!
//! Elements opt into flattening through [`Nestable`], which exposes an
//! element's own children when the element is itself a sequence. The crate's
//! [`Nested`] type covers statically typed data; `serde_json::Value`
//! implements the trait under the `json` feature.

use crate::logging::trace;

/// An element that may itself be a sequence of elements of the same type.
pub trait Nestable: Sized {
    /// The element's children if it is a sequence, `None` if it is a leaf.
    fn as_nested(&self) -> Option<&[Self]>;
}

/// A leaf value or an arbitrarily deep list of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum Nested<T> {
    /// A nested list.
    List(Vec<Nested<T>>),
    /// A leaf value.
    Item(T),
}

impl<T> Nested<T> {
    /// Wrap a leaf value.
    pub fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Build a list from nested values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Nested<T>>,
    {
        Self::List(items.into_iter().collect())
    }

    /// The leaf value, if this is not a list.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns `true` if this is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl<T> Nestable for Nested<T> {
    fn as_nested(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            Self::Item(_) => None,
        }
    }
}

/// Flatten `items` into a freshly allocated vector.
///
/// With `shallow` set only one level is removed and deeper lists stay
/// nested; otherwise nesting of any depth is removed.
///
/// ```
/// use collection_kit::{flatten, Nested};
///
/// let input = vec![
///     Nested::item(1),
///     Nested::list([Nested::item(2), Nested::list([Nested::item(3), Nested::item(4)])]),
///     Nested::item(5),
/// ];
///
/// let shallow = flatten(&input, true);
/// assert_eq!(shallow.len(), 4);
/// assert!(shallow.get(2).is_some_and(Nested::is_list));
///
/// let deep: Vec<_> = flatten(&input, false).iter().filter_map(Nested::as_item).copied().collect();
/// assert_eq!(deep, vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T>(items: &[T], shallow: bool) -> Vec<T>
where
    T: Nestable + Clone,
{
    let mut accumulator = Vec::new();
    flatten_into(items, shallow, &mut accumulator);
    accumulator
}

/// Flatten `items` by appending to a caller-owned accumulator.
///
/// Existing contents of `accumulator` are kept; results are appended after
/// them. Returns the same accumulator.
pub fn flatten_into<'a, T>(items: &[T], shallow: bool, accumulator: &'a mut Vec<T>) -> &'a mut Vec<T>
where
    T: Nestable + Clone,
{
    flatten_level(items, shallow, accumulator);
    accumulator
}

fn flatten_level<T>(items: &[T], shallow: bool, accumulator: &mut Vec<T>)
where
    T: Nestable + Clone,
{
    trace!(len = items.len(), shallow, "flattening level");
    for item in items {
        match item.as_nested() {
            Some(children) if shallow => unpack(accumulator, children),
            Some(children) => flatten_level(children, false, accumulator),
            None => accumulator.push(item.clone()),
        }
    }
}

/// Append every element of `source` to `target`, one level, no recursion.
pub(crate) fn unpack<T: Clone>(target: &mut Vec<T>, source: &[T]) {
    target.extend_from_slice(source);
}
