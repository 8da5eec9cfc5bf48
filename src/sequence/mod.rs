//! Sequence-only utilities: bounded prefix/suffix, stable sort by key and
//! flattening.
//!
//! These operate on slices directly and never go through normalization.
//!
//! # Module Organization
//!
//! - [`flatten`]: nested sequence flattening

pub mod flatten;

use std::cmp::Ordering;

use crate::logging::trace;

/// First element, or `None` for an empty sequence.
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The first `n` elements.
///
/// `n` is clamped: zero or negative gives an empty slice, anything larger
/// than the sequence gives the whole sequence.
pub fn first_n<T>(sequence: &[T], n: isize) -> &[T] {
    let count = clamp_count(sequence.len(), n);
    sequence.get(..count).unwrap_or_default()
}

/// Last element, or `None` for an empty sequence.
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The last `n` elements, with the same clamping as [`first_n`].
pub fn last_n<T>(sequence: &[T], n: isize) -> &[T] {
    let count = clamp_count(sequence.len(), n);
    sequence
        .get(sequence.len().saturating_sub(count)..)
        .unwrap_or_default()
}

fn clamp_count(len: usize, n: isize) -> usize {
    usize::try_from(n).map_or(0, |n| n.min(len))
}

/// Sort ascending by a computed key, keeping equal keys in input order.
///
/// `key` is called exactly once per element. Keys that compare neither
/// greater nor lesser (including incomparable ones such as `NaN`) are ties.
/// The input is left untouched; a new vector of references is returned.
///
/// ```
/// use collection_kit::sort_by;
///
/// let people = [("ann", 31), ("bob", 27), ("cy", 31)];
/// let by_age: Vec<_> = sort_by(&people, |p| p.1).into_iter().map(|p| p.0).collect();
/// assert_eq!(by_age, vec!["bob", "ann", "cy"]);
/// ```
pub fn sort_by<T, K, F>(sequence: &[T], mut key: F) -> Vec<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let keyed: Vec<(K, &T)> = sequence.iter().map(|element| (key(element), element)).collect();
    trace!(len = keyed.len(), "sorting by key");
    merge_sort(keyed)
        .into_iter()
        .map(|(_, element)| element)
        .collect()
}

/// Stable merge sort on precomputed keys.
///
/// `slice::sort_by` may panic on comparators that are not a total order,
/// which `PartialOrd` keys do not guarantee.
fn merge_sort<K: PartialOrd, V>(mut items: Vec<(K, V)>) -> Vec<(K, V)> {
    if items.len() <= 1 {
        return items;
    }
    let right = merge_sort(items.split_off(items.len() / 2));
    let left = merge_sort(items);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // ties take from the left run
        let take_right = match (left.peek(), right.peek()) {
            (Some((a, _)), Some((b, _))) => compare_keys(b, a) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        assert_eq!(first(&[1, 2, 3]), Some(&1));
        assert_eq!(last(&[1, 2, 3]), Some(&3));
        assert_eq!(first::<u8>(&[]), None);
        assert_eq!(last::<u8>(&[]), None);
    }

    #[test]
    fn test_first_n_clamping() {
        let numbers = [1, 2, 3];
        assert_eq!(first_n(&numbers, 2), &[1, 2]);
        assert_eq!(first_n(&numbers, 10), &[1, 2, 3]);
        assert!(first_n(&numbers, 0).is_empty());
        assert!(first_n(&numbers, -4).is_empty());
    }

    #[test]
    fn test_last_n_clamping() {
        let numbers = [1, 2, 3];
        assert_eq!(last_n(&numbers, 2), &[2, 3]);
        assert_eq!(last_n(&numbers, 10), &[1, 2, 3]);
        assert!(last_n(&numbers, 0).is_empty());
        assert!(last_n(&numbers, -1).is_empty());
        assert!(last_n::<u8>(&[], 3).is_empty());
    }

    #[derive(Debug, PartialEq)]
    struct Entry {
        k: u8,
        i: u8,
    }

    #[test]
    fn test_sort_by_is_stable() {
        let input = [Entry { k: 1, i: 0 }, Entry { k: 1, i: 1 }, Entry { k: 0, i: 2 }];

        let sorted = sort_by(&input, |e| e.k);

        let order: Vec<u8> = sorted.iter().map(|e| e.i).collect();
        assert_eq!(order, vec![2, 0, 1]);
        // input untouched
        let original: Vec<u8> = input.iter().map(|e| e.i).collect();
        assert_eq!(original, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_by_calls_key_once_per_element() {
        let words = ["pear", "fig", "banana", "kiwi"];
        let mut calls = 0;

        let sorted = sort_by(&words, |w| {
            calls += 1;
            w.len()
        });

        assert_eq!(calls, 4);
        assert_eq!(sorted, vec![&"fig", &"pear", &"kiwi", &"banana"]);
    }

    #[test]
    fn test_sort_by_nan_keys_tie() {
        let values = [2.0, f64::NAN, 1.0];
        let sorted = sort_by(&values, |v| *v);
        assert_eq!(sorted.len(), 3);
        // NaN ties with both neighbours, so it keeps its slot
        assert!(sorted.get(1).is_some_and(|v| v.is_nan()));
        assert_eq!(sort_by(&[3.5, 1.5], |v| *v), vec![&1.5, &3.5]);
    }
}
