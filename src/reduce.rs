//! Left-to-right reduction over a normalized view.
//!
//! Each step receives the accumulator, the current element and the part of
//! the view that has not been folded yet, starting with the current element.
//! The remainder is a borrowed sub-slice of the same view, not a copy.

use crate::collection::Collection;

/// Reduce a collection to a single element-typed value.
///
/// With `Some(seed)` every element is folded into the seed. With `None` the
/// first element seeds the accumulator and folding starts at the second.
/// Presence is explicit: `Some(0)` is a seed like any other.
///
/// Returns `None` only when there is no seed and the collection is empty.
///
/// ```
/// use collection_kit::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |acc, n, _| acc + n, None), Some(6));
/// assert_eq!(reduce(&[1, 2, 3], |acc, n, _| acc + n, Some(10)), Some(16));
/// assert_eq!(reduce(&[] as &[i32], |acc, n, _| acc + n, Some(5)), Some(5));
/// ```
pub fn reduce<'a, C, F>(collection: &'a C, step: F, initial: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &'a C::Item, &[&'a C::Item]) -> C::Item,
{
    let view = collection.normalize();
    match initial {
        Some(seed) => Some(fold_view(&view, seed, step)),
        None => {
            let (first, rest) = view.split_first()?;
            Some(fold_view(rest, (*first).clone(), step))
        }
    }
}

/// Fold every element into `initial`, whose type may differ from the
/// element type.
pub fn fold<'a, C, A, F>(collection: &'a C, initial: A, step: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'a C::Item, &[&'a C::Item]) -> A,
{
    fold_view(&collection.normalize(), initial, step)
}

fn fold_view<'a, T, A, F>(view: &[&'a T], initial: A, mut step: F) -> A
where
    T: ?Sized,
    F: FnMut(A, &'a T, &[&'a T]) -> A,
{
    let mut accumulator = initial;
    let mut remaining = view;
    while let Some((element, rest)) = remaining.split_first() {
        accumulator = step(accumulator, *element, remaining);
        remaining = rest;
    }
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_unseeded_uses_first_element() {
        assert_eq!(reduce(&[1, 2, 3], |a, b, _| a + b, None), Some(6));
    }

    #[test]
    fn test_seeded_folds_everything() {
        assert_eq!(reduce(&[1, 2, 3], |a, b, _| a + b, Some(10)), Some(16));
    }

    #[test]
    fn test_zero_seed_is_present() {
        // A zero seed must not be mistaken for "no seed".
        assert_eq!(reduce(&[5, 7], |a, b, _| a * b, Some(0)), Some(0));
        assert_eq!(reduce(&[5, 7], |a, b, _| a * b, None), Some(35));
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(reduce(&empty, |a, b, _| a + b, None), None);
        assert_eq!(reduce(&empty, |a, b, _| a + b, Some(5)), Some(5));
    }

    #[test]
    fn test_single_element_without_seed_skips_step() {
        let mut calls = 0;
        let result = reduce(
            &[42],
            |a, _, _| {
                calls += 1;
                a
            },
            None,
        );
        assert_eq!(result, Some(42));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_step_sees_unfolded_remainder() {
        let mut remainders = Vec::new();
        reduce(
            &[1, 2, 3, 4],
            |a, b, rest| {
                remainders.push(rest.iter().map(|n| **n).collect::<Vec<_>>());
                a + b
            },
            None,
        );
        assert_eq!(remainders, vec![vec![2, 3, 4], vec![3, 4], vec![4]]);
    }

    #[test]
    fn test_seeded_remainder_includes_current_element() {
        let mut seen = Vec::new();
        reduce(
            &[1, 2, 3, 4],
            |a, b, rest| {
                seen.push((*b, rest.iter().map(|n| **n).collect::<Vec<_>>()));
                a + b
            },
            Some(0),
        );
        assert_eq!(
            seen,
            vec![
                (1, vec![1, 2, 3, 4]),
                (2, vec![2, 3, 4]),
                (3, vec![3, 4]),
                (4, vec![4]),
            ]
        );
    }

    #[test]
    fn test_fold_left_to_right_over_mapping() {
        let letters = BTreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
        let joined = fold(&letters, String::new(), |mut acc, s, _| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");
    }
}
