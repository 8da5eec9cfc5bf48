//! [`Collection`] and [`Mapping`] implementations for std containers.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use super::{Collection, Mapping};

impl<T> Collection for [T] {
    type Item = T;

    fn normalize(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn normalize(&self) -> Vec<&T> {
        self.as_slice().normalize()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn normalize(&self) -> Vec<&T> {
        self.as_slice().normalize()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn normalize(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;

    fn normalize(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<K, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;

    fn normalize(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn normalize(&self) -> Vec<&C::Item> {
        (**self).normalize()
    }
}

impl<M: Mapping + ?Sized> Mapping for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn entries(&self) -> Vec<(&M::Key, &M::Value)> {
        (**self).entries()
    }
}
