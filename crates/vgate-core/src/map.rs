//! Variant mappings accepted by [`Selection::value_from`](crate::Selection::value_from)
//!
//! A mapping is built fresh at each call site and pairs every legal tag with
//! the value or behavior for that variant.

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Tag-keyed mapping that can be checked for exhaustiveness and unpacked
pub trait VariantMap<T, V> {
    /// Keys present in the mapping
    fn tags<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Borrow the value for `tag`
    fn get_variant(&self, tag: &T) -> Option<&V>;

    /// Take the value for `tag`, consuming the mapping
    fn into_variant(self, tag: &T) -> Option<V>;
}

impl<T, V, S> VariantMap<T, V> for HashMap<T, V, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn tags<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.keys()
    }

    fn get_variant(&self, tag: &T) -> Option<&V> {
        self.get(tag)
    }

    fn into_variant(mut self, tag: &T) -> Option<V> {
        self.remove(tag)
    }
}

impl<T, V> VariantMap<T, V> for BTreeMap<T, V>
where
    T: Ord,
{
    fn tags<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.keys()
    }

    fn get_variant(&self, tag: &T) -> Option<&V> {
        self.get(tag)
    }

    fn into_variant(mut self, tag: &T) -> Option<V> {
        self.remove(tag)
    }
}

impl<T, V, S> VariantMap<T, V> for IndexMap<T, V, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn tags<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.keys()
    }

    fn get_variant(&self, tag: &T) -> Option<&V> {
        self.get(tag)
    }

    fn into_variant(mut self, tag: &T) -> Option<V> {
        self.swap_remove(tag)
    }
}
