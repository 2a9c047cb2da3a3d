use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::rangemap::RangeMap;
use crate::rangemap::Slot;

/// An iterator over the entries of a `RangeMap`, in ascending order of low
/// endpoint. Yields borrowed `(low, high, value)` triples.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, V> {
    /// Iterator over the underlying storage
    inner: btree_map::Iter<'a, T, Slot<T, V>>,
}

impl<'a, T, V> Iter<'a, T, V> {
    pub(crate) fn new(map: &'a RangeMap<T, V>) -> Self {
        Iter {
            inner: map.map.iter(),
        }
    }
}

impl<'a, T, V> Iterator for Iter<'a, T, V> {
    type Item = (&'a T, &'a T, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(low, slot)| (low, &slot.high, &slot.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, V> DoubleEndedIterator for Iter<'_, T, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(low, slot)| (low, &slot.high, &slot.value))
    }
}

impl<T, V> ExactSizeIterator for Iter<'_, T, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, V> FusedIterator for Iter<'_, T, V> {}

/// An owning iterator over the entries of a `RangeMap`, in ascending order
/// of low endpoint. Yields `(low, high, value)` triples.
#[derive(Debug)]
pub struct IntoIter<T, V> {
    /// Iterator over the underlying storage
    inner: btree_map::IntoIter<T, Slot<T, V>>,
}

impl<T, V> Iterator for IntoIter<T, V> {
    type Item = (T, T, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(low, slot)| (low, slot.high, slot.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, V> DoubleEndedIterator for IntoIter<T, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(low, slot)| (low, slot.high, slot.value))
    }
}

impl<T, V> ExactSizeIterator for IntoIter<T, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, V> FusedIterator for IntoIter<T, V> {}

impl<'a, T, V> IntoIterator for &'a RangeMap<T, V> {
    type Item = (&'a T, &'a T, &'a V);
    type IntoIter = Iter<'a, T, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, V> IntoIterator for RangeMap<T, V> {
    type Item = (T, T, V);
    type IntoIter = IntoIter<T, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}
