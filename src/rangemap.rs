use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use crate::iter::Iter;

/// A map from disjoint half-open ranges `[low, high)` to values.
///
/// Entries are keyed by their low endpoint in a `BTreeMap`; the high
/// endpoint and the value live in the mapped slot. Disjointness is an
/// invariant enforced by every mutating operation, not a usage convention:
/// for any two stored ranges A and B with `A.low < B.low`, `A.high <= B.low`
/// holds between all public calls, and every stored range has `low < high`.
#[derive(Clone, PartialEq, Eq)]
pub struct RangeMap<T, V> {
    /// Entries keyed by low endpoint
    pub(crate) map: BTreeMap<T, Slot<T, V>>,
}

/// The stored part of an entry: the high endpoint and the value of the
/// range starting at the entry's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slot<T, V> {
    /// High endpoint
    pub(crate) high: T,
    /// Associated value
    pub(crate) value: V,
}

/// Which neighbors an injected range fuses with, carrying their keys.
/// Computed once per `inject` call, after the fit checks have passed.
enum Merge<T> {
    /// Both neighbors touch with an equal value; one entry spans all three.
    Both { prev: T, next: T },
    /// Only the left neighbor fuses; its high endpoint is extended.
    Left { prev: T },
    /// Only the right neighbor fuses; it is re-keyed at the injected low.
    Right { next: T },
    /// No adjacent equal value; a fresh entry is created.
    Neither,
}

/// How an erase range `[low, high)` overlaps a candidate interval.
///
/// The four cases are mutually exclusive and exhaustive for any candidate
/// intersecting the erase range. The comparisons are strict where an
/// endpoint coincidence would otherwise manufacture an empty remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlap {
    /// The erase range covers the whole candidate.
    Covers,
    /// The erase range covers the candidate's left part only; a single
    /// remainder survives on the right.
    ClipsLeft,
    /// The erase range covers the candidate's right part only; a single
    /// remainder survives on the left.
    ClipsRight,
    /// The candidate extends past both ends of the erase range and is
    /// split in two.
    Splits,
}

impl Overlap {
    fn classify<T: Ord>(low: &T, high: &T, it_low: &T, it_high: &T) -> Self {
        match (low <= it_low, high >= it_high) {
            (true, true) => Overlap::Covers,
            (true, false) => Overlap::ClipsLeft,
            (false, true) => Overlap::ClipsRight,
            (false, false) => Overlap::Splits,
        }
    }
}

impl<T, V> RangeMap<T, V> {
    /// Create an empty `RangeMap`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Return the number of stored ranges.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return `true` if the map contains no ranges.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Remove all ranges from the map.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Get an iterator over `(low, high, value)` triples in ascending order
    /// of low endpoint.
    ///
    /// The iterator is read-only and double-ended; it borrows the map, so
    /// mutating the map while one is live is rejected at compile time. A
    /// fresh call restarts from the current state.
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// map.insert(5, 7, "b");
    /// map.insert(1, 3, "a");
    /// let spans: Vec<_> = map.iter().map(|(l, h, v)| (*l, *h, *v)).collect();
    /// assert_eq!(spans, [(1, 3, "a"), (5, 7, "b")]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, V> {
        Iter::new(self)
    }
}

impl<T, V> RangeMap<T, V>
where
    T: Ord,
{
    /// Insert `[low, high)` with `value`, only if it is disjoint from every
    /// stored range. Returns `true` on success; on failure the map is
    /// unchanged. Never merges with neighbors, even when endpoints touch
    /// and values are equal. An invalid range (`high <= low`) fails.
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// assert!(map.insert(0, 10, "a"));
    /// assert!(!map.insert(5, 15, "b")); // overlaps [0, 10)
    /// assert!(map.insert(10, 20, "a")); // touching is fine, but kept separate
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn insert(&mut self, low: T, high: T, value: V) -> bool {
        if high <= low {
            return false;
        }
        if self.locate(&low).is_some() {
            return false;
        }
        if let Some((next_low, _)) = self.map.range(&low..).next() {
            if *next_low < high {
                return false;
            }
        }
        self.map.insert(low, Slot { high, value });
        true
    }

    /// Return a reference to the value of the range containing `point`.
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// map.insert(1, 5, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&4), Some(&"a"));
    /// assert_eq!(map.get(&5), None); // high endpoint is excluded
    /// ```
    #[inline]
    pub fn get(&self, point: &T) -> Option<&V> {
        self.locate(point).map(|(_, slot)| &slot.value)
    }

    /// Return a mutable reference to the value of the range containing
    /// `point`.
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// map.insert(3, 5, 0);
    /// map.get_mut(&4).map(|v| *v += 1);
    /// assert_eq!(map.get(&3), Some(&1));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, point: &T) -> Option<&mut V> {
        self.map
            .range_mut(..=point)
            .next_back()
            .filter(|(_, slot)| *point < slot.high)
            .map(|(_, slot)| &mut slot.value)
    }

    /// Return the bounds and value of the range containing `point`, as a
    /// `(low, high, value)` triple.
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// map.insert(3, 7, "a");
    /// assert_eq!(map.find(&5), Some((&3, &7, &"a")));
    /// assert_eq!(map.find(&7), None);
    /// ```
    #[inline]
    pub fn find(&self, point: &T) -> Option<(&T, &T, &V)> {
        self.locate(point)
            .map(|(low, slot)| (low, &slot.high, &slot.value))
    }

    /// Check whether any stored range contains `point`.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &T) -> bool {
        self.locate(point).is_some()
    }

    /// Resolve a point to the stored entry containing it, if any.
    ///
    /// The candidate is the entry with the greatest low endpoint at or
    /// before `point`; it contains `point` iff `point < high`. Disjointness
    /// rules out every other entry, so one probe suffices. Shared by
    /// lookup, point erase, and the range-erase scan.
    fn locate(&self, point: &T) -> Option<(&T, &Slot<T, V>)> {
        self.map
            .range(..=point)
            .next_back()
            .filter(|&(_, slot)| *point < slot.high)
    }

    /// Rewrite the high endpoint of the entry keyed at `low`, leaving the
    /// key fixed.
    fn set_high(&mut self, low: &T, high: T) {
        if let Some(slot) = self.map.get_mut(low) {
            slot.high = high;
        }
    }
}

impl<T, V> RangeMap<T, V>
where
    T: Ord + Clone,
{
    /// Insert `[low, high)` with `value`, fusing it with any adjacent range
    /// that carries an equal value; both sides can fuse at once. Returns
    /// `true` on success. Injection fails without mutating the map if
    /// `[low, high)` would reach into the interior of an existing range,
    /// as opposed to merely touching its endpoint, or if the range is
    /// invalid (`high <= low`).
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// assert!(map.inject(0, 10, "a"));
    /// assert!(map.inject(10, 20, "a")); // touching, equal value: fused
    /// assert_eq!(map.find(&15), Some((&0, &20, &"a")));
    /// assert!(!map.inject(5, 30, "a")); // reaches into [0, 20)
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    pub fn inject(&mut self, low: T, high: T, value: V) -> bool
    where
        V: Eq,
    {
        if high <= low {
            return false;
        }
        let merge = match self.classify_fit(&low, &high, &value) {
            Some(merge) => merge,
            None => return false,
        };
        match merge {
            Merge::Both { prev, next } => {
                if let Some(tail) = self.map.remove(&next) {
                    self.set_high(&prev, tail.high);
                }
            }
            Merge::Left { prev } => self.set_high(&prev, high),
            Merge::Right { next } => {
                // Keys are map-fixed, so the fused range is re-keyed at the
                // injected low, keeping the neighbor's high endpoint and value.
                if let Some(tail) = self.map.remove(&next) {
                    self.map.insert(low, tail);
                }
            }
            Merge::Neither => {
                self.map.insert(low, Slot { high, value });
            }
        }
        true
    }

    /// Assess whether `[low, high)` fits in the gap between its neighbors,
    /// and which of them it fuses with. `None` means the range reaches into
    /// occupied space and injection must fail.
    fn classify_fit(&self, low: &T, high: &T, value: &V) -> Option<Merge<T>>
    where
        V: Eq,
    {
        // An entry keyed exactly at `low` becomes `prev` and fails the fit
        // check below, since its high endpoint exceeds its low endpoint.
        let prev = match self.map.range(..=low).next_back() {
            Some((key, slot)) => {
                if slot.high > *low {
                    return None;
                }
                (slot.high == *low && slot.value == *value).then(|| key.clone())
            }
            None => None,
        };
        let next = match self
            .map
            .range((Bound::Excluded(low), Bound::Unbounded))
            .next()
        {
            Some((key, slot)) => {
                if *key < *high {
                    return None;
                }
                (*key == *high && slot.value == *value).then(|| key.clone())
            }
            None => None,
        };
        Some(match (prev, next) {
            (Some(prev), Some(next)) => Merge::Both { prev, next },
            (Some(prev), None) => Merge::Left { prev },
            (None, Some(next)) => Merge::Right { next },
            (None, None) => Merge::Neither,
        })
    }

    /// Remove the range containing `point`. Returns `false` and leaves the
    /// map unchanged if no range contains it.
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// map.insert(0, 10, "a");
    /// assert!(map.erase(&5));
    /// assert!(!map.erase(&5));
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn erase(&mut self, point: &T) -> bool {
        let low = match self.locate(point) {
            Some((low, _)) => low.clone(),
            None => return false,
        };
        self.map.remove(&low);
        true
    }

    /// Clear every point in `[low, high)` from the map, however many stored
    /// ranges it touches. Ranges only partially covered are trimmed or
    /// split rather than deleted wholesale; the right remainder of a split
    /// is re-inserted through [`inject`](Self::inject) and may fuse with an
    /// equal-valued right neighbor. An invalid range (`high <= low`) is a
    /// no-op.
    ///
    /// # Example
    /// ```rust
    /// use range_map::RangeMap;
    ///
    /// let mut map = RangeMap::new();
    /// map.insert(0, 10, "a");
    /// map.insert(10, 20, "b");
    /// map.erase_range(5, 15);
    /// let spans: Vec<_> = map.iter().map(|(l, h, v)| (*l, *h, *v)).collect();
    /// assert_eq!(spans, [(0, 5, "a"), (15, 20, "b")]);
    /// ```
    #[inline]
    pub fn erase_range(&mut self, low: T, high: T)
    where
        V: Eq + Clone,
    {
        if high <= low {
            return;
        }
        let mut cursor = low.clone();
        loop {
            // The range containing the cursor, or, when the cursor fell in
            // a gap, the first range to its right.
            let candidate = self
                .locate(&cursor)
                .or_else(|| self.map.range(&cursor..).next());
            let (key, slot) = match candidate {
                Some((key, slot)) if *key < high => (key.clone(), slot.clone()),
                _ => return,
            };
            // Advance past the candidate before mutating it; its original
            // high endpoint keeps the scan moving strictly forward.
            cursor = slot.high.clone();
            match Overlap::classify(&low, &high, &key, &slot.high) {
                Overlap::Covers => {
                    self.map.remove(&key);
                }
                Overlap::ClipsLeft => {
                    self.map.remove(&key);
                    self.map.insert(
                        high,
                        Slot {
                            high: slot.high,
                            value: slot.value,
                        },
                    );
                    return;
                }
                Overlap::ClipsRight => {
                    self.set_high(&key, low.clone());
                }
                Overlap::Splits => {
                    self.set_high(&key, low);
                    self.inject(high, slot.high, slot.value);
                    return;
                }
            }
        }
    }
}

impl<T, V> Default for RangeMap<T, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> fmt::Debug for RangeMap<T, V>
where
    T: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_map();
        for (low, slot) in &self.map {
            entries.entry(&(low, &slot.high), &slot.value);
        }
        entries.finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overlap_classification_is_exhaustive() {
        // Candidate [10, 20) against erase ranges hitting each case.
        assert_eq!(Overlap::classify(&5, &25, &10, &20), Overlap::Covers);
        assert_eq!(Overlap::classify(&10, &20, &10, &20), Overlap::Covers);
        assert_eq!(Overlap::classify(&10, &15, &10, &20), Overlap::ClipsLeft);
        assert_eq!(Overlap::classify(&5, &15, &10, &20), Overlap::ClipsLeft);
        assert_eq!(Overlap::classify(&15, &20, &10, &20), Overlap::ClipsRight);
        assert_eq!(Overlap::classify(&15, &25, &10, &20), Overlap::ClipsRight);
        assert_eq!(Overlap::classify(&12, &18, &10, &20), Overlap::Splits);
    }
}
