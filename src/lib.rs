//! `range_map` is an associative container that maps non-overlapping,
//! half-open ranges `[low, high)` of an ordered scalar domain to values.
//!
//! Stored ranges are pairwise disjoint by construction: `insert` rejects any
//! range that coincides with or overlaps an existing one, while `inject`
//! additionally fuses the new range with neighbors it touches that carry an
//! equal value. `erase_range` clears an arbitrary sub-range, trimming or
//! splitting the ranges it cuts through instead of deleting them wholesale.
//!
//! Entries live in a `BTreeMap` keyed by low endpoint, so every point
//! operation resolves through a single O(log n) ordered probe, and a range
//! erase touching k ranges costs O(k log n). All expected failures are
//! reported through `bool`/`Option` return values; no operation panics or
//! leaves a partial mutation behind on failure.
//!
//! # Example
//!
//! ```rust
//! use range_map::RangeMap;
//!
//! let mut map = RangeMap::new();
//! assert!(map.inject(0, 10, "a"));
//! assert!(map.inject(10, 20, "a")); // touching, equal value: fused
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get(&15), Some(&"a"));
//!
//! map.erase_range(5, 15);
//! let spans: Vec<_> = map.iter().map(|(l, h, v)| (*l, *h, *v)).collect();
//! assert_eq!(spans, [(0, 5, "a"), (15, 20, "a")]);
//! ```

mod iter;
mod rangemap;


pub use iter::{IntoIter, Iter};
pub use rangemap::RangeMap;
