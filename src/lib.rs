//! This crate provides [`IntervalSet`], [`SeparateIntervalSet`] and
//! [`SplitIntervalMap`], Data Structures for storing sets of points and
//! aggregated values over intervals, based off [`BTreeMap`].
//!
//! ## You must implement `Copy`
//!
//! The points intervals are made of need to be [`Copy`], every built-in
//! integer and floating point type already is. Other point types can be
//! used by implementing [`Domain`] for them.
//!
//! ## Example using an Interval Set
//!
//! ```rust
//! use intervallic::interval::{ie, ii};
//! use intervallic::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//!
//! set.add(ie(0, 5));
//! set.add(ie(5, 10));
//! set.subtract(ii(7, 7));
//!
//! assert_eq!(set.to_string(), "[0,7)(7,10)");
//! assert_eq!(set.overlaps(ie(-2, 0)), false);
//! assert_eq!(set.contains_point(7), false);
//! assert_eq!(set.contains_point(5), true);
//! ```
//!
//! ## Example using a Split Interval Map
//!
//! ```rust
//! use intervallic::codomain::ElementSet;
//! use intervallic::interval::ie;
//! use intervallic::SplitIntervalMap;
//!
//! let mut rooms = SplitIntervalMap::new();
//!
//! rooms.insert(ie(9, 12), ElementSet::from(["Ferris"]));
//! rooms.insert(ie(10, 14), ElementSet::from(["Corro"]));
//!
//! for (hours, guests) in rooms.overlapping(ie(11, 13)) {
//! 	println!("{guests} were in the room during {hours}");
//! }
//!
//! assert_eq!(
//! 	rooms.get_at_point(11),
//! 	Some(&ElementSet::from(["Corro", "Ferris"]))
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Bounds
//!
//! Every [`Interval`] has a lower and an upper point and a
//! [`BoundKind`] saying which of the two are included. The helper
//! functions [`ii`], [`ie`], [`ei`] and [`ee`] build the four kinds,
//! `ie(1, 5)` being `[1,5)`.
//!
//! ### Discrete-ness
//!
//! Point types are either discrete, like the integers, or continuous,
//! like the floats, as told by [`Domain::DISCRETE`]. Interval operations
//! differ depending on which one is used: `[5,6]` touches `[7,8]` over
//! the integers since no integer lies between `6` and `7`, but `[5.0,6.0]`
//! does **not** touch `[7.0,8.0]` since the value `6.5` exists.
//!
//! ### Empty Intervals
//!
//! An interval is empty if it contains no point of its domain. `[4,4)`,
//! `[5,2]` and, over the integers, `(4,5)` are all empty. Every empty
//! interval is equal to every other, and inserting or subtracting an
//! empty interval never changes a container.
//!
//! ### Overlap
//!
//! Two intervals are "overlapping" if there exists a point that is
//! contained within both intervals.
//!
//! ### Touching
//!
//! Two intervals are "touching" if they do not overlap and there exists
//! no point between them. For example, `[2,4)` and `[4,6)` are touching
//! but `[2,4)` and `[6,8)` are not, neither are `[2,6)` and `[4,8)`.
//!
//! ### Joining
//!
//! An [`IntervalSet`] joins touching intervals into one, a
//! [`SeparateIntervalSet`] keeps them as they were inserted. Both merge
//! overlapping intervals.
//!
//! ### Aggregation
//!
//! A [`SplitIntervalMap`] never stores two values for one point. Values
//! inserted over overlapping intervals are combined with `+=`, see
//! [`Codomain`], and entries are split at every point where the
//! combined value changes. Values equal to [`Default::default()`] are
//! never stored.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
//! [`ii`]: interval::ii
//! [`ie`]: interval::ie
//! [`ei`]: interval::ei
//! [`ee`]: interval::ee

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub(crate) mod bound_ord;
pub(crate) mod tree;

pub mod codomain;
pub mod domain;
pub mod interval;
pub mod interval_set;
pub mod split_interval_map;


pub use crate::codomain::{Codomain, ElementSet};
pub use crate::domain::Domain;
pub use crate::interval::{BoundKind, Interval, TryFromBoundsError};
pub use crate::interval_set::{
	IntervalBaseSet, IntervalSet, Joining, NeighbourPolicy, SeparateIntervalSet,
	Separating,
};
pub use crate::split_interval_map::SplitIntervalMap;
