//! A module containing [`IntervalSet`], the interval set that joins
//! touching intervals.

use log::trace;

use super::{sealed, IntervalBaseSet, NeighbourPolicy};
use crate::domain::Domain;
use crate::interval::Interval;

/// The [`NeighbourPolicy`] that merges touching intervals into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Joining;

/// A set of domain points stored as the fewest possible intervals.
///
/// Overlapping and touching intervals are merged when added, so two
/// stored intervals never touch.
///
/// # Examples
/// ```
/// use intervallic::interval::{ie, ii};
/// use intervallic::IntervalSet;
///
/// let mut set = IntervalSet::new();
///
/// set.add(ie(1, 3));
/// set.add(ii(6, 8));
/// set.add(ie(3, 6));
/// assert_eq!(set.to_string(), "[1,8]");
///
/// set.subtract(ie(4, 5));
/// assert_eq!(set.to_string(), "[1,4)[5,8]");
/// assert!(set.contains(ii(5, 8)));
/// ```
pub type IntervalSet<I> = IntervalBaseSet<I, Joining>;

impl sealed::Sealed for Joining {}

impl NeighbourPolicy for Joining {
	fn handle_neighbours<I>(
		set: &mut IntervalBaseSet<I, Self>,
		interval: Interval<I>,
	) where
		I: Domain,
	{
		let left = set.tree.touching_left(interval).map(|(key, _)| *key);
		let right = set.tree.touching_right(interval).map(|(key, _)| *key);

		if left.is_none() && right.is_none() {
			return;
		}

		let mut joined = interval;
		set.tree.remove(interval);
		if let Some(left) = left {
			set.tree.remove(left);
			joined = left.extend(&joined);
		}
		if let Some(right) = right {
			set.tree.remove(right);
			joined = joined.extend(&right);
		}

		trace!("joined {interval:?} with its neighbours into {joined:?}");

		set.tree.insert_disjoint(joined, ());
	}

	fn contains<I>(set: &IntervalBaseSet<I, Self>, interval: Interval<I>) -> bool
	where
		I: Domain,
	{
		// touching intervals are always joined so a contained interval
		// can only overlap a single stored interval
		let mut overlapping = set.tree.overlapping(interval);
		match (overlapping.next(), overlapping.next()) {
			(Some((stored, _)), None) => stored.contains_interval(&interval),
			_ => false,
		}
	}
}
