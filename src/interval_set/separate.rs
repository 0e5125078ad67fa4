//! A module containing [`SeparateIntervalSet`], the interval set that
//! keeps touching intervals apart.

use super::{sealed, IntervalBaseSet, IntervalSet, NeighbourPolicy};
use crate::domain::Domain;
use crate::interval::Interval;

/// The [`NeighbourPolicy`] that leaves touching intervals as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Separating;

/// A set of domain points that keeps the boundaries between touching
/// intervals it was given.
///
/// Overlapping intervals are still merged when added, since stored
/// intervals must stay disjoint, but intervals that only touch are
/// stored separately.
///
/// # Examples
/// ```
/// use intervallic::interval::{ie, ii};
/// use intervallic::SeparateIntervalSet;
///
/// let mut set = SeparateIntervalSet::new();
///
/// set.add(ie(1, 3));
/// set.add(ie(3, 5));
/// set.add(ie(4, 8));
/// assert_eq!(set.to_string(), "[1,3)[3,8)");
/// assert!(set.contains(ii(2, 7)));
/// ```
pub type SeparateIntervalSet<I> = IntervalBaseSet<I, Separating>;

impl sealed::Sealed for Separating {}

impl NeighbourPolicy for Separating {
	fn handle_neighbours<I>(_: &mut IntervalBaseSet<I, Self>, _: Interval<I>)
	where
		I: Domain,
	{
	}

	fn contains<I>(set: &IntervalBaseSet<I, Self>, interval: Interval<I>) -> bool
	where
		I: Domain,
	{
		let mut joined = IntervalSet::new();
		for stored in set.overlapping(interval) {
			joined.add(*stored);
		}
		joined.contains(interval)
	}
}
