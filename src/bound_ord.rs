use core::cmp::Ordering;

use crate::domain::{cmp_points, Domain};

/// The position of an interval bound on the domain axis.
///
/// Lower and upper bounds of every kind share this one ordering so that
/// the bounds of different intervals can be compared directly:
/// `UpperExcluded(x) < Included(x) < LowerExcluded(x)`.
///
/// For discrete domains excluded bounds are normalised onto the nearest
/// contained point, so `LowerExcluded(3) == Included(4)`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BoundOrd<I> {
	/// A closed bound, the same for lower and upper bounds.
	Included(I),
	/// An open lower bound.
	LowerExcluded(I),
	/// An open upper bound.
	UpperExcluded(I),
}

impl<I> BoundOrd<I>
where
	I: Domain,
{
	/// The normalised `(value, rank)` pair the ordering is defined on.
	///
	/// The rank only breaks ties between bounds at the same value and is
	/// always zero for discrete points that have a neighbour.
	pub(crate) fn key(self) -> (I, i8) {
		match self {
			BoundOrd::Included(point) => (point, 0),
			BoundOrd::LowerExcluded(point) => match I::DISCRETE {
				true => match point.succ() {
					Some(succ) => (succ, 0),
					None => (point, 1),
				},
				false => (point, 1),
			},
			BoundOrd::UpperExcluded(point) => match I::DISCRETE {
				true => match point.pred() {
					Some(pred) => (pred, 0),
					None => (point, -1),
				},
				false => (point, -1),
			},
		}
	}

	/// Turns a lower bound into the upper bound of everything strictly
	/// before it.
	pub(crate) fn flip_to_upper(self) -> Self {
		match self {
			BoundOrd::Included(point) => BoundOrd::UpperExcluded(point),
			BoundOrd::LowerExcluded(point) => BoundOrd::Included(point),
			BoundOrd::UpperExcluded(_) => {
				unreachable!("only lower bounds can be flipped to upper bounds")
			}
		}
	}

	/// Turns an upper bound into the lower bound of everything strictly
	/// after it.
	pub(crate) fn flip_to_lower(self) -> Self {
		match self {
			BoundOrd::Included(point) => BoundOrd::LowerExcluded(point),
			BoundOrd::UpperExcluded(point) => BoundOrd::Included(point),
			BoundOrd::LowerExcluded(_) => {
				unreachable!("only upper bounds can be flipped to lower bounds")
			}
		}
	}
}

/// Is there no domain point strictly between the upper bound `upper`
/// and the later lower bound `lower`, while neither covers the other?
pub(crate) fn touching<I>(upper: BoundOrd<I>, lower: BoundOrd<I>) -> bool
where
	I: Domain,
{
	let (upper_point, upper_rank) = upper.key();
	let (lower_point, lower_rank) = lower.key();

	if I::DISCRETE {
		upper_rank == 0
			&& lower_rank == 0
			&& upper_point
				.succ()
				.is_some_and(|succ| cmp_points(&succ, &lower_point).is_eq())
	} else {
		cmp_points(&upper_point, &lower_point).is_eq()
			&& lower_rank - upper_rank == 1
	}
}

impl<I> Ord for BoundOrd<I>
where
	I: Domain,
{
	fn cmp(&self, other: &Self) -> Ordering {
		let (point1, rank1) = self.key();
		let (point2, rank2) = other.key();

		cmp_points(&point1, &point2).then(rank1.cmp(&rank2))
	}
}

impl<I> PartialOrd for BoundOrd<I>
where
	I: Domain,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<I> PartialEq for BoundOrd<I>
where
	I: Domain,
{
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other).is_eq()
	}
}

impl<I> Eq for BoundOrd<I> where I: Domain {}
