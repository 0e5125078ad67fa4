//! A module containing [`Interval`], [`BoundKind`] and the `ii`/`ie`/`ei`/`ee`
//! constructor helpers.
//!
//! Every interval operation accepts and tolerates empty intervals. Any
//! operation whose result would cover no points returns the canonical
//! [`Interval::empty()`] rather than an interval with inverted bounds.

use core::cmp::{max, min, Ordering};
use core::fmt;
use core::ops::{Bound, Range, RangeBounds, RangeInclusive};

use crate::bound_ord::{touching, BoundOrd};
use crate::domain::Domain;

/// Whether each end of an [`Interval`] is closed (contains its bound
/// value) or open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundKind {
	/// `[lower, upper]`
	#[default]
	Closed,
	/// `[lower, upper)`
	RightOpen,
	/// `(lower, upper]`
	LeftOpen,
	/// `(lower, upper)`
	Open,
}

impl BoundKind {
	/// Makes a [`BoundKind`] from the closed-ness of each end.
	pub fn from_closed(lower_closed: bool, upper_closed: bool) -> BoundKind {
		match (lower_closed, upper_closed) {
			(true, true) => BoundKind::Closed,
			(true, false) => BoundKind::RightOpen,
			(false, true) => BoundKind::LeftOpen,
			(false, false) => BoundKind::Open,
		}
	}
	/// Is the lower end closed?
	pub fn is_lower_closed(self) -> bool {
		matches!(self, BoundKind::Closed | BoundKind::RightOpen)
	}
	/// Is the upper end closed?
	pub fn is_upper_closed(self) -> bool {
		matches!(self, BoundKind::Closed | BoundKind::LeftOpen)
	}
}

/// A contiguous range of a [`Domain`] with a lower and upper bound and
/// a [`BoundKind`].
///
/// Bounds are kept as they were given, so `ie(1, 5)` is displayed as
/// `[1,5)`, but every comparison is made on the points covered. This
/// makes `ie(1, 5) == ii(1, 4)` over the integers.
///
/// An interval covering no points is empty. All empty intervals are
/// equal to each other and to the canonical [`Interval::empty()`].
///
/// # Examples
/// ```
/// use intervallic::interval::{ee, ie, ii};
///
/// assert_eq!(ie(1, 5), ii(1, 4));
/// assert!(ie(1, 3).touches(&ie(3, 5)));
/// assert!(ee(2.0, 2.0).is_empty());
/// assert_eq!(ie(1, 5).intersection(&ie(3, 8)), ie(3, 5));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<I> {
	/// The lower bound value.
	pub lower: I,
	/// The upper bound value.
	pub upper: I,
	/// Which of the two bounds are contained in the interval.
	pub bounds: BoundKind,
}

/// Creates a new closed [`Interval`], `[lower, upper]`.
pub fn ii<I>(lower: I, upper: I) -> Interval<I> {
	Interval::new(lower, upper, BoundKind::Closed)
}
/// Creates a new right-open [`Interval`], `[lower, upper)`.
pub fn ie<I>(lower: I, upper: I) -> Interval<I> {
	Interval::new(lower, upper, BoundKind::RightOpen)
}
/// Creates a new left-open [`Interval`], `(lower, upper]`.
pub fn ei<I>(lower: I, upper: I) -> Interval<I> {
	Interval::new(lower, upper, BoundKind::LeftOpen)
}
/// Creates a new open [`Interval`], `(lower, upper)`.
pub fn ee<I>(lower: I, upper: I) -> Interval<I> {
	Interval::new(lower, upper, BoundKind::Open)
}

impl<I> Interval<I> {
	/// Creates a new [`Interval`] from its parts. Inverted bounds are
	/// allowed and make an empty interval.
	pub const fn new(lower: I, upper: I, bounds: BoundKind) -> Interval<I> {
		Interval {
			lower,
			upper,
			bounds,
		}
	}
}

impl<I> Interval<I>
where
	I: Domain,
{
	/// The canonical empty interval, the closed interval `[1, 0]`.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::ie;
	/// use intervallic::Interval;
	///
	/// assert!(Interval::<u8>::empty().is_empty());
	/// assert_eq!(Interval::empty(), ie(4, 4));
	/// ```
	pub fn empty() -> Interval<I> {
		ii(I::ONE, I::ZERO)
	}

	/// The closed interval containing just `point`.
	pub fn point(point: I) -> Interval<I> {
		ii(point, point)
	}

	pub(crate) fn lower_ord(&self) -> BoundOrd<I> {
		match self.bounds.is_lower_closed() {
			true => BoundOrd::Included(self.lower),
			false => BoundOrd::LowerExcluded(self.lower),
		}
	}
	pub(crate) fn upper_ord(&self) -> BoundOrd<I> {
		match self.bounds.is_upper_closed() {
			true => BoundOrd::Included(self.upper),
			false => BoundOrd::UpperExcluded(self.upper),
		}
	}

	/// Rebuilds an interval from a lower and an upper [`BoundOrd`],
	/// collapsing to the canonical empty interval if they cross.
	pub(crate) fn from_bound_ords(
		lower: BoundOrd<I>,
		upper: BoundOrd<I>,
	) -> Interval<I> {
		if lower > upper {
			return Interval::empty();
		}

		match (lower, upper) {
			(BoundOrd::Included(lower), BoundOrd::Included(upper)) => {
				ii(lower, upper)
			}
			(BoundOrd::Included(lower), BoundOrd::UpperExcluded(upper)) => {
				ie(lower, upper)
			}
			(BoundOrd::LowerExcluded(lower), BoundOrd::Included(upper)) => {
				ei(lower, upper)
			}
			(
				BoundOrd::LowerExcluded(lower),
				BoundOrd::UpperExcluded(upper),
			) => ee(lower, upper),
			_ => unreachable!("bound ords given in the wrong positions"),
		}
	}

	/// Returns `true` if the interval covers no points of the domain.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ei, ie, ii};
	///
	/// assert_eq!(ii(3, 3).is_empty(), false);
	/// assert_eq!(ie(3, 3).is_empty(), true);
	/// assert_eq!(ii(4, 3).is_empty(), true);
	///
	/// // no integer lies strictly between 3 and 4
	/// assert_eq!(ee(3, 4).is_empty(), true);
	/// assert_eq!(ee(3.0, 4.0).is_empty(), false);
	/// assert_eq!(ei(3.0, 3.0).is_empty(), true);
	/// ```
	pub fn is_empty(&self) -> bool {
		self.lower_ord() > self.upper_ord()
	}

	/// Returns `true` if the interval contains the given point.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ei, ie};
	///
	/// assert_eq!(ie(1, 4).contains(1), true);
	/// assert_eq!(ie(1, 4).contains(4), false);
	/// assert_eq!(ei(1.0, 4.0).contains(4.0), true);
	/// ```
	pub fn contains(&self, point: I) -> bool {
		let point = BoundOrd::Included(point);

		self.lower_ord() <= point && point <= self.upper_ord()
	}

	/// Returns `true` if every point of `other` is in `self`.
	///
	/// The empty interval is contained in every interval, including
	/// the empty interval, and contains nothing else.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	/// use intervallic::Interval;
	///
	/// assert_eq!(ie(1, 8).contains_interval(&ii(2, 7)), true);
	/// assert_eq!(ie(1, 8).contains_interval(&ii(2, 8)), false);
	/// assert_eq!(ie(1, 8).contains_interval(&Interval::empty()), true);
	/// assert_eq!(Interval::empty().contains_interval(&ii(2, 2)), false);
	/// ```
	pub fn contains_interval(&self, other: &Interval<I>) -> bool {
		if other.is_empty() {
			return true;
		}
		if self.is_empty() {
			return false;
		}

		self.lower_ord() <= other.lower_ord()
			&& other.upper_ord() <= self.upper_ord()
	}

	/// Returns `true` if every point of `self` is in `other`.
	pub fn contained_in(&self, other: &Interval<I>) -> bool {
		other.contains_interval(self)
	}

	/// Returns `true` if the two intervals share at least one point.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ei, ie, ii};
	///
	/// assert_eq!(ie(1, 4).overlaps(&ii(3, 6)), true);
	/// assert_eq!(ie(1, 4).overlaps(&ii(4, 6)), false);
	/// assert_eq!(ii(1.0, 4.0).overlaps(&ei(4.0, 6.0)), false);
	/// ```
	pub fn overlaps(&self, other: &Interval<I>) -> bool {
		!self.is_empty()
			&& !other.is_empty()
			&& max(self.lower_ord(), other.lower_ord())
				<= min(self.upper_ord(), other.upper_ord())
	}

	/// Returns `true` if the two intervals do not overlap but their
	/// union is a single contiguous interval.
	///
	/// Over a discrete domain this means the successor of one upper
	/// bound is the other's lower bound, over a continuous domain the
	/// intervals must share a bound value which exactly one of them
	/// contains.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ei, ie, ii};
	///
	/// assert_eq!(ie(1, 3).touches(&ie(3, 5)), true);
	/// assert_eq!(ii(1, 2).touches(&ii(3, 5)), true);
	/// assert_eq!(ie(3, 5).touches(&ii(1, 2)), true);
	///
	/// assert_eq!(ii(1.0, 2.0).touches(&ii(3.0, 5.0)), false);
	/// assert_eq!(ii(1.0, 2.0).touches(&ei(2.0, 5.0)), true);
	/// assert_eq!(ie(1.0, 2.0).touches(&ee(2.0, 5.0)), false);
	/// ```
	pub fn touches(&self, other: &Interval<I>) -> bool {
		if self.is_empty() || other.is_empty() {
			return false;
		}

		touching(self.upper_ord(), other.lower_ord())
			|| touching(other.upper_ord(), self.lower_ord())
	}

	/// Returns `true` if every point of `self` is less than every point
	/// of `other`. Never `true` if either interval is empty.
	pub fn exclusive_less(&self, other: &Interval<I>) -> bool {
		!self.is_empty()
			&& !other.is_empty()
			&& self.upper_ord() < other.lower_ord()
	}

	/// The exclusive-less ordering of two non-empty intervals.
	///
	/// Returns [`Ordering::Less`] if `self` lies entirely before `other`,
	/// [`Ordering::Greater`] if it lies entirely after, and
	/// [`Ordering::Equal`] if the intervals overlap.
	///
	/// This is not a total order: `Equal` is not transitive. It is
	/// consistent over any collection of pairwise disjoint intervals,
	/// which is what lets an ordered tree of disjoint intervals answer
	/// overlap queries with ordinary lookups.
	///
	/// # Examples
	/// ```
	/// use core::cmp::Ordering;
	///
	/// use intervallic::interval::{ie, ii};
	///
	/// assert_eq!(ie(1, 3).exclusive_cmp(&ie(3, 5)), Ordering::Less);
	/// assert_eq!(ie(1, 4).exclusive_cmp(&ie(3, 5)), Ordering::Equal);
	/// assert_eq!(ii(6, 6).exclusive_cmp(&ie(3, 5)), Ordering::Greater);
	/// ```
	pub fn exclusive_cmp(&self, other: &Interval<I>) -> Ordering {
		if self.upper_ord() < other.lower_ord() {
			Ordering::Less
		} else if self.lower_ord() > other.upper_ord() {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}

	/// The union of two intervals that overlap or touch.
	///
	/// The bounds of the result are taken as given from whichever
	/// interval reaches further. If either interval is empty the other
	/// is returned.
	///
	/// # Panics
	///
	/// Panics in debug builds if the intervals neither overlap nor
	/// touch since their union is then not an interval. Use
	/// [`Interval::hull()`] for that.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	///
	/// assert_eq!(ie(1, 3).extend(&ie(3, 5)), ie(1, 5));
	/// assert_eq!(ii(1, 4).extend(&ie(2, 3)), ii(1, 4));
	/// ```
	pub fn extend(&self, other: &Interval<I>) -> Interval<I> {
		debug_assert!(
			self.is_empty()
				|| other.is_empty()
				|| self.overlaps(other)
				|| self.touches(other),
			"extend given disjoint, non-touching intervals: {self:?} and {other:?}"
		);

		self.hull(other)
	}

	/// The smallest interval containing both intervals.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ei, ie, ii};
	///
	/// assert_eq!(ie(1, 3).hull(&ei(6, 8)), ii(1, 8));
	/// ```
	pub fn hull(&self, other: &Interval<I>) -> Interval<I> {
		if self.is_empty() {
			return *other;
		}
		if other.is_empty() {
			return *self;
		}

		Interval::from_bound_ords(
			min(self.lower_ord(), other.lower_ord()),
			max(self.upper_ord(), other.upper_ord()),
		)
	}

	/// The points common to both intervals, possibly empty.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ei, ie, ii};
	///
	/// assert_eq!(ie(1, 5).intersection(&ii(3, 8)), ie(3, 5));
	/// assert!(ie(1, 3).intersection(&ie(3, 5)).is_empty());
	/// assert_eq!(ii(1.0, 3.0).intersection(&ee(2.0, 4.0)), ei(2.0, 3.0));
	/// ```
	pub fn intersection(&self, other: &Interval<I>) -> Interval<I> {
		if self.is_empty() || other.is_empty() {
			return Interval::empty();
		}

		Interval::from_bound_ords(
			max(self.lower_ord(), other.lower_ord()),
			min(self.upper_ord(), other.upper_ord()),
		)
	}

	/// The part of `self` lying strictly before every point of `other`.
	///
	/// An empty `other` covers no points so the whole of `self` counts
	/// as lying before it.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ei, ie, ii};
	///
	/// assert_eq!(ie(1, 8).left_surplus(&ie(4, 6)), ie(1, 4));
	/// assert_eq!(ie(1, 8).left_surplus(&ei(4, 6)), ii(1, 4));
	/// assert!(ie(4, 8).left_surplus(&ie(1, 6)).is_empty());
	/// ```
	pub fn left_surplus(&self, other: &Interval<I>) -> Interval<I> {
		if self.is_empty() || other.is_empty() {
			return match self.is_empty() {
				true => Interval::empty(),
				false => *self,
			};
		}

		Interval::from_bound_ords(
			self.lower_ord(),
			min(self.upper_ord(), other.lower_ord().flip_to_upper()),
		)
	}

	/// The part of `self` lying strictly after every point of `other`.
	///
	/// An empty `other` covers no points so this is then empty, keeping
	/// `left_surplus`, `intersection` and `right_surplus` a partition of
	/// `self`.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	///
	/// assert_eq!(ie(1, 8).right_surplus(&ie(4, 6)), ie(6, 8));
	/// assert_eq!(ie(1, 8).right_surplus(&ii(4, 6)), ie(7, 8));
	/// assert!(ie(1, 5).right_surplus(&ie(3, 6)).is_empty());
	/// ```
	pub fn right_surplus(&self, other: &Interval<I>) -> Interval<I> {
		if self.is_empty() || other.is_empty() {
			return Interval::empty();
		}

		Interval::from_bound_ords(
			max(self.lower_ord(), other.upper_ord().flip_to_lower()),
			self.upper_ord(),
		)
	}

	/// The smallest point in the interval.
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete or the interval is empty.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ii};
	///
	/// assert_eq!(ee(1, 5).first(), 2);
	/// assert_eq!(ii(1, 5).first(), 1);
	/// ```
	pub fn first(&self) -> I {
		assert!(I::DISCRETE, "first() requires a discrete domain");
		assert!(!self.is_empty(), "first() called on an empty interval");

		self.lower_ord().key().0
	}

	/// The largest point in the interval.
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete or the interval is empty.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	///
	/// assert_eq!(ie(1, 5).last(), 4);
	/// assert_eq!(ii(1, 5).last(), 5);
	/// ```
	pub fn last(&self) -> I {
		assert!(I::DISCRETE, "last() requires a discrete domain");
		assert!(!self.is_empty(), "last() called on an empty interval");

		self.upper_ord().key().0
	}

	/// The number of points in the interval, `None` if that doesn't fit
	/// in a `usize`.
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ie, ii};
	///
	/// assert_eq!(ie(1, 5).size(), Some(4));
	/// assert_eq!(ee(1, 2).size(), Some(0));
	/// assert_eq!(ii(0, u64::MAX).size(), None);
	/// ```
	pub fn size(&self) -> Option<usize> {
		assert!(I::DISCRETE, "size() requires a discrete domain");

		if self.is_empty() {
			return Some(0);
		}
		self.first().distance(self.last())?.checked_add(1)
	}

	/// The same points expressed with the given bound kinds.
	///
	/// Bounds that would have to move past the limits of the domain stay
	/// closed, and empty intervals are returned unchanged.
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ie, ii};
	/// use intervallic::BoundKind;
	///
	/// assert_eq!(ii(1, 4).uniform_bounds(BoundKind::RightOpen).to_string(), "[1,5)");
	/// assert_eq!(ie(1, 5).uniform_bounds(BoundKind::Open).to_string(), "(0,5)");
	/// assert_eq!(ee(0, 5).uniform_bounds(BoundKind::Closed).to_string(), "[1,4]");
	/// assert_eq!(ii(250, 255_u8).uniform_bounds(BoundKind::Open).to_string(), "(249,255]");
	/// ```
	pub fn uniform_bounds(&self, bounds: BoundKind) -> Interval<I> {
		assert!(I::DISCRETE, "uniform_bounds() requires a discrete domain");

		if self.is_empty() {
			return *self;
		}

		let (first, last) = (self.first(), self.last());
		let lower = match bounds.is_lower_closed() {
			true => None,
			false => first.pred(),
		};
		let upper = match bounds.is_upper_closed() {
			true => None,
			false => last.succ(),
		};

		Interval::new(
			lower.unwrap_or(first),
			upper.unwrap_or(last),
			BoundKind::from_closed(lower.is_none(), upper.is_none()),
		)
	}
}

impl<I> Default for Interval<I>
where
	I: Domain,
{
	fn default() -> Self {
		Interval::empty()
	}
}

impl<I> PartialEq for Interval<I>
where
	I: Domain,
{
	fn eq(&self, other: &Self) -> bool {
		match (self.is_empty(), other.is_empty()) {
			(true, true) => true,
			(false, false) => {
				self.lower_ord() == other.lower_ord()
					&& self.upper_ord() == other.upper_ord()
			}
			_ => false,
		}
	}
}
impl<I> Eq for Interval<I> where I: Domain + Eq {}

/// Orders by lower bound then upper bound, with the empty interval
/// before every other interval.
impl<I> PartialOrd for Interval<I>
where
	I: Domain,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		let ordering = match (self.is_empty(), other.is_empty()) {
			(true, true) => Ordering::Equal,
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			(false, false) => self
				.lower_ord()
				.cmp(&other.lower_ord())
				.then(self.upper_ord().cmp(&other.upper_ord())),
		};
		Some(ordering)
	}
}
impl<I> Ord for Interval<I>
where
	I: Domain + Ord,
{
	fn cmp(&self, other: &Self) -> Ordering {
		match self.partial_cmp(other) {
			Some(ordering) => ordering,
			None => unreachable!("intervals are always comparable"),
		}
	}
}

impl<I> fmt::Display for Interval<I>
where
	I: Domain + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("[]");
		}

		let open = match self.bounds.is_lower_closed() {
			true => '[',
			false => '(',
		};
		let close = match self.bounds.is_upper_closed() {
			true => ']',
			false => ')',
		};
		write!(f, "{open}{},{}{close}", self.lower, self.upper)
	}
}

impl<I> RangeBounds<I> for Interval<I> {
	fn start_bound(&self) -> Bound<&I> {
		match self.bounds.is_lower_closed() {
			true => Bound::Included(&self.lower),
			false => Bound::Excluded(&self.lower),
		}
	}
	fn end_bound(&self) -> Bound<&I> {
		match self.bounds.is_upper_closed() {
			true => Bound::Included(&self.upper),
			false => Bound::Excluded(&self.upper),
		}
	}
}

impl<I> From<Range<I>> for Interval<I> {
	fn from(range: Range<I>) -> Self {
		ie(range.start, range.end)
	}
}
impl<I> From<RangeInclusive<I>> for Interval<I> {
	fn from(range: RangeInclusive<I>) -> Self {
		let (lower, upper) = range.into_inner();
		ii(lower, upper)
	}
}

/// The error returned when converting a pair of [`Bound`]s with an
/// [`Bound::Unbounded`] end into an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromBoundsError;

impl fmt::Display for TryFromBoundsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("intervals cannot have unbounded ends")
	}
}

impl core::error::Error for TryFromBoundsError {}

impl<I> TryFrom<(Bound<I>, Bound<I>)> for Interval<I> {
	type Error = TryFromBoundsError;

	fn try_from(bounds: (Bound<I>, Bound<I>)) -> Result<Self, Self::Error> {
		match bounds {
			(Bound::Included(lower), Bound::Included(upper)) => {
				Ok(ii(lower, upper))
			}
			(Bound::Included(lower), Bound::Excluded(upper)) => {
				Ok(ie(lower, upper))
			}
			(Bound::Excluded(lower), Bound::Included(upper)) => {
				Ok(ei(lower, upper))
			}
			(Bound::Excluded(lower), Bound::Excluded(upper)) => {
				Ok(ee(lower, upper))
			}
			_ => Err(TryFromBoundsError),
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::format;
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::domain::cmp_points;

	//every other number so that points between bounds exist
	const NUMBERS: &[i8] = &[2, 4, 6, 8, 10];
	const NUMBERS_DOMAIN: &[i8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

	const KINDS: [BoundKind; 4] = [
		BoundKind::Closed,
		BoundKind::RightOpen,
		BoundKind::LeftOpen,
		BoundKind::Open,
	];

	fn all_test_intervals() -> Vec<Interval<i8>> {
		let mut output = Vec::new();
		for lower in NUMBERS {
			for upper in NUMBERS {
				for bounds in KINDS {
					output.push(Interval::new(*lower, *upper, bounds));
				}
			}
		}
		output
	}

	fn points(interval: &Interval<i8>) -> Vec<i8> {
		NUMBERS_DOMAIN
			.iter()
			.copied()
			.filter(|point| interval.contains(*point))
			.collect()
	}

	//the same interval over the reals scaled up so that the discrete
	//points of the scaled domain sit between the test bounds
	fn continuous(interval: &Interval<i8>) -> Interval<f64> {
		Interval::new(
			f64::from(interval.lower),
			f64::from(interval.upper),
			interval.bounds,
		)
	}
	fn continuous_points(interval: &Interval<f64>) -> Vec<f64> {
		(0..=24)
			.map(|half| f64::from(half) / 2.0)
			.filter(|point| interval.contains(*point))
			.collect()
	}

	#[test]
	fn empty_tests() {
		assert!(Interval::<i8>::empty().is_empty());
		assert!(Interval::<f64>::empty().is_empty());
		assert_eq!(Interval::<i8>::default(), Interval::empty());

		for interval in all_test_intervals() {
			assert_eq!(interval.is_empty(), points(&interval).is_empty());
			let continuous = continuous(&interval);
			assert_eq!(
				continuous.is_empty(),
				continuous_points(&continuous).is_empty()
			);
		}
	}

	#[test]
	fn equality_is_point_equality() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				if (a == b) != (points(&a) == points(&b)) {
					dbg!(a, b);
					panic!("interval equality disagrees with its points");
				}
			}
		}
	}

	#[test]
	fn overlaps_and_contains_tests() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				let a_points = points(&a);
				let b_points = points(&b);

				let overlaps =
					a_points.iter().any(|point| b_points.contains(point));
				let contains =
					b_points.iter().all(|point| a_points.contains(point));

				if a.overlaps(&b) != overlaps
					|| a.contains_interval(&b) != contains
				{
					dbg!(a, b, overlaps, contains);
					panic!("overlap or containment disagrees with its points");
				}

				let (ca, cb) = (continuous(&a), continuous(&b));
				let ca_points = continuous_points(&ca);
				let cb_points = continuous_points(&cb);
				let overlaps =
					ca_points.iter().any(|point| cb_points.contains(point));
				if ca.overlaps(&cb) != overlaps {
					dbg!(ca, cb, overlaps);
					panic!("continuous overlap disagrees with its points");
				}
			}
		}
	}

	#[test]
	fn touches_tests() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				let a_points = points(&a);
				let b_points = points(&b);

				let touches = !a_points.is_empty()
					&& !b_points.is_empty()
					&& !a.overlaps(&b)
					&& (a_points.last().map(|x| x + 1) == b_points.first().copied()
						|| b_points.last().map(|x| x + 1)
							== a_points.first().copied());

				if a.touches(&b) != touches {
					dbg!(a, b, touches);
					panic!("discrete touches disagrees with its points");
				}
			}
		}
	}

	#[test]
	fn continuous_touches_tests() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				let (a, b) = (continuous(&a), continuous(&b));
				let a_points = continuous_points(&a);
				let b_points = continuous_points(&b);

				//the sampled union must leave no sampled point out between
				//its ends
				let mut union = a_points.clone();
				union.extend(b_points.iter().copied());
				union.sort_by(|x, y| cmp_points(x, y));
				let touches = !a_points.is_empty()
					&& !b_points.is_empty()
					&& !a_points.iter().any(|point| b_points.contains(point))
					&& union.windows(2).all(|pair| pair[1] - pair[0] == 0.5);

				if a.touches(&b) != touches {
					dbg!(a, b, touches);
					panic!("continuous touches disagrees with its points");
				}
			}
		}

		assert!(ii(1.0, 2.0).touches(&ei(2.0, 3.0)));
		assert!(!ie(1.0, 2.0).touches(&ee(2.0, 3.0)));
		assert!(!ii(1.0, 2.0).touches(&ii(2.5, 3.0)));
		assert!(!ii(1.0, 2.0).touches(&Interval::empty()));
	}

	#[test]
	fn surplus_tests() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				let a_points = points(&a);
				let b_points = points(&b);

				let left = a.left_surplus(&b);
				let middle = a.intersection(&b);
				let right = a.right_surplus(&b);

				let expected_middle: Vec<i8> = a_points
					.iter()
					.copied()
					.filter(|point| b_points.contains(point))
					.collect();
				let (expected_left, expected_right): (Vec<i8>, Vec<i8>) =
					match b_points.first() {
						Some(first) => (
							a_points
								.iter()
								.copied()
								.filter(|point| point < first)
								.collect(),
							a_points
								.iter()
								.copied()
								.filter(|point| {
									b_points.last().is_some_and(|last| point > last)
								})
								.collect(),
						),
						None => (a_points.clone(), Vec::new()),
					};

				if points(&left) != expected_left
					|| points(&middle) != expected_middle
					|| points(&right) != expected_right
				{
					dbg!(a, b, left, middle, right);
					panic!("surplus disagrees with its points");
				}

				//results are never left inverted
				for result in [left, middle, right] {
					if result.is_empty() {
						assert_eq!(result.lower, 1);
						assert_eq!(result.upper, 0);
					}
				}
			}
		}
	}

	#[test]
	fn continuous_surplus_tests() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				let (a, b) = (continuous(&a), continuous(&b));
				let a_points = continuous_points(&a);
				let b_points = continuous_points(&b);

				let left = a.left_surplus(&b);
				let middle = a.intersection(&b);
				let right = a.right_surplus(&b);

				let expected_middle: Vec<f64> = a_points
					.iter()
					.copied()
					.filter(|point| b_points.contains(point))
					.collect();
				let (expected_left, expected_right): (Vec<f64>, Vec<f64>) =
					match (b_points.first(), b_points.last()) {
						(Some(first), Some(last)) => (
							a_points.iter().copied().filter(|point| point < first).collect(),
							a_points.iter().copied().filter(|point| point > last).collect(),
						),
						_ => (a_points.clone(), Vec::new()),
					};

				if continuous_points(&left) != expected_left
					|| continuous_points(&middle) != expected_middle
					|| continuous_points(&right) != expected_right
				{
					dbg!(a, b, left, middle, right);
					panic!("continuous surplus disagrees with its points");
				}

				for result in [left, middle, right] {
					if result.is_empty() {
						assert_eq!(result.lower, 1.0);
						assert_eq!(result.upper, 0.0);
					}
				}
			}
		}

		assert_eq!(ii(1.0, 8.0).left_surplus(&ei(4.0, 6.0)), ii(1.0, 4.0));
		assert_eq!(ii(1.0, 8.0).right_surplus(&ii(4.0, 6.0)), ei(6.0, 8.0));
		assert_eq!(ii(4.0, 8.0).left_surplus(&ei(4.0, 6.0)), ii(4.0, 4.0));
	}

	#[test]
	fn size_and_uniform_bounds_tests() {
		for interval in all_test_intervals() {
			assert_eq!(interval.size(), Some(points(&interval).len()));

			for bounds in KINDS {
				let uniform = interval.uniform_bounds(bounds);
				if points(&uniform) != points(&interval)
					|| (!interval.is_empty() && uniform.bounds != bounds)
				{
					dbg!(interval, bounds, uniform);
					panic!("uniform_bounds changed the points or missed the bounds");
				}
			}
		}
	}

	#[test]
	fn extend_tests() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				if a.is_empty() || b.is_empty() {
					continue;
				}
				if !(a.overlaps(&b) || a.touches(&b)) {
					continue;
				}

				let mut expected = points(&a);
				expected.extend(points(&b));
				expected.sort();
				expected.dedup();

				let extended = a.extend(&b);
				if points(&extended) != expected {
					dbg!(a, b, extended);
					panic!("extend disagrees with its points");
				}
			}
		}

		assert_eq!(Interval::empty().extend(&ie(1, 3)), ie(1, 3));
		assert_eq!(ie(1.0, 3.0).extend(&ii(3.0, 5.0)), ii(1.0, 5.0));
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic]
	fn extend_disjoint_panics() {
		let _ = ie(1, 3).extend(&ie(4, 6));
	}

	#[test]
	fn exclusive_cmp_tests() {
		for a in all_test_intervals() {
			for b in all_test_intervals() {
				if a.is_empty() || b.is_empty() {
					continue;
				}
				let expected = match (a.overlaps(&b), a.exclusive_less(&b)) {
					(true, _) => Ordering::Equal,
					(false, true) => Ordering::Less,
					(false, false) => Ordering::Greater,
				};
				assert_eq!(a.exclusive_cmp(&b), expected);
				assert_eq!(b.exclusive_cmp(&a), expected.reverse());
			}
		}
	}

	#[test]
	fn first_last_tests() {
		assert_eq!(ee(1, 5).first(), 2);
		assert_eq!(ee(1, 5).last(), 4);
		assert_eq!(ii(i8::MIN, i8::MAX).first(), i8::MIN);
		assert_eq!(ii(i8::MIN, i8::MAX).last(), i8::MAX);
	}

	#[test]
	#[should_panic]
	fn first_on_continuous_panics() {
		let _ = ii(1.0, 2.0).first();
	}

	#[test]
	fn ordering_tests() {
		assert!(ie(1, 3) < ie(2, 3));
		assert!(ie(1, 3) < ie(1, 4));
		assert!(Interval::empty() < ii(i8::MIN, i8::MIN));
		assert!(ii(1.0, 3.0) < ei(1.0, 2.0));
	}

	#[test]
	fn display_tests() {
		assert_eq!(format!("{}", ie(1, 5)), "[1,5)");
		assert_eq!(format!("{}", ei(1, 5)), "(1,5]");
		assert_eq!(format!("{}", ee(1.5, 2.0)), "(1.5,2)");
		assert_eq!(format!("{}", ie(5, 5)), "[]");
	}

	#[test]
	fn conversion_tests() {
		assert_eq!(Interval::from(1..5), ie(1, 5));
		assert_eq!(Interval::from(1..=5), ii(1, 5));
		assert_eq!(
			Interval::try_from((Bound::Excluded(1), Bound::Included(5))),
			Ok(ei(1, 5))
		);
		assert_eq!(
			Interval::try_from((Bound::Unbounded, Bound::Included(5))),
			Err(TryFromBoundsError)
		);
		assert_eq!(ie(1, 5).start_bound(), Bound::Included(&1));
		assert_eq!(ie(1, 5).end_bound(), Bound::Excluded(&5));
	}
}
