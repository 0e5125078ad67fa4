//! A module containing [`IntervalBaseSet`], the interval set core shared
//! by [`IntervalSet`] and [`SeparateIntervalSet`].
//!
//! Both sets store pairwise disjoint, non-empty intervals in ascending
//! order and resolve overlaps identically. They differ only in their
//! [`NeighbourPolicy`]: what happens to stored intervals which merely
//! touch a newly added one.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{AddAssign, MulAssign, SubAssign};

use itertools::Itertools;
use log::trace;

use crate::domain::Domain;
use crate::interval::{BoundKind, Interval};
use crate::tree::IntervalTree;

pub mod joining;
pub mod separate;

pub use joining::{IntervalSet, Joining};
pub use separate::{SeparateIntervalSet, Separating};

mod sealed {
	pub trait Sealed {}
}

/// How an [`IntervalBaseSet`] treats stored intervals that touch a newly
/// added interval.
///
/// This trait is sealed, its only implementors are [`Joining`] and
/// [`Separating`].
pub trait NeighbourPolicy: sealed::Sealed + Sized {
	/// Called after `interval` has been stored without colliding with
	/// anything, to deal with its touching neighbours.
	fn handle_neighbours<I>(
		set: &mut IntervalBaseSet<I, Self>,
		interval: Interval<I>,
	) where
		I: Domain;

	/// Returns `true` if every point of the non-empty `interval` is in
	/// the set.
	fn contains<I>(set: &IntervalBaseSet<I, Self>, interval: Interval<I>) -> bool
	where
		I: Domain;
}

/// An ordered set of pairwise disjoint intervals based on [`BTreeMap`].
///
/// `I` is the generic type parameter for the [`Domain`] the intervals
/// range over and `P` is the [`NeighbourPolicy`] of the set. You will
/// usually use one of the two aliases: [`IntervalSet`] which joins
/// touching intervals, or [`SeparateIntervalSet`] which keeps them
/// apart.
///
/// # Examples
/// ```
/// use intervallic::interval::{ie, ii};
/// use intervallic::{IntervalSet, SeparateIntervalSet};
///
/// let mut joined = IntervalSet::new();
/// joined.add(ie(1, 3));
/// joined.add(ie(3, 5));
/// assert_eq!(joined.to_string(), "[1,5)");
///
/// let mut separate = SeparateIntervalSet::new();
/// separate.add(ie(1, 3));
/// separate.add(ie(3, 5));
/// assert_eq!(separate.to_string(), "[1,3)[3,5)");
///
/// // both hold the same points
/// assert!(joined.is_element_equal(&separate));
///
/// separate.subtract(ii(2, 3));
/// assert_eq!(separate.to_string(), "[1,2)(3,5)");
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone)]
pub struct IntervalBaseSet<I, P> {
	pub(crate) tree: IntervalTree<I, ()>,
	policy: PhantomData<P>,
}

impl<I, P> IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
{
	/// Makes a new, empty set.
	///
	/// # Examples
	/// ```
	/// use intervallic::IntervalSet;
	///
	/// let set: IntervalSet<i8> = IntervalSet::new();
	/// assert!(set.is_empty());
	/// ```
	pub fn new() -> Self {
		IntervalBaseSet {
			tree: IntervalTree::new(),
			policy: PhantomData,
		}
	}

	/// Makes a new set by adding every interval of the given array in
	/// order.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::ie;
	/// use intervallic::IntervalSet;
	///
	/// let set = IntervalSet::from_slice([ie(1, 4), ie(3, 8), ie(10, 12)]);
	///
	/// assert_eq!(set.to_string(), "[1,8)[10,12)");
	/// ```
	pub fn from_slice<const N: usize>(slice: [Interval<I>; N]) -> Self {
		let mut set = IntervalBaseSet::new();
		for interval in slice {
			set.add(interval);
		}
		set
	}

	/// The number of intervals stored in the set.
	pub fn len(&self) -> usize {
		self.tree.len()
	}
	/// Returns `true` if the set contains no intervals.
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}
	/// Removes every interval from the set.
	pub fn clear(&mut self) {
		self.tree.clear();
	}

	/// An iterator over every stored interval in ascending order.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::ie;
	/// use intervallic::SeparateIntervalSet;
	///
	/// let set = SeparateIntervalSet::from_slice([ie(5, 8), ie(1, 3), ie(3, 5)]);
	///
	/// let mut iter = set.iter();
	/// assert_eq!(iter.next(), Some(&ie(1, 3)));
	/// assert_eq!(iter.next(), Some(&ie(3, 5)));
	/// assert_eq!(iter.next(), Some(&ie(5, 8)));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Interval<I>> {
		self.tree.iter().map(first)
	}

	/// Adds every point of `interval` to the set.
	///
	/// Stored intervals overlapping `interval` are merged with it into
	/// one interval. Whether stored intervals merely touching it are
	/// merged too is up to the set's [`NeighbourPolicy`]. Adding an
	/// empty interval does nothing.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	/// use intervallic::SeparateIntervalSet;
	///
	/// let mut set = SeparateIntervalSet::from_slice([ie(1, 3), ie(5, 7), ie(9, 11)]);
	///
	/// set.add(ii(2, 5));
	/// assert_eq!(set.to_string(), "[1,7)[9,11)");
	///
	/// set.add(ie(7, 9));
	/// assert_eq!(set.to_string(), "[1,7)[7,9)[9,11)");
	/// ```
	pub fn add(&mut self, interval: Interval<I>) {
		if interval.is_empty() {
			return;
		}

		let run = self.tree.take_overlapping(interval);
		match (run.first(), run.last()) {
			(Some((first, _)), Some((last, _))) => {
				let extended = first
					.left_surplus(&interval)
					.extend(&interval)
					.extend(&last.right_surplus(&interval));

				trace!(
					"{interval:?} collided with {} intervals, re-adding as {extended:?}",
					run.len()
				);

				self.add(extended);
			}
			_ => {
				self.tree.insert_disjoint(interval, ());
				P::handle_neighbours(self, interval);
			}
		}
	}
	/// Same as [`IntervalBaseSet::add()`].
	pub fn insert(&mut self, interval: Interval<I>) {
		self.add(interval);
	}
	/// Adds a single point to the set.
	pub fn add_point(&mut self, point: I) {
		self.add(Interval::point(point));
	}

	/// Removes every point of `interval` from the set.
	///
	/// Stored intervals that overlap `interval` are shortened or split
	/// in two. Subtracting an empty interval does nothing.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ie, ii};
	/// use intervallic::IntervalSet;
	///
	/// let mut set = IntervalSet::from_slice([ie(1, 10), ie(12, 14)]);
	///
	/// set.subtract(ee(3, 6));
	/// assert_eq!(set.to_string(), "[1,3][6,10)[12,14)");
	///
	/// set.subtract(ii(8, 12));
	/// assert_eq!(set.to_string(), "[1,3][6,8)(12,14)");
	/// ```
	pub fn subtract(&mut self, interval: Interval<I>) {
		if interval.is_empty() {
			return;
		}

		let run = self.tree.take_overlapping(interval);
		if let (Some((first, _)), Some((last, _))) = (run.first(), run.last()) {
			self.add(first.left_surplus(&interval));
			self.add(last.right_surplus(&interval));
		}
	}
	/// Removes a single point from the set.
	pub fn subtract_point(&mut self, point: I) {
		self.subtract(Interval::point(point));
	}

	/// Returns `true` if the point is in the set.
	pub fn contains_point(&self, point: I) -> bool {
		self.tree.get_at_point(point).is_some()
	}
	/// Returns the stored interval containing the point, if any.
	pub fn get_at_point(&self, point: I) -> Option<&Interval<I>> {
		self.tree.get_at_point(point).map(first)
	}

	/// Returns `true` if every point of `interval` is in the set.
	///
	/// The empty interval is contained in every set.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	/// use intervallic::{Interval, IntervalSet, SeparateIntervalSet};
	///
	/// let joined = IntervalSet::from_slice([ie(1, 3), ie(3, 5)]);
	/// let separate = SeparateIntervalSet::from_slice([ie(1, 3), ie(3, 5)]);
	///
	/// assert!(joined.contains(ii(2, 4)));
	/// assert!(separate.contains(ii(2, 4)));
	/// assert!(!separate.contains(ii(2, 5)));
	/// assert!(separate.contains(Interval::empty()));
	/// ```
	pub fn contains(&self, interval: Interval<I>) -> bool {
		interval.is_empty() || P::contains(self, interval)
	}
	/// Returns `true` if every point of `other` is in `self`.
	pub fn contains_set<Q>(&self, other: &IntervalBaseSet<I, Q>) -> bool
	where
		Q: NeighbourPolicy,
	{
		other.iter().all(|interval| self.contains(*interval))
	}
	/// Returns `true` if every point of `self` is in `other`.
	pub fn contained_in<Q>(&self, other: &IntervalBaseSet<I, Q>) -> bool
	where
		Q: NeighbourPolicy,
	{
		other.contains_set(self)
	}

	/// Returns `true` if any point of `interval` is in the set.
	pub fn overlaps(&self, interval: Interval<I>) -> bool {
		self.tree.overlaps(interval)
	}
	/// An iterator over every stored interval overlapping `interval` in
	/// ascending order.
	pub fn overlapping(
		&self,
		interval: Interval<I>,
	) -> impl DoubleEndedIterator<Item = &Interval<I>> {
		let interval = match interval.is_empty() {
			true => None,
			false => Some(interval),
		};

		interval
			.into_iter()
			.flat_map(|interval| self.tree.overlapping(interval).map(first))
	}
	/// Returns `true` if no point of `interval` is in the set.
	pub fn is_disjoint(&self, interval: Interval<I>) -> bool {
		!self.overlaps(interval)
	}
	/// Returns `true` if the two sets have no point in common.
	pub fn is_disjoint_set<Q>(&self, other: &IntervalBaseSet<I, Q>) -> bool
	where
		Q: NeighbourPolicy,
	{
		other.iter().all(|interval| self.is_disjoint(*interval))
	}

	/// Returns a new set holding the points of `self` that are also in
	/// `interval`.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	/// use intervallic::SeparateIntervalSet;
	///
	/// let set = SeparateIntervalSet::from_slice([ie(1, 3), ie(3, 5), ie(8, 9)]);
	///
	/// assert_eq!(set.intersection(ii(2, 8)).to_string(), "[2,3)[3,5)[8,9)");
	/// ```
	pub fn intersection(&self, interval: Interval<I>) -> Self {
		let mut output = IntervalBaseSet::new();
		for stored in self.overlapping(interval) {
			output.add(stored.intersection(&interval));
		}
		output
	}
	/// Returns a new set holding the points in both sets.
	pub fn intersection_set<Q>(&self, other: &IntervalBaseSet<I, Q>) -> Self
	where
		Q: NeighbourPolicy,
	{
		let mut output = IntervalBaseSet::new();
		for interval in other.iter() {
			for stored in self.overlapping(*interval) {
				output.add(stored.intersection(interval));
			}
		}
		output
	}

	/// Merges every pair of touching stored intervals so that the set
	/// is left with the fewest intervals holding its points.
	///
	/// This never changes an [`IntervalSet`].
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::ie;
	/// use intervallic::SeparateIntervalSet;
	///
	/// let mut set = SeparateIntervalSet::from_slice([ie(1, 3), ie(3, 5), ie(6, 8)]);
	/// set.join();
	///
	/// assert_eq!(set.to_string(), "[1,5)[6,8)");
	/// ```
	pub fn join(&mut self) {
		let joined: Vec<Interval<I>> = self.joined().collect();

		self.tree.clear();
		for interval in joined {
			self.tree.insert_disjoint(interval, ());
		}
	}
	fn joined(&self) -> impl Iterator<Item = Interval<I>> + '_ {
		self.iter().copied().coalesce(|x, y| match x.touches(&y) {
			true => Ok(x.extend(&y)),
			false => Err((x, y)),
		})
	}

	/// Returns `true` if both sets hold the same points, regardless of
	/// how they are split into intervals.
	pub fn is_element_equal<Q>(&self, other: &IntervalBaseSet<I, Q>) -> bool
	where
		Q: NeighbourPolicy,
	{
		self.joined().eq(other.joined())
	}

	/// The first stored interval.
	pub fn first_interval(&self) -> Option<&Interval<I>> {
		self.tree.first().map(first)
	}
	/// The last stored interval.
	pub fn last_interval(&self) -> Option<&Interval<I>> {
		self.tree.last().map(first)
	}
	/// The lower bound value of the first stored interval.
	pub fn lower(&self) -> Option<I> {
		self.first_interval().map(|interval| interval.lower)
	}
	/// The upper bound value of the last stored interval.
	pub fn upper(&self) -> Option<I> {
		self.last_interval().map(|interval| interval.upper)
	}
	/// The smallest interval containing every point of the set, empty
	/// if the set is.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ei, ie};
	/// use intervallic::IntervalSet;
	///
	/// let set = IntervalSet::from_slice([ee(1, 3), ie(6, 8)]);
	///
	/// assert_eq!(set.hull(), ee(1, 8));
	/// assert_eq!(set.hull(), ei(1, 7));
	/// ```
	pub fn hull(&self) -> Interval<I> {
		match (self.first_interval(), self.last_interval()) {
			(Some(first), Some(last)) => first.hull(last),
			_ => Interval::empty(),
		}
	}
	/// The smallest point in the set, if any.
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete.
	pub fn first(&self) -> Option<I> {
		self.first_interval().map(Interval::first)
	}
	/// The largest point in the set, if any.
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete.
	pub fn last(&self) -> Option<I> {
		self.last_interval().map(Interval::last)
	}

	/// The number of points in the set, `None` if that doesn't fit in a
	/// `usize`.
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ie, ii};
	/// use intervallic::IntervalSet;
	///
	/// let set = IntervalSet::from_slice([ie(1, 4), ee(5, 9), ii(12, 12)]);
	///
	/// assert_eq!(set.len(), 3);
	/// assert_eq!(set.size(), Some(7));
	/// ```
	pub fn size(&self) -> Option<usize> {
		assert!(I::DISCRETE, "size() requires a discrete domain");

		self.iter()
			.try_fold(0_usize, |size, interval| size.checked_add(interval.size()?))
	}

	/// Rewrites every stored interval to hold the same points with the
	/// given bound kinds, see [`Interval::uniform_bounds()`].
	///
	/// # Panics
	///
	/// Panics if the domain is not discrete.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ee, ie, ii};
	/// use intervallic::{BoundKind, SeparateIntervalSet};
	///
	/// let mut set = SeparateIntervalSet::from_slice([ii(1, 3), ee(3, 6), ie(6, 8)]);
	///
	/// set.uniform_bounds(BoundKind::RightOpen);
	/// assert_eq!(set.to_string(), "[1,4)[4,6)[6,8)");
	/// ```
	pub fn uniform_bounds(&mut self, bounds: BoundKind) {
		assert!(I::DISCRETE, "uniform_bounds() requires a discrete domain");

		let tree = mem::replace(&mut self.tree, IntervalTree::new());
		for (interval, ()) in tree {
			self.tree.insert_disjoint(interval.uniform_bounds(bounds), ());
		}
	}
}

fn first<A, B>((a, _): (A, B)) -> A {
	a
}

impl<I, P> Default for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
{
	fn default() -> Self {
		IntervalBaseSet::new()
	}
}

/// Two sets are equal if they store exactly the same intervals. Use
/// [`IntervalBaseSet::is_element_equal()`] to compare their points.
impl<I, P> PartialEq for IntervalBaseSet<I, P>
where
	I: Domain,
{
	fn eq(&self, other: &Self) -> bool {
		self.tree == other.tree
	}
}
impl<I, P> Eq for IntervalBaseSet<I, P> where I: Domain + Eq {}

impl<I, P, Q> AddAssign<&IntervalBaseSet<I, Q>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
	Q: NeighbourPolicy,
{
	fn add_assign(&mut self, other: &IntervalBaseSet<I, Q>) {
		for interval in other.iter() {
			self.add(*interval);
		}
	}
}
impl<I, P, Q> SubAssign<&IntervalBaseSet<I, Q>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
	Q: NeighbourPolicy,
{
	fn sub_assign(&mut self, other: &IntervalBaseSet<I, Q>) {
		for interval in other.iter() {
			self.subtract(*interval);
		}
	}
}
impl<I, P, Q> MulAssign<&IntervalBaseSet<I, Q>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
	Q: NeighbourPolicy,
{
	fn mul_assign(&mut self, other: &IntervalBaseSet<I, Q>) {
		*self = self.intersection_set(other);
	}
}

impl<I, P> AddAssign<Interval<I>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
{
	fn add_assign(&mut self, interval: Interval<I>) {
		self.add(interval);
	}
}
impl<I, P> SubAssign<Interval<I>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
{
	fn sub_assign(&mut self, interval: Interval<I>) {
		self.subtract(interval);
	}
}
impl<I, P> MulAssign<Interval<I>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
{
	fn mul_assign(&mut self, interval: Interval<I>) {
		*self = self.intersection(interval);
	}
}

impl<I, P> FromIterator<Interval<I>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
{
	fn from_iter<It: IntoIterator<Item = Interval<I>>>(iter: It) -> Self {
		let mut set = IntervalBaseSet::new();
		set.extend(iter);
		set
	}
}
impl<I, P> Extend<Interval<I>> for IntervalBaseSet<I, P>
where
	I: Domain,
	P: NeighbourPolicy,
{
	fn extend<It: IntoIterator<Item = Interval<I>>>(&mut self, iter: It) {
		for interval in iter {
			self.add(interval);
		}
	}
}

impl<I, P> IntoIterator for IntervalBaseSet<I, P> {
	type Item = Interval<I>;
	type IntoIter = IntoIter<I>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.tree.into_iter(),
		}
	}
}
/// An owning iterator over the intervals of an [`IntervalBaseSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalBaseSet`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I> {
	inner: <IntervalTree<I, ()> as IntoIterator>::IntoIter,
}
impl<I> Iterator for IntoIter<I> {
	type Item = Interval<I>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(first)
	}
}

/// Concatenates every stored interval in ascending order, so
/// `[1,3)[3,5)` for a set storing two intervals.
impl<I, P> fmt::Display for IntervalBaseSet<I, P>
where
	I: Domain + fmt::Display,
	P: NeighbourPolicy,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.iter().format(""))
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::{IntervalBaseSet, NeighbourPolicy};
	use crate::domain::Domain;
	use crate::interval::Interval;

	impl<I, P> Serialize for IntervalBaseSet<I, P>
	where
		I: Domain + Serialize,
		P: NeighbourPolicy,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for interval in self.iter() {
				seq.serialize_element(interval)?;
			}
			seq.end()
		}
	}

	impl<'de, I, P> Deserialize<'de> for IntervalBaseSet<I, P>
	where
		I: Domain + Deserialize<'de>,
		P: NeighbourPolicy,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalBaseSetVisitor {
				i: PhantomData,
				p: PhantomData,
			})
		}
	}

	struct IntervalBaseSetVisitor<I, P> {
		i: PhantomData<I>,
		p: PhantomData<P>,
	}

	impl<'de, I, P> Visitor<'de> for IntervalBaseSetVisitor<I, P>
	where
		I: Domain + Deserialize<'de>,
		P: NeighbourPolicy,
	{
		type Value = IntervalBaseSet<I, P>;

		fn expecting(
			&self,
			formatter: &mut alloc::fmt::Formatter,
		) -> alloc::fmt::Result {
			formatter.write_str("a sequence of intervals")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = IntervalBaseSet::new();
			while let Some(interval) = access.next_element::<Interval<I>>()? {
				set.add(interval);
			}
			Ok(set)
		}
	}
}
