//! A module containing [`SplitIntervalMap`].

use alloc::vec::Vec;
use core::fmt;
use core::ops::{AddAssign, SubAssign};

use itertools::Itertools;
use log::trace;

use crate::codomain::Codomain;
use crate::domain::Domain;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::tree::{IntervalTree, Run};

/// An ordered map from intervals of domain points to aggregated
/// [`Codomain`] values based on [`BTreeMap`].
///
/// Inserting a value over an interval adds it (with `+=`) to whatever
/// is already stored at each of its points, splitting the stored
/// intervals at every boundary where the resulting value changes.
/// Subtracting takes a value back out (with `-=`), and points that
/// weren't covered before receive the negated value given by
/// [`Codomain::inverse()`], or stay uncovered when there is none.
///
/// The map is always kept in one canonical shape:
/// - every stored value is non-neutral, entries whose value becomes
///   neutral are removed;
/// - two touching entries never hold equal values, they are merged into
///   one entry instead.
///
/// `I` is the generic type parameter for the [`Domain`] of the
/// intervals and `V` is the generic type parameter for the [`Codomain`]
/// values.
///
/// # Examples
/// ```
/// use intervallic::interval::ie;
/// use intervallic::SplitIntervalMap;
///
/// // count how many guests are present at each hour
/// let mut guests = SplitIntervalMap::new();
///
/// guests.insert(ie(4, 8), 1);
/// guests.insert(ie(6, 9), 1);
/// assert_eq!(guests.to_string(), "([4,6),1)([6,8),2)([8,9),1)");
///
/// guests.insert(ie(1, 9), 1);
/// assert_eq!(guests.to_string(), "([1,4),1)([4,6),2)([6,8),3)([8,9),2)");
///
/// // a neutral value never stays in the map
/// guests.subtract(ie(1, 4), 1);
/// assert_eq!(guests.to_string(), "([4,6),2)([6,8),3)([8,9),2)");
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone)]
pub struct SplitIntervalMap<I, V> {
	tree: IntervalTree<I, V>,
}

#[derive(Debug, Clone, Copy)]
enum Aggregate {
	Add,
	Subtract,
}

impl Aggregate {
	fn apply<V>(self, target: &mut V, value: &V)
	where
		V: Codomain,
	{
		match self {
			Aggregate::Add => *target += value.clone(),
			Aggregate::Subtract => *target -= value.clone(),
		}
	}

	/// The value stored where nothing was stored before, if any.
	fn gap_value<V>(self, value: &V) -> Option<V>
	where
		V: Codomain,
	{
		match self {
			Aggregate::Add => Some(value.clone()),
			Aggregate::Subtract => value.inverse(),
		}
	}
}

impl<I, V> SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	/// Makes a new, empty map.
	pub fn new() -> Self {
		SplitIntervalMap {
			tree: IntervalTree::new(),
		}
	}

	/// Makes a new map by inserting every entry of the given array in
	/// order.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::ie;
	/// use intervallic::SplitIntervalMap;
	///
	/// let map = SplitIntervalMap::from_slice([(ie(1, 4), 2), (ie(3, 6), 3)]);
	///
	/// assert_eq!(map.to_string(), "([1,3),2)([3,4),5)([4,6),3)");
	/// ```
	pub fn from_slice<const N: usize>(slice: [(Interval<I>, V); N]) -> Self {
		let mut map = SplitIntervalMap::new();
		for (interval, value) in slice {
			map.insert(interval, value);
		}
		map
	}

	/// The number of entries stored in the map.
	pub fn len(&self) -> usize {
		self.tree.len()
	}
	/// Returns `true` if the map contains no entries.
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}
	/// Removes every entry from the map.
	pub fn clear(&mut self) {
		self.tree.clear();
	}

	/// An iterator over every entry in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Interval<I>, &V)> {
		self.tree.iter()
	}
	/// An iterator over every entry overlapping `interval` in ascending
	/// order.
	pub fn overlapping(
		&self,
		interval: Interval<I>,
	) -> impl DoubleEndedIterator<Item = (&Interval<I>, &V)> {
		let interval = match interval.is_empty() {
			true => None,
			false => Some(interval),
		};

		interval
			.into_iter()
			.flat_map(|interval| self.tree.overlapping(interval))
	}
	/// Returns `true` if any point of `interval` has a value in the map.
	pub fn overlaps(&self, interval: Interval<I>) -> bool {
		self.tree.overlaps(interval)
	}

	/// Adds `value` to the value of every point of `interval`.
	///
	/// Stored entries are split wherever `interval` starts or ends
	/// inside them, the overlapping sections aggregate `value` with
	/// `+=` and the gaps between stored entries receive `value` as is.
	/// Inserting over an empty interval, or inserting a neutral value,
	/// does nothing.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	/// use intervallic::SplitIntervalMap;
	///
	/// let mut map = SplitIntervalMap::from_slice([(ie(2, 4), 10), (ie(6, 8), 20)]);
	///
	/// map.insert(ii(3, 6), 1);
	/// assert_eq!(map.to_string(), "([2,3),10)([3,4),11)([4,6),1)([6,6],21)((6,8),20)");
	/// ```
	pub fn insert(&mut self, interval: Interval<I>, value: V) {
		self.aggregate(interval, value, Aggregate::Add);
	}

	/// Takes `value` out of the value of every point of `interval`.
	///
	/// The mirror of [`SplitIntervalMap::insert()`]: overlapping
	/// sections aggregate `value` with `-=` and the gaps receive the
	/// neutral value minus `value`. Entries left holding the neutral
	/// value are removed.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::ie;
	/// use intervallic::SplitIntervalMap;
	///
	/// let mut map = SplitIntervalMap::from_slice([(ie(2, 6), 3)]);
	///
	/// map.subtract(ie(4, 8), 3);
	/// assert_eq!(map.to_string(), "([2,4),3)([6,8),-3)");
	/// ```
	pub fn subtract(&mut self, interval: Interval<I>, value: V) {
		self.aggregate(interval, value, Aggregate::Subtract);
	}

	fn aggregate(&mut self, interval: Interval<I>, value: V, aggregate: Aggregate) {
		if interval.is_empty() || value.is_neutral() {
			return;
		}

		let run = self.tree.take_overlapping(interval);
		let span = match (run.first(), run.last()) {
			(Some((first, _)), Some((last, _))) => {
				first.hull(&interval).hull(last)
			}
			_ => interval,
		};

		if run.is_empty() {
			self.store_gap(interval, aggregate.gap_value(&value));
		} else {
			trace!(
				"splitting {} entries to {aggregate:?} over {interval:?}",
				run.len()
			);
			self.split_run(interval, &value, aggregate, run);
		}

		self.join_neighbours(span);
	}

	/// Re-stores the removed `run` of entries overlapping `interval`
	/// with `value` aggregated into their overlapping sections, filling
	/// the gaps between them.
	fn split_run(
		&mut self,
		interval: Interval<I>,
		value: &V,
		aggregate: Aggregate,
		run: Run<I, V>,
	) {
		let last_index = run.len() - 1;
		let gap_value = aggregate.gap_value(value);
		let mut rest = interval;

		for (index, (current, current_value)) in run.into_iter().enumerate() {
			self.store_gap(rest.left_surplus(&current), gap_value.clone());

			if index == 0 {
				self.store(current.left_surplus(&interval), current_value.clone());
			}

			let mut section_value = current_value.clone();
			aggregate.apply(&mut section_value, value);
			self.store(current.intersection(&interval), section_value);

			if index == last_index {
				self.store_gap(rest.right_surplus(&current), gap_value.clone());
				self.store(current.right_surplus(&interval), current_value);
			}

			rest = rest.right_surplus(&current);
		}
	}

	fn store(&mut self, interval: Interval<I>, value: V) {
		if !interval.is_empty() && !value.is_neutral() {
			self.tree.insert_disjoint(interval, value);
		}
	}
	fn store_gap(&mut self, interval: Interval<I>, value: Option<V>) {
		if let Some(value) = value {
			self.store(interval, value);
		}
	}

	/// Merges touching entries with equal values within `span` and
	/// with the entries touching `span` on either side.
	fn join_neighbours(&mut self, span: Interval<I>) {
		let left = self.tree.touching_left(span).map(|(key, _)| *key);
		let right = self.tree.touching_right(span).map(|(key, _)| *key);

		let mut entries = Vec::new();
		if let Some(left) = left {
			entries.extend(self.tree.take_overlapping(left));
		}
		entries.extend(self.tree.take_overlapping(span));
		if let Some(right) = right {
			entries.extend(self.tree.take_overlapping(right));
		}

		let joined = entries.into_iter().coalesce(|(x, x_value), (y, y_value)| {
			match x_value == y_value && x.touches(&y) {
				true => Ok((x.extend(&y), x_value)),
				false => Err(((x, x_value), (y, y_value))),
			}
		});
		for (interval, value) in joined {
			self.tree.insert_disjoint(interval, value);
		}
	}

	/// Returns `true` if a single stored entry covers all of `interval`
	/// and holds exactly `value`.
	///
	/// The empty interval is contained in every map.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	/// use intervallic::SplitIntervalMap;
	///
	/// let map = SplitIntervalMap::from_slice([(ie(4, 8), 1), (ie(6, 9), 1)]);
	///
	/// assert!(map.contains(ie(6, 8), &2));
	/// assert!(!map.contains(ie(6, 8), &1));
	/// assert!(!map.contains(ii(5, 6), &1));
	/// ```
	pub fn contains(&self, interval: Interval<I>, value: &V) -> bool {
		if interval.is_empty() {
			return true;
		}

		let mut overlapping = self.tree.overlapping(interval);
		match (overlapping.next(), overlapping.next()) {
			(Some((stored, stored_value)), None) => {
				stored.contains_interval(&interval) && stored_value == value
			}
			_ => false,
		}
	}

	/// Returns `true` if the point has a value in the map.
	pub fn contains_point(&self, point: I) -> bool {
		self.tree.get_at_point(point).is_some()
	}
	/// Returns a reference to the value at the point, if any.
	pub fn get_at_point(&self, point: I) -> Option<&V> {
		self.tree.get_at_point(point).map(|(_, value)| value)
	}
	/// Returns the entry holding the point, if any.
	pub fn get_key_value_at_point(&self, point: I) -> Option<(&Interval<I>, &V)> {
		self.tree.get_at_point(point)
	}

	/// The set of every point holding a value in the map.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::ie;
	/// use intervallic::SplitIntervalMap;
	///
	/// let map = SplitIntervalMap::from_slice([(ie(1, 3), 1), (ie(3, 5), 2), (ie(7, 9), 3)]);
	///
	/// assert_eq!(map.len(), 3);
	/// assert_eq!(map.domain().to_string(), "[1,5)[7,9)");
	/// ```
	pub fn domain(&self) -> IntervalSet<I> {
		self.tree.iter().map(|(interval, _)| *interval).collect()
	}

	/// Returns a new map holding the entries of `self` restricted to
	/// the points of `interval`.
	///
	/// # Examples
	/// ```
	/// use intervallic::interval::{ie, ii};
	/// use intervallic::SplitIntervalMap;
	///
	/// let map = SplitIntervalMap::from_slice([(ie(1, 4), 1), (ie(4, 8), 2)]);
	///
	/// assert_eq!(map.intersection(ii(3, 5)).to_string(), "([3,4),1)([4,5],2)");
	/// ```
	pub fn intersection(&self, interval: Interval<I>) -> Self {
		let mut output = SplitIntervalMap::new();
		for (stored, value) in self.overlapping(interval) {
			output.store(stored.intersection(&interval), value.clone());
		}
		output
	}

	/// The first entry in the map.
	pub fn first_entry(&self) -> Option<(&Interval<I>, &V)> {
		self.tree.first()
	}
	/// The last entry in the map.
	pub fn last_entry(&self) -> Option<(&Interval<I>, &V)> {
		self.tree.last()
	}
}

impl<I, V> Default for SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	fn default() -> Self {
		SplitIntervalMap::new()
	}
}

impl<I, V> PartialEq for SplitIntervalMap<I, V>
where
	I: Domain,
	V: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.tree == other.tree
	}
}
impl<I, V> Eq for SplitIntervalMap<I, V>
where
	I: Domain + Eq,
	V: Eq,
{
}

impl<I, V> AddAssign<&SplitIntervalMap<I, V>> for SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	fn add_assign(&mut self, other: &SplitIntervalMap<I, V>) {
		for (interval, value) in other.iter() {
			self.insert(*interval, value.clone());
		}
	}
}
impl<I, V> SubAssign<&SplitIntervalMap<I, V>> for SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	fn sub_assign(&mut self, other: &SplitIntervalMap<I, V>) {
		for (interval, value) in other.iter() {
			self.subtract(*interval, value.clone());
		}
	}
}
impl<I, V> AddAssign<(Interval<I>, V)> for SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	fn add_assign(&mut self, (interval, value): (Interval<I>, V)) {
		self.insert(interval, value);
	}
}
impl<I, V> SubAssign<(Interval<I>, V)> for SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	fn sub_assign(&mut self, (interval, value): (Interval<I>, V)) {
		self.subtract(interval, value);
	}
}

impl<I, V> FromIterator<(Interval<I>, V)> for SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	fn from_iter<It: IntoIterator<Item = (Interval<I>, V)>>(iter: It) -> Self {
		let mut map = SplitIntervalMap::new();
		map.extend(iter);
		map
	}
}
impl<I, V> Extend<(Interval<I>, V)> for SplitIntervalMap<I, V>
where
	I: Domain,
	V: Codomain,
{
	fn extend<It: IntoIterator<Item = (Interval<I>, V)>>(&mut self, iter: It) {
		for (interval, value) in iter {
			self.insert(interval, value);
		}
	}
}

impl<I, V> IntoIterator for SplitIntervalMap<I, V> {
	type Item = (Interval<I>, V);
	type IntoIter = IntoIter<I, V>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.tree.into_iter(),
		}
	}
}
/// An owning iterator over the entries of a [`SplitIntervalMap`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`SplitIntervalMap`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I, V> {
	inner: <IntervalTree<I, V> as IntoIterator>::IntoIter,
}
impl<I, V> Iterator for IntoIter<I, V> {
	type Item = (Interval<I>, V);
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}

/// Concatenates every entry in ascending order as `(interval,value)`.
impl<I, V> fmt::Display for SplitIntervalMap<I, V>
where
	I: Domain + fmt::Display,
	V: Codomain + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let entries = self.iter().format_with("", |(interval, value), f| {
			f(&format_args!("({interval},{value})"))
		});
		write!(f, "{entries}")
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::SplitIntervalMap;
	use crate::codomain::Codomain;
	use crate::domain::Domain;
	use crate::interval::Interval;

	impl<I, V> Serialize for SplitIntervalMap<I, V>
	where
		I: Domain + Serialize,
		V: Codomain + Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for (interval, value) in self.iter() {
				seq.serialize_element(&(interval, value))?;
			}
			seq.end()
		}
	}

	impl<'de, I, V> Deserialize<'de> for SplitIntervalMap<I, V>
	where
		I: Domain + Deserialize<'de>,
		V: Codomain + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(SplitIntervalMapVisitor {
				i: PhantomData,
				v: PhantomData,
			})
		}
	}

	struct SplitIntervalMapVisitor<I, V> {
		i: PhantomData<I>,
		v: PhantomData<V>,
	}

	impl<'de, I, V> Visitor<'de> for SplitIntervalMapVisitor<I, V>
	where
		I: Domain + Deserialize<'de>,
		V: Codomain + Deserialize<'de>,
	{
		type Value = SplitIntervalMap<I, V>;

		fn expecting(
			&self,
			formatter: &mut alloc::fmt::Formatter,
		) -> alloc::fmt::Result {
			formatter.write_str("a sequence of interval and value pairs")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut map = SplitIntervalMap::new();
			while let Some((interval, value)) =
				access.next_element::<(Interval<I>, V)>()?
			{
				map.insert(interval, value);
			}
			Ok(map)
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::ToString;
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::codomain::ElementSet;
	use crate::interval::{ee, ei, ie, ii};

	fn overlap_counter() -> SplitIntervalMap<i8, i32> {
		SplitIntervalMap::from_slice([(ie(4, 8), 1), (ie(6, 9), 1), (ie(1, 9), 1)])
	}

	fn entries<V: Codomain>(map: &SplitIntervalMap<i8, V>) -> Vec<(Interval<i8>, V)> {
		map.iter()
			.map(|(interval, value)| (*interval, value.clone()))
			.collect()
	}

	fn assert_canonical<V: Codomain + core::fmt::Debug>(map: &SplitIntervalMap<i8, V>) {
		for (_, value) in map.iter() {
			assert!(!value.is_neutral());
		}
		for ((x, x_value), (y, y_value)) in map.iter().tuple_windows() {
			assert!(x.exclusive_less(y));
			if x.touches(y) {
				assert!(x_value != y_value, "equal touching entries {x:?} {y:?}");
			}
		}
	}

	#[test]
	fn overlap_counting() {
		let map = overlap_counter();
		assert_eq!(
			entries(&map),
			[(ie(1, 4), 1), (ie(4, 6), 2), (ie(6, 8), 3), (ie(8, 9), 2)]
		);
		assert_eq!(map.get_at_point(7), Some(&3));
		assert_eq!(map.get_at_point(9), None);
		assert_canonical(&map);
	}

	#[test]
	fn insert_into_gaps() {
		let mut map = SplitIntervalMap::from_slice([(ie(1, 3), 1), (ie(5, 7), 1)]);
		map.insert(ie(0, 9), 2);
		assert_eq!(
			entries(&map),
			[(ie(0, 1), 2), (ie(1, 3), 3), (ie(3, 5), 2), (ie(5, 7), 3), (ie(7, 9), 2)]
		);
		assert_canonical(&map);
	}

	#[test]
	fn neutral_results_are_removed() {
		let mut map = overlap_counter();
		map.subtract(ie(1, 9), 1);
		map.subtract(ie(4, 8), 1);
		map.subtract(ie(6, 9), 1);
		assert!(map.is_empty());

		let mut map = overlap_counter();
		map.insert(ie(6, 8), -3);
		assert_eq!(entries(&map), [(ie(1, 4), 1), (ie(4, 6), 2), (ie(8, 9), 2)]);
	}

	#[test]
	fn subtract_negates_gaps() {
		let mut map = SplitIntervalMap::<i8, i32>::new();
		map.subtract(ie(2, 5), 4);
		assert_eq!(entries(&map), [(ie(2, 5), -4)]);

		map.insert(ie(2, 5), 4);
		assert!(map.is_empty());
	}

	#[test]
	fn unsigned_subtract_leaves_gaps() {
		let mut map = SplitIntervalMap::<i8, u32>::new();
		map.insert(ie(1, 3), 5);
		map.subtract(ie(0, 4), 2);
		assert_eq!(map.to_string(), "([1,3),3)");

		map.subtract(ie(5, 6), 1);
		assert_eq!(entries(&map), [(ie(1, 3), 3)]);

		map.subtract(ii(0, 9), 3);
		assert!(map.is_empty());
	}

	#[test]
	fn signed_subtract_at_type_limit() {
		let mut map = SplitIntervalMap::<i8, i8>::new();
		map.subtract(ie(1, 3), i8::MIN);
		assert!(map.is_empty());

		map.subtract(ie(1, 3), i8::MAX);
		assert_eq!(entries(&map), [(ie(1, 3), -i8::MAX)]);
	}

	#[test]
	fn continuous_touching_inserts() {
		let mut map = SplitIntervalMap::new();
		map.insert(ii(4.0, 6.0), 1);
		map.insert(ie(5.0, 6.0), 1);
		map.insert(ii(4.0, 5.0), 1);
		assert_eq!(map.to_string(), "([4,5),2)([5,5],3)((5,6),2)([6,6],1)");

		let mut map = SplitIntervalMap::<i8, i32>::new();
		map.insert(ie(4, 5), 1);
		map.insert(ie(5, 6), 2);
		map.insert(ii(6, 6), 3);
		map.insert(ii(4, 5), 1);
		assert_eq!(entries(&map), [(ie(4, 5), 2), (ii(5, 6), 3)]);
	}

	#[test]
	fn no_op_inserts() {
		let mut map = overlap_counter();
		map.insert(Interval::empty(), 5);
		map.insert(ie(3, 3), 5);
		map.insert(ie(1, 9), 0);
		map.subtract(ie(1, 9), 0);
		assert_eq!(map, overlap_counter());
	}

	#[test]
	fn equal_touching_values_join() {
		let mut map = SplitIntervalMap::new();
		map.insert(ie(1, 3), 1);
		map.insert(ie(3, 5), 1);
		assert_eq!(entries(&map), [(ie(1, 5), 1)]);

		//lowering the middle back to its neighbours' value
		let mut map = SplitIntervalMap::from_slice([(ie(1, 9), 1), (ie(4, 6), 1)]);
		assert_eq!(map.len(), 3);
		map.subtract(ie(4, 6), 1);
		assert_eq!(entries(&map), [(ie(1, 9), 1)]);
		assert_canonical(&map);
	}

	#[test]
	fn contains_tests() {
		let map = overlap_counter();
		assert!(map.contains(ie(6, 8), &3));
		assert!(map.contains(ii(6, 6), &3));
		assert!(!map.contains(ie(6, 8), &2));
		assert!(!map.contains(ie(5, 7), &2));
		assert!(!map.contains(ie(8, 10), &2));
		assert!(map.contains(Interval::empty(), &7));

		assert!(map.contains_point(1));
		assert!(!map.contains_point(0));
		assert_eq!(map.get_key_value_at_point(5), Some((&ie(4, 6), &2)));
	}

	#[test]
	fn domain_and_intersection() {
		let mut map = overlap_counter();
		map.insert(ie(12, 14), 7);
		assert_eq!(map.domain().to_string(), "[1,9)[12,14)");

		let restricted = map.intersection(ie(5, 13));
		assert_eq!(
			entries(&restricted),
			[(ie(5, 6), 2), (ie(6, 8), 3), (ie(8, 9), 2), (ie(12, 13), 7)]
		);
		assert!(map.intersection(Interval::empty()).is_empty());
		assert_eq!(map.first_entry(), Some((&ie(1, 4), &1)));
		assert_eq!(map.last_entry(), Some((&ie(12, 14), &7)));
	}

	#[test]
	fn overlapping_tests() {
		let map = overlap_counter();
		let overlapping: Vec<_> = map.overlapping(ei(5, 6)).map(|(key, _)| *key).collect();
		assert_eq!(overlapping, [ie(6, 8)]);
		assert_eq!(map.overlapping(Interval::empty()).count(), 0);
		assert!(map.overlaps(ii(0, 1)));
		assert!(!map.overlaps(ie(9, 12)));
	}

	#[test]
	fn continuous_domain() {
		let mut map = SplitIntervalMap::new();
		map.insert(ie(1.0, 3.0), 1);
		map.insert(ii(2.0, 4.0), 1);
		assert_eq!(map.to_string(), "([1,2),1)([2,3),2)([3,4],1)");
		assert_eq!(map.get_at_point(2.5), Some(&2));

		//the excluded point keeps its own entry
		map.subtract(ee(1.0, 2.0), 1);
		assert_eq!(map.to_string(), "([1,1],1)([2,3),2)([3,4],1)");
	}

	#[test]
	fn element_set_values() {
		let mut party = SplitIntervalMap::new();
		party.insert(ie(20, 22), ElementSet::from(["Mary", "Harry"]));
		party.insert(ie(21, 23), ElementSet::from(["Diana"]));
		assert_eq!(
			party.to_string(),
			"([20,21),{Harry Mary})([21,22),{Diana Harry Mary})([22,23),{Diana})"
		);

		party.subtract(ie(20, 23), ElementSet::from(["Harry"]));
		assert_eq!(
			party.to_string(),
			"([20,21),{Mary})([21,22),{Diana Mary})([22,23),{Diana})"
		);

		party.subtract(ie(20, 23), ElementSet::from(["Mary"]));
		assert_eq!(party.to_string(), "([21,23),{Diana})");
	}

	#[test]
	fn operator_tests() {
		let mut map = overlap_counter();
		map += (ie(9, 10), 2);
		assert_eq!(map.to_string(), "([1,4),1)([4,6),2)([6,8),3)([8,10),2)");

		map -= &SplitIntervalMap::from_slice([(ie(4, 10), 2)]);
		assert_eq!(map.to_string(), "([1,4),1)([6,8),1)");

		map += &SplitIntervalMap::from_slice([(ie(4, 6), 1)]);
		assert_eq!(map.to_string(), "([1,8),1)");

		map -= (ie(1, 8), 1);
		assert!(map.is_empty());
	}

	#[test]
	fn collect_and_into_iter() {
		let map: SplitIntervalMap<i8, i32> =
			[(ie(4, 8), 1), (ie(6, 9), 1), (ie(1, 9), 1)].into_iter().collect();
		assert_eq!(map, overlap_counter());

		let owned: Vec<_> = map.into_iter().collect();
		assert_eq!(owned.len(), 4);
		assert_eq!(owned[2], (ie(6, 8), 3));
	}
}
