//! The ordered interval collection every container stores its entries
//! in.
//!
//! Keys are pairwise disjoint, non-empty intervals. Every lookup is made
//! with a comparator closure rather than a key. Overlap queries are
//! ranges between the stored intervals covering the query's two bound
//! positions.

use core::cmp::Ordering;

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;
use smallvec::SmallVec;

use crate::bound_ord::{touching, BoundOrd};
use crate::domain::Domain;
use crate::interval::Interval;

/// The entries removed by a single overlap query. Most queries only
/// collide with one or two stored intervals.
pub(crate) type Run<I, V> = SmallVec<[(Interval<I>, V); 2]>;

#[derive(Debug, Clone)]
pub(crate) struct IntervalTree<I, V> {
	inner: BTreeMap<Interval<I>, V>,
}

impl<I, V> IntervalTree<I, V>
where
	I: Domain,
{
	pub(crate) fn new() -> Self {
		IntervalTree {
			inner: BTreeMap::new(),
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.inner.len()
	}
	pub(crate) fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
	pub(crate) fn clear(&mut self) {
		self.inner = BTreeMap::new();
	}

	pub(crate) fn iter(
		&self,
	) -> impl DoubleEndedIterator<Item = (&Interval<I>, &V)> {
		self.inner.iter()
	}
	pub(crate) fn first(&self) -> Option<(&Interval<I>, &V)> {
		self.inner.first_key_value()
	}
	pub(crate) fn last(&self) -> Option<(&Interval<I>, &V)> {
		self.inner.last_key_value()
	}

	/// Every entry overlapping `interval` in ascending order.
	///
	/// `interval` must not be empty.
	pub(crate) fn overlapping(
		&self,
		interval: Interval<I>,
	) -> impl DoubleEndedIterator<Item = (&Interval<I>, &V)> {
		debug_assert!(!interval.is_empty());

		self.inner.range(
			bound_comp(interval.lower_ord()),
			SearchBoundCustom::Included,
			bound_comp(interval.upper_ord()),
			SearchBoundCustom::Included,
		)
	}
	pub(crate) fn overlaps(&self, interval: Interval<I>) -> bool {
		!interval.is_empty() && self.overlapping(interval).next().is_some()
	}

	pub(crate) fn get_at_point(
		&self,
		point: I,
	) -> Option<(&Interval<I>, &V)> {
		self.inner.get_key_value(point_comp(point))
	}

	/// The stored interval ending right where `interval` starts.
	pub(crate) fn touching_left(
		&self,
		interval: Interval<I>,
	) -> Option<(&Interval<I>, &V)> {
		self.inner.get_key_value(touching_left_comp(interval))
	}
	/// The stored interval starting right where `interval` ends.
	pub(crate) fn touching_right(
		&self,
		interval: Interval<I>,
	) -> Option<(&Interval<I>, &V)> {
		self.inner.get_key_value(touching_right_comp(interval))
	}

	/// Stores an entry whose interval overlaps nothing already stored.
	pub(crate) fn insert_disjoint(&mut self, interval: Interval<I>, value: V) {
		debug_assert!(!interval.is_empty());
		debug_assert!(
			!self.overlaps(interval),
			"inserted interval {interval:?} collides with a stored interval"
		);

		self.inner.insert(interval, value, starts_comp());
	}

	/// Removes the single entry overlapping `interval`.
	pub(crate) fn remove(&mut self, interval: Interval<I>) -> Option<V> {
		self.inner.remove(overlapping_comp(interval))
	}

	/// Removes and returns, in ascending order, every entry overlapping
	/// `interval`.
	pub(crate) fn take_overlapping(&mut self, interval: Interval<I>) -> Run<I, V> {
		if interval.is_empty() {
			return Run::new();
		}

		let keys: SmallVec<[Interval<I>; 2]> =
			self.overlapping(interval).map(|(key, _)| *key).collect();

		keys.into_iter()
			.filter_map(|key| self.remove(key).map(|value| (key, value)))
			.collect()
	}
}

impl<I, V> PartialEq for IntervalTree<I, V>
where
	I: Domain,
	V: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<I, V> IntoIterator for IntervalTree<I, V> {
	type Item = (Interval<I>, V);
	type IntoIter = BTreeMapIntoIter<Interval<I>, V>;
	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}

fn starts_comp<I>() -> impl FnMut(&Interval<I>, &Interval<I>) -> Ordering
where
	I: Domain,
{
	|inner: &Interval<I>, new: &Interval<I>| new.exclusive_cmp(inner)
}
fn overlapping_comp<I>(interval: Interval<I>) -> impl FnMut(&Interval<I>) -> Ordering
where
	I: Domain,
{
	move |inner: &Interval<I>| interval.exclusive_cmp(inner)
}
fn point_comp<I>(point: I) -> impl FnMut(&Interval<I>) -> Ordering
where
	I: Domain,
{
	bound_comp(BoundOrd::Included(point))
}
/// Places a single bound position against the stored intervals, equal
/// to the one interval covering it.
fn bound_comp<I>(bound: BoundOrd<I>) -> impl FnMut(&Interval<I>) -> Ordering
where
	I: Domain,
{
	move |inner: &Interval<I>| {
		if bound < inner.lower_ord() {
			Ordering::Less
		} else if bound > inner.upper_ord() {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}
}
fn touching_left_comp<I>(
	interval: Interval<I>,
) -> impl FnMut(&Interval<I>) -> Ordering
where
	I: Domain,
{
	move |inner: &Interval<I>| {
		if touching(inner.upper_ord(), interval.lower_ord()) {
			Ordering::Equal
		} else if inner.upper_ord() < interval.lower_ord() {
			Ordering::Greater
		} else {
			Ordering::Less
		}
	}
}
fn touching_right_comp<I>(
	interval: Interval<I>,
) -> impl FnMut(&Interval<I>) -> Ordering
where
	I: Domain,
{
	move |inner: &Interval<I>| {
		if touching(interval.upper_ord(), inner.lower_ord()) {
			Ordering::Equal
		} else if interval.upper_ord() < inner.lower_ord() {
			Ordering::Less
		} else {
			Ordering::Greater
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ee, ei, ie, ii};

	fn basic() -> IntervalTree<i8, u8> {
		let mut tree = IntervalTree::new();
		tree.insert_disjoint(ie(1, 4), 1);
		tree.insert_disjoint(ee(5, 7), 2);
		tree.insert_disjoint(ii(7, 7), 3);
		tree.insert_disjoint(ie(14, 16), 4);
		tree
	}

	fn keys(run: impl Iterator<Item = Interval<i8>>) -> Vec<Interval<i8>> {
		run.collect()
	}

	#[test]
	fn ordered_iteration() {
		assert_eq!(
			keys(basic().iter().map(|(key, _)| *key)),
			[ie(1, 4), ee(5, 7), ii(7, 7), ie(14, 16)]
		);
		assert_eq!(basic().first(), Some((&ie(1, 4), &1)));
		assert_eq!(basic().last(), Some((&ie(14, 16), &4)));
	}

	#[test]
	fn overlapping_tests() {
		let tree = basic();
		assert_eq!(
			keys(tree.overlapping(ii(3, 7)).map(|(key, _)| *key)),
			[ie(1, 4), ee(5, 7), ii(7, 7)]
		);
		assert_eq!(keys(tree.overlapping(ie(8, 14)).map(|(key, _)| *key)), []);
		assert!(!tree.overlaps(ie(4, 5)));
		assert!(tree.overlaps(ei(13, 14)));
		assert!(!tree.overlaps(Interval::empty()));
	}

	#[test]
	fn get_at_point_tests() {
		let tree = basic();
		assert_eq!(tree.get_at_point(6), Some((&ee(5, 7), &2)));
		assert_eq!(tree.get_at_point(7), Some((&ii(7, 7), &3)));
		assert_eq!(tree.get_at_point(4), None);
		assert_eq!(tree.get_at_point(5), None);
	}

	#[test]
	fn touching_tests() {
		let tree = basic();
		assert_eq!(tree.touching_left(ie(4, 5)), Some((&ie(1, 4), &1)));
		assert_eq!(tree.touching_right(ie(4, 5)), None);
		assert_eq!(tree.touching_right(ii(4, 5)), Some((&ee(5, 7), &2)));
		assert_eq!(tree.touching_left(ie(8, 10)), Some((&ii(7, 7), &3)));
		assert_eq!(tree.touching_right(ie(8, 14)), Some((&ie(14, 16), &4)));
		assert_eq!(tree.touching_left(ie(9, 10)), None);
	}

	#[test]
	fn continuous_touching_tests() {
		let mut tree = IntervalTree::new();
		tree.insert_disjoint(ie(1.0, 2.0), ());
		tree.insert_disjoint(ii(3.0, 4.0), ());

		assert!(tree.touching_left(ie(2.0, 3.0)).is_some());
		assert!(tree.touching_right(ie(2.0, 3.0)).is_some());
		assert!(tree.touching_left(ee(2.0, 3.0)).is_none());
		assert!(tree.touching_right(ei(2.0, 3.0)).is_none());
	}

	#[test]
	fn take_overlapping_tests() {
		let mut tree = basic();
		let run = tree.take_overlapping(ie(6, 15));
		assert_eq!(
			run.into_vec(),
			[(ee(5, 7), 2), (ii(7, 7), 3), (ie(14, 16), 4)]
		);
		assert_eq!(keys(tree.iter().map(|(key, _)| *key)), [ie(1, 4)]);
		assert!(tree.take_overlapping(Interval::empty()).is_empty());
	}

	#[test]
	fn overlapping_touching_keys() {
		let mut tree = IntervalTree::new();
		tree.insert_disjoint(ie(4, 5), 1);
		tree.insert_disjoint(ie(5, 6), 2);
		tree.insert_disjoint(ii(6, 6), 3);

		assert_eq!(
			keys(tree.overlapping(ii(4, 5)).map(|(key, _)| *key)),
			[ie(4, 5), ie(5, 6)]
		);
		assert_eq!(
			keys(tree.overlapping(ei(4, 6)).map(|(key, _)| *key)),
			[ie(5, 6), ii(6, 6)]
		);
		assert_eq!(
			keys(tree.overlapping(ii(0, 10)).map(|(key, _)| *key)),
			[ie(4, 5), ie(5, 6), ii(6, 6)]
		);
		assert_eq!(keys(tree.overlapping(ii(7, 9)).map(|(key, _)| *key)), []);

		let run = tree.take_overlapping(ii(5, 6));
		assert_eq!(run.into_vec(), [(ie(5, 6), 2), (ii(6, 6), 3)]);
		assert_eq!(keys(tree.iter().map(|(key, _)| *key)), [ie(4, 5)]);
	}

	#[test]
	fn continuous_overlapping_touching_keys() {
		let mut tree = IntervalTree::new();
		tree.insert_disjoint(ie(4.0, 5.0), 1);
		tree.insert_disjoint(ie(5.0, 6.0), 2);
		tree.insert_disjoint(ii(6.0, 6.0), 3);

		let overlapping: Vec<Interval<f64>> =
			tree.overlapping(ii(4.0, 5.0)).map(|(key, _)| *key).collect();
		assert_eq!(overlapping, [ie(4.0, 5.0), ie(5.0, 6.0)]);

		let overlapping: Vec<Interval<f64>> =
			tree.overlapping(ee(4.5, 6.0)).map(|(key, _)| *key).collect();
		assert_eq!(overlapping, [ie(4.0, 5.0), ie(5.0, 6.0)]);

		let overlapping: Vec<Interval<f64>> =
			tree.overlapping(ei(5.5, 6.0)).map(|(key, _)| *key).collect();
		assert_eq!(overlapping, [ie(5.0, 6.0), ii(6.0, 6.0)]);

		assert!(!tree.overlaps(ei(6.0, 7.0)));
		assert_eq!(tree.take_overlapping(ii(4.0, 6.0)).len(), 3);
		assert!(tree.is_empty());
	}
}
