//! A module containing the [`Codomain`] trait and [`ElementSet`], a set
//! valued codomain.

use alloc::collections::btree_set::{self, BTreeSet};
use core::fmt;
use core::ops::{AddAssign, SubAssign};

use itertools::Itertools;

/// The trait for value types of a
/// [`SplitIntervalMap`](crate::SplitIntervalMap).
///
/// `Default` produces the neutral element, `+=` aggregates a value into
/// another and `-=` takes it back out. Implementations are expected to
/// obey `(x += y) -= y == x` and `x += neutral == x`.
///
/// Implementations are provided for the signed and unsigned integers,
/// the floats and [`ElementSet`]. Other types only need an empty impl
/// unless subtracting them from nothing needs special handling, see
/// [`Codomain::inverse()`].
///
/// # Examples
/// ```
/// use core::ops::{AddAssign, SubAssign};
///
/// use intervallic::interval::ie;
/// use intervallic::{Codomain, SplitIntervalMap};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Weight(i64);
///
/// impl AddAssign for Weight {
/// 	fn add_assign(&mut self, other: Self) {
/// 		self.0 += other.0;
/// 	}
/// }
/// impl SubAssign for Weight {
/// 	fn sub_assign(&mut self, other: Self) {
/// 		self.0 -= other.0;
/// 	}
/// }
///
/// impl Codomain for Weight {}
///
/// let mut map = SplitIntervalMap::new();
/// map.insert(ie(1, 5), Weight(3));
/// map.subtract(ie(3, 7), Weight(1));
///
/// assert_eq!(map.get_at_point(2), Some(&Weight(3)));
/// assert_eq!(map.get_at_point(4), Some(&Weight(2)));
/// assert_eq!(map.get_at_point(6), Some(&Weight(-1)));
/// ```
pub trait Codomain: Clone + Default + PartialEq + AddAssign + SubAssign {
	/// Is this the neutral element? Map entries holding the neutral
	/// element are never stored.
	fn is_neutral(&self) -> bool {
		*self == Self::default()
	}

	/// The value that subtracting `self` leaves where nothing was stored.
	///
	/// Defaults to `neutral -= self`. `None` leaves those points
	/// untouched, which is what the unsigned integers do since they
	/// cannot hold a negated value.
	fn inverse(&self) -> Option<Self> {
		let mut inverse = Self::default();
		inverse -= self.clone();
		Some(inverse)
	}
}

macro_rules! signed {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Codomain for $ident {
			fn inverse(&self) -> Option<Self> {
				self.checked_neg()
			}
		}

		signed!($($t)*);
	};
}

macro_rules! unsigned {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Codomain for $ident {
			fn inverse(&self) -> Option<Self> {
				None
			}
		}

		unsigned!($($t)*);
	};
}

signed!(i8, i16, i32, i64, i128, isize,);
unsigned!(u8, u16, u32, u64, u128, usize,);

impl Codomain for f32 {}
impl Codomain for f64 {}

/// A set of elements aggregated by union and taken apart by relative
/// complement, for maps that collect which elements are present over
/// each interval.
///
/// `(x += y) -= y == x` holds whenever `x` and `y` are disjoint.
///
/// # Examples
/// ```
/// use intervallic::interval::ie;
/// use intervallic::{ElementSet, SplitIntervalMap};
///
/// let mut party = SplitIntervalMap::new();
///
/// party.insert(ie(20, 22), ElementSet::from(["Mary", "Harry"]));
/// party.insert(ie(21, 23), ElementSet::from(["Diana"]));
///
/// assert_eq!(party.get_at_point(21), Some(&ElementSet::from(["Diana", "Harry", "Mary"])));
/// assert_eq!(party.to_string(), "([20,21),{Harry Mary})([21,22),{Diana Harry Mary})([22,23),{Diana})");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementSet<T> {
	inner: BTreeSet<T>,
}

impl<T> ElementSet<T>
where
	T: Ord,
{
	/// Makes a new, empty `ElementSet`.
	pub fn new() -> Self {
		ElementSet {
			inner: BTreeSet::new(),
		}
	}
	/// Adds an element, returning whether it was newly added.
	pub fn insert(&mut self, element: T) -> bool {
		self.inner.insert(element)
	}
	/// Returns `true` if the set contains the element.
	pub fn contains(&self, element: &T) -> bool {
		self.inner.contains(element)
	}
	/// The number of elements in the set.
	pub fn len(&self) -> usize {
		self.inner.len()
	}
	/// Returns `true` if the set has no elements.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
	/// An iterator over the elements in ascending order.
	pub fn iter(&self) -> btree_set::Iter<'_, T> {
		self.inner.iter()
	}
}

impl<T> Codomain for ElementSet<T> where T: Ord + Clone {}

impl<T> Default for ElementSet<T> {
	fn default() -> Self {
		ElementSet {
			inner: BTreeSet::new(),
		}
	}
}

impl<T> AddAssign for ElementSet<T>
where
	T: Ord,
{
	fn add_assign(&mut self, other: Self) {
		self.inner.extend(other.inner);
	}
}
impl<T> SubAssign for ElementSet<T>
where
	T: Ord,
{
	fn sub_assign(&mut self, other: Self) {
		self.inner.retain(|element| !other.inner.contains(element));
	}
}

impl<T> FromIterator<T> for ElementSet<T>
where
	T: Ord,
{
	fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
		ElementSet {
			inner: BTreeSet::from_iter(iter),
		}
	}
}
impl<T, const N: usize> From<[T; N]> for ElementSet<T>
where
	T: Ord,
{
	fn from(elements: [T; N]) -> Self {
		ElementSet::from_iter(elements)
	}
}

impl<T> IntoIterator for ElementSet<T> {
	type Item = T;
	type IntoIter = btree_set::IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}

impl<T> fmt::Display for ElementSet<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}}}", self.inner.iter().format(" "))
	}
}
