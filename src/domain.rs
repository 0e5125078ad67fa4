//! A module containing the [`Domain`] trait and trait impls for the
//! primitive integer and floating point datatypes.

use core::cmp::Ordering;
use core::fmt::Debug;

/// The trait for point types that an [`Interval`](crate::Interval) can
/// range over.
///
/// A domain is either discrete or continuous. Discrete domains (all the
/// primitive integers) have a successor and predecessor for every point
/// away from their limits which lets `[1, 4)` be treated as `[1, 3]`
/// and lets `[1, 3]` touch `[4, 6]`. Continuous domains (`f32` and
/// `f64`) have neither so two intervals only touch when they share a
/// bound value that is closed on exactly one side.
///
/// Every pair of points must be comparable, using a `NaN` as a bound is
/// a contract violation and panics when compared.
pub trait Domain: Copy + PartialOrd + Debug {
	/// The zero of the domain, used as the upper bound of
	/// [`Interval::empty()`](crate::Interval::empty).
	const ZERO: Self;
	/// The one of the domain, used as the lower bound of
	/// [`Interval::empty()`](crate::Interval::empty).
	const ONE: Self;
	/// Whether [`Domain::succ()`] and [`Domain::pred()`] are meaningful.
	const DISCRETE: bool;

	/// The smallest value greater than `self` if one exists.
	///
	/// Always `None` for continuous domains.
	fn succ(self) -> Option<Self>;
	/// The greatest value smaller than `self` if one exists.
	///
	/// Always `None` for continuous domains.
	fn pred(self) -> Option<Self>;
	/// The number of [`Domain::succ()`] steps between `self` and
	/// `other` in either direction, if it fits in a `usize`.
	///
	/// Always `None` for continuous domains.
	fn distance(self, other: Self) -> Option<usize>;
}

macro_rules! discrete {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Domain for $ident {
			const ZERO: Self = 0;
			const ONE: Self = 1;
			const DISCRETE: bool = true;

			fn succ(self) -> Option<Self> {
				self.checked_add(1)
			}
			fn pred(self) -> Option<Self> {
				self.checked_sub(1)
			}
		}

		discrete!($($t)*);
	};
}

macro_rules! continuous {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Domain for $ident {
			const ZERO: Self = 0.0;
			const ONE: Self = 1.0;
			const DISCRETE: bool = false;

			fn succ(self) -> Option<Self> {
				None
			}
			fn pred(self) -> Option<Self> {
				None
			}
		}

		continuous!($($t)*);
	};
}

discrete!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,);
continuous!(f32, f64,);

pub(crate) fn cmp_points<I>(a: &I, b: &I) -> Ordering
where
	I: Domain,
{
	match a.partial_cmp(b) {
		Some(ordering) => ordering,
		None => panic!(
			"incomparable points given: {a:?} and {b:?}, every pair of points in a Domain must be comparable"
		),
	}
}
