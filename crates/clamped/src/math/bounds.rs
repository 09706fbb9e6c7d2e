// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::error::RangeError;
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// A closed interval `[lower, upper]` with both ends inclusive.
///
/// Every range form a [`ClampedValue`](crate::clamped::ClampedValue) accepts
/// is normalized into one of these, and the clamp itself lives here.
///
/// # Invariants
///
/// `lower <= upper`, and both bounds compare with themselves (no NaN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedBounds<T> {
    lower: T,
    upper: T,
}

/// Returns `true` if `value` is ordered with respect to itself.
#[inline]
pub(crate) fn is_ordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_some()
}

impl<T> ClosedBounds<T>
where
    T: PartialOrd,
{
    /// Creates new `ClosedBounds`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper` or if either bound is unordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::math::bounds::ClosedBounds;
    ///
    /// let b = ClosedBounds::new(1, 5);
    /// assert_eq!(*b.lower(), 1);
    /// assert_eq!(*b.upper(), 5);
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        assert!(
            lower <= upper,
            "Invalid bounds: lower must be less than or equal to upper"
        );
        Self { lower, upper }
    }

    /// Creates new `ClosedBounds` if the inputs are valid.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Unordered`] if either bound does not compare
    /// with itself, and [`RangeError::Inverted`] if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::math::bounds::ClosedBounds;
    /// # use clamped::error::RangeError;
    ///
    /// assert!(ClosedBounds::try_new(0, 10).is_ok());
    /// assert_eq!(
    ///     ClosedBounds::try_new(10, 0),
    ///     Err(RangeError::Inverted { lower: 10, upper: 0 })
    /// );
    /// ```
    pub fn try_new(lower: T, upper: T) -> Result<Self, RangeError<T>>
    where
        T: Debug,
    {
        if !is_ordered(&lower) {
            tracing::debug!(bound = ?lower, "rejected unordered lower bound");
            return Err(RangeError::Unordered { bound: lower });
        }
        if !is_ordered(&upper) {
            tracing::debug!(bound = ?upper, "rejected unordered upper bound");
            return Err(RangeError::Unordered { bound: upper });
        }
        if lower > upper {
            tracing::debug!(?lower, ?upper, "rejected inverted bounds");
            return Err(RangeError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Creates new `ClosedBounds` without checking invariants in release builds.
    ///
    /// The caller must ensure `lower <= upper` and that neither bound is NaN.
    /// A `debug_assert!` catches violations during development; in release
    /// builds invalid bounds are accepted, and any
    /// [`ClampedValue`](crate::clamped::ClampedValue) built from them no
    /// longer upholds `lower <= value <= upper`.
    #[inline]
    pub fn new_unchecked(lower: T, upper: T) -> Self {
        debug_assert!(
            lower <= upper,
            "Invalid bounds: lower must be less than or equal to upper"
        );
        Self { lower, upper }
    }

    /// Returns `true` if `value` lies in `[lower, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::math::bounds::ClosedBounds;
    ///
    /// let b = ClosedBounds::new(0.0, 1.0);
    /// assert!(b.contains(&0.0));
    /// assert!(b.contains(&1.0));
    /// assert!(!b.contains(&1.5));
    /// assert!(!b.contains(&f64::NAN));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.lower <= *value && *value <= self.upper
    }

    /// Returns `true` if the bounds collapse to a single point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Constrains `value` to `[lower, upper]`.
    ///
    /// This is `min(max(lower, value), upper)`. Values strictly inside the
    /// bounds are returned unchanged, values outside saturate at the nearer
    /// bound. A value comparing equal to a bound yields the bound itself, so
    /// `-0.0` written into `[0.0, 1.0]` stores `0.0`. A value that is unordered with respect to the bounds (NaN)
    /// saturates at `lower`, so the result is always contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::math::bounds::ClosedBounds;
    ///
    /// let b = ClosedBounds::new(1.0, 5.0);
    /// assert_eq!(b.clamp(7.0), 5.0);
    /// assert_eq!(b.clamp(0.0), 1.0);
    /// assert_eq!(b.clamp(3.0), 3.0);
    /// assert_eq!(b.clamp(f64::NAN), 1.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: T) -> T
    where
        T: Clone,
    {
        match value.partial_cmp(&self.lower) {
            Some(Ordering::Greater) => {}
            _ => return self.lower.clone(),
        }
        match value.partial_cmp(&self.upper) {
            Some(Ordering::Less) => value,
            _ => self.upper.clone(),
        }
    }
}

impl<T> ClosedBounds<T> {
    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn upper(&self) -> &T {
        &self.upper
    }

    /// Consumes the bounds, returning `(lower, upper)`.
    #[inline]
    pub fn into_inner(self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T> Display for ClosedBounds<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T> RangeBounds<T> for ClosedBounds<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.upper)
    }
}

impl<T> From<ClosedBounds<T>> for RangeInclusive<T> {
    #[inline]
    fn from(bounds: ClosedBounds<T>) -> Self {
        bounds.lower..=bounds.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let b = ClosedBounds::new(10, 20);
        assert_eq!(*b.lower(), 10);
        assert_eq!(*b.upper(), 20);
        assert!(!b.is_degenerate());
    }

    #[test]
    fn test_construction_degenerate() {
        let b = ClosedBounds::new(7, 7);
        assert!(b.is_degenerate());
        assert!(b.contains(&7));
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedBounds::try_new(5, 10).is_ok());
        assert!(ClosedBounds::try_new(5, 5).is_ok());
        assert_eq!(
            ClosedBounds::try_new(10, 5),
            Err(RangeError::Inverted {
                lower: 10,
                upper: 5
            })
        );
    }

    #[test]
    fn test_try_new_rejects_nan() {
        assert!(matches!(
            ClosedBounds::try_new(f64::NAN, 1.0),
            Err(RangeError::Unordered { .. })
        ));
        assert!(matches!(
            ClosedBounds::try_new(0.0, f32::NAN),
            Err(RangeError::Unordered { .. })
        ));
    }

    #[test]
    fn test_try_new_accepts_infinities() {
        let b = ClosedBounds::try_new(f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert!(b.contains(&f64::MAX));
        assert!(b.contains(&f64::NEG_INFINITY));
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_new_panic() {
        ClosedBounds::new(10, 5);
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_new_panic_on_nan() {
        ClosedBounds::new(f64::NAN, 1.0);
    }

    #[test]
    fn test_clamp_saturates() {
        let b = ClosedBounds::new(0, 10);
        assert_eq!(b.clamp(-5), 0);
        assert_eq!(b.clamp(0), 0);
        assert_eq!(b.clamp(4), 4);
        assert_eq!(b.clamp(10), 10);
        assert_eq!(b.clamp(11), 10);
    }

    #[test]
    fn test_clamp_degenerate_is_constant() {
        let b = ClosedBounds::new(3, 3);
        for v in [i32::MIN, -1, 3, 4, i32::MAX] {
            assert_eq!(b.clamp(v), 3);
        }
    }

    #[test]
    fn test_clamp_equal_to_bound_stores_bound() {
        let b = ClosedBounds::new(0.0f64, 1.0);
        assert!(b.clamp(-0.0).is_sign_positive());

        let b = ClosedBounds::new(-1.0f64, -0.0);
        assert!(b.clamp(0.0).is_sign_negative());
    }

    #[test]
    fn test_accessors_without_ordering() {
        #[derive(Debug, PartialEq)]
        struct Opaque(u8);

        let b = ClosedBounds {
            lower: Opaque(1),
            upper: Opaque(2),
        };
        assert_eq!(b.lower(), &Opaque(1));
        assert_eq!(b.upper(), &Opaque(2));
        assert_eq!(b.into_inner(), (Opaque(1), Opaque(2)));
    }

    #[test]
    fn test_clamp_nan_saturates_low() {
        let b = ClosedBounds::new(-1.0f32, 1.0);
        assert_eq!(b.clamp(f32::NAN), -1.0);
    }

    #[test]
    fn test_clamp_non_numeric() {
        let b = ClosedBounds::new("b".to_string(), "d".to_string());
        assert_eq!(b.clamp("a".to_string()), "b");
        assert_eq!(b.clamp("c".to_string()), "c");
        assert_eq!(b.clamp("zebra".to_string()), "d");
    }

    #[test]
    fn test_display() {
        assert_eq!(ClosedBounds::new(1, 5).to_string(), "[1, 5]");
        assert_eq!(ClosedBounds::new(0.5, 1.5).to_string(), "[0.5, 1.5]");
    }

    #[test]
    fn test_range_bounds() {
        let b = ClosedBounds::new(2, 8);
        assert_eq!(b.start_bound(), Bound::Included(&2));
        assert_eq!(b.end_bound(), Bound::Included(&8));
        assert!(RangeBounds::contains(&b, &8));
    }

    #[test]
    fn test_into_range_inclusive() {
        let r: RangeInclusive<i32> = ClosedBounds::new(1, 3).into();
        assert_eq!(r.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(ClosedBounds::new(-2, 2).into_inner(), (-2, 2));
    }
}
