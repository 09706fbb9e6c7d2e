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

//! Normalization of the std range forms into [`ClosedBounds`].
//!
//! | Form      | Integers                 | Floats                         |
//! |-----------|--------------------------|--------------------------------|
//! | `a..=b`   | `[a, b]`                 | `[a, b]`                       |
//! | `a..b`    | `[a, b - 1]`             | `[a, next_down(b)]`            |
//! | `a..`     | `[a, MAX]`               | `[a, +inf]`                    |
//! | `..b`     | `[MIN, b - 1]`           | `[-inf, next_down(b)]`         |
//! | `..=b`    | `[MIN, b]`               | `[-inf, b]`                    |
//! | `..`      | `[MIN, MAX]`             | `[-inf, +inf]`                 |

use crate::{
    error::RangeError,
    math::bounds::{is_ordered, ClosedBounds},
    num::{
        extremes::{Highest, Lowest},
        predecessor::Predecessor,
    },
};
use std::{
    fmt::Debug,
    ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};

/// Conversion of a range description into validated closed bounds.
///
/// Closed ranges work for any comparable `T`. The other forms need to know
/// what "unbounded" means for `T` ([`Lowest`], [`Highest`]) or how to step
/// below an exclusive bound ([`Predecessor`]), so they are available for the
/// primitive integers and floats.
///
/// # Examples
///
/// ```rust
/// # use clamped::math::range::IntoClosedBounds;
///
/// let b = (0u8..10).into_closed_bounds().unwrap();
/// assert_eq!((*b.lower(), *b.upper()), (0, 9));
///
/// let b = (3i8..).into_closed_bounds().unwrap();
/// assert_eq!((*b.lower(), *b.upper()), (3, 127));
///
/// let b = (..5.0f64).into_closed_bounds().unwrap();
/// assert_eq!(*b.lower(), f64::NEG_INFINITY);
/// assert!(*b.upper() < 5.0);
/// ```
pub trait IntoClosedBounds<T>
where
    T: PartialOrd + Debug,
{
    /// Normalizes `self` into closed bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the range is inverted, empty, or has an
    /// unordered bound.
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>>;
}

/// Steps below an exclusive upper bound, failing if nothing lies below it.
fn exclusive_to_inclusive<T>(bound: T) -> Result<T, RangeError<T>>
where
    T: PartialOrd + Debug + Predecessor + Clone,
{
    if !is_ordered(&bound) {
        tracing::debug!(?bound, "rejected unordered exclusive bound");
        return Err(RangeError::Unordered { bound });
    }
    match bound.clone().predecessor() {
        Some(inclusive) => Ok(inclusive),
        None => {
            tracing::debug!(?bound, "rejected exclusive bound without predecessor");
            Err(RangeError::Empty { bound })
        }
    }
}

impl<T> IntoClosedBounds<T> for ClosedBounds<T>
where
    T: PartialOrd + Debug,
{
    #[inline]
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>> {
        Ok(self)
    }
}

impl<T> IntoClosedBounds<T> for RangeInclusive<T>
where
    T: PartialOrd + Debug,
{
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>> {
        let (lower, upper) = self.into_inner();
        ClosedBounds::try_new(lower, upper)
    }
}

impl<T> IntoClosedBounds<T> for Range<T>
where
    T: PartialOrd + Debug + Predecessor + Clone,
{
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>> {
        let Range { start, end } = self;
        let checked = ClosedBounds::try_new(start, end)?;
        if checked.is_degenerate() {
            let (_, end) = checked.into_inner();
            tracing::debug!(bound = ?end, "rejected empty half-open range");
            return Err(RangeError::Empty { bound: end });
        }
        let (start, end) = checked.into_inner();
        // `start < end` leaves the predecessor of `end` at or above `start`.
        let upper = exclusive_to_inclusive(end)?;
        Ok(ClosedBounds::new_unchecked(start, upper))
    }
}

impl<T> IntoClosedBounds<T> for RangeFrom<T>
where
    T: PartialOrd + Debug + Highest,
{
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>> {
        ClosedBounds::try_new(self.start, T::HIGHEST)
    }
}

impl<T> IntoClosedBounds<T> for RangeTo<T>
where
    T: PartialOrd + Debug + Lowest + Predecessor + Clone,
{
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>> {
        let upper = exclusive_to_inclusive(self.end)?;
        ClosedBounds::try_new(T::LOWEST, upper)
    }
}

impl<T> IntoClosedBounds<T> for RangeToInclusive<T>
where
    T: PartialOrd + Debug + Lowest,
{
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>> {
        ClosedBounds::try_new(T::LOWEST, self.end)
    }
}

impl<T> IntoClosedBounds<T> for RangeFull
where
    T: PartialOrd + Debug + Lowest + Highest,
{
    fn into_closed_bounds(self) -> Result<ClosedBounds<T>, RangeError<T>> {
        Ok(ClosedBounds::new_unchecked(T::LOWEST, T::HIGHEST))
    }
}
