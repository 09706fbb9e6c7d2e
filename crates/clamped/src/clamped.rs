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

use crate::{
    error::RangeError,
    math::{bounds::ClosedBounds, range::IntoClosedBounds},
    num::{
        extremes::{Highest, Lowest},
        predecessor::Predecessor,
    },
};
use num_traits::ToPrimitive;
use std::{
    fmt::{self, Debug, Display},
    mem,
    ops::{Deref, Range},
};

/// A value that is clamped into fixed closed bounds on every write.
///
/// The bounds are chosen once at construction and never change. Every path
/// that stores a value, including construction itself, goes through
/// [`ClosedBounds::clamp`], so `lower <= value <= upper` always holds.
///
/// Writes take `&mut self`. Sharing one cell between threads therefore needs
/// external synchronization such as a `Mutex<ClampedValue<T>>`; the cell has
/// no locking of its own.
///
/// # Examples
///
/// ```rust
/// # use clamped::clamped::ClampedValue;
///
/// let mut volume = ClampedValue::new(1.0, 1.0..=5.0).unwrap();
/// volume.set(7.0);
/// assert_eq!(*volume.get(), 5.0);
/// volume.set(0.0);
/// assert_eq!(*volume.get(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClampedValue<T> {
    value: T,
    bounds: ClosedBounds<T>,
}

impl<T> ClampedValue<T>
where
    T: PartialOrd + Clone,
{
    /// Creates a cell from already validated bounds, clamping `value` into them.
    ///
    /// Bounds from [`ClosedBounds::new_unchecked`] are trusted as given; if
    /// they are inverted or NaN, the stored value is not guaranteed to lie
    /// within them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::clamped::ClampedValue;
    /// # use clamped::math::bounds::ClosedBounds;
    ///
    /// let cell = ClampedValue::from_bounds(42, ClosedBounds::new(0, 10));
    /// assert_eq!(cell.value(), 10);
    /// ```
    #[inline]
    pub fn from_bounds(value: T, bounds: ClosedBounds<T>) -> Self {
        let value = bounds.clamp(value);
        Self { value, bounds }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Returns a copy of the stored value.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Clamps `candidate` into the bounds and stores it.
    ///
    /// Returns a reference to the value actually stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::clamped::ClampedValue;
    ///
    /// let mut cell = ClampedValue::new(0, 0..10).unwrap();
    /// assert_eq!(*cell.set(10), 9);
    /// assert_eq!(*cell.set(-5), 0);
    /// ```
    #[inline]
    pub fn set(&mut self, candidate: T) -> &T {
        self.value = self.bounds.clamp(candidate);
        &self.value
    }

    /// Stores the clamped `candidate`, returning the previously stored value.
    #[inline]
    pub fn replace(&mut self, candidate: T) -> T {
        mem::replace(&mut self.value, self.bounds.clamp(candidate))
    }

    /// Computes a new candidate from the stored value and stores it clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::clamped::ClampedValue;
    ///
    /// let mut hp = ClampedValue::new(90u8, 0..=100).unwrap();
    /// hp.update(|v| v.saturating_add(25));
    /// assert_eq!(hp.value(), 100);
    /// ```
    #[inline]
    pub fn update<F>(&mut self, f: F) -> &T
    where
        F: FnOnce(&T) -> T,
    {
        let candidate = f(&self.value);
        self.set(candidate)
    }

    /// Returns the bounds the cell clamps into.
    #[inline]
    pub const fn bounds(&self) -> &ClosedBounds<T> {
        &self.bounds
    }

    /// Returns `true` if the stored value sits on the lower bound.
    #[inline]
    pub fn is_at_lower(&self) -> bool {
        self.value == *self.bounds.lower()
    }

    /// Returns `true` if the stored value sits on the upper bound.
    #[inline]
    pub fn is_at_upper(&self) -> bool {
        self.value == *self.bounds.upper()
    }

    /// Returns `true` if the bounds admit a single value, so every write
    /// stores the same thing.
    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.bounds.is_degenerate()
    }

    /// Position of the stored value within the bounds, in `[0, 1]`.
    ///
    /// Returns `None` when the span is zero or not finite (for example a
    /// float range open on one side), or when a value has no `f64`
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::clamped::ClampedValue;
    ///
    /// let cell = ClampedValue::new(25, 0..=100).unwrap();
    /// assert_eq!(cell.normalized(), Some(0.25));
    ///
    /// let open = ClampedValue::new(1.0, 0.0f64..).unwrap();
    /// assert_eq!(open.normalized(), None);
    /// ```
    pub fn normalized(&self) -> Option<f64>
    where
        T: ToPrimitive,
    {
        let lower = self.bounds.lower().to_f64()?;
        let upper = self.bounds.upper().to_f64()?;
        let value = self.value.to_f64()?;
        let span = upper - lower;
        if !span.is_finite() || span <= 0.0 {
            return None;
        }
        Some(((value - lower) / span).clamp(0.0, 1.0))
    }

    /// Consumes the cell, returning the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> ClampedValue<T>
where
    T: PartialOrd + Clone + Debug,
{
    /// Creates a cell clamping into `range`, clamping `value` as well.
    ///
    /// `range` may be any of the std range forms supported by
    /// [`IntoClosedBounds`]: `a..=b` for any comparable type, and `a..b`,
    /// `a..`, `..b`, `..=b`, `..` for the primitive integers and floats.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the range is inverted, empty, or has an
    /// unordered (NaN) bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::clamped::ClampedValue;
    ///
    /// let mut level = ClampedValue::new(3i8, 3..).unwrap();
    /// level.set(i8::MAX);
    /// assert_eq!(level.value(), 127);
    /// level.set(1);
    /// assert_eq!(level.value(), 3);
    ///
    /// assert!(ClampedValue::new(0, 5..=1).is_err());
    /// ```
    pub fn new<R>(value: T, range: R) -> Result<Self, RangeError<T>>
    where
        R: IntoClosedBounds<T>,
    {
        Ok(Self::from_bounds(value, range.into_closed_bounds()?))
    }

    /// Creates a cell from a half-open range of any comparable type,
    /// treating the exclusive upper bound as inclusive.
    ///
    /// Types without a notion of "the value just below" cannot honor the
    /// exclusive end, so the cell clamps into `[start, end]`. For integers
    /// and floats prefer [`ClampedValue::new`], which excludes `end` exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `start > end` or a bound is unordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::clamped::ClampedValue;
    ///
    /// let mut grade = ClampedValue::with_half_open('c', 'a'..'f').unwrap();
    /// grade.set('z');
    /// assert_eq!(grade.value(), 'f');
    /// ```
    pub fn with_half_open(value: T, range: Range<T>) -> Result<Self, RangeError<T>> {
        let bounds = ClosedBounds::try_new(range.start, range.end)?;
        Ok(Self::from_bounds(value, bounds))
    }

    /// Creates a cell bounded below by `lower` and unbounded above
    /// (up to `MAX` or positive infinity).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Unordered`] if `lower` is NaN.
    pub fn at_least(value: T, lower: T) -> Result<Self, RangeError<T>>
    where
        T: Highest,
    {
        Self::new(value, lower..)
    }

    /// Creates a cell holding values strictly below `upper`.
    ///
    /// The inclusive upper bound is the predecessor of `upper`: `upper - 1`
    /// for integers, the adjacent representable value for floats.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Empty`] if nothing lies below `upper`, and
    /// [`RangeError::Unordered`] if it is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clamped::clamped::ClampedValue;
    ///
    /// let mut ratio = ClampedValue::up_to(0.0, 5.0f64).unwrap();
    /// ratio.set(5.0);
    /// assert_eq!(ratio.value(), 5.0f64.next_down());
    /// ```
    pub fn up_to(value: T, upper: T) -> Result<Self, RangeError<T>>
    where
        T: Lowest + Predecessor,
    {
        Self::new(value, ..upper)
    }

    /// Creates a cell holding values at or below `upper`, unbounded below.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Unordered`] if `upper` is NaN.
    pub fn through(value: T, upper: T) -> Result<Self, RangeError<T>>
    where
        T: Lowest,
    {
        Self::new(value, ..=upper)
    }
}

impl<T> Deref for ClampedValue<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> AsRef<T> for ClampedValue<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> Display for ClampedValue<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ClampedValue;
    use crate::math::bounds::ClosedBounds;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt::Debug;

    #[derive(Serialize)]
    struct ClampedValueRef<'a, T> {
        value: &'a T,
        lower: &'a T,
        upper: &'a T,
    }

    #[derive(Deserialize)]
    struct ClampedValueOwned<T> {
        value: T,
        lower: T,
        upper: T,
    }

    impl<T> Serialize for ClampedValue<T>
    where
        T: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            ClampedValueRef {
                value: &self.value,
                lower: self.bounds.lower(),
                upper: self.bounds.upper(),
            }
            .serialize(serializer)
        }
    }

    // Bounds are validated and the value re-clamped, so a hand-edited
    // document cannot smuggle in an out-of-range value.
    impl<'de, T> Deserialize<'de> for ClampedValue<T>
    where
        T: Deserialize<'de> + PartialOrd + Clone + Debug,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let owned = ClampedValueOwned::<T>::deserialize(deserializer)?;
            let bounds = ClosedBounds::try_new(owned.lower, owned.upper).map_err(D::Error::custom)?;
            Ok(ClampedValue::from_bounds(owned.value, bounds))
        }
    }
}
