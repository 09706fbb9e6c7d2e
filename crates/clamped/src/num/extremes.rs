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

//! Per-kind sentinels standing in for "unbounded" when a one-sided range is
//! normalized into a closed one.

/// A numeric kind with a value no other value of the kind is below.
///
/// For integers this is `MIN`; for floats it is negative infinity.
///
/// # Examples
///
/// ```rust
/// # use clamped::num::extremes::Lowest;
///
/// assert_eq!(<i8 as Lowest>::LOWEST, -128);
/// assert_eq!(<f64 as Lowest>::LOWEST, f64::NEG_INFINITY);
/// ```
pub trait Lowest {
    /// The lowest value of the implementing type.
    const LOWEST: Self;
}

/// A numeric kind with a value no other value of the kind is above.
///
/// For integers this is `MAX`; for floats it is positive infinity.
pub trait Highest {
    /// The highest value of the implementing type.
    const HIGHEST: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_int_extremes_for {
    ($($t:ty),*) => {
        $(
            impl_const_for!(Lowest, LOWEST, <$t>::MIN, $t);
            impl_const_for!(Highest, HIGHEST, <$t>::MAX, $t);
        )*
    };
}

macro_rules! impl_float_extremes_for {
    ($($t:ty),*) => {
        $(
            impl_const_for!(Lowest, LOWEST, <$t>::NEG_INFINITY, $t);
            impl_const_for!(Highest, HIGHEST, <$t>::INFINITY, $t);
        )*
    };
}

impl_int_extremes_for!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
impl_float_extremes_for!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn lowest<T: Lowest>() -> T {
        T::LOWEST
    }

    fn highest<T: Highest>() -> T {
        T::HIGHEST
    }

    #[test]
    fn test_integer_extremes() {
        assert_eq!(lowest::<i8>(), i8::MIN);
        assert_eq!(highest::<i8>(), i8::MAX);
        assert_eq!(lowest::<u32>(), 0);
        assert_eq!(highest::<u32>(), u32::MAX);
        assert_eq!(lowest::<i128>(), i128::MIN);
        assert_eq!(highest::<usize>(), usize::MAX);
    }

    #[test]
    fn test_float_extremes_are_infinite() {
        assert_eq!(lowest::<f32>(), f32::NEG_INFINITY);
        assert_eq!(highest::<f32>(), f32::INFINITY);
        assert_eq!(lowest::<f64>(), f64::NEG_INFINITY);
        assert_eq!(highest::<f64>(), f64::INFINITY);
    }

    #[test]
    fn test_float_extremes_bracket_finite_range() {
        assert!(lowest::<f64>() < f64::MIN);
        assert!(highest::<f64>() > f64::MAX);
    }
}
