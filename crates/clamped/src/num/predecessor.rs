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

macro_rules! predecessor_impl_int {
    ($($t:ty),*) => {
        $(
            impl Predecessor for $t {
                #[inline(always)]
                fn predecessor(self) -> Option<Self> {
                    <$t>::checked_sub(self, 1)
                }
            }
        )*
    };
}

macro_rules! predecessor_impl_float {
    ($($t:ty),*) => {
        $(
            impl Predecessor for $t {
                #[inline(always)]
                fn predecessor(self) -> Option<Self> {
                    if self.is_nan() || self == <$t>::NEG_INFINITY {
                        None
                    } else {
                        Some(<$t>::next_down(self))
                    }
                }
            }
        )*
    };
}

/// The largest representable value strictly less than `self`.
///
/// Integers step down by one; floats step to the adjacent representable
/// value below (`next_down`), which is exact at every magnitude where a fixed
/// epsilon would either skip values or not move at all.
///
/// Returns `None` when no such value exists: the integer `MIN`, negative
/// infinity, and NaN.
///
/// # Examples
///
/// ```rust
/// # use clamped::num::predecessor::Predecessor;
///
/// assert_eq!(10i32.predecessor(), Some(9));
/// assert_eq!(i32::MIN.predecessor(), None);
///
/// let below = 5.0f64.predecessor().unwrap();
/// assert!(below < 5.0);
/// assert_eq!(below.to_bits(), 5.0f64.to_bits() - 1);
/// ```
pub trait Predecessor: Sized {
    /// Returns the predecessor of `self`, or `None` if there is none.
    fn predecessor(self) -> Option<Self>;
}

predecessor_impl_int!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
predecessor_impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn predecessor<T: Predecessor>(v: T) -> Option<T> {
        v.predecessor()
    }

    #[test]
    fn test_integer_predecessor() {
        assert_eq!(predecessor(10u8), Some(9));
        assert_eq!(predecessor(0u8), None);
        assert_eq!(predecessor(0i8), Some(-1));
        assert_eq!(predecessor(i8::MIN), None);
        assert_eq!(predecessor(i64::MAX), Some(i64::MAX - 1));
    }

    #[test]
    fn test_float_predecessor_is_adjacent() {
        let p = predecessor(1.0f64).unwrap();
        assert!(p < 1.0);
        assert_eq!(p, 1.0 - f64::EPSILON / 2.0);

        let q = predecessor(1.0f32).unwrap();
        assert_eq!(q.to_bits(), 1.0f32.to_bits() - 1);
    }

    #[test]
    fn test_float_predecessor_at_large_magnitude() {
        // An epsilon subtraction would not move a value this large.
        let big = 1.0e300f64;
        assert_eq!(big - f64::EPSILON, big);
        assert!(predecessor(big).unwrap() < big);
    }

    #[test]
    fn test_float_predecessor_edges() {
        assert_eq!(predecessor(0.0f64), Some(-f64::from_bits(1)));
        assert_eq!(predecessor(f64::INFINITY), Some(f64::MAX));
        assert_eq!(predecessor(f64::MIN), Some(f64::NEG_INFINITY));
        assert_eq!(predecessor(f64::NEG_INFINITY), None);
        assert_eq!(predecessor(f32::NAN), None);
    }
}
