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

use thiserror::Error;

/// Reasons a range cannot be turned into a closed `[lower, upper]` pair.
///
/// The offending bounds are carried so callers can report them; the type is
/// generic so no conversion to a common representation is forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError<T> {
    /// The lower bound is greater than the upper bound.
    #[error("Invalid bounds: lower bound {lower:?} is greater than upper bound {upper:?}")]
    Inverted {
        /// The requested lower bound.
        lower: T,
        /// The requested upper bound.
        upper: T,
    },
    /// A bound does not compare with itself (for example a float NaN).
    #[error("Invalid bounds: bound {bound:?} is unordered")]
    Unordered {
        /// The unordered bound.
        bound: T,
    },
    /// An exclusive upper bound has no representable value below it, so
    /// the range contains nothing.
    #[error("Invalid bounds: nothing lies below the exclusive upper bound {bound:?}")]
    Empty {
        /// The exclusive upper bound.
        bound: T,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_bounds() {
        let e = RangeError::Inverted { lower: 5, upper: 1 };
        assert_eq!(
            e.to_string(),
            "Invalid bounds: lower bound 5 is greater than upper bound 1"
        );

        let e = RangeError::Empty { bound: i8::MIN };
        assert_eq!(
            e.to_string(),
            "Invalid bounds: nothing lies below the exclusive upper bound -128"
        );

        let e = RangeError::Unordered { bound: f64::NAN };
        assert_eq!(e.to_string(), "Invalid bounds: bound NaN is unordered");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&RangeError::Empty { bound: 0u8 });
    }
}
