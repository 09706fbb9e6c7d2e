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

//! # Clamped
//!
//! Value cells that clamp every write into a fixed closed range.
//!
//! A [`ClampedValue<T>`](clamped::ClampedValue) stores a value together with
//! immutable bounds and guarantees `lower <= value <= upper` after
//! construction and after every write. Writes never fail: out-of-range
//! candidates saturate at the nearer bound.
//!
//! ## Modules
//!
//! - `clamped`: The `ClampedValue<T>` cell with read, write, replace, and
//!   update accessors.
//! - `math`: `ClosedBounds<T>`, the validated `[lower, upper]` pair owning the
//!   clamp, and `IntoClosedBounds`, normalizing `a..=b`, `a..b`, `a..`, `..b`,
//!   `..=b`, and `..` into closed bounds.
//! - `num`: Per-kind capabilities used by the normalization: `Lowest` and
//!   `Highest` (integer `MIN`/`MAX`, float infinities) and `Predecessor`
//!   (`high - 1` for integers, `next_down` for floats).
//! - `error`: `RangeError<T>`, returned when bounds are inverted, empty, or
//!   unordered. Ranges are validated once at construction.
//!
//! ## Example
//!
//! ```rust
//! use clamped::clamped::ClampedValue;
//!
//! let mut index = ClampedValue::new(0usize, 0..10).unwrap();
//! index.set(10);
//! assert_eq!(index.value(), 9);
//!
//! let mut gain = ClampedValue::up_to(0.0, 1.0f32).unwrap();
//! gain.set(1.0);
//! assert!(gain.value() < 1.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `ClampedValue<T>` as
//!   `{ value, lower, upper }`. Deserialization validates the bounds and
//!   clamps the value. Its tests run with `cargo test --all-features`.

pub mod clamped;
pub mod error;
pub mod math;
pub mod num;
