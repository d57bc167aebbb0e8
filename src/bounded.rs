//! Bounded integer draws.
//!
//! The foundation of every other generator: one unit float `u` becomes
//! `floor(u * (max - min)) + min`, an integer in `[min, max)`.

use crate::error::{ArgumentError, Result};
use crate::source::UnitSource;

/// A value usable as an integer bound (or sample size).
///
/// Implemented for the primitive integers and for `f32`/`f64`; floats must be
/// finite and have no fractional part.
pub trait IntegerBound: Copy {
    /// The bound as `i64`, or why it cannot be one.
    fn to_bound(self) -> std::result::Result<i64, ArgumentError>;
}

macro_rules! impl_bound_lossless {
    ($($t:ty),*) => {$(
        impl IntegerBound for $t {
            #[inline]
            fn to_bound(self) -> std::result::Result<i64, ArgumentError> {
                Ok(i64::from(self))
            }
        }
    )*};
}

macro_rules! impl_bound_checked {
    ($($t:ty),*) => {$(
        impl IntegerBound for $t {
            #[inline]
            fn to_bound(self) -> std::result::Result<i64, ArgumentError> {
                i64::try_from(self).map_err(|_| ArgumentError::BoundOutOfRange)
            }
        }
    )*};
}

impl_bound_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_bound_checked!(u64, usize, isize, i128, u128);

impl IntegerBound for f64 {
    fn to_bound(self) -> std::result::Result<i64, ArgumentError> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(ArgumentError::NonIntegerBound(self));
        }
        // 2^63 is exactly representable; anything at or above it is out.
        if self < i64::MIN as f64 || self >= -(i64::MIN as f64) {
            return Err(ArgumentError::BoundOutOfRange);
        }
        Ok(self as i64)
    }
}

impl IntegerBound for f32 {
    fn to_bound(self) -> std::result::Result<i64, ArgumentError> {
        f64::from(self).to_bound()
    }
}

/// Draw an integer in `[min, max)` from one unit float.
///
/// Consumes exactly one float from `source`, including the degenerate case
/// `min == max`, which yields `min`. Arguments are validated before anything
/// is consumed.
///
/// # Errors
///
/// - `NonIntegerBound` if either bound is fractional or non-finite.
/// - `InvertedBounds` if `max < min`.
/// - `BoundOutOfRange` if a bound, or `max - min`, does not fit in `i64`.
pub fn draw<S, B>(source: &mut S, min: B, max: B) -> Result<i64>
where
    S: UnitSource + ?Sized,
    B: IntegerBound,
{
    let min = min.to_bound()?;
    let max = max.to_bound()?;
    if max < min {
        return Err(ArgumentError::InvertedBounds { min, max }.into());
    }
    let span = max
        .checked_sub(min)
        .ok_or(ArgumentError::BoundOutOfRange)?;
    Ok(min + offset(source.next_unit(), span))
}

/// Reject populations with positions beyond `i64::MAX`.
///
/// Only zero-sized element types can get there; their upper positions would
/// be unreachable through the `i64` span.
pub(crate) fn check_len(len: usize) -> std::result::Result<(), ArgumentError> {
    i64::try_from(len)
        .map(|_| ())
        .map_err(|_| ArgumentError::BoundOutOfRange)
}

/// Draw an index in `[0, len)`.
///
/// Crate-internal fast path; consumes one float, same as [`draw`]. Requires
/// `len` to have passed [`check_len`].
#[inline]
pub(crate) fn draw_index<S: UnitSource + ?Sized>(source: &mut S, len: usize) -> usize {
    debug_assert!(check_len(len).is_ok());
    offset(source.next_unit(), len as i64) as usize
}

/// `floor(u * span)`, clamped into `[0, span - 1]`.
///
/// For spans above 2^53 the product can round up to `span`; the clamp keeps
/// the upper bound exclusive.
#[inline]
fn offset(u: f64, span: i64) -> i64 {
    if span == 0 {
        return 0;
    }
    let raw = (u * span as f64).floor();
    // `as` saturates on overflow and maps NaN to 0.
    (raw as i64).clamp(0, span - 1)
}
