//! Error-free transformations for split (hi, lo) floating-point values.
//!
//! A Julian Date stored in a single `f64` resolves about 40 microseconds at
//! modern epochs. Keeping the value as an unevaluated sum `hi + lo` and combining
//! pairs with the error-free [`two_sum`] / [`two_product`] building blocks keeps
//! the rounding error of every step in the low component instead of dropping it.
//!
//! [`day_frac`] is the normalization used throughout: it returns an integral
//! number of days plus a fraction in `[-0.5, 0.5]`.

use crate::errors::{CoreError, CoreResult, MathErrorKind};

/// Returns `(s, e)` with `s = fl(a + b)` and `a + b = s + e` exactly.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Returns `(p, e)` with `p = fl(a * b)` and `a * b = p + e` exactly.
#[inline]
pub fn two_product(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

/// Divides `numerator` by `denominator`, returning the quotient and the
/// correction term recovered from the exact remainder.
#[inline]
pub fn split_quotient(numerator: f64, denominator: f64) -> (f64, f64) {
    let q = numerator / denominator;
    let remainder = (-q).mul_add(denominator, numerator);
    (q, remainder / denominator)
}

/// Rounds half away from zero.
#[inline]
pub fn nearest_int(a: f64) -> f64 {
    if a.abs() < 0.5 {
        0.0
    } else if a < 0.0 {
        (a - 0.5).ceil()
    } else {
        (a + 0.5).floor()
    }
}

/// Combines `val1 + val2` into `(day, frac)` where `day` is integral and
/// `|frac| <= 0.5`.
///
/// Both inputs take part in an error-free sum before the split, so a caller's
/// own hi/lo split survives unchanged whenever it is already normalized.
pub fn day_frac(val1: f64, val2: f64) -> (f64, f64) {
    let (sum, err) = two_sum(val1, val2);
    let mut day = nearest_int(sum);
    let (extra, residual) = two_sum(sum, -day);
    let mut frac = residual + (extra + err);

    // The residues can push the fraction over the half-day boundary.
    let excess = nearest_int(frac);
    if excess != 0.0 {
        day += excess;
        let (extra, residual) = two_sum(sum, -day);
        frac = residual + (extra + err);
    }

    (day, frac)
}

/// Like [`day_frac`] but rejects NaN and infinite input.
pub fn checked_day_frac(val1: f64, val2: f64) -> CoreResult<(f64, f64)> {
    if !val1.is_finite() || !val2.is_finite() {
        return Err(CoreError::math_error(
            "day_frac",
            MathErrorKind::NotFinite,
            &format!("cannot split non-finite value ({}, {})", val1, val2),
        ));
    }
    Ok(day_frac(val1, val2))
}
