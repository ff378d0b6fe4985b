//! Assertion helpers for bit-level and split-value comparisons in tests.

use crate::constants::SECONDS_PER_DAY_F64;

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts two split day values agree to within `tol_seconds`.
///
/// The components are differenced pairwise before summing so the check does
/// not lose the low-order bits it is meant to verify.
#[track_caller]
pub fn assert_split_days_close(a: (f64, f64), b: (f64, f64), tol_seconds: f64, ctx: &str) {
    let diff_days = (a.0 - b.0) + (a.1 - b.1);
    let diff_seconds = diff_days * SECONDS_PER_DAY_F64;
    assert!(
        diff_seconds.abs() <= tol_seconds,
        "{}: ({}, {}) vs ({}, {}) differ by {:.3e} s (tolerance {:.1e} s)",
        ctx,
        a.0,
        a.1,
        b.0,
        b.1,
        diff_seconds,
        tol_seconds
    );
}
