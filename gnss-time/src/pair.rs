//! Split (hi, lo) day values.
//!
//! [`DualPair`] is the in-memory representation of every instant (a Julian Date)
//! and every duration (a number of days) in the crate. The value is the
//! unevaluated sum `hi + lo`. After normalization `hi` is an integral number of
//! days and `|lo| <= 0.5`, so sub-microsecond detail lives in a number whose ulp
//! is around 1e-17 days rather than 5e-10 days.
//!
//! Every arithmetic step goes through [`gnss_core::math::day_frac`], which
//! re-splits the result and keeps rounding error bounded.

use gnss_core::constants::{J2000_JD, SECONDS_PER_DAY_F64};
use gnss_core::math::{checked_day_frac, day_frac, split_quotient, two_product, two_sum};
use gnss_core::CoreResult;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualPair {
    hi: f64,
    lo: f64,
}

impl DualPair {
    /// Combines `val + val2` into a normalized pair.
    pub fn new(val: f64, val2: f64) -> Self {
        let (hi, lo) = day_frac(val, val2);
        Self { hi, lo }
    }

    /// Like [`DualPair::new`] but rejects NaN and infinite components.
    pub fn try_new(val: f64, val2: f64) -> CoreResult<Self> {
        let (hi, lo) = checked_day_frac(val, val2)?;
        Ok(Self { hi, lo })
    }

    /// Wraps components without normalizing them.
    pub fn from_raw(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    pub fn from_f64(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Builds a day value from seconds, keeping the division remainder.
    pub fn from_seconds(seconds: f64, seconds2: f64) -> Self {
        let (q1, r1) = split_quotient(seconds, SECONDS_PER_DAY_F64);
        let (q2, r2) = split_quotient(seconds2, SECONDS_PER_DAY_F64);
        Self::new(q1, q2).add(Self::new(r1, r2))
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn to_f64(&self) -> f64 {
        self.hi + self.lo
    }

    pub fn is_finite(&self) -> bool {
        self.hi.is_finite() && self.lo.is_finite()
    }

    /// Sum of two pairs, normalized.
    pub fn add(self, other: Self) -> Self {
        let (hi, err) = two_sum(self.hi, other.hi);
        let (lo, err2) = two_sum(self.lo, other.lo);
        let (day, frac) = day_frac(hi, lo);
        Self::new(day, frac + (err + err2))
    }

    pub fn sub(self, other: Self) -> Self {
        self.add(-other)
    }

    pub fn add_days(self, days: f64) -> Self {
        self.add(Self::new(days, 0.0))
    }

    pub fn add_seconds(self, seconds: f64) -> Self {
        self.add(Self::from_seconds(seconds, 0.0))
    }

    /// Multiplies by `factor`, carrying the product error of both components.
    pub fn scale(self, factor: f64) -> Self {
        let (p1, e1) = two_product(self.hi, factor);
        let (p2, e2) = two_product(self.lo, factor);
        Self::new(p1, p2).add(Self::new(e1, e2))
    }

    /// Value in seconds as a `(hi, lo)` split.
    pub fn to_seconds_split(&self) -> (f64, f64) {
        let seconds = self.scale(SECONDS_PER_DAY_F64);
        (seconds.hi, seconds.lo)
    }

    pub fn to_seconds(&self) -> f64 {
        let (hi, lo) = self.to_seconds_split();
        hi + lo
    }

    /// Orders by the sign of the pairwise difference, which is exact for
    /// differently split representations of nearby values.
    pub fn compare(&self, other: &Self) -> Ordering {
        let diff = (self.hi - other.hi) + (self.lo - other.lo);
        if diff < 0.0 {
            Ordering::Less
        } else if diff > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Neg for DualPair {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl fmt::Display for DualPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} + {:.12e}", self.hi, self.lo)
    }
}

impl From<f64> for DualPair {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnss_core::test_helpers::assert_ulp_le;

    #[test]
    fn test_dual_pair_creation() {
        let pair = DualPair::new(J2000_JD, 0.25);
        assert_eq!(pair.hi(), J2000_JD);
        assert_eq!(pair.lo(), 0.25);
        assert_eq!(pair.to_f64(), 2451545.25);

        let pair = DualPair::new(2451544.0, 0.5);
        assert_eq!((pair.hi(), pair.lo()), (J2000_JD, -0.5));
    }

    #[test]
    fn test_val2_survives_split() {
        // One nanosecond is far below the resolution of a single f64 JD
        let ns_days = 1e-9 / SECONDS_PER_DAY_F64;
        let pair = DualPair::new(J2000_JD, ns_days);
        assert_eq!(J2000_JD + ns_days, J2000_JD);
        assert_eq!(pair.lo(), ns_days);
    }

    #[test]
    fn test_add_and_sub_round_trip() {
        let t = DualPair::new(2457204.5, 0.123456789012345);
        let d = DualPair::from_seconds(30.0, 0.0);
        let back = t.add(d).sub(d);
        assert_eq!(back.hi(), t.hi());
        assert_ulp_le(back.lo(), t.lo(), 2, "t + d - d");
    }

    #[test]
    fn test_from_seconds_reference_values() {
        assert_eq!(DualPair::from_seconds(86400.0, 0.0), DualPair::new(1.0, 0.0));
        assert_eq!(DualPair::from_seconds(-549.0 * 86400.0, 0.0).hi(), -549.0);

        let quarter = DualPair::from_seconds(21600.0, 1e-6);
        assert_eq!(quarter.hi(), 0.0);
        assert_ulp_le(quarter.lo(), 0.25 + 1e-6 / 86400.0, 1, "quarter day plus 1 us");
    }

    #[test]
    fn test_to_seconds() {
        let d = DualPair::new(-549.0, 0.0);
        assert_eq!(d.to_seconds(), -549.0 * 86400.0);

        let d = DualPair::from_seconds(30.0, 0.0);
        assert_ulp_le(d.to_seconds(), 30.0, 1, "30 s");
    }

    #[test]
    fn test_compare_across_splits() {
        let a = DualPair::from_raw(2451544.5, 0.5);
        let b = DualPair::from_raw(J2000_JD, 0.0);
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(a.add_seconds(1e-6).compare(&b), Ordering::Greater);
        assert_eq!(a.add_seconds(-1e-6).compare(&b), Ordering::Less);
    }

    #[test]
    fn test_neg_and_scale() {
        let d = DualPair::new(1.0, 0.25);
        assert_eq!((-d).to_f64(), -1.25);
        assert_eq!(d.scale(24.0).to_f64(), 30.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = DualPair::new(2451545.5, 0.123456789);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: DualPair = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
