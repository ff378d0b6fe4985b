//! Arithmetic and comparison between instants and durations.
//!
//! | Left | Op | Right | Result |
//! |------|----|-------|--------|
//! | `Time` | `+` | `TimeDelta` | `Time` |
//! | `TimeDelta` | `+` | `Time` | `Time` |
//! | `Time` | `-` | `TimeDelta` | `Time` |
//! | `Time` | `-` | `Time` | `TimeDelta` |
//! | `TimeDelta` | `+`/`-` | `TimeDelta` | `TimeDelta` |
//!
//! Operators are implemented on references and return `TimeResult`, since
//! operand lengths may not broadcast. Instant arithmetic runs on TAI, so
//! adding 86400 s across a leap second lands on `23:59:60` of the UTC day.
//! The result keeps the scale and format of the instant operand; `Time - Time`
//! yields a duration in the scale of the left operand with format `days`.
//!
//! [`TemporalValue`] carries either kind for callers that only know the
//! operand types at runtime. It accepts every combination and fails with
//! [`TimeError::InvalidOperation`] for `TimeDelta - Time` and `Time + Time`.
//!
//! Comparisons convert the right operand into the scale of the left one.
//! `partial_cmp` returns an ordering only when every element agrees, so
//! `a < b` holds when each element of `a` is earlier than its counterpart.

use crate::delta::TimeDelta;
use crate::formats::DeltaFormat;
use crate::pair::DualPair;
use crate::time::Time;
use crate::{TimeError, TimeResult};
use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// Applies `op` element-wise. Equal lengths pair up, a length-1 operand is
/// repeated against the other.
fn broadcast<T>(
    left: &[DualPair],
    right: &[DualPair],
    op: impl Fn(DualPair, DualPair) -> T,
) -> TimeResult<Vec<T>> {
    match (left.len(), right.len()) {
        (l, r) if l == r => Ok(left.iter().zip(right).map(|(a, b)| op(*a, *b)).collect()),
        (1, _) => Ok(right.iter().map(|b| op(left[0], *b)).collect()),
        (_, 1) => Ok(left.iter().map(|a| op(*a, right[0])).collect()),
        (l, r) => Err(TimeError::ShapeMismatch {
            expected: l,
            found: r,
        }),
    }
}

fn shift(time: &Time, delta: &TimeDelta, op: fn(DualPair, DualPair) -> DualPair) -> TimeResult<Time> {
    let tai = time.tai_pairs()?;
    let shifted = broadcast(&tai, delta.pairs(), op)?;
    time.from_tai_pairs(&shifted)
}

impl Add<&TimeDelta> for &Time {
    type Output = TimeResult<Time>;

    fn add(self, rhs: &TimeDelta) -> TimeResult<Time> {
        shift(self, rhs, DualPair::add)
    }
}

impl Add<&Time> for &TimeDelta {
    type Output = TimeResult<Time>;

    fn add(self, rhs: &Time) -> TimeResult<Time> {
        shift(rhs, self, DualPair::add)
    }
}

impl Sub<&TimeDelta> for &Time {
    type Output = TimeResult<Time>;

    fn sub(self, rhs: &TimeDelta) -> TimeResult<Time> {
        shift(self, rhs, DualPair::sub)
    }
}

impl Sub<&Time> for &Time {
    type Output = TimeResult<TimeDelta>;

    fn sub(self, rhs: &Time) -> TimeResult<TimeDelta> {
        let left = self.tai_pairs()?;
        let right = rhs.tai_pairs()?;
        let pairs = broadcast(&left, &right, DualPair::sub)?;
        Ok(TimeDelta::from_pairs(pairs, self.scale(), DeltaFormat::Days))
    }
}

impl Add<&TimeDelta> for &TimeDelta {
    type Output = TimeResult<TimeDelta>;

    fn add(self, rhs: &TimeDelta) -> TimeResult<TimeDelta> {
        let pairs = broadcast(self.pairs(), rhs.pairs(), DualPair::add)?;
        Ok(TimeDelta::from_pairs(pairs, self.scale(), self.format()))
    }
}

impl Sub<&TimeDelta> for &TimeDelta {
    type Output = TimeResult<TimeDelta>;

    fn sub(self, rhs: &TimeDelta) -> TimeResult<TimeDelta> {
        let pairs = broadcast(self.pairs(), rhs.pairs(), DualPair::sub)?;
        Ok(TimeDelta::from_pairs(pairs, self.scale(), self.format()))
    }
}

/// Collapses element-wise orderings into one when they all agree.
fn unanimous(orderings: &[Ordering]) -> Option<Ordering> {
    let first = orderings.first().copied().unwrap_or(Ordering::Equal);
    orderings.iter().all(|o| *o == first).then_some(first)
}

impl Time {
    /// Element-wise ordering against `other`, converted into this scale.
    pub fn compare(&self, other: &Time) -> TimeResult<Vec<Ordering>> {
        let other = other.to_scale(self.scale())?;
        broadcast(self.pairs(), other.pairs(), |a, b| a.compare(&b))
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        unanimous(&self.compare(other).ok()?)
    }
}

impl TimeDelta {
    /// Element-wise ordering against `other`.
    pub fn compare(&self, other: &TimeDelta) -> TimeResult<Vec<Ordering>> {
        broadcast(self.pairs(), other.pairs(), |a, b| a.compare(&b))
    }
}

impl PartialEq for TimeDelta {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for TimeDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        unanimous(&self.compare(other).ok()?)
    }
}

/// An instant or a duration whose kind is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum TemporalValue {
    Time(Time),
    Delta(TimeDelta),
}

impl TemporalValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            TemporalValue::Time(_) => "Time",
            TemporalValue::Delta(_) => "TimeDelta",
        }
    }

    pub fn as_time(&self) -> Option<&Time> {
        match self {
            TemporalValue::Time(time) => Some(time),
            TemporalValue::Delta(_) => None,
        }
    }

    pub fn as_delta(&self) -> Option<&TimeDelta> {
        match self {
            TemporalValue::Delta(delta) => Some(delta),
            TemporalValue::Time(_) => None,
        }
    }

    fn unsupported(&self, op: &'static str, rhs: &TemporalValue) -> TimeError {
        TimeError::InvalidOperation {
            left: self.type_name(),
            op,
            right: rhs.type_name(),
        }
    }
}

impl From<Time> for TemporalValue {
    fn from(time: Time) -> Self {
        TemporalValue::Time(time)
    }
}

impl From<TimeDelta> for TemporalValue {
    fn from(delta: TimeDelta) -> Self {
        TemporalValue::Delta(delta)
    }
}

impl Add<&TemporalValue> for &TemporalValue {
    type Output = TimeResult<TemporalValue>;

    fn add(self, rhs: &TemporalValue) -> TimeResult<TemporalValue> {
        match (self, rhs) {
            (TemporalValue::Time(t), TemporalValue::Delta(d)) => (t + d).map(TemporalValue::Time),
            (TemporalValue::Delta(d), TemporalValue::Time(t)) => (d + t).map(TemporalValue::Time),
            (TemporalValue::Delta(a), TemporalValue::Delta(b)) => (a + b).map(TemporalValue::Delta),
            (TemporalValue::Time(_), TemporalValue::Time(_)) => Err(self.unsupported("+", rhs)),
        }
    }
}

impl Sub<&TemporalValue> for &TemporalValue {
    type Output = TimeResult<TemporalValue>;

    fn sub(self, rhs: &TemporalValue) -> TimeResult<TemporalValue> {
        match (self, rhs) {
            (TemporalValue::Time(t), TemporalValue::Delta(d)) => (t - d).map(TemporalValue::Time),
            (TemporalValue::Time(a), TemporalValue::Time(b)) => (a - b).map(TemporalValue::Delta),
            (TemporalValue::Delta(a), TemporalValue::Delta(b)) => (a - b).map(TemporalValue::Delta),
            (TemporalValue::Delta(_), TemporalValue::Time(_)) => Err(self.unsupported("-", rhs)),
        }
    }
}
