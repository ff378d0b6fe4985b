//! String-tag construction and lookup.
//!
//! These functions accept scale and format names as strings, for callers that
//! read them from configuration or user input. Typed code can use
//! [`Time::new`] and [`TimeDelta::new`] directly.

use crate::delta::TimeDelta;
use crate::formats::{DeltaFormat, Format};
use crate::scales::Scale;
use crate::time::Time;
use crate::values::Values;
use crate::TimeResult;
use std::any::Any;

/// Builds a [`Time`] from a scale name and a format name.
pub fn make_time(
    val: impl Into<Values>,
    val2: Option<Values>,
    scale: &str,
    format: &str,
) -> TimeResult<Time> {
    let scale: Scale = scale.parse()?;
    let format: Format = format.parse()?;
    Time::new(val, val2, scale, format)
}

/// Builds a [`TimeDelta`] from a scale name and a duration format name.
pub fn make_timedelta(
    val: impl Into<Values>,
    val2: Option<Values>,
    scale: &str,
    format: &str,
) -> TimeResult<TimeDelta> {
    let scale: Scale = scale.parse()?;
    let format: DeltaFormat = format.parse()?;
    TimeDelta::new(val, val2, scale, format)
}

pub fn as_scale(time: &Time, scale: &str) -> TimeResult<Time> {
    time.to_scale(scale.parse()?)
}

pub fn as_format(time: &Time, format: &str) -> TimeResult<Values> {
    time.as_format(format.parse()?)
}

pub fn is_time(value: &dyn Any) -> bool {
    value.is::<Time>()
}

pub fn is_timedelta(value: &dyn Any) -> bool {
    value.is::<TimeDelta>()
}

/// Names of the supported time scales.
pub fn scales() -> Vec<&'static str> {
    Scale::ALL.iter().map(|scale| scale.name()).collect()
}

/// Names of the supported instant formats.
pub fn formats() -> Vec<&'static str> {
    Format::ALL.iter().map(|format| format.name()).collect()
}

/// Names of the supported duration formats.
pub fn delta_formats() -> Vec<&'static str> {
    DeltaFormat::ALL.iter().map(|format| format.name()).collect()
}
