//! Duration codecs.
//!
//! Durations are stored as split day counts. `timedelta` maps to chrono's
//! [`TimeDelta`](chrono::TimeDelta) at microsecond resolution; the unit
//! formats (`days`, `hours`, `minutes`, `seconds`) are plain floats.

use super::{numeric_inputs, DeltaFormat};
use crate::pair::DualPair;
use crate::values::Values;
use crate::{TimeError, TimeResult};
use chrono::TimeDelta as Duration;
use gnss_core::constants::{
    HOURS_PER_DAY, MICROSECONDS_PER_SECOND, MICROSECONDS_PER_SECOND_F64, MINUTES_PER_DAY,
    SECONDS_PER_HOUR_F64, SECONDS_PER_MINUTE_F64,
};

const NANOSECONDS_PER_SECOND_F64: f64 = 1e9;

fn duration_to_pair(duration: &Duration) -> DualPair {
    let seconds = duration.num_seconds() as f64;
    let nanos = duration.subsec_nanos() as f64;
    DualPair::from_seconds(seconds, nanos / NANOSECONDS_PER_SECOND_F64)
}

/// Rounds a split day count to whole microseconds.
fn pair_to_micros(pair: &DualPair) -> i64 {
    let (hi, lo) = pair.to_seconds_split();
    let whole = hi.trunc();
    let rest = (hi - whole) + lo;
    whole as i64 * MICROSECONDS_PER_SECOND + (rest * MICROSECONDS_PER_SECOND_F64).round() as i64
}

pub(super) fn decode_timedelta(val: &Values, val2: Option<&Values>) -> TimeResult<Vec<DualPair>> {
    let durations = val.as_durations().ok_or_else(|| {
        TimeError::invalid_input(
            DeltaFormat::Timedelta,
            format!("expected timedelta values, got {}", val.kind()),
        )
    })?;
    let offsets = match val2 {
        Some(val2) => Some(val2.as_durations().ok_or_else(|| {
            TimeError::invalid_input(
                DeltaFormat::Timedelta,
                format!("expected timedelta val2, got {}", val2.kind()),
            )
        })?),
        None => None,
    };

    Ok(durations
        .iter()
        .enumerate()
        .map(|(i, duration)| {
            let pair = duration_to_pair(duration);
            match offsets {
                Some(offsets) => pair.add(duration_to_pair(&offsets[i])),
                None => pair,
            }
        })
        .collect())
}

pub(super) fn encode_timedelta(pairs: &[DualPair]) -> TimeResult<Values> {
    pairs
        .iter()
        .map(|pair| {
            if !pair.is_finite() {
                return Err(TimeError::ConversionError(format!(
                    "cannot render {} days as a timedelta",
                    pair
                )));
            }
            Ok(Duration::microseconds(pair_to_micros(pair)))
        })
        .collect::<TimeResult<Vec<Duration>>>()
        .map(Values::Duration)
}

fn units_per_day(unit: DeltaFormat) -> f64 {
    match unit {
        DeltaFormat::Days | DeltaFormat::Timedelta => 1.0,
        DeltaFormat::Hours => HOURS_PER_DAY,
        DeltaFormat::Minutes => MINUTES_PER_DAY,
        DeltaFormat::Seconds => HOURS_PER_DAY * SECONDS_PER_HOUR_F64,
    }
}

pub(super) fn decode_unit(unit: DeltaFormat, val: &Values, val2: Option<&Values>) -> TimeResult<Vec<DualPair>> {
    let (first, second) = numeric_inputs(unit, val, val2)?;
    let seconds_per_unit = match unit {
        DeltaFormat::Hours => SECONDS_PER_HOUR_F64,
        DeltaFormat::Minutes => SECONDS_PER_MINUTE_F64,
        DeltaFormat::Seconds => 1.0,
        DeltaFormat::Days | DeltaFormat::Timedelta => {
            return Ok(first
                .iter()
                .zip(&second)
                .map(|(v1, v2)| DualPair::new(*v1, *v2))
                .collect())
        }
    };
    Ok(first
        .iter()
        .zip(&second)
        .map(|(v1, v2)| DualPair::from_seconds(v1 * seconds_per_unit, v2 * seconds_per_unit))
        .collect())
}

pub(super) fn encode_unit(unit: DeltaFormat, pairs: &[DualPair]) -> Values {
    let factor = units_per_day(unit);
    Values::Float(pairs.iter().map(|pair| pair.scale(factor).to_f64()).collect())
}
