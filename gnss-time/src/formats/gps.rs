//! GPS codecs: `gps_ws` (week, seconds of week) and `gps_seconds`.
//!
//! Both count from the GPS epoch, 1980-01-06 00:00:00 GPS time, and are only
//! defined in the GPS scale.

use super::{numeric_inputs, reject_val2, Format};
use crate::pair::DualPair;
use crate::scales::Scale;
use crate::values::Values;
use crate::{TimeError, TimeResult};
use gnss_core::constants::{DAYS_PER_WEEK, GPS_EPOCH_JD, SECONDS_PER_WEEK_F64};

fn gps_epoch() -> DualPair {
    DualPair::new(GPS_EPOCH_JD, 0.0)
}

fn from_week_seconds(week: f64, seconds: f64) -> DualPair {
    gps_epoch()
        .add_days(week * DAYS_PER_WEEK as f64)
        .add_seconds(seconds)
}

/// Accepts [`Values::WeekSeconds`], or week numbers in `val` with seconds of
/// week in `val2`.
pub(super) fn decode_gps_ws(val: &Values, val2: Option<&Values>, _scale: Scale) -> TimeResult<Vec<DualPair>> {
    if let Some(week_seconds) = val.as_week_seconds() {
        reject_val2(Format::GpsWs, val2)?;
        return week_seconds
            .iter()
            .map(|(week, seconds)| {
                DualPair::try_new(*seconds, 0.0)
                    .map_err(|err| TimeError::invalid_input(Format::GpsWs, err.to_string()))?;
                Ok(from_week_seconds(*week as f64, *seconds))
            })
            .collect();
    }

    if val2.is_none() {
        return Err(TimeError::invalid_input(
            Format::GpsWs,
            format!(
                "expected week/seconds values or weeks with seconds as val2, got {}",
                val.kind()
            ),
        ));
    }
    let (weeks, seconds) = numeric_inputs(Format::GpsWs, val, val2)?;
    Ok(weeks
        .iter()
        .zip(&seconds)
        .map(|(week, seconds)| from_week_seconds(*week, *seconds))
        .collect())
}

pub(super) fn encode_gps_ws(pairs: &[DualPair], _scale: Scale) -> TimeResult<Values> {
    let week_seconds = pairs
        .iter()
        .map(|pair| {
            let elapsed = pair.sub(gps_epoch());
            let week = (elapsed.to_f64() / DAYS_PER_WEEK as f64).floor();
            let mut seconds = elapsed
                .sub(DualPair::new(week * DAYS_PER_WEEK as f64, 0.0))
                .to_seconds();
            let mut week = week as i64;
            if seconds >= SECONDS_PER_WEEK_F64 {
                week += 1;
                seconds -= SECONDS_PER_WEEK_F64;
            } else if seconds < 0.0 {
                week -= 1;
                seconds += SECONDS_PER_WEEK_F64;
            }
            (week, seconds)
        })
        .collect();
    Ok(Values::WeekSeconds(week_seconds))
}

pub(super) fn decode_gps_seconds(
    val: &Values,
    val2: Option<&Values>,
    _scale: Scale,
) -> TimeResult<Vec<DualPair>> {
    let (first, second) = numeric_inputs(Format::GpsSeconds, val, val2)?;
    Ok(first
        .iter()
        .zip(&second)
        .map(|(s1, s2)| gps_epoch().add(DualPair::from_seconds(*s1, *s2)))
        .collect())
}

pub(super) fn encode_gps_seconds(pairs: &[DualPair], _scale: Scale) -> TimeResult<Values> {
    Ok(Values::Float(
        pairs
            .iter()
            .map(|pair| pair.sub(gps_epoch()).to_seconds())
            .collect(),
    ))
}
