//! Leap-second table lookup and UTC day lengths.

use crate::constants::{PRE_LEAP_SECOND_ENTRIES, TAI_UTC_OFFSETS, UTC_DRIFT_CORRECTIONS};
use crate::TimeResult;
use gnss_core::calendar::{calendar_to_mjd, next_calendar_day};
use gnss_core::constants::SECONDS_PER_DAY_F64;

/// TAI - UTC in seconds at `fraction` of the given UTC day.
///
/// Selects the latest table entry whose effective date is on or before the
/// date, so a leap second applies from the first instant of its effective
/// day. Dates before 1960 and fractions outside `[0, 1]` yield 0.
pub fn get_tai_utc_offset(year: i32, month: i32, day: i32, fraction: f64) -> f64 {
    if !(0.0..=1.0).contains(&fraction) {
        return 0.0;
    }

    if year < TAI_UTC_OFFSETS[0].0 {
        tracing::trace!(year, "date precedes the leap second table, TAI-UTC = 0");
        return 0.0;
    }

    let m = 12 * year + month;

    let i = match TAI_UTC_OFFSETS
        .binary_search_by(|&(entry_year, entry_month, _)| (12 * entry_year + entry_month).cmp(&m))
    {
        Ok(idx) => idx,
        Err(0) => return 0.0,
        Err(idx) => idx - 1,
    };

    let mut tai_minus_utc = TAI_UTC_OFFSETS[i].2;

    if i < PRE_LEAP_SECOND_ENTRIES {
        let modified_jd = calendar_to_mjd(year, month, day) as f64;
        let (drift_mjd, drift_rate) = UTC_DRIFT_CORRECTIONS[i];
        tai_minus_utc += (modified_jd + fraction - drift_mjd) * drift_rate;
    }

    tai_minus_utc
}

/// Length in SI seconds of the given UTC calendar day.
///
/// 86401 on a day that ends with a positive leap second. Drift-era days
/// (1961-1971) are stretched by the accumulated drift as well.
pub fn utc_day_length(year: i32, month: i32, day: i32) -> TimeResult<f64> {
    let dat0 = get_tai_utc_offset(year, month, day, 0.0);
    let dat12 = get_tai_utc_offset(year, month, day, 0.5);

    let (next_year, next_month, next_day) = next_calendar_day(year, month, day)?;
    let dat24 = get_tai_utc_offset(next_year, next_month, next_day, 0.0);

    let dleap = dat24 - (2.0 * dat12 - dat0);
    Ok(SECONDS_PER_DAY_F64 + dleap)
}
