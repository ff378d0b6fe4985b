//! Conversions between Coordinated Universal Time (UTC) and International Atomic Time (TAI).
//!
//! TAI runs continuously. UTC follows it with a step offset that changes at
//! each leap second (and, before 1972, drifts linearly between steps):
//!
//! ```text
//! TAI = UTC + (TAI - UTC)(date)
//! ```
//!
//! # Quasi Julian Dates
//!
//! A UTC Julian Date here is a "quasi" JD: the day fraction is measured against
//! the length of the UTC day it falls in. On a day that ends with a leap second
//! the day is 86401 s long, so 23:59:60.5 is the fraction `86400.5 / 86401` and
//! every UTC label, including the leap second itself, maps to exactly one TAI
//! instant.
//!
//! # UTC to TAI
//!
//! The offset is sampled at three points of the UTC day:
//!
//! - start of day (0h): base offset
//! - mid-day (12h): detects pre-1972 drift
//! - start of the next day: detects a leap second at the end of the day
//!
//! The day fraction is stretched by the drift rate and by the leap amount, then
//! the base offset is added.
//!
//! # TAI to UTC
//!
//! The inverse starts from UTC = TAI and applies three fixed-point corrections
//! through the forward conversion. Within a few tens of seconds of the answer
//! the table lookup is stable, so three iterations converge to the limit of the
//! split representation.

use crate::constants::TAI_TO_UTC_ITERATIONS;
use crate::pair::DualPair;
use crate::scales::common::get_tai_utc_offset;
use crate::TimeResult;
use gnss_core::calendar::{calendar_to_julian, julian_to_calendar, next_calendar_day};
use gnss_core::constants::SECONDS_PER_DAY_F64;

/// Convert a UTC quasi Julian Date to TAI.
pub fn utc_to_tai(utc: DualPair) -> TimeResult<DualPair> {
    let utc_int = utc.hi();
    let utc_frac = utc.lo();

    let (year, month, day, mut day_fraction) = julian_to_calendar(utc_int, utc_frac)?;

    let offset_0h = get_tai_utc_offset(year, month, day, 0.0);
    let offset_12h = get_tai_utc_offset(year, month, day, 0.5);

    let (next_year, next_month, next_day) = next_calendar_day(year, month, day)?;
    let offset_24h = get_tai_utc_offset(next_year, next_month, next_day, 0.0);

    let drift_rate = 2.0 * (offset_12h - offset_0h);
    let leap_amount = offset_24h - (offset_0h + drift_rate);

    day_fraction *= (SECONDS_PER_DAY_F64 + leap_amount) / SECONDS_PER_DAY_F64;
    day_fraction *= (SECONDS_PER_DAY_F64 + drift_rate) / SECONDS_PER_DAY_F64;

    let (z1, z2) = calendar_to_julian(year, month, day);

    let mut tai_frac = z1 - utc_int;
    tai_frac += z2;
    tai_frac += day_fraction + offset_0h / SECONDS_PER_DAY_F64;

    Ok(DualPair::new(utc_int, tai_frac))
}

/// Convert a TAI Julian Date to a UTC quasi Julian Date.
pub fn tai_to_utc(tai: DualPair) -> TimeResult<DualPair> {
    let mut utc = tai;
    for _ in 0..TAI_TO_UTC_ITERATIONS {
        let guess = utc_to_tai(utc)?;
        utc = utc.add(tai.sub(guess));
    }
    Ok(utc)
}
