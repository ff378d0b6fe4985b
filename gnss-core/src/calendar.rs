//! Proleptic Gregorian calendar arithmetic on split Julian Dates.
//!
//! [`julian_to_calendar`] is ERFA's `jd2cal`: it splits a two-part Julian Date
//! into a civil date and a day fraction measured from midnight. It rounds each
//! component separately and sums the fractional parts with compensated (Kahan)
//! summation, so the fraction keeps the precision of the low component. [`calendar_to_julian`] is the
//! inverse for whole days and returns the date as `(MJD_ZERO_POINT, mjd)`.

use crate::constants::{CALENDAR_JD_MAX, CALENDAR_JD_MIN, MJD_ZERO_POINT};
use crate::errors::{CoreError, CoreResult, MathErrorKind};
use crate::math::nearest_int;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: i32) -> CoreResult<i32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => {
            if is_leap_year(year) {
                Ok(29)
            } else {
                Ok(28)
            }
        }
        _ => Err(CoreError::invalid_date(year, month, 1, "month out of range")),
    }
}

pub fn validate_date(year: i32, month: i32, day: i32) -> CoreResult<()> {
    let last = days_in_month(year, month)?;
    if !(1..=last).contains(&day) {
        return Err(CoreError::invalid_date(
            year,
            month,
            day,
            "day out of range for month",
        ));
    }
    Ok(())
}

pub fn next_calendar_day(year: i32, month: i32, day: i32) -> CoreResult<(i32, i32, i32)> {
    let last = days_in_month(year, month)?;

    if day < last {
        Ok((year, month, day + 1))
    } else if month < 12 {
        Ok((year, month + 1, 1))
    } else {
        Ok((year + 1, 1, 1))
    }
}

/// Day of year, 1 for January 1st.
pub fn day_of_year(year: i32, month: i32, day: i32) -> CoreResult<i32> {
    validate_date(year, month, day)?;
    let mut doy = day;
    for m in 1..month {
        doy += days_in_month(year, m)?;
    }
    Ok(doy)
}

/// Inverse of [`day_of_year`]: returns `(month, day)`.
pub fn month_day_from_doy(year: i32, doy: i32) -> CoreResult<(i32, i32)> {
    let mut remaining = doy;
    for month in 1..=12 {
        let length = days_in_month(year, month)?;
        if remaining >= 1 && remaining <= length {
            return Ok((month, remaining));
        }
        remaining -= length;
    }
    Err(CoreError::invalid_date(
        year,
        1,
        doy,
        "day of year out of range",
    ))
}

/// Modified Julian Date of 0h on the given Gregorian date.
pub fn calendar_to_mjd(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let my = (month - 14) / 12;
    let iypmy = year + my;

    (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day
        - 2432076
}

/// Convert a calendar date to a two-part Julian Date `(MJD_ZERO_POINT, mjd)`
/// for 0h of that day.
pub fn calendar_to_julian(year: i32, month: i32, day: i32) -> (f64, f64) {
    (MJD_ZERO_POINT, calendar_to_mjd(year, month, day) as f64)
}

/// Convert a two-part Julian Date to `(year, month, day, day_fraction)`.
///
/// This is the ERFA `eraJd2cal` (SOFA `iauJd2cal`) algorithm: the
/// Fliegel-Van Flandern day-number inversion with Kahan-summed fractions.
/// The day fraction is measured from midnight and lies in `[0, 1)`.
///
/// # Errors
///
/// Returns a `MathError` with kind `OutOfRange` outside `[-68569.5, 1e9]` and
/// `NotFinite` for NaN or infinite input.
pub fn julian_to_calendar(jd1: f64, jd2: f64) -> CoreResult<(i32, i32, i32, f64)> {
    let dj = jd1 + jd2;
    if !dj.is_finite() {
        return Err(CoreError::math_error(
            "julian_to_calendar",
            MathErrorKind::NotFinite,
            "Julian Date is not finite",
        ));
    }
    if !(CALENDAR_JD_MIN..=CALENDAR_JD_MAX).contains(&dj) {
        return Err(CoreError::math_error(
            "julian_to_calendar",
            MathErrorKind::OutOfRange,
            &format!(
                "Julian Date {} out of valid range [{}, {}]",
                dj, CALENDAR_JD_MIN, CALENDAR_JD_MAX
            ),
        ));
    }

    let day_int_1 = nearest_int(jd1);
    let frac_1 = jd1 - day_int_1;
    let mut jd = day_int_1 as i64;

    let day_int_2 = nearest_int(jd2);
    let frac_2 = jd2 - day_int_2;
    jd += day_int_2 as i64;

    let mut sum = 0.5;
    let mut correction = 0.0;

    for frac in [frac_1, frac_2] {
        let temp = sum + frac;
        correction += if f64::abs(sum) >= f64::abs(frac) {
            (sum - temp) + frac
        } else {
            (frac - temp) + sum
        };
        sum = temp;

        if sum >= 1.0 {
            jd += 1;
            sum -= 1.0;
        }
    }
    let mut fraction = sum + correction;
    correction = fraction - sum;

    if fraction < 0.0 {
        fraction = sum + 1.0;
        correction += (1.0 - fraction) + sum;
        sum = fraction;
        fraction = sum + correction;
        correction = fraction - sum;
        jd -= 1;
    }

    if (fraction - 1.0) >= -f64::EPSILON / 4.0 {
        let temp = sum - 1.0;
        correction += (sum - temp) - 1.0;
        sum = temp;
        fraction = sum + correction;

        if (-f64::EPSILON / 2.0) < fraction {
            jd += 1;
            fraction = fraction.max(0.0);
        }
    }

    let mut l = jd + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let day = (l - (2447 * k) / 80) as i32;
    let l_final = k / 11;
    let month = (k + 2 - 12 * l_final) as i32;
    let year = (100 * (n - 49) + i + l_final) as i32;

    Ok((year, month, day, fraction))
}
