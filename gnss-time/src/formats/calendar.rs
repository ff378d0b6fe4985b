//! Calendar codecs: `datetime`, `iso`, `yydddsssss` and `doy`.
//!
//! All four go through [`CalendarFields`], a proleptic Gregorian date plus
//! microseconds since midnight. In the UTC scale the length of a day comes
//! from the leap second table, so the day before a leap second has 86401
//! seconds and `23:59:60.x` is a valid time of day. `datetime` values render
//! the leap second the way chrono does, as second 59 with a nanosecond field
//! of one second or more.
//!
//! `doy` renders the integer day of year. Decoding it needs the year as `val2`;
//! a fractional day of year selects the time of day.

use super::{numeric_inputs, reject_val2, Format};
use crate::pair::DualPair;
use crate::parsing::{parse_iso8601, parse_yydddsssss};
use crate::scales::common::utc_day_length;
use crate::scales::Scale;
use crate::values::Values;
use crate::{TimeError, TimeResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta as Duration, Timelike};
use gnss_core::calendar::{
    calendar_to_mjd, day_of_year, julian_to_calendar, month_day_from_doy, next_calendar_day,
    validate_date,
};
use gnss_core::constants::{
    MICROSECONDS_PER_DAY, MICROSECONDS_PER_SECOND, MJD_ZERO_POINT, NANOSECONDS_PER_MICROSECOND,
};
use gnss_core::math::split_quotient;

const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;
const LAST_REGULAR_SECOND: i64 = 86_399;

/// A calendar date and the time of day at microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub doy: i32,
    pub micros_of_day: i64,
}

impl CalendarFields {
    /// Whole seconds since midnight; 86400 during a leap second.
    pub fn sec_of_day(&self) -> i64 {
        self.micros_of_day.div_euclid(MICROSECONDS_PER_SECOND)
    }

    pub fn microsecond(&self) -> i64 {
        self.micros_of_day.rem_euclid(MICROSECONDS_PER_SECOND)
    }

    fn is_leap_second(&self) -> bool {
        self.sec_of_day() > LAST_REGULAR_SECOND
    }

    pub fn hour(&self) -> i32 {
        if self.is_leap_second() {
            23
        } else {
            (self.sec_of_day() / SECONDS_PER_HOUR) as i32
        }
    }

    pub fn minute(&self) -> i32 {
        if self.is_leap_second() {
            59
        } else {
            (self.sec_of_day() % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as i32
        }
    }

    /// Second of the minute, 60 during a leap second.
    pub fn second(&self) -> i32 {
        if self.is_leap_second() {
            (60 + self.sec_of_day() - 86_400) as i32
        } else {
            (self.sec_of_day() % SECONDS_PER_MINUTE) as i32
        }
    }

    fn to_datetime(self) -> TimeResult<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .ok_or_else(|| {
                TimeError::ConversionError(format!(
                    "{:04}-{:02}-{:02} is outside the datetime range",
                    self.year, self.month, self.day
                ))
            })?;

        let nanos = self.microsecond() as u32 * NANOSECONDS_PER_MICROSECOND;
        let time = if self.is_leap_second() {
            let extra = (self.sec_of_day() - LAST_REGULAR_SECOND) as u32;
            NaiveTime::from_hms_nano_opt(23, 59, 59, extra * 1_000_000_000 + nanos)
        } else {
            NaiveTime::from_num_seconds_from_midnight_opt(self.sec_of_day() as u32, nanos)
        }
        .ok_or_else(|| {
            TimeError::ConversionError(format!(
                "cannot represent {} microseconds of day as a time",
                self.micros_of_day
            ))
        })?;

        Ok(NaiveDateTime::new(date, time))
    }

    fn to_iso(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}",
            self.year,
            self.month,
            self.day,
            self.hour(),
            self.minute(),
            self.second(),
            self.microsecond()
        )
    }

    fn to_yydddsssss(self) -> String {
        format!(
            "{:02}:{:03}:{:05}",
            self.year.rem_euclid(100),
            self.doy,
            self.sec_of_day()
        )
    }
}

/// Length of the given calendar day in `scale`, in microseconds.
fn day_length_micros(year: i32, month: i32, day: i32, scale: Scale) -> TimeResult<i64> {
    if scale.has_leap_seconds() {
        let seconds = utc_day_length(year, month, day)?;
        Ok((seconds * MICROSECONDS_PER_SECOND as f64).round() as i64)
    } else {
        Ok(MICROSECONDS_PER_DAY)
    }
}

/// Splits a Julian Date in `scale` into calendar fields.
pub fn fields_from_pair(pair: DualPair, scale: Scale) -> TimeResult<CalendarFields> {
    let (mut year, mut month, mut day, fraction) = julian_to_calendar(pair.hi(), pair.lo())?;

    let day_length = day_length_micros(year, month, day, scale)?;
    let mut micros_of_day = (fraction * day_length as f64).round() as i64;
    if micros_of_day >= day_length {
        (year, month, day) = next_calendar_day(year, month, day)?;
        micros_of_day -= day_length;
    }

    Ok(CalendarFields {
        year,
        month,
        day,
        doy: day_of_year(year, month, day)?,
        micros_of_day,
    })
}

/// Julian Date of a calendar date plus nanoseconds since midnight in `scale`.
pub fn pair_from_fields(
    format: Format,
    year: i32,
    month: i32,
    day: i32,
    nanos_of_day: i64,
    scale: Scale,
) -> TimeResult<DualPair> {
    validate_date(year, month, day)?;

    let day_length = day_length_micros(year, month, day, scale)? * NANOSECONDS_PER_MICROSECOND as i64;
    if !(0..day_length).contains(&nanos_of_day) {
        return Err(TimeError::invalid_input(
            format,
            format!(
                "{:04}-{:02}-{:02} has no second {} in scale {}",
                year,
                month,
                day,
                nanos_of_day as f64 / NANOSECONDS_PER_SECOND as f64,
                scale
            ),
        ));
    }

    let mjd = calendar_to_mjd(year, month, day) as f64;
    let (fraction, correction) = split_quotient(nanos_of_day as f64, day_length as f64);
    Ok(DualPair::new(MJD_ZERO_POINT, mjd).add(DualPair::new(fraction, correction)))
}

fn datetime_to_pair(datetime: NaiveDateTime, scale: Scale) -> TimeResult<DualPair> {
    if datetime.nanosecond() as i64 >= NANOSECONDS_PER_SECOND
        && (datetime.hour(), datetime.minute()) != (23, 59)
    {
        return Err(TimeError::invalid_input(
            Format::Datetime,
            format!("{} is a leap second outside 23:59", datetime),
        ));
    }
    let nanos_of_day = datetime.num_seconds_from_midnight() as i64 * NANOSECONDS_PER_SECOND
        + datetime.nanosecond() as i64;
    pair_from_fields(
        Format::Datetime,
        datetime.year(),
        datetime.month() as i32,
        datetime.day() as i32,
        nanos_of_day,
        scale,
    )
}

fn encode_fields<T>(
    pairs: &[DualPair],
    scale: Scale,
    render: impl Fn(CalendarFields) -> TimeResult<T>,
) -> TimeResult<Vec<T>> {
    pairs
        .iter()
        .map(|pair| render(fields_from_pair(*pair, scale)?))
        .collect()
}

pub(super) fn decode_datetime(
    val: &Values,
    val2: Option<&Values>,
    scale: Scale,
) -> TimeResult<Vec<DualPair>> {
    let datetimes = val.as_datetimes().ok_or_else(|| {
        TimeError::invalid_input(
            Format::Datetime,
            format!("expected datetime values, got {}", val.kind()),
        )
    })?;
    let offsets: Option<&[Duration]> = match val2 {
        Some(val2) => Some(val2.as_durations().ok_or_else(|| {
            TimeError::invalid_input(
                Format::Datetime,
                format!("expected timedelta val2, got {}", val2.kind()),
            )
        })?),
        None => None,
    };

    datetimes
        .iter()
        .enumerate()
        .map(|(i, datetime)| {
            let datetime = match offsets {
                Some(offsets) => datetime.checked_add_signed(offsets[i]).ok_or_else(|| {
                    TimeError::invalid_input(Format::Datetime, "datetime + val2 overflows")
                })?,
                None => *datetime,
            };
            datetime_to_pair(datetime, scale)
        })
        .collect()
}

pub(super) fn encode_datetime(pairs: &[DualPair], scale: Scale) -> TimeResult<Values> {
    encode_fields(pairs, scale, CalendarFields::to_datetime).map(Values::DateTime)
}

pub(super) fn decode_iso(val: &Values, val2: Option<&Values>, scale: Scale) -> TimeResult<Vec<DualPair>> {
    reject_val2(Format::Iso, val2)?;
    let strings = val.as_strings().ok_or_else(|| {
        TimeError::invalid_input(Format::Iso, format!("expected strings, got {}", val.kind()))
    })?;

    strings
        .iter()
        .map(|s| {
            let parsed = parse_iso8601(s)?;
            pair_from_fields(
                Format::Iso,
                parsed.year,
                parsed.month as i32,
                parsed.day as i32,
                parsed.nanos_of_day(),
                scale,
            )
        })
        .collect()
}

pub(super) fn encode_iso(pairs: &[DualPair], scale: Scale) -> TimeResult<Values> {
    encode_fields(pairs, scale, |fields| Ok(fields.to_iso())).map(Values::Text)
}

pub(super) fn decode_yydddsssss(
    val: &Values,
    val2: Option<&Values>,
    scale: Scale,
) -> TimeResult<Vec<DualPair>> {
    reject_val2(Format::Yydddsssss, val2)?;
    let strings = val.as_strings().ok_or_else(|| {
        TimeError::invalid_input(
            Format::Yydddsssss,
            format!("expected strings, got {}", val.kind()),
        )
    })?;

    strings
        .iter()
        .map(|s| {
            let parsed = parse_yydddsssss(s)?;
            let (month, day) = month_day_from_doy(parsed.year, parsed.doy as i32)?;
            let nanos_of_day = (parsed.second_of_day * NANOSECONDS_PER_SECOND as f64).round() as i64;
            pair_from_fields(Format::Yydddsssss, parsed.year, month, day, nanos_of_day, scale)
        })
        .collect()
}

pub(super) fn encode_yydddsssss(pairs: &[DualPair], scale: Scale) -> TimeResult<Values> {
    encode_fields(pairs, scale, |fields| Ok(fields.to_yydddsssss())).map(Values::Text)
}

pub(super) fn decode_doy(val: &Values, val2: Option<&Values>, scale: Scale) -> TimeResult<Vec<DualPair>> {
    if val2.is_none() {
        return Err(TimeError::invalid_input(
            Format::Doy,
            format!("expected day-of-year values with the year as val2, got {}", val.kind()),
        ));
    }
    let (days, years) = numeric_inputs(Format::Doy, val, val2)?;

    days.iter()
        .zip(&years)
        .map(|(doy, year)| {
            if year.fract() != 0.0 {
                return Err(TimeError::invalid_input(
                    Format::Doy,
                    format!("year must be a whole number, got {}", year),
                ));
            }
            let year = *year as i32;
            let whole = doy.floor();
            let (month, day) = month_day_from_doy(year, whole as i32)?;
            let day_length = day_length_micros(year, month, day, scale)? * NANOSECONDS_PER_MICROSECOND as i64;
            let nanos_of_day = ((doy - whole) * day_length as f64).round() as i64;
            pair_from_fields(Format::Doy, year, month, day, nanos_of_day, scale)
        })
        .collect()
}

pub(super) fn encode_doy(pairs: &[DualPair], scale: Scale) -> TimeResult<Values> {
    encode_fields(pairs, scale, |fields| Ok(fields.doy as i64)).map(Values::Int)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnss_core::constants::J2000_JD;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_fields_at_j2000() {
        let fields = fields_from_pair(DualPair::new(J2000_JD, 0.0), Scale::Tt).unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (2000, 1, 1));
        assert_eq!((fields.hour(), fields.minute(), fields.second()), (12, 0, 0));
        assert_eq!(fields.sec_of_day(), 43_200);
        assert_eq!(fields.doy, 1);
    }

    #[test]
    fn test_properties_example() {
        let val = Values::from(datetime(2000, 1, 1, 1, 1, 1));
        let pairs = decode_datetime(&val, None, Scale::Utc).unwrap();
        let fields = fields_from_pair(pairs[0], Scale::Utc).unwrap();
        assert_eq!(fields.sec_of_day(), 3661);
        assert_eq!(fields.to_yydddsssss(), "00:001:03661");
        assert_eq!(fields.to_iso(), "2000-01-01T01:01:01.000000");
    }

    #[test]
    fn test_datetime_with_duration_offset() {
        let val = Values::from(datetime(2015, 6, 30, 0, 0, 0));
        let val2 = Values::from(Duration::seconds(23 * 3600 + 59 * 60 + 20));
        let pairs = decode_datetime(&val, Some(&val2), Scale::Utc).unwrap();
        let expected = decode_datetime(&Values::from(datetime(2015, 6, 30, 23, 59, 20)), None, Scale::Utc).unwrap();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_datetime_round_trip_microseconds() {
        let dt = NaiveDate::from_ymd_opt(2021, 3, 14)
            .unwrap()
            .and_hms_micro_opt(15, 9, 26, 535_897)
            .unwrap();
        for scale in Scale::ALL {
            let pairs = decode_datetime(&Values::from(dt), None, scale).unwrap();
            assert_eq!(encode_datetime(&pairs, scale).unwrap(), Values::from(dt));
        }
    }

    #[test]
    fn test_leap_second_in_utc() {
        let val = Values::from("2015-06-30T23:59:60.500000");
        let pairs = decode_iso(&val, None, Scale::Utc).unwrap();
        let fields = fields_from_pair(pairs[0], Scale::Utc).unwrap();
        assert_eq!((fields.hour(), fields.minute(), fields.second()), (23, 59, 60));
        assert_eq!(fields.microsecond(), 500_000);
        assert_eq!(encode_iso(&pairs, Scale::Utc).unwrap(), val);

        let rendered = encode_datetime(&pairs, Scale::Utc).unwrap();
        let dt = rendered.as_datetimes().unwrap()[0];
        assert_eq!(dt.second(), 59);
        assert_eq!(dt.nanosecond(), 1_500_000_000);
    }

    #[test]
    fn test_leap_second_rejected_elsewhere() {
        let val = Values::from("2015-06-30T23:59:60.5");
        assert!(decode_iso(&val, None, Scale::Tai).is_err());
        let val = Values::from("2015-06-29T23:59:60");
        assert!(decode_iso(&val, None, Scale::Utc).is_err());
    }

    #[test]
    fn test_yydddsssss_round_trip() {
        let val = Values::from(vec!["00:001:03661", "15:181:86400", "99:365:00000"]);
        let pairs = decode_yydddsssss(&val, None, Scale::Utc).unwrap();
        assert_eq!(encode_yydddsssss(&pairs, Scale::Utc).unwrap(), val);
        assert_eq!(encode_doy(&pairs, Scale::Utc).unwrap(), Values::Int(vec![1, 181, 365]));
    }

    #[test]
    fn test_doy_needs_year() {
        let pairs = decode_doy(&Values::Int(vec![1, 182]), Some(&Values::Int(vec![2000, 2015])), Scale::Utc).unwrap();
        assert_eq!(pairs[0], DualPair::new(2451544.5, 0.0));
        assert_eq!(encode_iso(&pairs, Scale::Utc).unwrap(), Values::from(vec![
            "2000-01-01T00:00:00.000000",
            "2015-07-01T00:00:00.000000",
        ]));
        assert_eq!(encode_doy(&pairs, Scale::Utc).unwrap(), Values::Int(vec![1, 182]));

        let noon = decode_doy(&Values::from(1.5), Some(&Values::from(2000.0)), Scale::Tt).unwrap();
        assert_eq!(noon[0], DualPair::new(J2000_JD, 0.0));

        let err = decode_doy(&Values::Int(vec![1]), None, Scale::Utc).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput { .. }));
        assert!(decode_doy(&Values::Int(vec![366]), Some(&Values::Int(vec![2001])), Scale::Utc).is_err());
        assert!(decode_doy(&Values::from(1.0), Some(&Values::from(2000.5)), Scale::Utc).is_err());
    }

    #[test]
    fn test_second_60_only_ends_a_leap_day() {
        for text in ["2000-01-01T12:00:60", "2015-06-30T12:30:60", "2015-06-29T23:59:60"] {
            assert!(decode_iso(&Values::from(text), None, Scale::Utc).is_err(), "{}", text);
        }

        let midday_leap = NaiveDate::from_ymd_opt(2015, 6, 30)
            .unwrap()
            .and_hms_nano_opt(12, 30, 59, 1_500_000_000)
            .unwrap();
        assert!(decode_datetime(&Values::from(midday_leap), None, Scale::Utc).is_err());

        let real_leap = NaiveDate::from_ymd_opt(2015, 6, 30)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
            .unwrap();
        let pairs = decode_datetime(&Values::from(real_leap), None, Scale::Utc).unwrap();
        assert_eq!(
            encode_iso(&pairs, Scale::Utc).unwrap(),
            Values::from("2015-06-30T23:59:60.500000")
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert!(decode_iso(&Values::from("2001-02-29T00:00:00"), None, Scale::Utc).is_err());
        assert!(decode_yydddsssss(&Values::from("01:366:00000"), None, Scale::Utc).is_err());
    }

    #[test]
    fn test_far_future_date() {
        let dt = NaiveDate::from_ymd_opt(9999, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let pairs = decode_datetime(&Values::from(dt), None, Scale::Utc).unwrap();
        assert_eq!(encode_datetime(&pairs, Scale::Utc).unwrap(), Values::from(dt));
    }
}
