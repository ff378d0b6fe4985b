//! Text parsers for the `iso` and `yydddsssss` formats.
//!
//! Parsers check the shape and the per-field ranges of the input. Second 60 is
//! only accepted at 23:59; whether the date exists, and whether that day really
//! ends in a leap second, is decided by the calendar codec for the scale the
//! value is built in.

use crate::constants::TWO_DIGIT_YEAR_PIVOT;
use crate::{TimeError, TimeResult};

const MAX_ISO8601_LENGTH: usize = 32;
const NANOSECONDS_PER_SECOND: f64 = 1e9;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl ParsedDateTime {
    /// Nanoseconds since midnight, rounded to the nearest nanosecond.
    pub fn nanos_of_day(&self) -> i64 {
        let whole = (self.hour as i64 * 60 + self.minute as i64) * 60;
        whole * 1_000_000_000 + (self.second * NANOSECONDS_PER_SECOND).round() as i64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDayOfYear {
    pub year: i32,
    pub doy: u16,
    pub second_of_day: f64,
}

/// Parses `digits` as an unsigned number of `min..=max` ASCII digits.
fn parse_digits(field: &str, digits: &str, min: usize, max: usize) -> TimeResult<u32> {
    if !(min..=max).contains(&digits.len()) {
        return Err(TimeError::ParseError(format!(
            "Invalid {} format: '{}'",
            field, digits
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid {}: '{}'",
            field, digits
        )));
    }
    Ok(digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32))
}

fn parse_seconds(field: &str, text: &str) -> TimeResult<f64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(TimeError::ParseError(format!("Invalid {}: '{}'", field, text)));
    }
    text.parse::<f64>()
        .map_err(|_| TimeError::ParseError(format!("Invalid {}: '{}'", field, text)))
}

fn check_range<T: PartialOrd + std::fmt::Display>(
    field: &str,
    value: T,
    range: std::ops::RangeInclusive<T>,
) -> TimeResult<T> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(TimeError::ParseError(format!(
            "{} out of range: {}",
            field, value
        )))
    }
}

/// Parses `YYYY-MM-DDTHH:MM:SS[.fff][Z]`; a space may replace the `T`.
///
/// Seconds up to (but excluding) 61 are accepted in the last minute of the day
/// so leap seconds can be written as `23:59:60.x`.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let separator_pos = s.find('T').or_else(|| s.find(' ')).ok_or_else(|| {
        TimeError::ParseError(format!(
            "Invalid datetime format: '{}'. Expected YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })?;

    let (date_part, time_part_with_sep) = s.split_at(separator_pos);
    let time_part = &time_part_with_sep[1..];

    let date_components: Vec<&str> = date_part.split('-').collect();
    if date_components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    let year = parse_digits("year", date_components[0], 4, 4)? as i32;
    let month = parse_digits("month", date_components[1], 1, 2)? as u8;
    let day = parse_digits("day", date_components[2], 1, 2)? as u8;

    check_range("Month", month, 1..=12)?;
    check_range("Day", day, 1..=31)?;

    let time_components: Vec<&str> = time_part.split(':').collect();
    if time_components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time_part
        )));
    }

    let hour = parse_digits("hour", time_components[0], 1, 2)? as u8;
    let minute = parse_digits("minute", time_components[1], 1, 2)? as u8;
    let second = parse_seconds("second", time_components[2])?;

    check_range("Hour", hour, 0..=23)?;
    check_range("Minute", minute, 0..=59)?;
    if second >= 61.0 {
        return Err(TimeError::ParseError(format!(
            "Second out of range: {}",
            second
        )));
    }
    if second >= 60.0 && (hour, minute) != (23, 59) {
        return Err(TimeError::ParseError(format!(
            "Leap second only allowed at 23:59, got {:02}:{:02}:{}",
            hour, minute, second
        )));
    }

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

/// Parses `YY:DDD:SSSSS`. Four-digit years are accepted as well; two-digit
/// years below 50 map to 20YY, the rest to 19YY.
pub fn parse_yydddsssss(s: &str) -> TimeResult<ParsedDayOfYear> {
    let s = s.trim();
    let components: Vec<&str> = s.split(':').collect();
    if components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid day-of-year format: '{}'. Expected YY:DDD:SSSSS",
            s
        )));
    }

    let year = match components[0].len() {
        2 => {
            let yy = parse_digits("year", components[0], 2, 2)? as i32;
            if yy < TWO_DIGIT_YEAR_PIVOT {
                2000 + yy
            } else {
                1900 + yy
            }
        }
        _ => parse_digits("year", components[0], 4, 4)? as i32,
    };

    let doy = parse_digits("day of year", components[1], 1, 3)? as u16;
    check_range("Day of year", doy, 1..=366)?;

    let second_of_day = parse_seconds("second of day", components[2])?;
    if second_of_day >= 86401.0 {
        return Err(TimeError::ParseError(format!(
            "Second of day out of range: {}",
            second_of_day
        )));
    }

    Ok(ParsedDayOfYear {
        year,
        doy,
        second_of_day,
    })
}
