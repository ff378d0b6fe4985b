//! Epochs and unit conversions shared by the time crates.

pub const J2000_JD: f64 = 2451545.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

/// Julian Date of the GPS epoch, 1980-01-06T00:00:00.
pub const GPS_EPOCH_JD: f64 = 2_444_244.5;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const DAYS_PER_WEEK: i64 = 7;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_PER_WEEK_F64: f64 = 604_800.0;

pub const SECONDS_PER_HOUR_F64: f64 = 3_600.0;

pub const SECONDS_PER_MINUTE_F64: f64 = 60.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const MICROSECONDS_PER_SECOND: i64 = 1_000_000;

pub const MICROSECONDS_PER_SECOND_F64: f64 = 1_000_000.0;

pub const MICROSECONDS_PER_DAY: i64 = 86_400_000_000;

pub const NANOSECONDS_PER_MICROSECOND: u32 = 1_000;

/// Smallest and largest Julian Dates accepted by the calendar routines.
pub const CALENDAR_JD_MIN: f64 = -68_569.5;

pub const CALENDAR_JD_MAX: f64 = 1e9;
