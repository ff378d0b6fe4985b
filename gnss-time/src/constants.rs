//! Compiled-in offset tables for the UTC, TAI, GPS and TT scales.

/// TAI - UTC by (year, month) of the first day the value applies.
///
/// Entries before 1972 carry the base offset of the drift era; the drift
/// term comes from [`UTC_DRIFT_CORRECTIONS`] at the same index. From 1972 on
/// each entry is a whole number of seconds and the table is non-decreasing.
pub const TAI_UTC_OFFSETS: &[(i32, i32, f64)] = &[
    (1960, 1, 1.4178180),
    (1961, 1, 1.4228180),
    (1961, 8, 1.3728180),
    (1962, 1, 1.8458580),
    (1963, 11, 1.9458580),
    (1964, 1, 3.2401300),
    (1964, 4, 3.3401300),
    (1964, 9, 3.4401300),
    (1965, 1, 3.5401300),
    (1965, 3, 3.6401300),
    (1965, 7, 3.7401300),
    (1965, 9, 3.8401300),
    (1966, 1, 4.3131700),
    (1968, 2, 4.2131700),
    (1972, 1, 10.0),
    (1972, 7, 11.0),
    (1973, 1, 12.0),
    (1974, 1, 13.0),
    (1975, 1, 14.0),
    (1976, 1, 15.0),
    (1977, 1, 16.0),
    (1978, 1, 17.0),
    (1979, 1, 18.0),
    (1980, 1, 19.0),
    (1981, 7, 20.0),
    (1982, 7, 21.0),
    (1983, 7, 22.0),
    (1985, 7, 23.0),
    (1988, 1, 24.0),
    (1990, 1, 25.0),
    (1991, 1, 26.0),
    (1992, 7, 27.0),
    (1993, 7, 28.0),
    (1994, 7, 29.0),
    (1996, 1, 30.0),
    (1997, 7, 31.0),
    (1999, 1, 32.0),
    (2006, 1, 33.0),
    (2009, 1, 34.0),
    (2012, 7, 35.0),
    (2015, 7, 36.0),
    (2017, 1, 37.0),
];

/// Number of leading [`TAI_UTC_OFFSETS`] entries that use the drift model.
pub const PRE_LEAP_SECOND_ENTRIES: usize = 14;

/// (reference MJD, drift in seconds per day) for the pre-1972 entries.
pub const UTC_DRIFT_CORRECTIONS: [(f64, f64); PRE_LEAP_SECOND_ENTRIES] = [
    (37300.0, 0.0012960),
    (37300.0, 0.0012960),
    (37300.0, 0.0012960),
    (37665.0, 0.0011232),
    (37665.0, 0.0011232),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (39126.0, 0.0025920),
    (39126.0, 0.0025920),
];

/// TAI - GPS, fixed since the GPS epoch.
pub const GPS_TO_TAI_OFFSET_SECONDS: f64 = 19.0;

/// TT - TAI, fixed by IAU definition.
pub const TT_TAI_OFFSET_SECONDS: f64 = 32.184;

pub const TAI_TO_UTC_ITERATIONS: usize = 3;

pub const UT1_TO_UTC_ITERATIONS: usize = 2;

/// Vectors at least this long are converted element-wise on the rayon pool
/// when the `parallel` feature is enabled.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Two-digit years below this pivot belong to the 2000s (`yydddsssss`).
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;
