//! Precision-preserving time instants and durations for GNSS and geodetic work.
//!
//! [`Time`] holds a vector of instants in one time scale, [`TimeDelta`] a vector
//! of durations. Both store split Julian Dates ([`DualPair`]) so that
//! microsecond detail survives conversions and arithmetic on modern epochs.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`scales`] | UTC, TAI, GPS, TT, UT1 and the conversion graph between them |
//! | [`formats`] | Codecs between raw [`Values`] and split Julian Dates |
//! | [`time`] / [`delta`] | The value types |
//! | [`ops`] | Arithmetic and comparison rules |
//! | [`registry`] | Construction and lookup by string tags |
//! | [`pair`] | The split (hi, lo) representation |
//! | [`parsing`] | ISO 8601 and `YY:DDD:SSSSS` parsers |
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta as Duration};
//! use gnss_time::{make_time, make_timedelta, Values};
//!
//! let start = NaiveDate::from_ymd_opt(2009, 11, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2011, 5, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let t1 = make_time(start, None, "utc", "datetime").unwrap();
//! let t2 = make_time(end, None, "utc", "datetime").unwrap();
//!
//! let elapsed = (&t1 - &t2).unwrap();
//! assert_eq!(
//!     elapsed.as_format("timedelta".parse().unwrap()).unwrap(),
//!     Values::from(Duration::days(-549))
//! );
//!
//! let step = make_timedelta(Duration::seconds(30), None, "utc", "timedelta").unwrap();
//! let later = (&t1 + &step).unwrap();
//! assert!(later > t1);
//! ```

pub mod constants;
pub mod delta;
mod elementwise;
pub mod errors;
pub mod formats;
pub mod ops;
pub mod pair;
pub mod parsing;
pub mod registry;
pub mod scales;
pub mod time;
pub mod values;

pub use delta::TimeDelta;
pub use errors::{TimeError, TimeResult};
pub use formats::{CalendarFields, DeltaFormat, Format};
pub use ops::TemporalValue;
pub use pair::DualPair;
pub use registry::{
    as_format, as_scale, delta_formats, formats, is_time, is_timedelta, make_time, make_timedelta,
    scales,
};
pub use scales::{Dut1Model, Dut1Table, Scale};
pub use time::Time;
pub use values::Values;
