//! Low-level building blocks for GNSS and geodetic time handling.
//!
//! `gnss-core` holds what the time engine needs below the level of time scales:
//! constants, calendar arithmetic on split Julian Dates, and error-free
//! floating-point transformations for (hi, lo) pairs.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calendar`] | Gregorian calendar <-> split Julian Date, day-of-year helpers |
//! | [`math`] | `two_sum`, `two_product`, `day_frac` normalization |
//! | [`constants`] | Epochs and unit conversions (J2000, MJD, GPS, seconds per day) |
//! | [`errors`] | [`CoreError`] and [`CoreResult`] |

pub mod calendar;
pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{CoreError, CoreResult, MathErrorKind};

pub mod test_helpers;
