//! Error types shared by the GNSS time crates.
//!
//! [`CoreError`] covers the two ways the low-level building blocks can fail:
//! a calendar date that does not exist, and a numeric input the split-precision
//! arithmetic cannot represent.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidDate`](CoreError::InvalidDate) | Calendar validation failures |
//! | [`MathError`](CoreError::MathError) | Non-finite input, out-of-range Julian Dates |
//!
//! ```
//! use gnss_core::{CoreError, MathErrorKind};
//!
//! fn checked_days(seconds: f64) -> Result<f64, CoreError> {
//!     if !seconds.is_finite() {
//!         return Err(CoreError::math_error(
//!             "checked_days",
//!             MathErrorKind::NotFinite,
//!             "seconds must be finite",
//!         ));
//!     }
//!     Ok(seconds / 86400.0)
//! }
//! ```

use thiserror::Error;

/// Classification of numeric failures.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input or result is NaN or infinity.
    NotFinite,
    /// Value outside the supported domain (e.g. a Julian Date before -4713).
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Invalid calendar date (e.g., February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}
