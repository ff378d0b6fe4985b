//! Time scales and the conversions between them.
//!
//! | Scale | Description | Relationship |
//! |-------|-------------|--------------|
//! | TAI | International Atomic Time | Reference |
//! | UTC | Coordinated Universal Time | TAI - leap seconds |
//! | GPS | GPS system time | TAI - 19 s |
//! | TT | Terrestrial Time | TAI + 32.184 s |
//! | UT1 | Earth rotation time | UTC + DUT1 |
//!
//! A [`Scale`] is a plain tag. Values in any scale are split Julian Dates
//! ([`DualPair`](crate::DualPair)); [`conversions`] moves them along the graph
//! `UT1 <-> UTC <-> TAI <-> {GPS, TT}`.

pub mod common;
pub mod conversions;
pub mod ut1;

pub use conversions::{conversion_path, convert_pair, convert_pairs};
pub use ut1::{Dut1Model, Dut1Table};

use crate::{TimeError, TimeResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scale {
    Utc,
    Tai,
    Gps,
    Tt,
    Ut1,
}

impl Scale {
    pub const ALL: [Scale; 5] = [Scale::Utc, Scale::Tai, Scale::Gps, Scale::Tt, Scale::Ut1];

    pub fn name(self) -> &'static str {
        match self {
            Scale::Utc => "utc",
            Scale::Tai => "tai",
            Scale::Gps => "gps",
            Scale::Tt => "tt",
            Scale::Ut1 => "ut1",
        }
    }

    /// `true` for scales whose calendar days can contain a leap second.
    pub fn has_leap_seconds(self) -> bool {
        matches!(self, Scale::Utc)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let tag = s.trim();
        Scale::ALL
            .iter()
            .copied()
            .find(|scale| scale.name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| TimeError::UnknownScale(s.to_string()))
    }
}
