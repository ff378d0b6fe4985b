//! Format codecs.
//!
//! A format codec converts between raw [`Values`] and split Julian Dates
//! ([`DualPair`]) within one time scale. Codecs never apply scale offsets; the
//! scale is passed in only because the UTC calendar has 86401-second days.
//!
//! | Format | Values | Scales |
//! |--------|--------|--------|
//! | `datetime` | [`Values::DateTime`], optional [`Values::Duration`] as `val2` | all |
//! | `iso` | [`Values::Text`] `YYYY-MM-DDTHH:MM:SS.ffffff` | all |
//! | `jd` | [`Values::Float`] | all |
//! | `mjd` | [`Values::Float`], JD - 2400000.5 | all |
//! | `jd2000` | [`Values::Float`], JD - 2451545.0 | all |
//! | `decimalyear` | [`Values::Float`] | all |
//! | `gps_ws` | [`Values::WeekSeconds`], or week and seconds as `val`/`val2` | gps |
//! | `gps_seconds` | [`Values::Float`], seconds since 1980-01-06 | gps |
//! | `yydddsssss` | [`Values::Text`] `YY:DDD:SSSSS` | all |
//! | `doy` | [`Values::Int`] day of year, year as `val2` | all |
//!
//! Durations have their own closed set of formats, [`DeltaFormat`].

pub mod calendar;
pub mod delta;
pub mod gps;
pub mod julian;

pub use calendar::CalendarFields;

use crate::pair::DualPair;
use crate::scales::Scale;
use crate::values::Values;
use crate::{TimeError, TimeResult};
use std::fmt;
use std::str::FromStr;

type DecodeFn = fn(&Values, Option<&Values>, Scale) -> TimeResult<Vec<DualPair>>;
type EncodeFn = fn(&[DualPair], Scale) -> TimeResult<Values>;

struct Codec {
    decode: DecodeFn,
    encode: EncodeFn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    Datetime,
    Iso,
    Jd,
    Mjd,
    Jd2000,
    DecimalYear,
    #[cfg_attr(feature = "serde", serde(rename = "gps_ws"))]
    GpsWs,
    #[cfg_attr(feature = "serde", serde(rename = "gps_seconds"))]
    GpsSeconds,
    Yydddsssss,
    Doy,
}

impl Format {
    pub const ALL: [Format; 10] = [
        Format::Datetime,
        Format::Iso,
        Format::Jd,
        Format::Mjd,
        Format::Jd2000,
        Format::DecimalYear,
        Format::GpsWs,
        Format::GpsSeconds,
        Format::Yydddsssss,
        Format::Doy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::Datetime => "datetime",
            Format::Iso => "iso",
            Format::Jd => "jd",
            Format::Mjd => "mjd",
            Format::Jd2000 => "jd2000",
            Format::DecimalYear => "decimalyear",
            Format::GpsWs => "gps_ws",
            Format::GpsSeconds => "gps_seconds",
            Format::Yydddsssss => "yydddsssss",
            Format::Doy => "doy",
        }
    }

    /// Whether the format is defined under `scale`. GPS week formats only
    /// make sense in GPS time.
    pub fn is_valid_for(self, scale: Scale) -> bool {
        match self {
            Format::GpsWs | Format::GpsSeconds => scale == Scale::Gps,
            _ => true,
        }
    }

    pub(crate) fn check_scale(self, scale: Scale) -> TimeResult<()> {
        if self.is_valid_for(scale) {
            Ok(())
        } else {
            Err(TimeError::InvalidCombination {
                format: self,
                scale,
            })
        }
    }

    fn codec(self) -> Codec {
        match self {
            Format::Datetime => Codec {
                decode: calendar::decode_datetime,
                encode: calendar::encode_datetime,
            },
            Format::Iso => Codec {
                decode: calendar::decode_iso,
                encode: calendar::encode_iso,
            },
            Format::Jd => Codec {
                decode: julian::decode_jd,
                encode: julian::encode_jd,
            },
            Format::Mjd => Codec {
                decode: julian::decode_mjd,
                encode: julian::encode_mjd,
            },
            Format::Jd2000 => Codec {
                decode: julian::decode_jd2000,
                encode: julian::encode_jd2000,
            },
            Format::DecimalYear => Codec {
                decode: julian::decode_decimalyear,
                encode: julian::encode_decimalyear,
            },
            Format::GpsWs => Codec {
                decode: gps::decode_gps_ws,
                encode: gps::encode_gps_ws,
            },
            Format::GpsSeconds => Codec {
                decode: gps::decode_gps_seconds,
                encode: gps::encode_gps_seconds,
            },
            Format::Yydddsssss => Codec {
                decode: calendar::decode_yydddsssss,
                encode: calendar::encode_yydddsssss,
            },
            Format::Doy => Codec {
                decode: calendar::decode_doy,
                encode: calendar::encode_doy,
            },
        }
    }

    /// Decodes raw values into split Julian Dates in `scale`.
    pub fn decode(self, val: &Values, val2: Option<&Values>, scale: Scale) -> TimeResult<Vec<DualPair>> {
        self.check_scale(scale)?;
        check_val2_len(val, val2)?;
        if val.is_empty() {
            return Ok(Vec::new());
        }
        (self.codec().decode)(val, val2, scale)
    }

    /// Renders split Julian Dates in `scale` as raw values.
    pub fn encode(self, pairs: &[DualPair], scale: Scale) -> TimeResult<Values> {
        self.check_scale(scale)?;
        (self.codec().encode)(pairs, scale)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.name() == lower)
            .ok_or_else(|| TimeError::UnknownFormat(s.to_string()))
    }
}

/// Formats of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeltaFormat {
    Timedelta,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl DeltaFormat {
    pub const ALL: [DeltaFormat; 5] = [
        DeltaFormat::Timedelta,
        DeltaFormat::Days,
        DeltaFormat::Hours,
        DeltaFormat::Minutes,
        DeltaFormat::Seconds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DeltaFormat::Timedelta => "timedelta",
            DeltaFormat::Days => "days",
            DeltaFormat::Hours => "hours",
            DeltaFormat::Minutes => "minutes",
            DeltaFormat::Seconds => "seconds",
        }
    }

    /// Decodes raw values into split day counts.
    pub fn decode(self, val: &Values, val2: Option<&Values>) -> TimeResult<Vec<DualPair>> {
        check_val2_len(val, val2)?;
        if val.is_empty() {
            return Ok(Vec::new());
        }
        match self {
            DeltaFormat::Timedelta => delta::decode_timedelta(val, val2),
            unit => delta::decode_unit(unit, val, val2),
        }
    }

    /// Renders split day counts as raw values.
    pub fn encode(self, pairs: &[DualPair]) -> TimeResult<Values> {
        match self {
            DeltaFormat::Timedelta => delta::encode_timedelta(pairs),
            unit => Ok(delta::encode_unit(unit, pairs)),
        }
    }
}

impl fmt::Display for DeltaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeltaFormat {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DeltaFormat::ALL
            .into_iter()
            .find(|format| format.name() == lower)
            .ok_or_else(|| TimeError::UnknownFormat(s.to_string()))
    }
}

fn check_val2_len(val: &Values, val2: Option<&Values>) -> TimeResult<()> {
    match val2 {
        Some(val2) if val2.len() != val.len() => Err(TimeError::ShapeMismatch {
            expected: val.len(),
            found: val2.len(),
        }),
        _ => Ok(()),
    }
}

/// Numeric `val` and optional numeric `val2` (zeros when absent). NaN and
/// infinite entries are rejected.
pub(crate) fn numeric_inputs(
    format: impl fmt::Display,
    val: &Values,
    val2: Option<&Values>,
) -> TimeResult<(Vec<f64>, Vec<f64>)> {
    let first = val.to_floats().ok_or_else(|| {
        TimeError::invalid_input(&format, format!("expected numeric values, got {}", val.kind()))
    })?;
    let second = match val2 {
        Some(val2) => val2.to_floats().ok_or_else(|| {
            TimeError::invalid_input(&format, format!("expected numeric val2, got {}", val2.kind()))
        })?,
        None => vec![0.0; first.len()],
    };
    for (v1, v2) in first.iter().zip(&second) {
        DualPair::try_new(*v1, *v2)
            .map_err(|err| TimeError::invalid_input(&format, err.to_string()))?;
    }
    Ok((first, second))
}

/// Rejects a secondary value for formats that take none.
pub(crate) fn reject_val2(format: impl fmt::Display, val2: Option<&Values>) -> TimeResult<()> {
    match val2 {
        Some(val2) => Err(TimeError::invalid_input(
            format,
            format!("val2 is not supported, got {}", val2.kind()),
        )),
        None => Ok(()),
    }
}
